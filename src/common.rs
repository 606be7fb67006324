use std::{
    fs::{create_dir_all, File},
    io::{self, BufReader, BufWriter},
    path::{Path, PathBuf},
};

use csv::{Reader, ReaderBuilder, Writer};
use flate2::read::GzDecoder;

pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/jdvelasq/datalabs/master/datasets/scopus-papers.csv";
pub const AFFILIATIONS: &str = "Affiliations";
pub const COUNTRY_SEP: &str = ", ";

pub type CsvSink = Writer<BufWriter<File>>;

macro_rules! pathfields_fn {
    ($($k:ident => $v:literal),*,) => {

        pub fn new<P: AsRef<Path>>(root_path: P) -> io::Result<Self> {
            let root = root_path.as_ref().to_path_buf();
            create_dir_all(&root)?;
            $(
                let $k = root.join($v);
            )*

            Ok(Self {
                root,
                $(
                    $k,
                )*
            })
        }
    };
}

/// Output directory of a run and the artifacts written into it.
pub struct Stowage {
    pub root: PathBuf,
    pub countries: PathBuf,
    pub co_occurrences: PathBuf,
    pub network: PathBuf,
}

impl Stowage {
    pathfields_fn!(
        countries => "countries.csv",
        co_occurrences => "co_occurrences.csv",
        network => "network.png",
    );

    pub fn get_writer(&self, path: &Path) -> io::Result<CsvSink> {
        let file = File::create(path)?;
        Ok(Writer::from_writer(BufWriter::new(file)))
    }
}

pub fn get_gz_buf(path: &Path) -> io::Result<BufReader<GzDecoder<File>>> {
    let file = File::open(path)?;
    Ok(BufReader::new(GzDecoder::new(file)))
}

pub fn csv_reader<R: io::Read>(inner: R) -> Reader<R> {
    ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .from_reader(inner)
}

#[cfg(test)]
pub mod test_tools {
    use std::{
        env::temp_dir,
        fs::remove_dir_all,
        path::PathBuf,
        sync::atomic::{AtomicUsize, Ordering},
    };

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    pub fn scratch_dir(name: &str) -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = temp_dir().join(format!("country-net-{}-{}-{}", name, std::process::id(), n));
        remove_dir_all(&path).unwrap_or(());
        path
    }
}
