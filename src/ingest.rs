use std::io::Read;

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    common::{csv_reader, get_gz_buf, AFFILIATIONS},
    config::{Config, Source},
    error::{Error, Result},
};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawAffiliation {
    #[serde(rename = "Affiliations")]
    pub affiliations: Option<String>,
}

pub fn load_affiliations(conf: &Config) -> Result<Vec<RawAffiliation>> {
    match &conf.source {
        Source::Url(url) => {
            info!(url = url.as_str(), "fetching affiliations");
            let client = reqwest::blocking::Client::builder()
                .timeout(conf.timeout)
                .build()?;
            let response = client.get(url).send()?.error_for_status()?;
            read_affiliations(response)
        }
        Source::File(path) => {
            info!(path = %path.display(), "reading affiliations");
            let gzipped = path.extension().map_or(false, |ext| ext == "gz");
            if gzipped {
                read_affiliations(get_gz_buf(path)?)
            } else {
                read_affiliations(std::fs::File::open(path)?)
            }
        }
    }
}

/// Parses a CSV body, keeping only the `Affiliations` column.
pub fn read_affiliations<R: Read>(inner: R) -> Result<Vec<RawAffiliation>> {
    let mut rdr = csv_reader(inner);
    if !rdr.headers()?.iter().any(|h| h == AFFILIATIONS) {
        return Err(Error::MissingColumn(AFFILIATIONS));
    }
    let mut out = Vec::new();
    for row in rdr.deserialize::<RawAffiliation>() {
        out.push(row?);
    }
    debug!(rows = out.len(), "parsed affiliation rows");
    Ok(out)
}

pub fn remove_na_rows(rows: Vec<RawAffiliation>) -> Vec<String> {
    let total = rows.len();
    let kept: Vec<String> = rows.into_iter().filter_map(|r| r.affiliations).collect();
    info!(kept = kept.len(), dropped = total - kept.len(), "removed missing affiliations");
    kept
}
