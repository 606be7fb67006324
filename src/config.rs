use std::{path::PathBuf, time::Duration};

use crate::{common::DATA_URL, render::RenderStyle};

pub const DEFAULT_N_COUNTRIES: usize = 20;
pub const DEFAULT_OUT_DIR: &str = "files";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    /// local CSV, gunzipped when the name ends in `.gz`
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    pub out_dir: PathBuf,
    pub n_countries: usize,
    /// `None` seeds the layout from entropy, so the image varies run to run.
    pub seed: Option<u64>,
    pub layout_iterations: usize,
    pub image_size: (u32, u32),
    pub draw_labels: bool,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Source::Url(DATA_URL.to_string()),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            n_countries: DEFAULT_N_COUNTRIES,
            seed: None,
            layout_iterations: 50,
            image_size: RenderStyle::default().size,
            draw_labels: true,
            timeout: Duration::from_secs(60),
        }
    }
}

impl Config {
    pub fn with_n_countries(n_countries: usize) -> Self {
        Self {
            n_countries,
            ..Self::default()
        }
    }
}
