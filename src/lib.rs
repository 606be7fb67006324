pub mod common;
pub mod config;
pub mod cooccurrence;
pub mod countries;
pub mod error;
pub mod frequency;
pub mod graph;
pub mod ingest;
pub mod layout;
pub mod pipeline;
pub mod render;

pub use config::{Config, Source};
pub use error::{Error, Result};
pub use pipeline::{make_plot, run, RunReport};
