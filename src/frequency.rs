use hashbrown::HashMap;
use serde::Serialize;
use tracing::info;

use crate::{common::Stowage, countries::AffiliationRecord, error::Result};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CountryFrequency {
    pub countries: String,
    pub count: u64,
}

impl CountryFrequency {
    pub fn new(country: &str, count: u64) -> Self {
        Self {
            countries: country.to_string(),
            count,
        }
    }
}

/// Descending by count, ties by country name.
pub fn count_country_frequency(records: &[AffiliationRecord]) -> Vec<CountryFrequency> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for rec in records {
        for country in &rec.countries {
            *counts.entry(country.as_str()).or_insert(0) += 1;
        }
    }
    let mut table: Vec<CountryFrequency> = counts
        .into_iter()
        .map(|(country, count)| CountryFrequency::new(country, count))
        .collect();
    table.sort_by(|l, r| r.count.cmp(&l.count).then_with(|| l.countries.cmp(&r.countries)));
    info!(countries = table.len(), "counted country frequency");
    table
}

pub fn write_frequency(stowage: &Stowage, table: &[CountryFrequency]) -> Result<()> {
    let mut writer = stowage.get_writer(&stowage.countries)?;
    if table.is_empty() {
        writer.write_record(["countries", "count"])?;
    }
    for row in table {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn select_most_frequent(table: &[CountryFrequency], n_countries: usize) -> Vec<CountryFrequency> {
    table.iter().take(n_countries).cloned().collect()
}
