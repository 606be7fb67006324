use hashbrown::{HashMap, HashSet};
use serde::Serialize;
use tqdm::Iter;
use tracing::{info, warn};

use crate::{
    common::Stowage, countries::AffiliationRecord, error::Result, frequency::CountryFrequency,
};

/// One undirected pair, stored with `node_a > node_b`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CoOccurrence {
    pub node_a: String,
    pub node_b: String,
    pub size: u64,
}

impl CoOccurrence {
    pub fn new(a: &str, b: &str, size: u64) -> Self {
        let (node_a, node_b) = if a > b { (a, b) } else { (b, a) };
        Self {
            node_a: node_a.to_string(),
            node_b: node_b.to_string(),
            size,
        }
    }
}

pub fn compute_co_occurrences(
    records: &[AffiliationRecord],
    most_frequent: &[CountryFrequency],
) -> Vec<CoOccurrence> {
    let top: HashSet<&str> = most_frequent.iter().map(|r| r.countries.as_str()).collect();
    let mut counts: HashMap<(&str, &str), u64> = HashMap::new();

    for rec in records.iter().tqdm().desc(Some("co-occurrences")) {
        let kept: Vec<&str> = rec
            .countries
            .iter()
            .map(String::as_str)
            .filter(|c| top.contains(c))
            .collect();
        for (i, a) in kept.iter().enumerate() {
            for b in &kept[..i] {
                // countries are sorted and unique, so kept[i] > kept[j] for j < i
                *counts.entry((*a, *b)).or_insert(0) += 1;
            }
        }
    }

    let mut table: Vec<CoOccurrence> = counts
        .into_iter()
        .map(|((a, b), size)| CoOccurrence::new(a, b, size))
        .collect();
    table.sort_by(|l, r| (&l.node_a, &l.node_b).cmp(&(&r.node_a, &r.node_b)));
    if table.is_empty() {
        warn!(top = top.len(), "no co-occurring countries");
    }
    info!(pairs = table.len(), "computed co-occurrences");
    table
}

pub fn write_co_occurrences(stowage: &Stowage, table: &[CoOccurrence]) -> Result<()> {
    let mut writer = stowage.get_writer(&stowage.co_occurrences)?;
    if table.is_empty() {
        writer.write_record(["node_a", "node_b", "size"])?;
    }
    for row in table {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
