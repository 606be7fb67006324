use std::collections::BTreeSet;

use tqdm::Iter;
use tracing::info;

use crate::common::COUNTRY_SEP;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliationRecord {
    pub raw: String,
    /// sorted, unique
    pub countries: Vec<String>,
}

impl AffiliationRecord {
    pub fn new(raw: String) -> Self {
        let countries = extract_countries(&raw);
        Self { raw, countries }
    }

    pub fn joined(&self) -> String {
        self.countries.join(COUNTRY_SEP)
    }
}

// last comma token of each `;` segment; no check against a country list, so a
// segment without a comma counts whole and an empty segment gives ""
pub fn extract_countries(affiliations: &str) -> Vec<String> {
    affiliations
        .split(';')
        .map(|segment| segment.rsplit(',').next().unwrap_or(segment).trim())
        .map(str::to_string)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

pub fn create_countries_column(rows: Vec<String>) -> Vec<AffiliationRecord> {
    let records: Vec<AffiliationRecord> = rows
        .into_iter()
        .tqdm()
        .desc(Some("countries"))
        .map(AffiliationRecord::new)
        .collect();
    info!(records = records.len(), "extracted countries");
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_token_sorted_unique() {
        let raw = "Dept. of CS, MIT, Cambridge, United States; \
                   ETH, Zurich, Switzerland; Stanford, CA, United States";
        assert_eq!(
            extract_countries(raw),
            vec!["Switzerland".to_string(), "United States".to_string()]
        );
    }

    #[test]
    fn segment_without_comma() {
        assert_eq!(
            extract_countries("Independent researcher; Uni Lyon, France"),
            vec!["France".to_string(), "Independent researcher".to_string()]
        );
    }

    #[test]
    fn empty_segment_kept() {
        assert_eq!(
            extract_countries("Uni Lyon, France;"),
            vec!["".to_string(), "France".to_string()]
        );
    }

    #[test]
    fn joined_form() {
        let rec = AffiliationRecord::new("A, USA; B, France; C, USA".to_string());
        assert_eq!(rec.joined(), "France, USA");
        assert_eq!(rec.raw, "A, USA; B, France; C, USA");
    }

    #[test]
    fn countries_come_from_raw_tokens() {
        let raws = [
            "x, Japan; y, z, Korea; Japan",
            "a,b,c,Peru ;  q , Chile ",
            "solo",
        ];
        for raw in raws {
            let rec = AffiliationRecord::new(raw.to_string());
            let mut sorted = rec.countries.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted, rec.countries);
            for c in &rec.countries {
                assert!(raw.contains(c.as_str()), "{} not in {}", c, raw);
            }
        }
    }
}
