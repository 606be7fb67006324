use tracing::info;

use crate::{
    common::Stowage,
    config::Config,
    cooccurrence::{compute_co_occurrences, write_co_occurrences, CoOccurrence},
    countries::{create_countries_column, AffiliationRecord},
    error::Result,
    frequency::{count_country_frequency, select_most_frequent, write_frequency, CountryFrequency},
    graph::CountryGraph,
    ingest::{load_affiliations, remove_na_rows},
    layout::SpringLayout,
    render::{render_network, RenderStyle},
};

#[derive(Debug)]
pub struct RunReport {
    pub records: usize,
    pub countries: Vec<CountryFrequency>,
    pub most_frequent: Vec<CountryFrequency>,
    pub co_occurrences: Vec<CoOccurrence>,
}

pub fn make_plot(n_countries: usize) -> Result<RunReport> {
    run(&Config::with_n_countries(n_countries))
}

pub fn run(conf: &Config) -> Result<RunReport> {
    let stowage = Stowage::new(&conf.out_dir)?;
    let rows = load_affiliations(conf)?;
    let records = create_countries_column(remove_na_rows(rows));
    analyze(conf, &stowage, &records)
}

fn analyze(conf: &Config, stowage: &Stowage, records: &[AffiliationRecord]) -> Result<RunReport> {
    let countries = count_country_frequency(records);
    write_frequency(stowage, &countries)?;

    let most_frequent = select_most_frequent(&countries, conf.n_countries);
    info!(n = conf.n_countries, selected = most_frequent.len(), "selected top countries");

    let co_occurrences = compute_co_occurrences(records, &most_frequent);
    write_co_occurrences(stowage, &co_occurrences)?;

    let graph = CountryGraph::from_co_occurrences(&co_occurrences);
    let layout = SpringLayout {
        iterations: conf.layout_iterations,
        seed: conf.seed,
        ..SpringLayout::default()
    };
    let pos = layout.positions(&graph);
    let style = RenderStyle {
        size: conf.image_size,
        draw_labels: conf.draw_labels,
        ..RenderStyle::default()
    };
    render_network(stowage, &graph, &most_frequent, &pos, &style)?;

    Ok(RunReport {
        records: records.len(),
        countries,
        most_frequent,
        co_occurrences,
    })
}
