//! End-to-end runs behind each subcommand.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use jobs_ingest::{load_listings, profile_table};
use jobs_model::AnalysisConfig;
use jobs_report::chart::write_sql_top_skills_chart;
use jobs_report::{
    AnalysisReport, JobStore, QueryKind, QueryOptions, write_analysis_charts,
    write_cleaned_dataset,
};
use jobs_transform::{NormalizedDataset, normalize_dataset};
use tracing::{info, info_span};

use crate::types::{AnalysisOutcome, NormalizationCounts, QueryOutcome, SetupOutcome};

impl From<&NormalizedDataset> for NormalizationCounts {
    fn from(dataset: &NormalizedDataset) -> Self {
        Self {
            input_rows: dataset.input_count,
            parsed_dates: dataset.parsed_dates,
            parsed_salaries: dataset.parsed_salaries,
            hourly_salaries: dataset.hourly_salaries,
            kept: dataset.records.len(),
            rejected: dataset.rejected,
        }
    }
}

/// Query parameters derived from the configuration.
pub fn query_options(config: &AnalysisConfig) -> QueryOptions {
    QueryOptions {
        min_count: config.thresholds.query,
        limit: config.top_n,
    }
}

/// Profile, normalize, rank and chart the input; write the cleaned dataset.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisOutcome> {
    let span = info_span!("analyze", input = %config.input_path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let loaded = load_listings(&config.input_path)
        .with_context(|| format!("load {}", config.input_path.display()))?;
    let profile = profile_table(&loaded.table, config.preview_rows);
    let dataset = normalize_dataset(&loaded.records, config);
    let report = AnalysisReport::build(&dataset.records, config);

    let cleaned_dataset = config.cleaned_dataset_path();
    write_cleaned_dataset(&cleaned_dataset, &dataset.records)
        .with_context(|| format!("write {}", cleaned_dataset.display()))?;
    let charts = write_analysis_charts(
        &config.charts_dir,
        &dataset.records,
        &report,
        None,
        config.histogram_bins,
    )
    .with_context(|| format!("write charts to {}", config.charts_dir.display()))?;

    info!(
        kept = dataset.records.len(),
        charts = charts.len(),
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );
    Ok(AnalysisOutcome {
        input_path: config.input_path.clone(),
        profile,
        counts: NormalizationCounts::from(&dataset),
        report,
        cleaned_dataset,
        charts,
    })
}

/// Normalize the input and rebuild the relational store from it.
pub fn run_setup_db(config: &AnalysisConfig) -> Result<SetupOutcome> {
    let span = info_span!("setup_db", database = %config.database_path.display());
    let _guard = span.enter();

    let loaded = load_listings(&config.input_path)
        .with_context(|| format!("load {}", config.input_path.display()))?;
    let dataset = normalize_dataset(&loaded.records, config);

    let mut store = JobStore::open(&config.database_path)
        .with_context(|| format!("open database {}", config.database_path.display()))?;
    let summary = store
        .rebuild(&dataset.records)
        .context("rebuild relational tables")?;
    let exports = store
        .export_tables_to_csv(&config.output_dir)
        .with_context(|| format!("export tables to {}", config.output_dir.display()))?;

    Ok(SetupOutcome {
        database_path: config.database_path.clone(),
        counts: NormalizationCounts::from(&dataset),
        store: summary,
        exports,
    })
}

/// Open the store written by `setup-db`. Fails when the file does not exist.
pub fn open_existing_store(config: &AnalysisConfig) -> Result<JobStore> {
    let path = &config.database_path;
    if !path.exists() {
        bail!(
            "database {} not found; run `job-market setup-db` first",
            path.display()
        );
    }
    JobStore::open(path).with_context(|| format!("open database {}", path.display()))
}

pub fn run_query(config: &AnalysisConfig, kind: QueryKind) -> Result<QueryOutcome> {
    let store = open_existing_store(config)?;
    let rows = store
        .run_query(kind, query_options(config))
        .with_context(|| format!("run query {kind}"))?;
    info!(query = %kind, rows = rows.len(), "query complete");
    Ok(QueryOutcome { query: kind, rows })
}

/// Chart the store's most in-demand skills.
pub fn plot_sql_top_skills(config: &AnalysisConfig) -> Result<PathBuf> {
    let store = open_existing_store(config)?;
    let rows = store
        .top_in_demand_skills(config.top_n)
        .context("query most in-demand skills")?;
    write_sql_top_skills_chart(&config.charts_dir, &rows)
        .with_context(|| format!("write chart to {}", config.charts_dir.display()))
}
