use std::path::PathBuf;

use jobs_ingest::DatasetProfile;
use jobs_model::AggregateStat;
use jobs_report::{AnalysisReport, QueryKind, StoreSummary};
use serde::Serialize;

/// Stage counts from loading and normalizing the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizationCounts {
    pub input_rows: usize,
    pub parsed_dates: usize,
    pub parsed_salaries: usize,
    pub hourly_salaries: usize,
    pub kept: usize,
    pub rejected: usize,
}

#[derive(Debug)]
pub struct AnalysisOutcome {
    pub input_path: PathBuf,
    pub profile: DatasetProfile,
    pub counts: NormalizationCounts,
    pub report: AnalysisReport,
    pub cleaned_dataset: PathBuf,
    pub charts: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct SetupOutcome {
    pub database_path: PathBuf,
    pub counts: NormalizationCounts,
    pub store: StoreSummary,
    pub exports: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutcome {
    pub query: QueryKind,
    pub rows: Vec<AggregateStat>,
}
