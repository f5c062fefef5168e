//! Outputs of a job-market analysis run.
//!
//! - [`csv_export`]: the cleaned dataset as CSV
//! - [`store`]: the `jobs` / `job_skills` SQLite tables and their CSV dumps
//! - [`queries`]: canned reports over the store
//! - [`analysis`]: in-memory rankings for the console summary and charts
//! - [`chart`]: SVG charts

pub mod analysis;
pub mod chart;
pub mod csv_export;
pub mod error;
pub mod queries;
pub mod store;

pub use analysis::AnalysisReport;
pub use chart::write_analysis_charts;
pub use csv_export::{format_number, write_cleaned_dataset};
pub use error::{ReportError, Result};
pub use queries::{QueryKind, QueryOptions};
pub use store::{
    JOB_SKILLS_EXPORT_FILENAME, JOB_SKILLS_TABLE, JOBS_EXPORT_FILENAME, JOBS_TABLE, JobStore,
    StoreSummary,
};
