//! Normalization, filtering and aggregation over job listings.
//!
//! Stages are plain functions over the `jobs-model` types and run in order:
//! [`normalize_record`] per row, [`RecordFilter`] over the dataset, then the
//! grouping helpers in [`aggregate`] and the distribution summaries in
//! [`stats`].

pub mod aggregate;
pub mod features;
pub mod filter;
pub mod normalization;
pub mod pipeline;
pub mod stats;

pub use aggregate::{
    NON_REMOTE_LABEL, REMOTE_LABEL, aggregate, by_job_title, by_location, by_remote, by_skill,
    remote_label, sort_stats, value_counts,
};
pub use features::is_remote_location;
pub use filter::{FilterOutcome, RecordFilter};
pub use normalization::{
    canonical_skill, explode_skills, normalize_posting_age, normalize_salary, tokenize_skills,
};
pub use pipeline::{NormalizedDataset, normalize_dataset, normalize_record, overall_mean_salary};
pub use stats::{BoxStats, HistogramBin, histogram, quantile};
