//! Configuration for a job-market analysis run.
//!
//! Every stage takes the pieces of [`AnalysisConfig`] it needs as an explicit
//! argument, so thresholds and bounds can be varied per run (or per test)
//! without touching global state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// File name of the cleaned dataset written into `output_dir`.
pub const CLEANED_DATASET_FILENAME: &str = "cleaned_uk_data_jobs.csv";

/// Inclusive salary range a normalized average must fall in to be kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryBand {
    pub min: f64,
    pub max: f64,
}

impl Default for SalaryBand {
    fn default() -> Self {
        Self {
            min: 20_000.0,
            max: 200_000.0,
        }
    }
}

impl SalaryBand {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true when `value` lies inside the band (bounds included).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Minimum group sizes before an aggregate is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliabilityThresholds {
    /// Highest paying locations.
    pub location: usize,
    /// Highest paying job titles.
    pub job_title: usize,
    /// Top paying skills listing.
    pub skill_salary: usize,
    /// Skill vs salary chart.
    pub skill_chart: usize,
    /// Canned queries over the relational store.
    pub query: usize,
    /// Pure demand ranking.
    pub demand: usize,
}

impl Default for ReliabilityThresholds {
    fn default() -> Self {
        Self {
            location: 5,
            job_title: 5,
            skill_salary: 20,
            skill_chart: 30,
            query: 5,
            demand: 0,
        }
    }
}

/// Options controlling a full analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Raw job-listing CSV.
    pub input_path: PathBuf,
    /// Directory for the cleaned dataset and table exports.
    pub output_dir: PathBuf,
    /// Directory for chart images.
    pub charts_dir: PathBuf,
    /// SQLite database holding the relational export.
    pub database_path: PathBuf,
    pub salary_band: SalaryBand,
    pub thresholds: ReliabilityThresholds,
    /// Rows shown in "top N" reports and charts.
    pub top_n: usize,
    /// Rows shown in the skill demand and pay listings.
    pub skill_listing_top_n: usize,
    pub histogram_bins: usize,
    /// Rows shown in the dataset preview.
    pub preview_rows: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/uk_data_jobs_raw.csv"),
            output_dir: PathBuf::from("output"),
            charts_dir: PathBuf::from("charts"),
            database_path: PathBuf::from("data_jobs.db"),
            salary_band: SalaryBand::default(),
            thresholds: ReliabilityThresholds::default(),
            top_n: 10,
            skill_listing_top_n: 15,
            histogram_bins: 30,
            preview_rows: 5,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file. Missing keys keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ModelError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ModelError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no stage can work with.
    pub fn validate(&self) -> Result<()> {
        let band = self.salary_band;
        if !band.min.is_finite() || !band.max.is_finite() {
            return Err(ModelError::InvalidConfig(
                "salary band bounds must be finite".to_string(),
            ));
        }
        if band.min > band.max {
            return Err(ModelError::InvalidConfig(format!(
                "salary band minimum {} exceeds maximum {}",
                band.min, band.max
            )));
        }
        if self.top_n == 0 || self.skill_listing_top_n == 0 {
            return Err(ModelError::InvalidConfig(
                "top-N row counts must be positive".to_string(),
            ));
        }
        if self.histogram_bins == 0 {
            return Err(ModelError::InvalidConfig(
                "histogram needs at least one bin".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    pub fn with_charts_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.charts_dir = path.into();
        self
    }

    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    pub fn with_salary_band(mut self, band: SalaryBand) -> Self {
        self.salary_band = band;
        self
    }

    pub fn with_thresholds(mut self, thresholds: ReliabilityThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Path of the cleaned dataset export.
    pub fn cleaned_dataset_path(&self) -> PathBuf {
        self.output_dir.join(CLEANED_DATASET_FILENAME)
    }
}
