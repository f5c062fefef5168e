pub mod aggregate;
pub mod columns;
pub mod error;
pub mod options;
pub mod record;
pub mod skill;

pub use aggregate::{AggregateStat, SortBy};
pub use error::{ModelError, Result};
pub use options::{AnalysisConfig, CLEANED_DATASET_FILENAME, ReliabilityThresholds, SalaryBand};
pub use record::{NormalizedRecord, RawRecord, Salary, SalaryUnit};
pub use skill::SkillRow;
