//! Aggregate statistics over grouped postings.

use serde::{Deserialize, Serialize};

/// Count and salary summary for one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStat {
    pub group_key: String,
    pub count: usize,
    pub mean_salary: f64,
    pub min_salary: f64,
    pub max_salary: f64,
}

/// Field an aggregate table is ordered by (always descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Salary-focused views.
    #[default]
    MeanSalary,
    /// Demand-focused views.
    Count,
}
