//! Posting records before and after normalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One job posting as scraped. Empty source cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub company: Option<String>,
    pub company_score: Option<String>,
    pub job_title: Option<String>,
    pub location: Option<String>,
    /// Relative posting age such as `5d` or `30d+`.
    pub date: Option<String>,
    /// Free-text salary expression such as `£40K - £50K (Glassdoor est.)`.
    pub salary: Option<String>,
    /// Comma-delimited skill list.
    pub skills: Option<String>,
}

/// Unit of the source salary string.
///
/// Magnitudes are never converted between units; the unit is kept so that
/// callers can segment hourly and yearly figures before comparing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryUnit {
    Hourly,
    #[default]
    Yearly,
}

impl SalaryUnit {
    /// Returns the label written to the `salary_type` export column.
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryUnit::Hourly => "hourly",
            SalaryUnit::Yearly => "yearly",
        }
    }
}

impl fmt::Display for SalaryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SalaryUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hourly" => Ok(SalaryUnit::Hourly),
            "yearly" => Ok(SalaryUnit::Yearly),
            _ => Err(format!("Unknown salary unit: {s}")),
        }
    }
}

/// A parsed salary range. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub unit: SalaryUnit,
}

impl Salary {
    /// Build a salary from two bounds, ordering them and computing the midpoint.
    pub fn from_bounds(low: f64, high: f64, unit: SalaryUnit) -> Self {
        let (min, max) = if low <= high { (low, high) } else { (high, low) };
        Self {
            min,
            max,
            avg: (min + max) / 2.0,
            unit,
        }
    }
}

/// A posting after field normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub company: Option<String>,
    pub company_score: Option<String>,
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub days_since_posted: Option<i64>,
    pub salary: Option<Salary>,
    /// Source skills text, kept verbatim for the normalized export.
    pub skills_raw: Option<String>,
    /// Canonical skill tokens in source order, duplicates retained.
    pub skills: Vec<String>,
    pub is_remote: bool,
}

impl NormalizedRecord {
    pub fn salary_min(&self) -> Option<f64> {
        self.salary.map(|salary| salary.min)
    }

    pub fn salary_max(&self) -> Option<f64> {
        self.salary.map(|salary| salary.max)
    }

    pub fn salary_avg(&self) -> Option<f64> {
        self.salary.map(|salary| salary.avg)
    }

    pub fn salary_unit(&self) -> Option<SalaryUnit> {
        self.salary.map(|salary| salary.unit)
    }
}
