//! Plausibility filter over normalized salaries.

use jobs_model::{NormalizedRecord, SalaryBand};
use tracing::debug;

/// Keeps records whose salary average lies inside a [`SalaryBand`].
///
/// Records without a parsed salary never pass, so the filter also discards
/// salary parse failures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordFilter {
    band: SalaryBand,
}

/// Records surviving the filter and how many were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    pub kept: Vec<NormalizedRecord>,
    /// Records with a salary outside the band.
    pub out_of_band: usize,
    /// Records without a parsed salary.
    pub missing_salary: usize,
}

impl FilterOutcome {
    pub fn rejected(&self) -> usize {
        self.out_of_band + self.missing_salary
    }
}

impl RecordFilter {
    pub fn new(band: SalaryBand) -> Self {
        Self { band }
    }

    pub fn band(&self) -> SalaryBand {
        self.band
    }

    pub fn keeps(&self, record: &NormalizedRecord) -> bool {
        record
            .salary_avg()
            .is_some_and(|avg| self.band.contains(avg))
    }

    pub fn apply(&self, records: Vec<NormalizedRecord>) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();
        for record in records {
            if self.keeps(&record) {
                outcome.kept.push(record);
            } else if record.salary.is_some() {
                outcome.out_of_band += 1;
            } else {
                outcome.missing_salary += 1;
            }
        }
        debug!(
            kept = outcome.kept.len(),
            out_of_band = outcome.out_of_band,
            missing_salary = outcome.missing_salary,
            band_min = self.band.min,
            band_max = self.band.max,
            "salary filter applied"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use jobs_model::{Salary, SalaryUnit};

    use super::*;

    fn record(avg: Option<f64>) -> NormalizedRecord {
        NormalizedRecord {
            salary: avg.map(|value| Salary::from_bounds(value, value, SalaryUnit::Yearly)),
            ..NormalizedRecord::default()
        }
    }

    #[test]
    fn test_band_edges_are_kept() {
        let filter = RecordFilter::new(SalaryBand::default());
        assert!(filter.keeps(&record(Some(20_000.0))));
        assert!(filter.keeps(&record(Some(200_000.0))));
        assert!(!filter.keeps(&record(Some(19_999.0))));
        assert!(!filter.keeps(&record(None)));
    }

    #[test]
    fn test_apply_counts_rejections() {
        let filter = RecordFilter::new(SalaryBand::default());
        let outcome = filter.apply(vec![
            record(Some(45_000.0)),
            record(Some(15.0)),
            record(None),
            record(Some(250_000.0)),
        ]);
        assert_eq!(outcome.kept.len(), 1);
        assert_eq!(outcome.out_of_band, 2);
        assert_eq!(outcome.missing_salary, 1);
        assert_eq!(outcome.rejected(), 3);
    }
}
