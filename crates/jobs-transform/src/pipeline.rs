//! Record-level normalization and the dataset stage that filters it.

use std::time::Instant;

use jobs_model::{AnalysisConfig, NormalizedRecord, RawRecord, SalaryUnit};
use tracing::{info, info_span};

use crate::features::is_remote_location;
use crate::filter::RecordFilter;
use crate::normalization::{normalize_posting_age, normalize_salary, tokenize_skills};
use crate::stats::mean;

/// Normalized records surviving the salary filter, plus stage counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedDataset {
    pub records: Vec<NormalizedRecord>,
    /// Records dropped by the salary filter.
    pub rejected: usize,
    /// Input records with a parsed posting age.
    pub parsed_dates: usize,
    /// Input records with a parsed salary.
    pub parsed_salaries: usize,
    /// Input records whose salary was quoted per hour.
    pub hourly_salaries: usize,
    pub input_count: usize,
}

/// Normalize every field of a single record. Never fails: unparseable
/// fields become absent.
pub fn normalize_record(raw: &RawRecord) -> NormalizedRecord {
    let skills = raw
        .skills
        .as_deref()
        .map(tokenize_skills)
        .unwrap_or_default();
    NormalizedRecord {
        company: raw.company.clone(),
        company_score: raw.company_score.clone(),
        job_title: raw.job_title.clone(),
        location: raw.location.clone(),
        days_since_posted: raw.date.as_deref().and_then(normalize_posting_age),
        salary: raw.salary.as_deref().and_then(normalize_salary),
        skills_raw: raw.skills.clone(),
        skills,
        is_remote: is_remote_location(raw.location.as_deref()),
    }
}

/// Normalize `raw` and keep records whose salary lies in the configured band.
pub fn normalize_dataset(raw: &[RawRecord], config: &AnalysisConfig) -> NormalizedDataset {
    let span = info_span!("normalize", input_rows = raw.len());
    let _guard = span.enter();
    let start = Instant::now();

    let normalized: Vec<NormalizedRecord> = raw.iter().map(normalize_record).collect();
    let parsed_dates = normalized
        .iter()
        .filter(|record| record.days_since_posted.is_some())
        .count();
    let parsed_salaries = normalized
        .iter()
        .filter(|record| record.salary.is_some())
        .count();
    let hourly_salaries = normalized
        .iter()
        .filter(|record| record.salary_unit() == Some(SalaryUnit::Hourly))
        .count();

    let outcome = RecordFilter::new(config.salary_band).apply(normalized);
    let rejected = outcome.rejected();
    info!(
        input_rows = raw.len(),
        parsed_dates,
        parsed_salaries,
        hourly_salaries,
        kept = outcome.kept.len(),
        rejected,
        duration_ms = start.elapsed().as_millis(),
        "normalization complete"
    );

    NormalizedDataset {
        records: outcome.kept,
        rejected,
        parsed_dates,
        parsed_salaries,
        hourly_salaries,
        input_count: raw.len(),
    }
}

/// Mean salary average across `records`, ignoring records without a salary.
pub fn overall_mean_salary(records: &[NormalizedRecord]) -> Option<f64> {
    let values: Vec<f64> = records
        .iter()
        .filter_map(NormalizedRecord::salary_avg)
        .collect();
    mean(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(salary: &str, location: &str) -> RawRecord {
        RawRecord {
            job_title: Some("Data Analyst".to_string()),
            location: Some(location.to_string()),
            date: Some("3d".to_string()),
            salary: Some(salary.to_string()),
            skills: Some("SQL, Excel".to_string()),
            ..RawRecord::default()
        }
    }

    #[test]
    fn test_normalize_record_fields() {
        let record = normalize_record(&raw("£30K - £40K", "Remote"));
        assert_eq!(record.days_since_posted, Some(3));
        assert_eq!(record.salary_avg(), Some(35_000.0));
        assert_eq!(record.skills, vec!["sql", "excel"]);
        assert_eq!(record.skills_raw.as_deref(), Some("SQL, Excel"));
        assert!(record.is_remote);
    }

    #[test]
    fn test_dataset_counts() {
        let input = vec![
            raw("£30K - £40K", "Leeds"),
            raw("£15.00 Per Hour", "Leeds"),
            raw("competitive", "Leeds"),
        ];
        let dataset = normalize_dataset(&input, &AnalysisConfig::default());
        assert_eq!(dataset.records.len(), 1);
        assert_eq!(dataset.rejected, 2);
        assert_eq!(dataset.parsed_salaries, 2);
        assert_eq!(dataset.hourly_salaries, 1);
        assert_eq!(dataset.parsed_dates, 3);
        assert_eq!(dataset.input_count, 3);
    }

    #[test]
    fn test_overall_mean() {
        let records = vec![
            normalize_record(&raw("£30K", "Leeds")),
            normalize_record(&raw("£50K", "Leeds")),
            normalize_record(&raw("n/a", "Leeds")),
        ];
        assert_eq!(overall_mean_salary(&records), Some(40_000.0));
        assert_eq!(overall_mean_salary(&[]), None);
    }
}
