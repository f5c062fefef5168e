//! Integration tests for the job-market data model.

use std::fs;
use std::path::PathBuf;

use jobs_model::{
    AnalysisConfig, ModelError, NormalizedRecord, ReliabilityThresholds, Salary, SalaryBand,
    SalaryUnit,
};

#[test]
fn salary_unit_round_trips_through_labels() {
    assert_eq!("hourly".parse::<SalaryUnit>(), Ok(SalaryUnit::Hourly));
    assert_eq!(" Yearly ".parse::<SalaryUnit>(), Ok(SalaryUnit::Yearly));
    assert!("monthly".parse::<SalaryUnit>().is_err());
    assert_eq!(SalaryUnit::Hourly.to_string(), "hourly");
}

#[test]
fn normalized_record_accessors_follow_salary() {
    let mut record = NormalizedRecord::default();
    assert_eq!(record.salary_avg(), None);
    assert_eq!(record.salary_unit(), None);

    record.salary = Some(Salary::from_bounds(15.0, 15.0, SalaryUnit::Hourly));
    assert_eq!(record.salary_min(), Some(15.0));
    assert_eq!(record.salary_max(), Some(15.0));
    assert_eq!(record.salary_avg(), Some(15.0));
    assert_eq!(record.salary_unit(), Some(SalaryUnit::Hourly));
}

#[test]
fn salary_band_is_inclusive() {
    let band = SalaryBand::default();
    assert!(band.contains(20_000.0));
    assert!(band.contains(200_000.0));
    assert!(!band.contains(19_999.99));
    assert!(!band.contains(200_000.01));
    assert!(!band.contains(f64::NAN));
}

#[test]
fn default_config_matches_standing_thresholds() {
    let config = AnalysisConfig::default();
    assert_eq!(config.thresholds, ReliabilityThresholds::default());
    assert_eq!(config.thresholds.location, 5);
    assert_eq!(config.thresholds.job_title, 5);
    assert_eq!(config.thresholds.skill_salary, 20);
    assert_eq!(config.thresholds.demand, 0);
    assert_eq!(
        config.cleaned_dataset_path(),
        PathBuf::from("output/cleaned_uk_data_jobs.csv")
    );
    assert!(config.validate().is_ok());
}

#[test]
fn validate_rejects_inverted_band() {
    let config = AnalysisConfig::default().with_salary_band(SalaryBand::new(50_000.0, 10_000.0));
    assert!(matches!(
        config.validate(),
        Err(ModelError::InvalidConfig(_))
    ));
}

#[test]
fn validate_rejects_zero_bins() {
    let config = AnalysisConfig {
        histogram_bins: 0,
        ..AnalysisConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn loads_partial_toml_with_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("analysis.toml");
    fs::write(
        &path,
        "input_path = \"raw/jobs.csv\"\ntop_n = 3\n\n[thresholds]\nskill_salary = 50\n\n[salary_band]\nmin = 25000.0\n",
    )
    .expect("write config");

    let config = AnalysisConfig::from_toml_file(&path).expect("load config");
    assert_eq!(config.input_path, PathBuf::from("raw/jobs.csv"));
    assert_eq!(config.top_n, 3);
    assert_eq!(config.thresholds.skill_salary, 50);
    assert_eq!(config.thresholds.location, 5);
    assert_eq!(config.salary_band.min, 25_000.0);
    assert_eq!(config.salary_band.max, 200_000.0);
    assert_eq!(config.histogram_bins, 30);
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("analysis.toml");
    fs::write(&path, "top_m = 3\n").expect("write config");

    let error = AnalysisConfig::from_toml_file(&path).expect_err("typo must fail");
    assert!(matches!(error, ModelError::ConfigParse { .. }));
}

#[test]
fn missing_config_file_reports_path() {
    let error = AnalysisConfig::from_toml_file(&PathBuf::from("/nonexistent/analysis.toml"))
        .expect_err("missing file");
    assert!(error.to_string().contains("/nonexistent/analysis.toml"));
}
