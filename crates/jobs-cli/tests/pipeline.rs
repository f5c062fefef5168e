//! End-to-end tests for the subcommand pipelines.

use std::fs;
use std::path::Path;

use jobs_cli::pipeline::{plot_sql_top_skills, run_analysis, run_query, run_setup_db};
use jobs_model::{AnalysisConfig, CLEANED_DATASET_FILENAME};
use jobs_report::QueryKind;
use jobs_report::chart::{SALARY_DISTRIBUTION_CHART, SQL_TOP_SKILLS_CHART};
use tempfile::TempDir;

const LISTINGS: &str = "\
Company,Company Score,Job Title,Location,Date,Salary,Skills
Acme,4.1,Data Analyst,London,5d,£40K - £50K (Glassdoor est.),\"Python, SQL, python\"
Beta,3.9,Data Engineer,Remote,30d+,£60K (Employer est.),SQL
Gamma,,Data Analyst,Leeds,1d,£35K,\"Excel, SQL\"
Delta,4.0,Analyst,Leeds,24h,£15.00 Per Hour,
Epsilon,3.5,Scientist,London,2d,Competitive,R
";

fn config_in(dir: &Path) -> AnalysisConfig {
    let input = dir.join("listings.csv");
    fs::write(&input, LISTINGS).expect("write listings");
    AnalysisConfig::default()
        .with_input_path(input)
        .with_output_dir(dir.join("output"))
        .with_charts_dir(dir.join("charts"))
        .with_database_path(dir.join("jobs.db"))
}

#[test]
fn analyze_writes_cleaned_dataset_and_charts() {
    let dir = TempDir::new().expect("tempdir");
    let config = config_in(dir.path());
    let outcome = run_analysis(&config).expect("analysis");

    assert_eq!(outcome.profile.row_count, 5);
    assert_eq!(outcome.profile.missing_for("Company Score"), Some(1));
    assert_eq!(outcome.counts.input_rows, 5);
    assert_eq!(outcome.counts.parsed_dates, 4);
    assert_eq!(outcome.counts.parsed_salaries, 4);
    assert_eq!(outcome.counts.hourly_salaries, 1);
    assert_eq!(outcome.counts.kept, 3);
    assert_eq!(outcome.counts.rejected, 2);

    let cleaned = dir.path().join("output").join(CLEANED_DATASET_FILENAME);
    assert_eq!(outcome.cleaned_dataset, cleaned);
    let content = fs::read_to_string(&cleaned).expect("read cleaned");
    assert_eq!(content.lines().count(), 4);
    assert!(!content.contains("Delta"));

    assert_eq!(outcome.charts.len(), 7);
    assert!(dir.path().join("charts").join(SALARY_DISTRIBUTION_CHART).exists());
    assert_eq!(outcome.report.demand_skills[0].group_key, "sql");
}

#[test]
fn query_requires_database() {
    let dir = TempDir::new().expect("tempdir");
    let config = config_in(dir.path());
    let error = run_query(&config, QueryKind::TopInDemandSkills).expect_err("no database");
    assert!(error.to_string().contains("setup-db"));
}

#[test]
fn setup_then_query() {
    let dir = TempDir::new().expect("tempdir");
    let config = config_in(dir.path());
    let setup = run_setup_db(&config).expect("setup");
    assert_eq!(setup.store.jobs, 3);
    assert_eq!(setup.store.job_skills, 6);
    assert_eq!(setup.exports.len(), 2);
    assert!(setup.exports.iter().all(|path| path.exists()));

    let demand = run_query(&config, QueryKind::TopInDemandSkills).expect("query");
    assert_eq!(demand.rows[0].group_key, "sql");
    assert_eq!(demand.rows[0].count, 3);

    let remote = run_query(&config, QueryKind::RemoteSalaryComparison).expect("query");
    assert_eq!(remote.rows.len(), 2);

    // Default query threshold is 5; no skill reaches it in this sample.
    let best = run_query(&config, QueryKind::HighestPayingSkill).expect("query");
    assert!(best.rows.is_empty());

    let json = serde_json::to_value(&demand).expect("json");
    assert_eq!(json["query"], "top_in_demand_skills");

    let chart = plot_sql_top_skills(&config).expect("chart");
    assert_eq!(chart, dir.path().join("charts").join(SQL_TOP_SKILLS_CHART));
    assert!(chart.exists());
}

#[test]
fn missing_input_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    let config = AnalysisConfig::default().with_input_path(dir.path().join("absent.csv"));
    let error = run_analysis(&config).expect_err("missing input");
    assert!(format!("{error:#}").contains("absent.csv"));
}
