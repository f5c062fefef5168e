//! Listings computed from the filtered dataset.

use jobs_model::{AggregateStat, AnalysisConfig, NormalizedRecord, SalaryUnit, SkillRow, SortBy};
use jobs_transform::{
    by_job_title, by_location, by_remote, by_skill, explode_skills, overall_mean_salary,
    value_counts,
};
use serde::Serialize;
use tracing::{debug, info_span};

/// Every ranking the analysis prints or charts.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AnalysisReport {
    pub record_count: usize,
    pub hourly_count: usize,
    pub skill_row_count: usize,
    pub overall_mean_salary: Option<f64>,
    /// Most frequent job titles.
    pub top_job_titles: Vec<(String, usize)>,
    /// Most frequent locations.
    pub top_locations: Vec<(String, usize)>,
    /// Best paid locations above the location threshold.
    pub paying_locations: Vec<AggregateStat>,
    /// Best paid job titles above the job-title threshold.
    pub paying_job_titles: Vec<AggregateStat>,
    /// Most listed skills.
    pub demand_skills: Vec<AggregateStat>,
    /// Best paid skills above the skill-salary threshold.
    pub paying_skills: Vec<AggregateStat>,
    /// Best paid skills above the chart threshold.
    pub chart_skills: Vec<AggregateStat>,
    /// Best paid locations with no threshold, for the location chart.
    pub chart_locations: Vec<AggregateStat>,
    pub remote: Vec<AggregateStat>,
}

impl AnalysisReport {
    pub fn build(records: &[NormalizedRecord], config: &AnalysisConfig) -> Self {
        let span = info_span!("analysis", records = records.len());
        let _guard = span.enter();
        let thresholds = config.thresholds;
        let top_n = config.top_n;
        let listing_n = config.skill_listing_top_n;
        let skills: Vec<SkillRow> = explode_skills(records).collect();

        let report = Self {
            record_count: records.len(),
            hourly_count: records
                .iter()
                .filter(|record| record.salary_unit() == Some(SalaryUnit::Hourly))
                .count(),
            skill_row_count: skills.len(),
            overall_mean_salary: overall_mean_salary(records),
            top_job_titles: take(
                value_counts(records, |record| record.job_title.as_deref()),
                top_n,
            ),
            top_locations: take(
                value_counts(records, |record| record.location.as_deref()),
                top_n,
            ),
            paying_locations: take(
                by_location(records, thresholds.location, SortBy::MeanSalary),
                top_n,
            ),
            paying_job_titles: take(
                by_job_title(records, thresholds.job_title, SortBy::MeanSalary),
                top_n,
            ),
            demand_skills: take(by_skill(&skills, thresholds.demand, SortBy::Count), listing_n),
            paying_skills: take(
                by_skill(&skills, thresholds.skill_salary, SortBy::MeanSalary),
                listing_n,
            ),
            chart_skills: take(
                by_skill(&skills, thresholds.skill_chart, SortBy::MeanSalary),
                top_n,
            ),
            chart_locations: take(by_location(records, 0, SortBy::MeanSalary), top_n),
            remote: by_remote(records),
        };
        debug!(
            skill_rows = report.skill_row_count,
            paying_skills = report.paying_skills.len(),
            chart_skills = report.chart_skills.len(),
            "analysis listings computed"
        );
        report
    }
}

fn take<T>(mut items: Vec<T>, n: usize) -> Vec<T> {
    items.truncate(n);
    items
}
