//! The fixed set of charts produced by an analysis run.

use std::path::{Path, PathBuf};

use jobs_model::{AggregateStat, NormalizedRecord};
use jobs_transform::{BoxStats, histogram, remote_label};
use tracing::{debug, info};

use crate::analysis::AnalysisReport;
use crate::error::Result;

use super::{
    BarChart, BoxPlot, Orientation, REMOTE_CHART, SALARY_BOXPLOT_CHART,
    SALARY_BY_LOCATION_CHART, SALARY_DISTRIBUTION_CHART, SKILLS_VS_SALARY_CHART,
    SQL_TOP_SKILLS_CHART, TOP_PAYING_SKILLS_CHART, TOP_SKILLS_CHART, ValueFormat,
    render_bar_chart, render_box_plot, render_histogram, write_chart,
};

const SALARY_LABEL: &str = "Average salary (£)";
const TOP_SKILLS_BARS: usize = 10;

fn counts(stats: &[AggregateStat]) -> Vec<(String, f64)> {
    stats
        .iter()
        .map(|stat| (stat.group_key.clone(), stat.count as f64))
        .collect()
}

fn means(stats: &[AggregateStat]) -> Vec<(String, f64)> {
    stats
        .iter()
        .map(|stat| (stat.group_key.clone(), stat.mean_salary))
        .collect()
}

/// Render every chart derived from the dataset into `dir`.
///
/// `sql_top_skills` comes from the relational store; when `None` the
/// store-backed chart is skipped.
pub fn write_analysis_charts(
    dir: &Path,
    records: &[NormalizedRecord],
    report: &AnalysisReport,
    sql_top_skills: Option<&[AggregateStat]>,
    histogram_bins: usize,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let salaries: Vec<f64> = records
        .iter()
        .filter_map(NormalizedRecord::salary_avg)
        .collect();

    let top_skills = BarChart::new("Top in-demand skills", Orientation::Vertical)
        .with_axes("Skill", "Postings")
        .with_bars(counts(
            &report.demand_skills[..report.demand_skills.len().min(TOP_SKILLS_BARS)],
        ));
    written.push(write_chart(dir, TOP_SKILLS_CHART, &render_bar_chart(&top_skills)?)?);

    let paying_skills = BarChart::new("Top paying skills", Orientation::Horizontal)
        .with_axes("Skill", SALARY_LABEL)
        .with_format(ValueFormat::Currency)
        .with_bars(means(&report.paying_skills));
    written.push(write_chart(
        dir,
        TOP_PAYING_SKILLS_CHART,
        &render_bar_chart(&paying_skills)?,
    )?);

    let bins = histogram(&salaries, histogram_bins);
    written.push(write_chart(
        dir,
        SALARY_DISTRIBUTION_CHART,
        &render_histogram("Salary distribution", SALARY_LABEL, &bins)?,
    )?);

    let overall = BoxPlot {
        title: "Salary spread".to_string(),
        value_label: SALARY_LABEL.to_string(),
        groups: BoxStats::from_values(&salaries)
            .map(|stats| vec![("All postings".to_string(), stats)])
            .unwrap_or_default(),
    };
    written.push(write_chart(dir, SALARY_BOXPLOT_CHART, &render_box_plot(&overall)?)?);

    let locations = BarChart::new("Average salary by location", Orientation::Vertical)
        .with_axes("Location", SALARY_LABEL)
        .with_format(ValueFormat::Currency)
        .with_bars(means(&report.chart_locations));
    written.push(write_chart(
        dir,
        SALARY_BY_LOCATION_CHART,
        &render_bar_chart(&locations)?,
    )?);

    let remote = BoxPlot {
        title: "Remote vs non-remote salaries".to_string(),
        value_label: SALARY_LABEL.to_string(),
        groups: [true, false]
            .into_iter()
            .filter_map(|is_remote| {
                let values: Vec<f64> = records
                    .iter()
                    .filter(|record| record.is_remote == is_remote)
                    .filter_map(NormalizedRecord::salary_avg)
                    .collect();
                BoxStats::from_values(&values)
                    .map(|stats| (remote_label(is_remote).to_string(), stats))
            })
            .collect(),
    };
    written.push(write_chart(dir, REMOTE_CHART, &render_box_plot(&remote)?)?);

    let skills_vs_salary = BarChart::new("Skills vs average salary", Orientation::Horizontal)
        .with_axes("Skill", SALARY_LABEL)
        .with_format(ValueFormat::Currency)
        .with_bars(means(&report.chart_skills));
    written.push(write_chart(
        dir,
        SKILLS_VS_SALARY_CHART,
        &render_bar_chart(&skills_vs_salary)?,
    )?);

    match sql_top_skills {
        Some(stats) => written.push(write_sql_top_skills_chart(dir, stats)?),
        None => debug!("no store results, skipping {SQL_TOP_SKILLS_CHART}"),
    }

    info!(dir = %dir.display(), charts = written.len(), "charts written");
    Ok(written)
}

/// Chart the most in-demand skills as reported by the relational store.
pub fn write_sql_top_skills_chart(dir: &Path, stats: &[AggregateStat]) -> Result<PathBuf> {
    let chart = BarChart::new("Most in-demand skills (SQL)", Orientation::Vertical)
        .with_axes("Skill", "Postings")
        .with_bars(counts(stats));
    write_chart(dir, SQL_TOP_SKILLS_CHART, &render_bar_chart(&chart)?)
}
