//! SVG chart rendering.
//!
//! Renderers are pure: each turns a chart description into SVG text.
//! [`write_chart`] puts the text on disk under a fixed file name so that
//! regenerating a chart overwrites the previous one.

mod bar;
mod catalog;
mod distribution;
pub mod svg;

use std::fs;
use std::path::{Path, PathBuf};

pub use bar::{BarChart, Orientation, render_bar_chart};
pub use catalog::{write_analysis_charts, write_sql_top_skills_chart};
pub use distribution::{BoxPlot, render_box_plot, render_histogram};

use crate::error::{ReportError, Result};

pub const TOP_SKILLS_CHART: &str = "top_10_skills.svg";
pub const TOP_PAYING_SKILLS_CHART: &str = "top_paying_skills.svg";
pub const SALARY_DISTRIBUTION_CHART: &str = "salary_distribution.svg";
pub const SALARY_BOXPLOT_CHART: &str = "salary_boxplot.svg";
pub const SALARY_BY_LOCATION_CHART: &str = "salary_by_location.svg";
pub const REMOTE_CHART: &str = "remote_vs_nonremote.svg";
pub const SKILLS_VS_SALARY_CHART: &str = "skills_vs_salary.svg";
pub const SQL_TOP_SKILLS_CHART: &str = "top_skills_sql.svg";

pub(crate) const WIDTH: f64 = 900.0;
pub(crate) const HEIGHT: f64 = 560.0;
pub(crate) const TICKS: usize = 5;

pub(crate) const BAR_FILL: &str = "#4c72b0";
pub(crate) const BOX_FILL: &str = "#a1c9f4";
pub(crate) const MEDIAN_STROKE: &str = "#c44e52";
pub(crate) const AXIS_STROKE: &str = "#333333";
pub(crate) const GRID_STROKE: &str = "#e0e0e0";

/// How axis values are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueFormat {
    #[default]
    Count,
    /// Pounds, abbreviated to thousands from £1,000 up.
    Currency,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Count => format!("{value:.0}"),
            ValueFormat::Currency if value.abs() >= 1000.0 => {
                format!("£{:.0}k", value / 1000.0)
            }
            ValueFormat::Currency => format!("£{value:.0}"),
        }
    }
}

/// Plot area inside the canvas margins.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn with_margins(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            width: WIDTH - left - right,
            height: HEIGHT - top - bottom,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Smallest "round" number (1, 2, 2.5 or 5 times a power of ten) not below
/// `value`. Non-positive input maps to 1.
pub(crate) fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= value)
        .unwrap_or(10.0 * magnitude)
}

/// Write `svg` to `dir/filename`, creating `dir` when needed.
pub fn write_chart(dir: &Path, filename: &str, svg: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| ReportError::io(dir, source))?;
    let path = dir.join(filename);
    fs::write(&path, svg).map_err(|source| ReportError::io(&path, source))?;
    Ok(path)
}
