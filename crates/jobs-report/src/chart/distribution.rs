use jobs_transform::{BoxStats, HistogramBin};

use crate::error::Result;

use super::svg::{Anchor, SvgCanvas};
use super::{
    AXIS_STROKE, BAR_FILL, BOX_FILL, GRID_STROKE, HEIGHT, MEDIAN_STROKE, PlotArea, TICKS,
    ValueFormat, WIDTH, nice_ceiling,
};

/// Box plots of one or more labelled groups on a shared salary axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxPlot {
    pub title: String,
    pub value_label: String,
    pub groups: Vec<(String, BoxStats)>,
}

/// Histogram of salaries, one bar per bin.
pub fn render_histogram(title: &str, value_label: &str, bins: &[HistogramBin]) -> Result<String> {
    let mut canvas = SvgCanvas::new(title, WIDTH, HEIGHT)?;
    canvas.text(WIDTH / 2.0, 32.0, Anchor::Middle, 18, None, title)?;
    let area = PlotArea::with_margins(80.0, 30.0, 60.0, 80.0);

    let max_count = bins.iter().map(|bin| bin.count).max().unwrap_or(0);
    let axis_max = nice_ceiling(max_count as f64);
    for tick in 0..=TICKS {
        let value = axis_max * tick as f64 / TICKS as f64;
        let y = area.bottom() - area.height * tick as f64 / TICKS as f64;
        canvas.line(area.left, y, area.right(), y, GRID_STROKE)?;
        let label = ValueFormat::Count.format(value);
        canvas.text(area.left - 8.0, y + 4.0, Anchor::End, 11, None, &label)?;
    }

    let slot = area.width / bins.len().max(1) as f64;
    let label_every = (bins.len() / 6).max(1);
    for (index, bin) in bins.iter().enumerate() {
        let height = area.height * bin.count as f64 / axis_max;
        let x = area.left + slot * index as f64;
        let tooltip = format!(
            "{} to {}: {}",
            ValueFormat::Currency.format(bin.start),
            ValueFormat::Currency.format(bin.end),
            bin.count
        );
        canvas.rect(x, area.bottom() - height, slot, height, BAR_FILL, Some(&tooltip))?;
        if index % label_every == 0 {
            let label = ValueFormat::Currency.format(bin.start);
            canvas.text(x, area.bottom() + 18.0, Anchor::Middle, 11, None, &label)?;
        }
    }

    canvas.line(area.left, area.top, area.left, area.bottom(), AXIS_STROKE)?;
    canvas.line(area.left, area.bottom(), area.right(), area.bottom(), AXIS_STROKE)?;
    canvas.text(
        area.left + area.width / 2.0,
        HEIGHT - 20.0,
        Anchor::Middle,
        13,
        None,
        value_label,
    )?;
    canvas.text(
        22.0,
        area.top + area.height / 2.0,
        Anchor::Middle,
        13,
        Some(-90.0),
        "Postings",
    )?;
    canvas.finish()
}

/// Vertical box plots with Tukey whiskers and outlier markers.
pub fn render_box_plot(plot: &BoxPlot) -> Result<String> {
    let mut canvas = SvgCanvas::new(&plot.title, WIDTH, HEIGHT)?;
    canvas.text(WIDTH / 2.0, 32.0, Anchor::Middle, 18, None, &plot.title)?;
    let area = PlotArea::with_margins(90.0, 30.0, 60.0, 70.0);

    let (low, high) = value_range(&plot.groups);
    let scale = |value: f64| area.bottom() - area.height * (value - low) / (high - low);
    for tick in 0..=TICKS {
        let value = low + (high - low) * tick as f64 / TICKS as f64;
        let y = scale(value);
        canvas.line(area.left, y, area.right(), y, GRID_STROKE)?;
        let label = ValueFormat::Currency.format(value);
        canvas.text(area.left - 8.0, y + 4.0, Anchor::End, 11, None, &label)?;
    }

    let slot = area.width / plot.groups.len().max(1) as f64;
    for (index, (label, stats)) in plot.groups.iter().enumerate() {
        let center = area.left + slot * (index as f64 + 0.5);
        let half = (slot * 0.25).min(80.0);
        canvas.line(
            center,
            scale(stats.upper_whisker),
            center,
            scale(stats.q3),
            AXIS_STROKE,
        )?;
        canvas.line(
            center,
            scale(stats.q1),
            center,
            scale(stats.lower_whisker),
            AXIS_STROKE,
        )?;
        for whisker in [stats.lower_whisker, stats.upper_whisker] {
            let y = scale(whisker);
            canvas.line(center - half / 2.0, y, center + half / 2.0, y, AXIS_STROKE)?;
        }
        canvas.outline(
            center - half,
            scale(stats.q3),
            half * 2.0,
            scale(stats.q1) - scale(stats.q3),
            BOX_FILL,
            AXIS_STROKE,
        )?;
        let median = scale(stats.median);
        canvas.line(center - half, median, center + half, median, MEDIAN_STROKE)?;
        for outlier in &stats.outliers {
            canvas.circle(center, scale(*outlier), 3.0, AXIS_STROKE)?;
        }
        let caption = format!("{label} (n={})", stats.count);
        canvas.text(center, area.bottom() + 20.0, Anchor::Middle, 12, None, &caption)?;
    }

    canvas.line(area.left, area.top, area.left, area.bottom(), AXIS_STROKE)?;
    canvas.line(area.left, area.bottom(), area.right(), area.bottom(), AXIS_STROKE)?;
    canvas.text(
        22.0,
        area.top + area.height / 2.0,
        Anchor::Middle,
        13,
        Some(-90.0),
        &plot.value_label,
    )?;
    canvas.finish()
}

/// Axis range covering every whisker and outlier, padded by 5%.
fn value_range(groups: &[(String, BoxStats)]) -> (f64, f64) {
    let values = groups.iter().flat_map(|(_, stats)| {
        stats
            .outliers
            .iter()
            .copied()
            .chain([stats.lower_whisker, stats.upper_whisker])
    });
    let (low, high) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
        (lo.min(value), hi.max(value))
    });
    if !low.is_finite() || !high.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((high - low) * 0.05).max(1.0);
    (low - pad, high + pad)
}
