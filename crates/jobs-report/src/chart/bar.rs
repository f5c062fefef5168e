use crate::error::Result;

use super::svg::{Anchor, SvgCanvas};
use super::{
    AXIS_STROKE, BAR_FILL, GRID_STROKE, HEIGHT, PlotArea, TICKS, ValueFormat, WIDTH,
    nice_ceiling,
};

/// Direction bars grow in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    /// Categories on the y axis; suits long labels.
    Horizontal,
}

/// A labelled bar chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarChart {
    pub title: String,
    /// Label of the category axis.
    pub category_label: String,
    /// Label of the value axis.
    pub value_label: String,
    pub orientation: Orientation,
    pub value_format: ValueFormat,
    /// Bars in drawing order (left to right, or top to bottom).
    pub bars: Vec<(String, f64)>,
}

impl BarChart {
    pub fn new(title: impl Into<String>, orientation: Orientation) -> Self {
        Self {
            title: title.into(),
            orientation,
            ..Self::default()
        }
    }

    pub fn with_axes(mut self, category: impl Into<String>, value: impl Into<String>) -> Self {
        self.category_label = category.into();
        self.value_label = value.into();
        self
    }

    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.value_format = format;
        self
    }

    pub fn with_bars(mut self, bars: Vec<(String, f64)>) -> Self {
        self.bars = bars;
        self
    }
}

pub fn render_bar_chart(chart: &BarChart) -> Result<String> {
    let mut canvas = SvgCanvas::new(&chart.title, WIDTH, HEIGHT)?;
    canvas.text(WIDTH / 2.0, 32.0, Anchor::Middle, 18, None, &chart.title)?;

    let max_value = chart
        .bars
        .iter()
        .map(|(_, value)| *value)
        .fold(0.0_f64, f64::max);
    let axis_max = nice_ceiling(max_value);

    match chart.orientation {
        Orientation::Vertical => draw_vertical(&mut canvas, chart, axis_max)?,
        Orientation::Horizontal => draw_horizontal(&mut canvas, chart, axis_max)?,
    }
    canvas.finish()
}

fn draw_vertical(canvas: &mut SvgCanvas, chart: &BarChart, axis_max: f64) -> Result<()> {
    let area = PlotArea::with_margins(90.0, 30.0, 60.0, 150.0);
    for tick in 0..=TICKS {
        let value = axis_max * tick as f64 / TICKS as f64;
        let y = area.bottom() - area.height * tick as f64 / TICKS as f64;
        canvas.line(area.left, y, area.right(), y, GRID_STROKE)?;
        let label = chart.value_format.format(value);
        canvas.text(area.left - 8.0, y + 4.0, Anchor::End, 11, None, &label)?;
    }

    let slot = area.width / chart.bars.len().max(1) as f64;
    for (index, (label, value)) in chart.bars.iter().enumerate() {
        let height = area.height * value / axis_max;
        let x = area.left + slot * index as f64 + slot * 0.15;
        let tooltip = format!("{label}: {}", chart.value_format.format(*value));
        canvas.rect(
            x,
            area.bottom() - height,
            slot * 0.7,
            height,
            BAR_FILL,
            Some(&tooltip),
        )?;
        let center = area.left + slot * (index as f64 + 0.5);
        canvas.text(
            center,
            area.bottom() + 14.0,
            Anchor::End,
            11,
            Some(-45.0),
            label,
        )?;
    }

    canvas.line(area.left, area.top, area.left, area.bottom(), AXIS_STROKE)?;
    canvas.line(area.left, area.bottom(), area.right(), area.bottom(), AXIS_STROKE)?;
    canvas.text(
        area.left + area.width / 2.0,
        HEIGHT - 12.0,
        Anchor::Middle,
        13,
        None,
        &chart.category_label,
    )?;
    canvas.text(
        22.0,
        area.top + area.height / 2.0,
        Anchor::Middle,
        13,
        Some(-90.0),
        &chart.value_label,
    )
}

fn draw_horizontal(canvas: &mut SvgCanvas, chart: &BarChart, axis_max: f64) -> Result<()> {
    let area = PlotArea::with_margins(220.0, 40.0, 60.0, 70.0);
    for tick in 0..=TICKS {
        let value = axis_max * tick as f64 / TICKS as f64;
        let x = area.left + area.width * tick as f64 / TICKS as f64;
        canvas.line(x, area.top, x, area.bottom(), GRID_STROKE)?;
        let label = chart.value_format.format(value);
        canvas.text(x, area.bottom() + 18.0, Anchor::Middle, 11, None, &label)?;
    }

    let slot = area.height / chart.bars.len().max(1) as f64;
    for (index, (label, value)) in chart.bars.iter().enumerate() {
        let width = area.width * value / axis_max;
        let y = area.top + slot * index as f64 + slot * 0.15;
        let tooltip = format!("{label}: {}", chart.value_format.format(*value));
        canvas.rect(area.left, y, width, slot * 0.7, BAR_FILL, Some(&tooltip))?;
        let center = area.top + slot * (index as f64 + 0.5);
        canvas.text(area.left - 8.0, center + 4.0, Anchor::End, 11, None, label)?;
    }

    canvas.line(area.left, area.top, area.left, area.bottom(), AXIS_STROKE)?;
    canvas.line(area.left, area.bottom(), area.right(), area.bottom(), AXIS_STROKE)?;
    canvas.text(
        area.left + area.width / 2.0,
        HEIGHT - 16.0,
        Anchor::Middle,
        13,
        None,
        &chart.value_label,
    )?;
    canvas.text(
        22.0,
        area.top + area.height / 2.0,
        Anchor::Middle,
        13,
        Some(-90.0),
        &chart.category_label,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(orientation: Orientation) -> BarChart {
        BarChart::new("Top skills", orientation)
            .with_axes("Skill", "Postings")
            .with_bars(vec![("sql".to_string(), 12.0), ("r & d".to_string(), 4.0)])
    }

    #[test]
    fn test_vertical_bars_render() {
        let svg = render_bar_chart(&chart(Orientation::Vertical)).expect("render");
        assert!(svg.starts_with("<?xml"));
        assert_eq!(svg.matches("<title>").count(), 2);
        assert!(svg.contains("<title>sql: 12</title>"));
        assert!(svg.contains("r &amp; d"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let first = render_bar_chart(&chart(Orientation::Horizontal)).expect("render");
        let second = render_bar_chart(&chart(Orientation::Horizontal)).expect("render");
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_chart_still_renders() {
        let svg = render_bar_chart(&BarChart::new("Nothing", Orientation::Vertical))
            .expect("render");
        assert!(svg.contains("Nothing"));
        assert!(!svg.contains("<title>"));
    }
}
