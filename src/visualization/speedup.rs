//! Speedup-versus-nodes line chart with its timing table

use crate::config::ReportConfig;
use crate::speedup::{ScalingReport, SpeedupSeries, NODE_COUNTS};
use crate::visualization::table::TimingTable;
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

// Font sizes
const TICK_LABEL_FONT_SIZE: u32 = 14;
const AXIS_LABEL_FONT_SIZE: u32 = 16;
const LEGEND_FONT_SIZE: u32 = 14;

// Layout
const CHART_MARGIN: u32 = 15;
const X_LABEL_AREA_SIZE: u32 = 40;
const Y_LABEL_AREA_SIZE: u32 = 60;
/// Padding either side of the first and last node-count category
const CATEGORY_MARGIN: f64 = 0.15;
/// Headroom above the tallest point
const Y_HEADROOM: f64 = 1.1;
/// Bound on either end of the y-axis
const Y_LIMIT: f64 = f64::MAX / 4.0;

// Theme: grey panel with white grid lines
const PANEL_BACKGROUND: RGBColor = RGBColor(229, 229, 229);
const GRID_COLOR: RGBColor = RGBColor(255, 255, 255);

/// Line colors, one per step in input order
pub const STEP_COLORS: [RGBColor; 3] = [
    RGBColor(255, 0, 0), // red
    RGBColor(0, 128, 0), // green
    RGBColor(0, 0, 255), // blue
];
const LINE_OPACITY: f64 = 0.5;
const LINE_WIDTH: u32 = 2;

pub struct SpeedupPlotter;

impl SpeedupPlotter {
    /// Render the speedup chart and timing table as an SVG document
    pub fn render(report: &ScalingReport, config: &ReportConfig) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
                .into_drawing_area();
            root.fill(&WHITE)?;

            let table_height = config.table_height(report.steps().len());
            let (plot_area, table_area) =
                root.split_vertically(config.height.saturating_sub(table_height));

            Self::draw_chart(&plot_area, report)?;

            // line the table up with the plotting area, not the label gutter
            let inset = (
                (CHART_MARGIN + Y_LABEL_AREA_SIZE) as i32,
                CHART_MARGIN as i32,
            );
            TimingTable::new(report).draw(&table_area, inset, config.table_row_height)?;

            root.present()?;
        }
        Ok(svg)
    }

    fn draw_chart(area: &DrawingArea<SVGBackend<'_>, Shift>, report: &ScalingReport) -> Result<()> {
        let (y_min, y_max) = y_range(report);
        let last_category = (NODE_COUNTS.len() - 1) as f64;

        let mut chart = ChartBuilder::on(area)
            .margin(CHART_MARGIN)
            .x_label_area_size(X_LABEL_AREA_SIZE)
            .y_label_area_size(Y_LABEL_AREA_SIZE)
            .build_cartesian_2d(
                -CATEGORY_MARGIN..(last_category + CATEGORY_MARGIN),
                y_min..y_max,
            )?;

        chart.plotting_area().fill(&PANEL_BACKGROUND)?;

        chart
            .configure_mesh()
            .x_labels(NODE_COUNTS.len())
            .x_label_formatter(&|x| node_label(*x))
            .bold_line_style(GRID_COLOR)
            .light_line_style(PANEL_BACKGROUND)
            .y_desc("Speedup factor")
            .x_desc("Nodes")
            .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
            .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
            .draw()?;

        for (idx, (step, series)) in report.steps().iter().zip(report.speedups()).enumerate() {
            let color = STEP_COLORS[idx % STEP_COLORS.len()].mix(LINE_OPACITY);

            for (run_idx, run) in finite_runs(&series).into_iter().enumerate() {
                let anno =
                    chart.draw_series(LineSeries::new(run, color.stroke_width(LINE_WIDTH)))?;
                if run_idx == 0 {
                    anno.label(step.name.as_str()).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
                    });
                }
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", LEGEND_FONT_SIZE))
            .draw()?;

        Ok(())
    }
}

/// Tick label for an x coordinate: the node count at a category, blank elsewhere
fn node_label(x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 0.3 {
        return String::new();
    }
    NODE_COUNTS
        .get(idx as usize)
        .map(|n| n.to_string())
        .unwrap_or_default()
}

/// Split a series into contiguous runs of finite points
///
/// Non-finite ratios are left as gaps in the drawn line.
fn finite_runs(series: &SpeedupSeries) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for (idx, &value) in series.values().iter().enumerate() {
        if value.is_finite() {
            current.push((idx as f64, value));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// Y-axis range covering every finite speedup, anchored at zero
///
/// Both ends stay within `Y_LIMIT` so the span `hi - lo` is finite.
fn y_range(report: &ScalingReport) -> (f64, f64) {
    let (lo, hi) = report.finite_speedup_range();
    let lo = (lo.min(0.0) * Y_HEADROOM).max(-Y_LIMIT);
    let hi = (hi.max(1.0) * Y_HEADROOM).min(Y_LIMIT);
    (lo, hi)
}
