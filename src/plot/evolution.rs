use crate::{
    metrics::Mode,
    plot::{padded_range, title_style, FONT_SIZE, STROKE_WIDTH},
    report::Report,
};
use anyhow::Result;
use plotters::{coord::Shift, prelude::*};
use std::ops::Range;

const MARKER_SIZE: i32 = 4;

/// Run-index axis with one slot of room on each side of the runs.
pub fn run_range(x_min: u32, x_max: u32) -> Range<u32> {
    x_min.saturating_sub(1)..x_max.saturating_add(1)
}

/// Line chart of the total time of every run, one series per mode.
pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, report: &Report) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let mut series = Vec::new();
    for mode in Mode::iter_variants() {
        series.push((*mode, report.dataset(mode).points()?));
    }

    let all_points = series.iter().flat_map(|(_, points)| points.iter());
    let x_min = all_points.clone().map(|(x, _)| *x).min().unwrap_or(0);
    let x_max = all_points.clone().map(|(x, _)| *x).max().unwrap_or(0);
    let y_min = all_points.clone().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = all_points.map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);
    let (y_lo, y_hi) = padded_range(y_min, y_max);

    let mut chart = ChartBuilder::on(root)
        .caption("Total time per run", title_style())
        .x_label_area_size(50)
        .y_label_area_size(80)
        .margin(15)
        .build_cartesian_2d(run_range(x_min, x_max), y_lo..y_hi)?;

    chart
        .configure_mesh()
        .light_line_style(WHITE)
        .bold_line_style(BLACK.mix(0.15))
        .x_label_style(("sans-serif", FONT_SIZE - 2).into_font())
        .y_label_style(("sans-serif", FONT_SIZE - 2).into_font())
        .x_label_formatter(&|x| format!("{}", x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .x_desc("Run number")
        .y_desc("Total time (ms)")
        .axis_desc_style(("sans-serif", FONT_SIZE).into_font())
        .draw()?;

    for (mode, points) in &series {
        let color = mode.get_line_color()?;

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(STROKE_WIDTH),
            ))?
            .label(mode.to_string())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(STROKE_WIDTH))
            });

        // Circles for the sequential runs, squares for the speculative ones
        match mode {
            Mode::Sequential => {
                chart.draw_series(
                    points
                        .iter()
                        .map(|p| Circle::new(*p, MARKER_SIZE, color.filled())),
                )?;
            }
            Mode::Speculative => {
                chart.draw_series(points.iter().map(|p| {
                    EmptyElement::at(*p)
                        + Rectangle::new(
                            [(-MARKER_SIZE, -MARKER_SIZE), (MARKER_SIZE, MARKER_SIZE)],
                            color.filled(),
                        )
                }))?;
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", FONT_SIZE).into_font())
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
