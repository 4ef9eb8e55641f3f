use crate::{
    metrics::Mode,
    plot::{anchored_style, draw_category_labels, title_style, BAR_WIDTH, FONT_SIZE},
    report::Report,
};
use anyhow::Result;
use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, VPos},
};

/// Bar chart with the mean total time of each mode, annotated with its value.
pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, report: &Report) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let means: Vec<(Mode, f64)> = Mode::iter_variants()
        .map(|mode| (*mode, report.summary(mode).mean))
        .collect();

    let x_max = means.len() as f64 - 0.5;
    let mut y_max = means.iter().map(|(_, m)| *m).fold(0.0, f64::max) * 1.15;
    if y_max <= 0.0 {
        y_max = 1.0;
    }

    let mut chart = ChartBuilder::on(root)
        .caption("Average total time comparison", title_style())
        .x_label_area_size(40)
        .y_label_area_size(80)
        .margin(15)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(WHITE)
        .bold_line_style(BLACK.mix(0.15))
        .y_labels(10)
        .y_label_style(("sans-serif", FONT_SIZE - 2).into_font())
        .x_label_formatter(&|_| String::new())
        .y_label_formatter(&|y| format!("{:.0}", y))
        .y_desc("Time (ms)")
        .axis_desc_style(("sans-serif", FONT_SIZE).into_font())
        .draw()?;

    let half_width = BAR_WIDTH / 2.0;
    for (x, (mode, mean)) in (0..).zip(means.iter()) {
        let x = x as f64;
        let corners = [(x - half_width, 0.0), (x + half_width, *mean)];

        chart
            .plotting_area()
            .draw(&Rectangle::new(corners, mode.get_bar_color()?.filled()))?;
        chart
            .plotting_area()
            .draw(&Rectangle::new(corners, BLACK.stroke_width(1)))?;

        // Value on top of the bar
        chart.plotting_area().draw(&Text::new(
            format!("{:.2}", mean),
            (x, mean + y_max * 0.01),
            anchored_style(FONT_SIZE, HPos::Center, VPos::Bottom),
        ))?;
    }

    let labels: Vec<(String, (i32, i32))> = (0..)
        .zip(means.iter())
        .map(|(x, (mode, _))| {
            (
                mode.to_string(),
                chart.plotting_area().map_coordinate(&(x as f64, 0.0)),
            )
        })
        .collect();
    draw_category_labels(root, &labels)?;

    Ok(())
}
