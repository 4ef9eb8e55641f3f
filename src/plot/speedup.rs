use crate::{
    plot::{
        color::get_color_from_label, draw_category_labels, title_style, BAR_WIDTH, FONT_SIZE,
        STROKE_WIDTH,
    },
    report::Report,
};
use anyhow::Result;
use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

/// Upper bound of the y-axis: always show the no-speedup line at 1.0.
pub fn y_limit(speedup: f64) -> f64 {
    f64::max(1.0, speedup + 0.1)
}

/// Single bar with the overall speedup, annotated in the middle of the bar.
pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, report: &Report) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let speedup = report.speedup;
    let y_max = y_limit(speedup);
    let x_range = -0.75f64..0.75f64;

    let mut chart = ChartBuilder::on(root)
        .caption("Global speedup (T_seq / T_spec)", title_style())
        .x_label_area_size(40)
        .y_label_area_size(70)
        .margin(15)
        .build_cartesian_2d(x_range.clone(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(WHITE)
        .bold_line_style(BLACK.mix(0.15))
        .y_labels(10)
        .y_label_style(("sans-serif", FONT_SIZE - 2).into_font())
        .x_label_formatter(&|_| String::new())
        .y_label_formatter(&|y| format!("{:.1}", y))
        .y_desc("Improvement factor")
        .axis_desc_style(("sans-serif", FONT_SIZE).into_font())
        .draw()?;

    let half_width = BAR_WIDTH / 2.0;
    let corners = [(-half_width, 0.0), (half_width, speedup)];
    chart.plotting_area().draw(&Rectangle::new(
        corners,
        get_color_from_label("yellow")?.filled(),
    ))?;
    chart
        .plotting_area()
        .draw(&Rectangle::new(corners, BLACK.stroke_width(1)))?;

    // Anything below this line is a slowdown
    chart.plotting_area().draw(&PathElement::new(
        vec![(x_range.start, 1.0), (x_range.end, 1.0)],
        RED.mix(0.6).stroke_width(STROKE_WIDTH),
    ))?;

    chart.plotting_area().draw(&Text::new(
        format!("{:.3}x", speedup),
        (0.0, speedup / 2.0),
        TextStyle::from(
            ("sans-serif", FONT_SIZE + 10)
                .into_font()
                .style(FontStyle::Bold),
        )
        .pos(Pos::new(HPos::Center, VPos::Center)),
    ))?;

    let label = chart.plotting_area().map_coordinate(&(0.0, 0.0));
    draw_category_labels(root, &[("Speedup".to_string(), label)])?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_limit() {
        assert_eq!(y_limit(0.5), 1.0);
        assert_eq!(y_limit(0.8), 1.0);
        assert!((y_limit(2.0) - 2.1).abs() < 1e-9);
    }
}
