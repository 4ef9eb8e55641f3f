use crate::{
    metrics::Mode,
    plot::{
        color::get_color_from_label, draw_category_labels, padded_range, title_style, FONT_SIZE,
        STROKE_WIDTH,
    },
    report::Report,
    stats::{percentile_of_sorted, sorted},
};
use anyhow::Result;
use log::error;
use plotters::{coord::Shift, prelude::*};

/// Box and whiskers of a sample. Whiskers reach the most extreme samples
/// within 1.5 IQR of the box; anything further out is an outlier.
#[derive(Debug, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_lo: f64,
    pub whisker_hi: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            error!("cannot draw a boxplot of an empty dataset");
            anyhow::bail!("cannot draw a boxplot of an empty dataset");
        }

        let sorted = sorted(samples);
        let q1 = percentile_of_sorted(&sorted, 0.25);
        let median = percentile_of_sorted(&sorted, 0.5);
        let q3 = percentile_of_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let lower_fence = q1 - 1.5 * iqr;
        let upper_fence = q3 + 1.5 * iqr;

        let inside = samples
            .iter()
            .copied()
            .filter(|s| *s >= lower_fence && *s <= upper_fence);
        let whisker_lo = inside.clone().fold(f64::INFINITY, f64::min).min(q1);
        let whisker_hi = inside.fold(f64::NEG_INFINITY, f64::max).max(q3);
        let outliers = samples
            .iter()
            .copied()
            .filter(|s| *s < whisker_lo || *s > whisker_hi)
            .collect();

        Ok(Self {
            q1,
            median,
            q3,
            whisker_lo,
            whisker_hi,
            outliers,
        })
    }

    fn min(&self) -> f64 {
        self.outliers.iter().copied().fold(self.whisker_lo, f64::min)
    }

    fn max(&self) -> f64 {
        self.outliers.iter().copied().fold(self.whisker_hi, f64::max)
    }
}

/// Boxplot of the total times of both modes side by side.
pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, report: &Report) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let mut boxes = Vec::new();
    for mode in Mode::iter_variants() {
        boxes.push((*mode, BoxStats::from_samples(&report.dataset(mode).totals())?));
    }

    let y_min = boxes.iter().map(|(_, b)| b.min()).fold(f64::INFINITY, f64::min);
    let y_max = boxes.iter().map(|(_, b)| b.max()).fold(f64::NEG_INFINITY, f64::max);
    let (y_lo, y_hi) = padded_range(y_min, y_max);

    let seq_runs = report.summary(&Mode::Sequential).runs;
    let spec_runs = report.summary(&Mode::Speculative).runs;
    let title = if seq_runs == spec_runs {
        format!("Distribution of total times ({seq_runs} runs)")
    } else {
        format!("Distribution of total times ({seq_runs}/{spec_runs} runs)")
    };

    let mut chart = ChartBuilder::on(root)
        .caption(title, title_style())
        .x_label_area_size(40)
        .y_label_area_size(80)
        .margin(15)
        .build_cartesian_2d(-0.5f64..(boxes.len() as f64 - 0.5), y_lo..y_hi)?;

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

    let box_fill = get_color_from_label("light-blue")?;
    let half_width = 0.25;
    let cap_width = half_width / 2.0;
    for (x, (_, stats)) in (0..).zip(boxes.iter()) {
        let x = x as f64;
        let area = chart.plotting_area();

        // Whiskers and their caps
        for (end, cap) in [(stats.q1, stats.whisker_lo), (stats.q3, stats.whisker_hi)] {
            area.draw(&PathElement::new(vec![(x, end), (x, cap)], BLACK))?;
            area.draw(&PathElement::new(
                vec![(x - cap_width, cap), (x + cap_width, cap)],
                BLACK,
            ))?;
        }

        // Inter-quartile box
        let corners = [(x - half_width, stats.q1), (x + half_width, stats.q3)];
        area.draw(&Rectangle::new(corners, box_fill.filled()))?;
        area.draw(&Rectangle::new(corners, BLACK.stroke_width(1)))?;

        area.draw(&PathElement::new(
            vec![(x - half_width, stats.median), (x + half_width, stats.median)],
            RED.stroke_width(STROKE_WIDTH),
        ))?;

        for y in &stats.outliers {
            area.draw(&Circle::new((x, *y), 4, BLACK.stroke_width(1)))?;
        }
    }

    let labels: Vec<(String, (i32, i32))> = (0..)
        .zip(boxes.iter())
        .map(|(x, (mode, _))| {
            (
                mode.to_string(),
                chart.plotting_area().map_coordinate(&(x as f64, y_lo)),
            )
        })
        .collect();
    draw_category_labels(root, &labels)?;

    Ok(())
}
