use crate::report::Report;
use anyhow::Result;
use clap::ValueEnum;
use log::info;
use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};
use std::{
    fmt,
    path::{Path, PathBuf},
};

pub mod averages;
pub mod boxplot;
pub mod color;
pub mod evolution;
pub mod speedup;

pub static FONT_SIZE: i32 = 18;
pub static TITLE_FONT_SIZE: i32 = 24;
pub static STROKE_WIDTH: u32 = 2;

/// Fraction of a category slot covered by a bar.
pub const BAR_WIDTH: f64 = 0.8;

#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

/// The charts that make up a report, in the order they are generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chart {
    Averages,
    Distribution,
    Evolution,
    Speedup,
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chart::Averages => write!(f, "averages"),
            Chart::Distribution => write!(f, "distribution"),
            Chart::Evolution => write!(f, "evolution"),
            Chart::Speedup => write!(f, "speedup"),
        }
    }
}

impl Chart {
    pub fn iter_variants() -> std::slice::Iter<'static, Chart> {
        static VARIANTS: [Chart; 4] = [
            Chart::Averages,
            Chart::Distribution,
            Chart::Evolution,
            Chart::Speedup,
        ];
        VARIANTS.iter()
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            Chart::Averages => "grafico_promedios",
            Chart::Distribution => "grafico_boxplot",
            Chart::Evolution => "grafico_evolucion",
            Chart::Speedup => "grafico_speedup",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Chart::Averages => "comparison of mean total times",
            Chart::Distribution => "distribution of total times",
            Chart::Evolution => "total time per run",
            Chart::Speedup => "speedup",
        }
    }

    /// Canvas size in pixels.
    pub fn size(&self) -> (u32, u32) {
        match self {
            Chart::Averages | Chart::Distribution => (700, 500),
            Chart::Evolution => (800, 500),
            Chart::Speedup => (600, 400),
        }
    }

    pub fn file_name(&self, format: &OutputFormat) -> String {
        format!("{}.{}", self.file_stem(), format.extension())
    }
}

/// Render one chart of the report into `out_dir` and return the path of the
/// generated image.
pub fn render(
    chart: &Chart,
    report: &Report,
    format: &OutputFormat,
    out_dir: &Path,
) -> Result<PathBuf> {
    let plot_path = out_dir.join(chart.file_name(format));

    match format {
        OutputFormat::Png => {
            let root = BitMapBackend::new(&plot_path, chart.size()).into_drawing_area();
            draw(chart, report, &root)?;
        }
        OutputFormat::Svg => {
            let root = SVGBackend::new(&plot_path, chart.size()).into_drawing_area();
            draw(chart, report, &root)?;
        }
    }

    info!("generated plot at: {}", plot_path.display());
    Ok(plot_path)
}

fn draw<DB: DrawingBackend>(chart: &Chart, report: &Report, root: &DrawingArea<DB, Shift>) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    match chart {
        Chart::Averages => averages::draw(root, report)?,
        Chart::Distribution => boxplot::draw(root, report)?,
        Chart::Evolution => evolution::draw(root, report)?,
        Chart::Speedup => speedup::draw(root, report)?,
    }

    root.present()?;
    Ok(())
}

pub fn title_style() -> TextStyle<'static> {
    ("sans-serif", TITLE_FONT_SIZE).into_font().into()
}

/// Text style anchored at the given position, used for annotations.
pub fn anchored_style(size: i32, h_pos: HPos, v_pos: VPos) -> TextStyle<'static> {
    TextStyle::from(("sans-serif", size).into_font()).pos(Pos::new(h_pos, v_pos))
}

/// Draw category names below the x-axis. Positions are in pixels, taken
/// from the chart with `map_coordinate` at the foot of each category.
pub fn draw_category_labels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    labels: &[(String, (i32, i32))],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    for (label, (x, y)) in labels {
        root.draw(&Text::new(
            label.clone(),
            (*x, *y + 8),
            anchored_style(FONT_SIZE, HPos::Center, VPos::Top),
        ))?;
    }

    Ok(())
}

/// Axis range that covers `[min, max]` with some breathing room, never
/// degenerate and never below zero.
pub fn padded_range(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.1
    } else if max.abs() > 0.0 {
        max.abs() * 0.1
    } else {
        1.0
    };

    ((min - pad).max(0.0), max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let names: Vec<String> = Chart::iter_variants()
            .map(|c| c.file_name(&OutputFormat::Png))
            .collect();
        assert_eq!(
            names,
            vec![
                "grafico_promedios.png",
                "grafico_boxplot.png",
                "grafico_evolucion.png",
                "grafico_speedup.png",
            ]
        );
        assert_eq!(Chart::Speedup.file_name(&OutputFormat::Svg), "grafico_speedup.svg");
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range(100.0, 200.0), (90.0, 210.0));
        assert_eq!(padded_range(5.0, 200.0).0, 0.0);

        let (lo, hi) = padded_range(50.0, 50.0);
        assert!(lo < 50.0 && hi > 50.0);

        let (lo, hi) = padded_range(0.0, 0.0);
        assert_eq!((lo, hi), (0.0, 1.0));
    }
}
