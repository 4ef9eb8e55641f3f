use crate::{
    env::Env,
    metrics::{Dataset, Mode},
    plot::{self, Chart, OutputFormat},
    stats::{self, Summary},
};
use anyhow::Result;
use clap::Args;
use log::{debug, info};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// CSV file with the sequential runs
    #[arg(long, default_value = Env::DEFAULT_SEQ_CSV)]
    pub seq: PathBuf,
    /// CSV file with the speculative runs
    #[arg(long, default_value = Env::DEFAULT_SPEC_CSV)]
    pub spec: PathBuf,
    /// Directory to write the charts to (defaults to the current directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Image format of the charts
    #[arg(long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,
}

/// Both datasets together with the statistics derived from them.
#[derive(Debug)]
pub struct Report {
    pub seq: Dataset,
    pub spec: Dataset,
    pub seq_summary: Summary,
    pub spec_summary: Summary,
    pub speedup: f64,
}

impl Report {
    pub fn load(seq_path: &Path, spec_path: &Path) -> Result<Self> {
        let seq = Dataset::from_path(Mode::Sequential, seq_path)?;
        let spec = Dataset::from_path(Mode::Speculative, spec_path)?;
        Self::from_datasets(seq, spec)
    }

    pub fn from_datasets(seq: Dataset, spec: Dataset) -> Result<Self> {
        let seq_summary = Summary::from_samples(&seq.totals())?;
        let spec_summary = Summary::from_samples(&spec.totals())?;
        debug!("{}: {seq_summary:?}", seq.mode);
        debug!("{}: {spec_summary:?}", spec.mode);

        let speedup = stats::speedup(seq_summary.mean, spec_summary.mean)?;

        Ok(Self {
            seq,
            spec,
            seq_summary,
            spec_summary,
            speedup,
        })
    }

    pub fn dataset(&self, mode: &Mode) -> &Dataset {
        match mode {
            Mode::Sequential => &self.seq,
            Mode::Speculative => &self.spec,
        }
    }

    pub fn summary(&self, mode: &Mode) -> &Summary {
        match mode {
            Mode::Sequential => &self.seq_summary,
            Mode::Speculative => &self.spec_summary,
        }
    }

    pub fn improvement_pct(&self) -> f64 {
        stats::improvement_pct(self.speedup)
    }

    pub fn columns_line(&self) -> String {
        format!("Columns detected: {:?}", self.seq.columns)
    }

    pub fn print_averages(&self) {
        println!("{}", self.columns_line());
        println!("Sequential mean : {:.2} ms", self.seq_summary.mean);
        println!("Speculative mean: {:.2} ms", self.spec_summary.mean);
        println!("Speedup: {:.3}x", self.speedup);
    }

    pub fn print_summaries(&self) {
        println!();
        println!(
            "{:<12} {:>6} {:>12} {:>12} {:>12} {:>12}",
            "mode", "runs", "mean", "median", "min", "max"
        );
        for mode in Mode::iter_variants() {
            let s = self.summary(mode);
            println!(
                "{:<12} {:>6} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
                mode.id(),
                s.runs,
                s.mean,
                s.median,
                s.min,
                s.max
            );
        }
    }
}

/// Load both datasets, print their statistics, and write every chart. Returns
/// the paths of the generated images in generation order.
pub fn generate(args: &ReportArgs) -> Result<Vec<PathBuf>> {
    let report = Report::load(&args.seq, &args.spec)?;
    report.print_averages();
    report.print_summaries();

    let out_dir = Env::out_dir(args.out_dir.as_ref())?;
    info!("writing charts to: {}", out_dir.display());

    let mut plot_paths = Vec::new();
    for chart in Chart::iter_variants() {
        plot_paths.push(plot::render(chart, &report, &args.format, &out_dir)?);
    }

    println!("\nCharts generated:");
    for chart in Chart::iter_variants() {
        println!(
            "- {:<24} {}",
            chart.file_name(&args.format),
            chart.description()
        );
    }
    println!(
        "\nSpeedup: {:.3}x ({:.2}% improvement)",
        report.speedup,
        report.improvement_pct()
    );

    Ok(plot_paths)
}
