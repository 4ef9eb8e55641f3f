use crate::plot::color::get_color_from_label;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use log::{debug, error, info};
use plotters::prelude::RGBColor;
use serde::Deserialize;
use std::{fmt, path::Path};

/// Column holding the total wall-clock time of a run, in milliseconds.
pub const TOTAL_MS_COLUMN: &str = "total_ms";

/// Execution modes compared by the report. Each mode is loaded from its own
/// CSV file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Mode {
    Sequential,
    Speculative,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Sequential => write!(f, "Sequential"),
            Mode::Speculative => write!(f, "Speculative"),
        }
    }
}

impl Mode {
    pub fn iter_variants() -> std::slice::Iter<'static, Mode> {
        static VARIANTS: [Mode; 2] = [Mode::Sequential, Mode::Speculative];
        VARIANTS.iter()
    }

    pub fn id(&self) -> &'static str {
        match self {
            Mode::Sequential => "seq",
            Mode::Speculative => "spec",
        }
    }

    /// Fill colour for the bars and boxes of this mode.
    pub fn get_bar_color(&self) -> Result<RGBColor> {
        match self {
            Mode::Sequential => get_color_from_label("light-red"),
            Mode::Speculative => get_color_from_label("light-green"),
        }
    }

    /// Stroke colour for the per-run lines of this mode.
    pub fn get_line_color(&self) -> Result<RGBColor> {
        match self {
            Mode::Sequential => get_color_from_label("red"),
            Mode::Speculative => get_color_from_label("green"),
        }
    }
}

/// A single row of a metrics file. The benchmark harness writes many more
/// columns, but only these two are used here.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Record {
    #[serde(default)]
    pub ejecucion: Option<u32>,
    pub total_ms: f64,
}

#[derive(Debug)]
pub struct Dataset {
    pub mode: Mode,
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn from_path(mode: Mode, path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("failed to open metrics file: {}", path.display()))?;

        let columns: Vec<String> = reader
            .headers()
            .with_context(|| format!("failed to read header of: {}", path.display()))?
            .iter()
            .map(String::from)
            .collect();
        info!("{mode}: columns detected in {}: {columns:?}", path.display());

        if !columns.iter().any(|c| c == TOTAL_MS_COLUMN) {
            let reason = format!(
                "missing column '{TOTAL_MS_COLUMN}' (path={}, columns={columns:?})",
                path.display()
            );
            error!("{reason}");
            anyhow::bail!(reason);
        }

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: Record = result
                .with_context(|| format!("failed to parse record in: {}", path.display()))?;
            records.push(record);
        }
        debug!("{mode}: loaded {} runs from {}", records.len(), path.display());

        Ok(Self {
            mode,
            columns,
            records,
        })
    }

    pub fn totals(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.total_ms).collect()
    }

    /// Pairs of (run index, total time). Fails if the file has no run index.
    pub fn points(&self) -> Result<Vec<(u32, f64)>> {
        self.records
            .iter()
            .map(|r| match r.ejecucion {
                Some(run) => Ok((run, r.total_ms)),
                None => {
                    let reason = format!("{}: record without run index (ejecucion)", self.mode);
                    error!("{reason}");
                    anyhow::bail!(reason)
                }
            })
            .collect()
    }
}
