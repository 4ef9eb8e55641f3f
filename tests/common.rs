use anyhow::Result;
use plotters::prelude::IntoFont;
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

pub const HEADER: &str = "modo,ejecucion,inicio_ms,fin_ms,total_ms,decision_ms,rama,rama_ms,\
                          otra_cancelada,detalle,traza,umbral,dificultad,maximo_primo";

/// Write a metrics file in the same shape the benchmark harness produces.
pub fn write_metrics(dir: &Path, name: &str, mode: &str, totals: &[u64]) -> Result<PathBuf> {
    let path = dir.join(name);
    let mut file = File::create(&path)?;
    writeln!(file, "{HEADER}")?;

    let mut start_ms: u64 = 1_700_000_000_000;
    for (run, total_ms) in (1..).zip(totals.iter()) {
        let end_ms = start_ms + total_ms;
        writeln!(
            file,
            "{mode},{run},{start_ms},{end_ms},{total_ms},3,A,{},true,00ab,4,5,4,20000",
            total_ms - 3
        )?;
        start_ms = end_ms + 10;
    }

    Ok(path)
}

/// Rendering text needs a system font. Containers without one cannot run
/// the plotting tests.
pub fn fonts_available() -> bool {
    ("sans-serif", 12).into_font().box_size("0").is_ok()
}
