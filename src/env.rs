use anyhow::{Context, Result};
use std::{env, path::PathBuf, sync::Once};

static INIT: Once = Once::new();

pub struct Env {}

impl Env {
    pub const DEFAULT_SEQ_CSV: &'static str = "metricas_seq.csv";
    pub const DEFAULT_SPEC_CSV: &'static str = "metricas_spec.csv";

    pub fn proj_root() -> Result<PathBuf> {
        env::current_dir().context("speedup-report: failed to get current directory")
    }

    /// Resolve the directory where charts are written. A relative path is
    /// taken from the current directory, and the directory is created if it
    /// does not exist yet.
    pub fn out_dir(requested: Option<&PathBuf>) -> Result<PathBuf> {
        let mut path = Self::proj_root()?;
        if let Some(requested) = requested {
            path.push(requested);
        }

        std::fs::create_dir_all(&path)
            .with_context(|| format!("failed to create output directory: {}", path.display()))?;

        Ok(path)
    }
}

pub fn init_logging(is_test: bool) {
    INIT.call_once(|| {
        let default_filter = if is_test {
            // In tests, be more chatty by default.
            "debug,speedup_report=debug"
        } else {
            "info"
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(default_filter),
        )
        .is_test(is_test)
        .try_init();
    });
}
