use anyhow::Result;
use log::error;

/// Arithmetic mean of a set of samples.
pub fn mean(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        error!("cannot compute the mean of an empty dataset");
        anyhow::bail!("cannot compute the mean of an empty dataset");
    }

    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Ratio between the mean sequential time and the mean speculative time.
/// Values above 1 mean the speculative run is faster.
pub fn speedup(seq_mean: f64, spec_mean: f64) -> Result<f64> {
    if spec_mean <= 0.0 || !spec_mean.is_finite() {
        let reason = format!("speculative mean must be positive (mean={spec_mean})");
        error!("{reason}");
        anyhow::bail!(reason);
    }

    Ok(seq_mean / spec_mean)
}

/// Percentage gain of the speculative mode over the sequential one.
pub fn improvement_pct(speedup: f64) -> f64 {
    (speedup - 1.0) * 100.0
}

/// Copy of the samples in ascending order.
pub fn sorted(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_owned();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}

/// Value at fraction `p` of an ascending, non-empty sample, interpolating
/// linearly at rank `(n - 1) * p`.
pub fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    let rank = (sorted.len() - 1) as f64 * p;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    sorted[lower] + (sorted[upper] - sorted[lower]) * (rank - lower as f64)
}

/// Descriptive statistics of one dataset, printed alongside the charts.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub runs: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        let mean = mean(samples)?;

        let sorted = sorted(samples);
        let n = sorted.len();
        let median = percentile_of_sorted(&sorted, 0.5);

        Ok(Self {
            runs: n,
            mean,
            median,
            min: sorted[0],
            max: sorted[n - 1],
        })
    }
}
