use anyhow::Result;
use speedup_report::{
    init_logging,
    plot::{Chart, OutputFormat},
    report::{self, Report, ReportArgs},
};
use std::fs;
use tempfile::tempdir;

mod common;

const SEQ_TOTALS: [u64; 10] = [812, 790, 845, 801, 799, 1020, 788, 805, 830, 797];
const SPEC_TOTALS: [u64; 10] = [420, 415, 460, 402, 399, 610, 410, 418, 425, 404];

fn report_args(format: OutputFormat) -> Result<(tempfile::TempDir, ReportArgs)> {
    let temp_dir = tempdir()?;
    let seq = common::write_metrics(temp_dir.path(), "metricas_seq.csv", "secuencial", &SEQ_TOTALS)?;
    let spec = common::write_metrics(
        temp_dir.path(),
        "metricas_spec.csv",
        "especulativo",
        &SPEC_TOTALS,
    )?;
    let out_dir = temp_dir.path().join("plots");

    Ok((
        temp_dir,
        ReportArgs {
            seq,
            spec,
            out_dir: Some(out_dir),
            format,
        },
    ))
}

#[test]
fn test_report_statistics() -> Result<()> {
    init_logging(true);
    let (_temp_dir, args) = report_args(OutputFormat::Png)?;

    let report = Report::load(&args.seq, &args.spec)?;
    let seq_mean = SEQ_TOTALS.iter().sum::<u64>() as f64 / SEQ_TOTALS.len() as f64;
    let spec_mean = SPEC_TOTALS.iter().sum::<u64>() as f64 / SPEC_TOTALS.len() as f64;

    assert!((report.seq_summary.mean - seq_mean).abs() < 1e-9);
    assert!((report.spec_summary.mean - spec_mean).abs() < 1e-9);
    assert!((report.speedup - seq_mean / spec_mean).abs() < 1e-9);
    assert!(report.speedup > 0.0);
    assert_eq!(report.seq.columns.len(), 14);

    Ok(())
}

#[test]
fn test_generate_png() -> Result<()> {
    init_logging(true);
    if !common::fonts_available() {
        return Ok(());
    }
    let (_temp_dir, args) = report_args(OutputFormat::Png)?;

    let plot_paths = report::generate(&args)?;
    assert_eq!(plot_paths.len(), 4);
    for (chart, path) in Chart::iter_variants().zip(plot_paths.iter()) {
        assert_eq!(
            path.file_name().and_then(|f| f.to_str()),
            Some(chart.file_name(&OutputFormat::Png).as_str())
        );
        assert!(fs::metadata(path)?.len() > 0, "empty plot: {}", path.display());
    }

    Ok(())
}

#[test]
fn test_generate_svg() -> Result<()> {
    init_logging(true);
    if !common::fonts_available() {
        return Ok(());
    }
    let (_temp_dir, args) = report_args(OutputFormat::Svg)?;

    let plot_paths = report::generate(&args)?;
    assert_eq!(plot_paths.len(), 4);
    for path in &plot_paths {
        let contents = fs::read_to_string(path)?;
        assert!(contents.contains("<svg"));
    }

    Ok(())
}

#[test]
fn test_generate_missing_input() -> Result<()> {
    init_logging(true);
    let (temp_dir, mut args) = report_args(OutputFormat::Png)?;
    args.spec = temp_dir.path().join("missing.csv");

    assert!(report::generate(&args).is_err());
    // Nothing is plotted when loading fails
    assert!(!temp_dir.path().join("plots").exists());

    Ok(())
}

#[test]
fn test_generate_without_run_index() -> Result<()> {
    init_logging(true);
    if !common::fonts_available() {
        return Ok(());
    }
    let (temp_dir, mut args) = report_args(OutputFormat::Png)?;
    args.spec = temp_dir.path().join("no_runs.csv");
    fs::write(&args.spec, "total_ms\n400\n410\n")?;

    // The evolution chart needs the run index, the charts before it do not
    assert!(report::generate(&args).is_err());
    let out_dir = temp_dir.path().join("plots");
    assert!(out_dir.join(Chart::Averages.file_name(&args.format)).exists());
    assert!(out_dir.join(Chart::Distribution.file_name(&args.format)).exists());
    assert!(!out_dir.join(Chart::Speedup.file_name(&args.format)).exists());

    Ok(())
}
