use clap::Parser;
use speedup_report::{
    init_logging,
    report::{self, ReportArgs},
};

#[derive(Parser)]
#[command(about = "Compare sequential and speculative benchmark runs")]
struct Cli {
    #[command(flatten)]
    report_args: ReportArgs,
}

fn main() -> anyhow::Result<()> {
    init_logging(false);
    let cli = Cli::parse();

    report::generate(&cli.report_args)?;

    Ok(())
}
