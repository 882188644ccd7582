use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use reportkit_monthly::convert_to_report;

/// Build the monthly activity report from a month export workbook.
#[derive(Debug, Parser)]
#[command(name = "reportkit-monthly", version)]
struct Cli {
    /// Source workbook containing a month sheet (e.g. `Мар25`).
    #[arg(value_hint = clap::ValueHint::FilePath)]
    source: PathBuf,

    /// Report workbook to write; replaced if it exists.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    destination: PathBuf,

    /// Log pipeline details at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let c_default_filter = if cli.verbose {
        "error,reportkit=debug"
    } else {
        "error,reportkit=info"
    };
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("REPORTKIT_LOG", c_default_filter))
        .init();

    let outcome = convert_to_report(&cli.source, &cli.destination).with_context(|| {
        format!(
            "failed to build report from {} into {}",
            cli.source.display(),
            cli.destination.display()
        )
    })?;

    println!("{outcome}");
    Ok(())
}
