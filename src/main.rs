//! gradecurve CLI - adjust a score roster toward a normal distribution.

use clap::Parser;
use gradecurve::Error;
use gradecurve::cli::adjust::{self, AdjustOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gradecurve")]
#[command(
    version,
    about = "Adjust roster scores to a passing floor and a normal distribution",
    long_about = None
)]
struct Cli {
    /// Input workbook (.xls or .xlsx).
    #[arg(short, long)]
    name: Option<PathBuf>,

    /// Output workbook. Defaults to the input name with an `_adjusted` suffix.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file. Defaults to `~/.gradecurve/config.toml`.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log each adjusted record to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("GRADECURVE_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = AdjustOptions {
        input: cli.name,
        output: cli.output,
        config: cli.config,
    };

    match adjust::run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::InputMissing) => {
            println!("please specify the input file with -n <FILE>");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gradecurve: error: {e}");
            ExitCode::FAILURE
        }
    }
}
