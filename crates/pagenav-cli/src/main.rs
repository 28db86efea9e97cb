//! Pagenav CLI
//!
//! Main entry point for the `pagenav` binary.

use std::process::ExitCode;

use clap::Parser;
use pagenav_cli::{Cli, CliError};
use pagenav_common_config::Environment;
use pagenav_common_log::{LogConfig, LogLevel};
use tracing::error;

/// Application exit codes
#[repr(u8)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    // .env values must be visible before clap reads PAGENAV_CONFIG
    if let Err(e) = Environment::init() {
        eprintln!("warning: {e}");
    }

    let cli = Cli::parse();
    init_logging(&cli);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to create Tokio runtime: {e}");
            return Exit::GeneralError.into();
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => Exit::Success.into(),
        Err(e) => {
            error!(code = e.code(), "{e}");
            eprintln!("error[{}]: {e}", e.code());
            if let Some(hint) = e.hint() {
                eprintln!("hint: {hint}");
            }
            e.exit_code()
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.load_config()?;
    cli.execute(config).await
}

fn init_logging(cli: &Cli) {
    let mut config = LogConfig::from_env();
    if cli.verbose > 0 || cli.quiet {
        config = config.with_level(LogLevel::from_verbosity(cli.verbose, cli.quiet));
    }

    if let Err(e) = pagenav_common_log::init(config) {
        eprintln!("warning: {e}");
    }
}
