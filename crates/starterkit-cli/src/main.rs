mod app;
mod cli;
mod clipboard;
mod error;
mod screen;
mod toast;

use std::process::ExitCode;

use clap::Parser;
use starterkit_core::config::AppConfig;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::toast::Toast;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", Toast::error(e.to_string()));
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config, cli.verbose);

    let result = app::App::new(config).and_then(|app| app.run(cli.command));
    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", Toast::error(e.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &cli::Cli) -> Result<AppConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }
    Ok(config)
}

/// `RUST_LOG` wins over the config filter; `--verbose` wins over both.
fn init_logging(config: &AppConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("starterkit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
