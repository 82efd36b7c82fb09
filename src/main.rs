//! crombo - CR0M80's portfolio as a terminal application.

use crombo_portfolio::cli::Cli;
use crombo_portfolio::config::Config;
use crombo_portfolio::error::Result;
use crombo_portfolio::loader::Loader;
use crombo_portfolio::{logging, tui};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // The TUI owns the terminal, so it logs to a file; headless runs log to stderr
    if cli.is_headless() {
        logging::init_stderr_logging();
    } else {
        logging::init_file_logging();
    }

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("{}: {}", e.category(), e);
            eprintln!("{}: {}", e.category(), e.message());
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let mut config = Config::load_from_file(&config_path)?;
    cli.apply_overrides(&mut config);

    let loader = if cli.no_loader {
        Loader::instant(&config.loader)
    } else {
        Loader::from_config(&config.loader)
    };

    if cli.is_headless() {
        return tui::headless::run_headless(&cli, &config, loader).await;
    }

    tui::run_async(&config, loader).await?;
    Ok(0)
}
