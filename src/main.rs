// src/main.rs — chatgate entry point

use clap::Parser;

use chatgate::api::{self, AppState};
use chatgate::cli::Cli;
use chatgate::infra::config::Config;
use chatgate::infra::logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging (respects RUST_LOG)
    logger::init_logging(&cli.log_level);

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load config (falls back to defaults if no config.toml), then .env / env vars
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?.with_process_env()
    } else {
        Config::load()?
    };
    let config = cli.apply_overrides(config);

    let state = AppState::from_config(&config)?;
    api::start_server(&config, state).await
}
