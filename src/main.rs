use clap::Parser;
use std::io;
use std::process::ExitCode;

use wallet_manager::commands::{self, CommandOutcome};
use wallet_manager::{Cli, WalletConfig, WalletManager};

fn main() -> anyhow::Result<ExitCode> {
    // Pick up BITCOIN_NETWORK / WALLET_STORAGE_DIR from a local .env if present
    dotenv::dotenv().ok();

    // Logs go to stderr; set RUST_LOG=debug to trace storage and derivation steps
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = WalletConfig::load(cli.overrides())?;
    let manager = WalletManager::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = commands::run(cli.action(), &manager, &mut out)?;

    Ok(match outcome {
        CommandOutcome::Success => ExitCode::SUCCESS,
        CommandOutcome::Failed => ExitCode::FAILURE,
    })
}
