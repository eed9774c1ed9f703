use bitcoin::Network;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::{parse_network, ConfigOverrides, WitnessType};

const EPILOG: &str = "Example usage:
  wallet-manager --create MyNewWallet
  wallet-manager --list
  wallet-manager --retrieve MyNewWallet
  wallet-manager --path MyNewWallet";

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    after_help = EPILOG
)]
pub struct Cli {
    /// Create a new wallet with the specified name.
    /// Example: wallet-manager --create MyWallet
    #[arg(long, value_name = "WALLET_NAME")]
    pub create: Option<String>,

    /// List all existing wallets without QR code.
    /// Example: wallet-manager --list
    #[arg(long)]
    pub list: bool,

    /// Retrieve the mnemonic (secret words) for the specified wallet and show QR code.
    /// Example: wallet-manager --retrieve MyWallet
    #[arg(long, value_name = "WALLET_NAME")]
    pub retrieve: Option<String>,

    /// Print the file path to the specified wallet.
    /// Example: wallet-manager --path MyWallet
    #[arg(long, value_name = "WALLET_NAME")]
    pub path: Option<String>,

    /// Bitcoin network for new wallets (bitcoin, testnet, signet, regtest)
    #[arg(long, value_name = "NETWORK", value_parser = parse_network)]
    pub network: Option<Network>,

    /// Wallet storage directory (overrides WALLET_STORAGE_DIR)
    #[arg(long, value_name = "DIR")]
    pub wallet_dir: Option<PathBuf>,

    /// Address type for new wallets
    #[arg(long, value_enum, value_name = "TYPE")]
    pub witness_type: Option<WitnessType>,
}

/// The single command a run of the tool performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create(String),
    List,
    Retrieve(String),
    Path(String),
}

impl Cli {
    /// Pick the command to run: create, then list, then retrieve, then path
    ///
    /// An empty wallet name counts as not given.
    pub fn action(&self) -> Option<Action> {
        let named = |value: &Option<String>| value.as_ref().filter(|s| !s.is_empty()).cloned();

        if let Some(name) = named(&self.create) {
            Some(Action::Create(name))
        } else if self.list {
            Some(Action::List)
        } else if let Some(name) = named(&self.retrieve) {
            Some(Action::Retrieve(name))
        } else {
            named(&self.path).map(Action::Path)
        }
    }

    /// Flag values that override environment configuration
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            network: self.network,
            storage_dir: self.wallet_dir.clone(),
            witness_type: self.witness_type,
        }
    }
}

/// Full help text, as printed when no command is given
pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}
