use std::path::PathBuf;

use crate::error::WalletError;

/// Result of creating a wallet
#[derive(Debug, Clone)]
pub struct CreatedWallet {
    pub name: String,
    pub storage_dir: PathBuf,
    pub wallet_file: PathBuf,
    pub seed_file: PathBuf,
    pub mnemonic: String,
    pub address: String,
}

/// One entry in the wallet listing
///
/// A wallet whose record cannot be read keeps its error here instead of
/// failing the whole listing.
#[derive(Debug)]
pub struct WalletSummary {
    pub name: String,
    pub address: Result<String, WalletError>,
}

/// Seed phrase file contents together with the wallet's address
#[derive(Debug)]
pub struct SecretWords {
    pub seed_phrase: String,
    pub address: String,
}

/// Location of a wallet record and whether it is present
#[derive(Debug, Clone, PartialEq)]
pub struct WalletLocation {
    pub path: PathBuf,
    pub exists: bool,
}
