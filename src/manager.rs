/// Wallet Manager - Orchestration Layer
///
/// Holds the resolved configuration and storage, and delegates every
/// command to the wallet lifecycle operations.
use crate::config::WalletConfig;
use crate::error::WalletError;
use crate::storage::Storage;
use crate::wallet::{
    wallet_ops::{
        create_wallet, list_wallets, retrieve_secret_words, wallet_address, wallet_location,
    },
    CreatedWallet, SecretWords, WalletLocation, WalletSummary,
};

pub struct WalletManager {
    pub config: WalletConfig,
    pub storage: Storage,
}

impl WalletManager {
    pub fn new(config: WalletConfig) -> Self {
        let storage = Storage::new(config.storage_dir.clone());
        Self { config, storage }
    }

    pub fn storage_dir(&self) -> &std::path::PathBuf {
        self.storage.base_dir()
    }

    pub fn create_wallet(&self, name: &str) -> Result<CreatedWallet, WalletError> {
        create_wallet(&self.storage, &self.config, name)
    }

    pub fn list_wallets(&self) -> Result<Vec<WalletSummary>, WalletError> {
        list_wallets(&self.storage)
    }

    pub fn wallet_address(&self, name: &str) -> Result<String, WalletError> {
        wallet_address(&self.storage, name)
    }

    pub fn secret_words(&self, name: &str) -> Result<Option<SecretWords>, WalletError> {
        retrieve_secret_words(&self.storage, name)
    }

    pub fn wallet_path(&self, name: &str) -> Result<WalletLocation, WalletError> {
        wallet_location(&self.storage, name)
    }
}
