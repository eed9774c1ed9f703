use bip39::Mnemonic;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::models::WalletRecord;
use crate::error::StorageError;

/// Extension of wallet record files
pub const WALLET_EXTENSION: &str = "wallet";

/// Suffix appended to the wallet name for its seed phrase file
pub const SEED_FILE_SUFFIX: &str = "_seed.txt";

/// First line of every seed file
pub const SEED_FILE_HEADER: &str = "Your Bitcoin Wallet Seed Phrase:";

#[derive(Clone, Debug)]
pub struct Storage {
    base_path: PathBuf,
}

impl Storage {
    /// Create a storage instance rooted at `base_path`
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the base directory path for wallet storage
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_path
    }

    /// Create the storage directory if needed
    ///
    /// A freshly created directory is restricted to the owner on Unix.
    pub fn ensure_base_dir(&self) -> Result<(), StorageError> {
        if self.base_path.is_dir() {
            return Ok(());
        }
        log::debug!("Creating wallet directory {}", self.base_path.display());
        fs::create_dir_all(&self.base_path)?;
        set_permissions(&self.base_path, 0o700)?;
        Ok(())
    }

    /// Path of the record file for a wallet
    pub fn wallet_file(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{}.{}", name, WALLET_EXTENSION))
    }

    /// Path of the plaintext seed phrase file for a wallet
    pub fn seed_file(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{}{}", name, SEED_FILE_SUFFIX))
    }

    /// Check if a wallet with the given name exists
    pub fn wallet_exists(&self, name: &str) -> bool {
        self.wallet_file(name).is_file()
    }

    pub fn seed_exists(&self, name: &str) -> bool {
        self.seed_file(name).is_file()
    }

    /// Save a wallet record to disk
    pub fn save_record(&self, record: &WalletRecord) -> Result<PathBuf, StorageError> {
        let path = self.wallet_file(&record.name);
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json)?;
        log::debug!("Wrote wallet record {}", path.display());
        Ok(path)
    }

    /// Load a wallet record from disk
    pub fn load_record(&self, name: &str) -> Result<WalletRecord, StorageError> {
        let path = self.wallet_file(name);
        if !path.exists() {
            return Err(StorageError::FileNotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        let record = serde_json::from_str(&contents)?;
        Ok(record)
    }

    /// Save the wallet's mnemonic phrase to its seed file
    ///
    /// The file holds the header line followed by the phrase, with no
    /// trailing newline, and is readable by the owner only on Unix. An
    /// existing seed file is never overwritten.
    pub fn save_seed_phrase(
        &self,
        name: &str,
        mnemonic: &Mnemonic,
    ) -> Result<PathBuf, StorageError> {
        let path = self.seed_file(name);
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        private_file_mode(&mut options);

        let mut file = options.open(&path)?;
        write!(file, "{}\n{}", SEED_FILE_HEADER, mnemonic)?;
        file.sync_all()?;
        log::debug!("Wrote seed file {}", path.display());
        Ok(path)
    }

    /// Remove a seed file written by an interrupted wallet creation
    pub fn remove_seed_file(&self, name: &str) -> Result<(), StorageError> {
        fs::remove_file(self.seed_file(name))?;
        Ok(())
    }

    /// Load the full seed file contents, trimmed of surrounding whitespace
    pub fn load_seed_phrase(&self, name: &str) -> Result<String, StorageError> {
        let path = self.seed_file(name);
        if !path.exists() {
            return Err(StorageError::FileNotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        Ok(contents.trim().to_string())
    }

    /// List all wallet names in the storage directory, sorted
    pub fn list_wallets(&self) -> Result<Vec<String>, StorageError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }
        if !self.base_path.is_dir() {
            return Err(StorageError::DirectoryNotFound(
                self.base_path.display().to_string(),
            ));
        }

        let mut wallets = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(WALLET_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_stem().and_then(|s| s.to_str()) {
                wallets.push(name.to_string());
            }
        }
        wallets.sort();
        Ok(wallets)
    }
}

#[cfg(unix)]
fn set_permissions(path: &Path, mode: u32) -> Result<(), StorageError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_permissions(_path: &Path, _mode: u32) -> Result<(), StorageError> {
    Ok(())
}

#[cfg(unix)]
fn private_file_mode(options: &mut OpenOptions) {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(0o600);
}

#[cfg(not(unix))]
fn private_file_mode(_options: &mut OpenOptions) {}
