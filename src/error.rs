//! Error types for wallet manager operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Wallet with name '{0}' already exists")]
    WalletExists(String),

    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("Invalid wallet name '{0}': {1}")]
    InvalidName(String, String),

    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Invalid wallet record for '{0}': {1}")]
    InvalidRecord(String, String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Bitcoin error: {0}")]
    Bitcoin(String),

    #[error("QR code error: {0}")]
    Qr(String),
}

impl WalletError {
    /// Errors raised by the wallet layer itself, as opposed to the
    /// filesystem or rendering around it
    pub fn is_wallet_error(&self) -> bool {
        matches!(
            self,
            WalletError::WalletExists(_)
                | WalletError::WalletNotFound(_)
                | WalletError::InvalidName(..)
                | WalletError::InvalidMnemonic(_)
                | WalletError::InvalidRecord(..)
                | WalletError::Bitcoin(_)
        )
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Wallet directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Could not determine home directory")]
    HomeDirUnavailable,
}

impl From<bitcoin::bip32::Error> for WalletError {
    fn from(e: bitcoin::bip32::Error) -> Self {
        WalletError::Bitcoin(e.to_string())
    }
}

impl From<bip39::Error> for WalletError {
    fn from(e: bip39::Error) -> Self {
        WalletError::InvalidMnemonic(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_classification() {
        assert!(WalletError::WalletExists("a".into()).is_wallet_error());
        assert!(WalletError::Bitcoin("bad key".into()).is_wallet_error());
        assert!(!WalletError::Qr("too long".into()).is_wallet_error());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!WalletError::from(StorageError::from(io)).is_wallet_error());
    }

    #[test]
    fn test_display_messages() {
        let err = WalletError::WalletExists("savings".into());
        assert_eq!(err.to_string(), "Wallet with name 'savings' already exists");

        let err = WalletError::from(StorageError::FileNotFound("/tmp/x".into()));
        assert_eq!(err.to_string(), "Storage error: File not found: /tmp/x");
    }
}
