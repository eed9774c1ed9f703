//! Wallet Manager: create, list and inspect Bitcoin HD wallets from the command line
//!
//! Mnemonic generation and key derivation are done by the `bip39` and
//! `bitcoin` crates; this crate wires them to a small on-disk layout and a
//! flag-driven CLI.
//!
//! # Storage layout
//!
//! - `<storage_dir>/<name>.wallet` - JSON record with the account xpub
//! - `<storage_dir>/<name>_seed.txt` - plaintext mnemonic with a header line
//!
//! # Example
//!
//! ```no_run
//! use wallet_manager::{WalletConfig, WalletManager};
//!
//! let config = WalletConfig::from_env()?;
//! let manager = WalletManager::new(config);
//!
//! let created = manager.create_wallet("MyWallet")?;
//! println!("Address: {}", created.address);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod manager;
pub mod qr;
pub mod storage;
pub mod wallet;

pub use cli::{Action, Cli};
pub use commands::CommandOutcome;
pub use config::{ConfigOverrides, WalletConfig, WitnessType};
pub use error::{StorageError, WalletError};
pub use manager::WalletManager;
pub use storage::{Storage, WalletRecord};

// Common result type
pub type Result<T> = std::result::Result<T, WalletError>;
