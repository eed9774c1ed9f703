//! Storage and persistence layer
//!
//! - File system layout (wallet records, seed files)
//! - Key management
//! - Data models

mod file_system;
mod keys;
mod models;

pub use file_system::{Storage, SEED_FILE_HEADER, SEED_FILE_SUFFIX, WALLET_EXTENSION};
pub use keys::{KeyManager, WalletKeys};
pub use models::WalletRecord;
