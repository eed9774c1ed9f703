#![allow(dead_code)]

/// Common test utilities for wallet manager integration tests
///
/// Provides a temporary storage directory and a manager bound to it, so
/// tests never touch the real wallet directory.

use std::path::PathBuf;
use tempfile::TempDir;
use wallet_manager::storage::Storage;
use wallet_manager::{CommandOutcome, WalletConfig, WalletManager, WitnessType};

pub const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

/// Test environment with automatic cleanup
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub manager: WalletManager,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self::with_config(WalletConfig::default())
    }

    pub fn with_witness_type(witness_type: WitnessType) -> Self {
        Self::with_config(WalletConfig {
            witness_type,
            ..Default::default()
        })
    }

    pub fn with_config(config: WalletConfig) -> Self {
        init_logger();
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage_dir = temp_dir.path().join("wallets");
        log::debug!("Test storage directory: {:?}", storage_dir);

        let config = WalletConfig {
            storage_dir: storage_dir.clone(),
            ..config
        };
        let manager = WalletManager::new(config);

        Self { temp_dir, manager }
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.temp_dir.path().join("wallets")
    }

    pub fn storage(&self) -> &Storage {
        &self.manager.storage
    }

    /// Run one command and capture what it printed
    pub fn run(&self, action: Option<wallet_manager::Action>) -> (CommandOutcome, String) {
        let mut out = Vec::new();
        let outcome = wallet_manager::commands::run(action, &self.manager, &mut out)
            .expect("writing to a Vec cannot fail");
        (outcome, String::from_utf8(out).expect("output is UTF-8"))
    }
}

pub fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}
