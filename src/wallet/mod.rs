/// Wallet Core Module
///
/// - `wallet_ops.rs` - Wallet lifecycle operations
/// - `address_manager.rs` - Address derivation from account keys
/// - `types.rs` - Results returned to the command layer

pub mod address_manager;
pub mod types;
pub mod wallet_ops;

pub use address_manager::AddressManager;
pub use types::{CreatedWallet, SecretWords, WalletLocation, WalletSummary};
