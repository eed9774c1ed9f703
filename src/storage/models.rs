//! Data models for wallet storage

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::WitnessType;

/// Contents of a `<name>.wallet` file
///
/// Holds only public key material; the mnemonic lives in the seed file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletRecord {
    pub name: String,
    pub network: String,
    pub witness_type: WitnessType,
    pub created_at: DateTime<Utc>,
    pub fingerprint: String,
    pub derivation_path: String,
    pub account_xpub: String,
    pub descriptor: String,
}
