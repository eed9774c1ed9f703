use bitcoin::bip32::{ChildNumber, Xpub};
use bitcoin::key::CompressedPublicKey;
use bitcoin::secp256k1::Secp256k1;
use bitcoin::{Address, Network};
use std::str::FromStr;

use crate::config::WitnessType;
use crate::error::WalletError;

/// Index of the external (receiving) chain below the account key
const RECEIVE_CHAIN: u32 = 0;

pub struct AddressManager;

impl AddressManager {
    /// Derive a receiving address from an account xpub at the specified index
    pub fn derive_address(
        xpub: &Xpub,
        witness_type: WitnessType,
        index: u32,
        network: Network,
    ) -> Result<Address, WalletError> {
        let secp = Secp256k1::new();

        let external_child = ChildNumber::from_normal_idx(RECEIVE_CHAIN)?;
        let child_number = ChildNumber::from_normal_idx(index)?;

        let derived_key = xpub.derive_pub(&secp, &[external_child, child_number])?;
        let compressed = CompressedPublicKey(derived_key.public_key);

        let address = match witness_type {
            WitnessType::Legacy => Address::p2pkh(compressed.pubkey_hash(), network),
            WitnessType::P2shSegwit => Address::p2shwpkh(&compressed, network),
            WitnessType::Segwit => Address::p2wpkh(&compressed, network),
        };

        Ok(address)
    }

    /// Parse a stored account xpub/tpub string
    pub fn parse_xpub(xpub: &str) -> Result<Xpub, WalletError> {
        Xpub::from_str(xpub.trim()).map_err(|e| WalletError::Bitcoin(e.to_string()))
    }
}
