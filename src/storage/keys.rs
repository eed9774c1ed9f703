use bip39::Mnemonic;
use bitcoin::bip32::{DerivationPath, Fingerprint, Xpriv, Xpub};
use bitcoin::key::rand::{self, RngCore};
use bitcoin::secp256k1::Secp256k1;
use bitcoin::Network;
use std::str::FromStr;

use crate::config::{account_path, WalletConfig, WitnessType};
use crate::error::WalletError;

pub struct KeyManager;

impl KeyManager {
    /// Generate a new random wallet with a mnemonic of `strength` bits of entropy
    pub fn generate(config: &WalletConfig) -> Result<WalletKeys, WalletError> {
        let strength = config.mnemonic_strength;
        if strength % 32 != 0 || !(128..=256).contains(&strength) {
            return Err(WalletError::InvalidMnemonic(format!(
                "unsupported mnemonic strength: {} bits",
                strength
            )));
        }

        let mut entropy = vec![0u8; strength / 8];
        rand::thread_rng().fill_bytes(&mut entropy);

        let mnemonic = Mnemonic::from_entropy(&entropy)?;

        Self::derive_keys(mnemonic, config.network, config.witness_type)
    }

    /// Import a wallet from an existing mnemonic phrase
    pub fn from_mnemonic(
        words: &str,
        network: Network,
        witness_type: WitnessType,
    ) -> Result<WalletKeys, WalletError> {
        let mnemonic = Mnemonic::parse(words)?;
        Self::derive_keys(mnemonic, network, witness_type)
    }

    /// Derive account keys and descriptor from a mnemonic
    fn derive_keys(
        mnemonic: Mnemonic,
        network: Network,
        witness_type: WitnessType,
    ) -> Result<WalletKeys, WalletError> {
        let secp = Secp256k1::new();

        let seed = mnemonic.to_seed("");

        let master_key = Xpriv::new_master(network, &seed)?;
        let fingerprint = master_key.fingerprint(&secp);

        let path_str = account_path(witness_type, network);
        let derivation_path = DerivationPath::from_str(&path_str)?;
        log::debug!("Deriving account key at {}", path_str);

        let account_key = master_key.derive_priv(&secp, &derivation_path)?;
        let xpub = Xpub::from_priv(&secp, &account_key);

        let descriptor = Self::create_descriptor(&xpub, fingerprint, witness_type, &path_str);

        Ok(WalletKeys {
            mnemonic,
            xpub,
            descriptor,
            fingerprint: fingerprint.to_string(),
            derivation_path: path_str,
            network,
            witness_type,
        })
    }

    /// Create a descriptor string for the receive and change chains of the account
    fn create_descriptor(
        xpub: &Xpub,
        fingerprint: Fingerprint,
        witness_type: WitnessType,
        path: &str,
    ) -> String {
        let origin = path.trim_start_matches("m/").replace('\'', "h");
        let key = format!("[{}/{}]{}/<0;1>/*", fingerprint, origin, xpub);
        match witness_type {
            WitnessType::Legacy => format!("pkh({})", key),
            WitnessType::P2shSegwit => format!("sh(wpkh({}))", key),
            WitnessType::Segwit => format!("wpkh({})", key),
        }
    }
}

pub struct WalletKeys {
    pub mnemonic: Mnemonic,
    pub xpub: Xpub,
    pub descriptor: String,
    pub fingerprint: String,
    pub derivation_path: String,
    pub network: Network,
    pub witness_type: WitnessType,
}
