/// Wallet configuration from environment variables and CLI flags
///
/// Controls the Bitcoin network, the wallet storage directory and the
/// address type used for new wallets. Defaults to mainnet native segwit.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use bitcoin::Network;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Storage directory relative to the user's home directory
pub const DEFAULT_STORAGE_SUBDIR: &str = ".wallet-manager/wallets";

/// BIP39 entropy size for generated mnemonics (24 words)
pub const MNEMONIC_STRENGTH: usize = 256;

/// Address script family of a wallet's receiving chain
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WitnessType {
    /// P2PKH addresses, BIP44
    Legacy,
    /// P2WPKH nested in P2SH, BIP49
    P2shSegwit,
    /// Native P2WPKH addresses, BIP84
    Segwit,
}

impl WitnessType {
    /// BIP43 purpose field for this address type
    pub fn purpose(&self) -> u32 {
        match self {
            WitnessType::Legacy => 44,
            WitnessType::P2shSegwit => 49,
            WitnessType::Segwit => 84,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WitnessType::Legacy => "legacy",
            WitnessType::P2shSegwit => "p2sh-segwit",
            WitnessType::Segwit => "segwit",
        }
    }
}

impl fmt::Display for WitnessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WitnessType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" | "p2pkh" => Ok(WitnessType::Legacy),
            "p2sh-segwit" | "p2sh_segwit" | "p2sh-p2wpkh" => Ok(WitnessType::P2shSegwit),
            "segwit" | "p2wpkh" => Ok(WitnessType::Segwit),
            other => Err(format!("unknown witness type '{}'", other)),
        }
    }
}

/// Parse a network name as accepted on the command line and in `BITCOIN_NETWORK`
pub fn parse_network(s: &str) -> Result<Network, String> {
    match s.trim().to_lowercase().as_str() {
        "bitcoin" | "mainnet" | "main" => Ok(Network::Bitcoin),
        "testnet" | "testnet3" => Ok(Network::Testnet),
        "signet" => Ok(Network::Signet),
        "regtest" => Ok(Network::Regtest),
        other => Err(format!(
            "unknown network '{}', expected one of: bitcoin, testnet, signet, regtest",
            other
        )),
    }
}

/// Canonical name stored in wallet records
pub fn network_name(network: Network) -> &'static str {
    match network {
        Network::Bitcoin => "bitcoin",
        Network::Testnet => "testnet",
        Network::Signet => "signet",
        Network::Regtest => "regtest",
        _ => "testnet",
    }
}

/// Values passed on the command line; each one wins over its environment variable
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub network: Option<Network>,
    pub storage_dir: Option<PathBuf>,
    pub witness_type: Option<WitnessType>,
}

#[derive(Clone, Debug)]
pub struct WalletConfig {
    /// Bitcoin network for new wallets
    pub network: Network,
    /// Directory holding wallet records and seed files
    pub storage_dir: PathBuf,
    /// Address type for new wallets
    pub witness_type: WitnessType,
    /// Mnemonic entropy in bits
    pub mnemonic_strength: usize,
}

impl WalletConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `BITCOIN_NETWORK`: "bitcoin" (default), "testnet", "signet" or "regtest"
    /// - `WALLET_STORAGE_DIR`: wallet directory (default `~/.wallet-manager/wallets`)
    /// - `WALLET_WITNESS_TYPE`: "segwit" (default), "p2sh-segwit" or "legacy"
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Keep test wallets apart from real ones
    /// BITCOIN_NETWORK=testnet WALLET_STORAGE_DIR=/tmp/wallets wallet-manager --list
    /// ```
    pub fn from_env() -> Result<Self, StorageError> {
        Self::load(ConfigOverrides::default())
    }

    /// Load configuration from the environment, then apply CLI overrides
    pub fn load(overrides: ConfigOverrides) -> Result<Self, StorageError> {
        Self::from_lookup(|key| env::var(key).ok(), overrides)
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F, overrides: ConfigOverrides) -> Result<Self, StorageError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = match overrides.network {
            Some(network) => network,
            None => match lookup("BITCOIN_NETWORK") {
                Some(value) if !value.trim().is_empty() => parse_network(&value).unwrap_or_else(|e| {
                    log::warn!("{}, defaulting to bitcoin", e);
                    Network::Bitcoin
                }),
                _ => Network::Bitcoin,
            },
        };

        let witness_type = match overrides.witness_type {
            Some(witness_type) => witness_type,
            None => match lookup("WALLET_WITNESS_TYPE") {
                Some(value) if !value.trim().is_empty() => value.parse().unwrap_or_else(|e| {
                    log::warn!("{}, defaulting to segwit", e);
                    WitnessType::Segwit
                }),
                _ => WitnessType::Segwit,
            },
        };

        let storage_dir = match overrides.storage_dir {
            Some(dir) => dir,
            None => match lookup("WALLET_STORAGE_DIR") {
                Some(value) if !value.trim().is_empty() => PathBuf::from(value),
                _ => default_storage_dir()?,
            },
        };

        log::debug!(
            "Config: network={}, witness_type={}, storage_dir={}",
            network_name(network),
            witness_type,
            storage_dir.display()
        );

        Ok(Self {
            network,
            storage_dir,
            witness_type,
            mnemonic_strength: MNEMONIC_STRENGTH,
        })
    }

    /// Get the BIP44 coin type for this network
    ///
    /// - Mainnet: 0
    /// - Testnet/Signet/Regtest: 1
    pub fn coin_type(&self) -> u32 {
        coin_type(self.network)
    }

    /// Get the account derivation path for new wallets
    ///
    /// Returns e.g. "m/84'/0'/0'" for mainnet segwit, "m/44'/1'/0'" for testnet legacy
    pub fn derivation_path(&self) -> String {
        account_path(self.witness_type, self.network)
    }
}

impl Default for WalletConfig {
    /// Default configuration (mainnet, native segwit, ./wallets)
    fn default() -> Self {
        Self {
            network: Network::Bitcoin,
            storage_dir: PathBuf::from("./wallets"),
            witness_type: WitnessType::Segwit,
            mnemonic_strength: MNEMONIC_STRENGTH,
        }
    }
}

pub fn coin_type(network: Network) -> u32 {
    match network {
        Network::Bitcoin => 0,
        _ => 1, // All test networks use coin type 1
    }
}

pub fn account_path(witness_type: WitnessType, network: Network) -> String {
    format!("m/{}'/{}'/0'", witness_type.purpose(), coin_type(network))
}

/// Return the default wallet storage directory under the user's home
pub fn default_storage_dir() -> Result<PathBuf, StorageError> {
    let home = dirs::home_dir().ok_or(StorageError::HomeDirUnavailable)?;
    Ok(home.join(DEFAULT_STORAGE_SUBDIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_is_mainnet_segwit() {
        let config = WalletConfig::default();
        assert_eq!(config.network, Network::Bitcoin);
        assert_eq!(config.witness_type, WitnessType::Segwit);
        assert_eq!(config.mnemonic_strength, 256);
    }

    #[test]
    fn test_coin_type() {
        let mainnet = WalletConfig::default();
        assert_eq!(mainnet.coin_type(), 0);

        let signet_config = WalletConfig {
            network: Network::Signet,
            ..Default::default()
        };
        assert_eq!(signet_config.coin_type(), 1);

        let regtest_config = WalletConfig {
            network: Network::Regtest,
            ..Default::default()
        };
        assert_eq!(regtest_config.coin_type(), 1);
    }

    #[test]
    fn test_derivation_path_per_witness_type() {
        let mut config = WalletConfig::default();
        assert_eq!(config.derivation_path(), "m/84'/0'/0'");

        config.witness_type = WitnessType::Legacy;
        assert_eq!(config.derivation_path(), "m/44'/0'/0'");

        config.witness_type = WitnessType::P2shSegwit;
        config.network = Network::Testnet;
        assert_eq!(config.derivation_path(), "m/49'/1'/0'");
    }

    #[test]
    fn test_env_values_are_read() {
        let lookup = lookup_from(&[
            ("BITCOIN_NETWORK", "Signet"),
            ("WALLET_STORAGE_DIR", "/tmp/wallet-manager-test"),
            ("WALLET_WITNESS_TYPE", "legacy"),
        ]);
        let config = WalletConfig::from_lookup(lookup, ConfigOverrides::default()).unwrap();
        assert_eq!(config.network, Network::Signet);
        assert_eq!(config.witness_type, WitnessType::Legacy);
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/wallet-manager-test"));
    }

    #[test]
    fn test_unknown_env_values_fall_back() {
        let lookup = lookup_from(&[
            ("BITCOIN_NETWORK", "dogecoin"),
            ("WALLET_STORAGE_DIR", "/tmp/w"),
            ("WALLET_WITNESS_TYPE", "taproot"),
        ]);
        let config = WalletConfig::from_lookup(lookup, ConfigOverrides::default()).unwrap();
        assert_eq!(config.network, Network::Bitcoin);
        assert_eq!(config.witness_type, WitnessType::Segwit);
    }

    #[test]
    fn test_overrides_win_over_env() {
        let lookup = lookup_from(&[
            ("BITCOIN_NETWORK", "signet"),
            ("WALLET_STORAGE_DIR", "/tmp/from-env"),
        ]);
        let overrides = ConfigOverrides {
            network: Some(Network::Regtest),
            storage_dir: Some(PathBuf::from("/tmp/from-flag")),
            witness_type: Some(WitnessType::P2shSegwit),
        };
        let config = WalletConfig::from_lookup(lookup, overrides).unwrap();
        assert_eq!(config.network, Network::Regtest);
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/from-flag"));
        assert_eq!(config.witness_type, WitnessType::P2shSegwit);
    }

    #[test]
    fn test_parse_network_names() {
        assert_eq!(parse_network("mainnet"), Ok(Network::Bitcoin));
        assert_eq!(parse_network(" TESTNET "), Ok(Network::Testnet));
        assert!(parse_network("litecoin").is_err());
        assert_eq!(network_name(Network::Regtest), "regtest");
    }

    #[test]
    fn test_witness_type_round_trip_names() {
        for wt in [WitnessType::Legacy, WitnessType::P2shSegwit, WitnessType::Segwit] {
            assert_eq!(wt.as_str().parse::<WitnessType>(), Ok(wt));
        }
        assert_eq!("p2wpkh".parse::<WitnessType>(), Ok(WitnessType::Segwit));
    }
}
