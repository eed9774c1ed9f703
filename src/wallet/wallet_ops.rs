/// Wallet lifecycle operations
///
/// Handles wallet creation, loading, listing and address lookup.
use super::address_manager::AddressManager;
use super::types::{CreatedWallet, SecretWords, WalletLocation, WalletSummary};
use crate::config::{network_name, parse_network, WalletConfig};
use crate::error::WalletError;
use crate::storage::{KeyManager, Storage, WalletRecord};
use chrono::Utc;

/// Reject names that would escape the storage directory or produce odd files
pub fn validate_wallet_name(name: &str) -> Result<(), WalletError> {
    let invalid = |reason: &str| -> Result<(), WalletError> {
        Err(WalletError::InvalidName(name.to_string(), reason.to_string()))
    };

    if name.trim().is_empty() {
        return invalid("name cannot be empty");
    }
    if name.contains('/') || name.contains('\\') {
        return invalid("name cannot contain path separators");
    }
    if name.contains('\0') {
        return invalid("name cannot contain NUL bytes");
    }
    if name == "." || name == ".." {
        return invalid("name cannot be a relative directory");
    }
    Ok(())
}

/// Create a new wallet with a generated mnemonic and store its seed phrase
pub fn create_wallet(
    storage: &Storage,
    config: &WalletConfig,
    name: &str,
) -> Result<CreatedWallet, WalletError> {
    validate_wallet_name(name)?;

    storage.ensure_base_dir()?;

    // an orphan seed file blocks the name too
    if storage.wallet_exists(name) || storage.seed_exists(name) {
        return Err(WalletError::WalletExists(name.to_string()));
    }

    let keys = KeyManager::generate(config)?;

    let record = WalletRecord {
        name: name.to_string(),
        network: network_name(keys.network).to_string(),
        witness_type: keys.witness_type,
        created_at: Utc::now(),
        fingerprint: keys.fingerprint.clone(),
        derivation_path: keys.derivation_path.clone(),
        account_xpub: keys.xpub.to_string(),
        descriptor: keys.descriptor.clone(),
    };
    let seed_file = storage.save_seed_phrase(name, &keys.mnemonic)?;

    let wallet_file = match storage.save_record(&record) {
        Ok(path) => path,
        Err(e) => {
            if let Err(cleanup) = storage.remove_seed_file(name) {
                log::warn!("Could not remove seed file of '{}': {}", name, cleanup);
            }
            return Err(e.into());
        }
    };
    log::info!("Wallet '{}' created at {}", name, wallet_file.display());

    let address =
        AddressManager::derive_address(&keys.xpub, keys.witness_type, 0, keys.network)?;

    Ok(CreatedWallet {
        name: name.to_string(),
        storage_dir: storage.base_dir().clone(),
        wallet_file,
        seed_file,
        mnemonic: keys.mnemonic.to_string(),
        address: address.to_string(),
    })
}

/// Load a wallet record by name
pub fn load_wallet(storage: &Storage, name: &str) -> Result<WalletRecord, WalletError> {
    validate_wallet_name(name)?;
    if !storage.wallet_exists(name) {
        return Err(WalletError::WalletNotFound(name.to_string()));
    }
    let record = storage.load_record(name)?;
    if record.name != name {
        log::warn!(
            "Wallet file for '{}' carries name '{}'",
            name,
            record.name
        );
    }
    Ok(record)
}

/// Receiving address at index 0 for a stored wallet
pub fn primary_address(record: &WalletRecord) -> Result<String, WalletError> {
    let network = parse_network(&record.network)
        .map_err(|e| WalletError::InvalidRecord(record.name.clone(), e))?;
    let xpub = AddressManager::parse_xpub(&record.account_xpub)?;
    let address = AddressManager::derive_address(&xpub, record.witness_type, 0, network)?;
    Ok(address.to_string())
}

/// Address of a wallet looked up by name
pub fn wallet_address(storage: &Storage, name: &str) -> Result<String, WalletError> {
    let record = load_wallet(storage, name)?;
    primary_address(&record)
}

/// List all wallets with their addresses
pub fn list_wallets(storage: &Storage) -> Result<Vec<WalletSummary>, WalletError> {
    let names = storage.list_wallets()?;
    let summaries = names
        .into_iter()
        .map(|name| {
            let address = wallet_address(storage, &name);
            if let Err(ref e) = address {
                log::debug!("Address lookup failed for '{}': {}", name, e);
            }
            WalletSummary { name, address }
        })
        .collect();
    Ok(summaries)
}

/// Read back the seed file of a wallet, if one exists
pub fn retrieve_secret_words(
    storage: &Storage,
    name: &str,
) -> Result<Option<SecretWords>, WalletError> {
    validate_wallet_name(name)?;
    if !storage.seed_exists(name) {
        return Ok(None);
    }
    let seed_phrase = storage.load_seed_phrase(name)?;
    let address = wallet_address(storage, name)?;
    Ok(Some(SecretWords {
        seed_phrase,
        address,
    }))
}

/// Expected location of a wallet's record file
pub fn wallet_location(storage: &Storage, name: &str) -> Result<WalletLocation, WalletError> {
    validate_wallet_name(name)?;
    let path = storage.wallet_file(name);
    let exists = path.is_file();
    Ok(WalletLocation { path, exists })
}
