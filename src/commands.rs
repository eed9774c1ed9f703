//! User-facing commands
//!
//! Each command prints its result to the given writer. Failures are caught
//! here and printed as a line of text; the returned [`CommandOutcome`] lets
//! the binary pick an exit status.

use std::io::{self, Write};

use crate::cli::{help_text, Action};
use crate::error::WalletError;
use crate::manager::WalletManager;
use crate::qr::render_qr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    Failed,
}

/// Run one action, or print the help text when there is none
pub fn run<W: Write>(
    action: Option<Action>,
    manager: &WalletManager,
    out: &mut W,
) -> io::Result<CommandOutcome> {
    match action {
        Some(Action::Create(name)) => create_wallet(manager, &name, out),
        Some(Action::List) => list_wallets(manager, out),
        Some(Action::Retrieve(name)) => retrieve_secret_words(manager, &name, out),
        Some(Action::Path(name)) => print_wallet_path(manager, &name, out),
        None => {
            writeln!(out, "{}", help_text())?;
            Ok(CommandOutcome::Success)
        }
    }
}

/// Create a new wallet with a mnemonic and store its seed phrase
pub fn create_wallet<W: Write>(
    manager: &WalletManager,
    name: &str,
    out: &mut W,
) -> io::Result<CommandOutcome> {
    if let Err(e) = manager.storage.ensure_base_dir() {
        writeln!(out, "Unexpected error: {}", e)?;
        return Ok(CommandOutcome::Failed);
    }
    writeln!(out, "Wallets directory: {}", manager.storage_dir().display())?;

    match manager.create_wallet(name) {
        Ok(created) => {
            writeln!(out, "Wallet created: {}", created.name)?;
            writeln!(
                out,
                "Seed phrase stored securely in '{}'.",
                created.seed_file.display()
            )?;
            writeln!(out, "Address: {}", created.address)?;
            Ok(CommandOutcome::Success)
        }
        Err(e) if e.is_wallet_error() => {
            writeln!(out, "Error creating wallet: {}", e)?;
            Ok(CommandOutcome::Failed)
        }
        Err(e) => {
            writeln!(out, "Unexpected error: {}", e)?;
            Ok(CommandOutcome::Failed)
        }
    }
}

/// List all existing wallets without showing QR codes
pub fn list_wallets<W: Write>(manager: &WalletManager, out: &mut W) -> io::Result<CommandOutcome> {
    let wallets = match manager.list_wallets() {
        Ok(wallets) => wallets,
        Err(e) => {
            writeln!(out, "Error listing wallets: {}", e)?;
            return Ok(CommandOutcome::Failed);
        }
    };

    if wallets.is_empty() {
        writeln!(out, "No wallets found.")?;
        return Ok(CommandOutcome::Success);
    }

    writeln!(out, "Existing wallets:")?;
    for wallet in wallets {
        match wallet.address {
            Ok(address) => writeln!(out, "- {}: {}", wallet.name, address)?,
            Err(e) => writeln!(
                out,
                "  Unable to retrieve address for wallet '{}': {}",
                wallet.name, e
            )?,
        }
    }
    Ok(CommandOutcome::Success)
}

/// Print the seed phrase of a wallet and a QR code of its address
pub fn retrieve_secret_words<W: Write>(
    manager: &WalletManager,
    name: &str,
    out: &mut W,
) -> io::Result<CommandOutcome> {
    match secret_words_with_qr(manager, name) {
        Ok(Some((seed_phrase, address, qr))) => {
            writeln!(out, "Mnemonic (secret words) for wallet '{}':\n{}", name, seed_phrase)?;
            writeln!(out, "Public address: {}", address)?;
            writeln!(out, "{}", qr)?;
            Ok(CommandOutcome::Success)
        }
        Ok(None) => {
            writeln!(
                out,
                "No seed file found for wallet '{}'. The wallet might not have been created with a mnemonic.",
                name
            )?;
            Ok(CommandOutcome::Success)
        }
        Err(e) => {
            writeln!(out, "Unexpected error: {}", e)?;
            Ok(CommandOutcome::Failed)
        }
    }
}

fn secret_words_with_qr(
    manager: &WalletManager,
    name: &str,
) -> Result<Option<(String, String, String)>, WalletError> {
    let Some(words) = manager.secret_words(name)? else {
        return Ok(None);
    };
    let qr = render_qr(&words.address)?;
    Ok(Some((words.seed_phrase, words.address, qr)))
}

/// Print the file path to a specific wallet
pub fn print_wallet_path<W: Write>(
    manager: &WalletManager,
    name: &str,
    out: &mut W,
) -> io::Result<CommandOutcome> {
    match manager.wallet_path(name) {
        Ok(location) if location.exists => {
            writeln!(out, "Path to wallet '{}': {}", name, location.path.display())?;
            Ok(CommandOutcome::Success)
        }
        Ok(location) => {
            writeln!(
                out,
                "Wallet '{}' does not exist at the expected location: {}",
                name,
                location.path.display()
            )?;
            Ok(CommandOutcome::Success)
        }
        Err(e) => {
            writeln!(out, "Unexpected error: {}", e)?;
            Ok(CommandOutcome::Failed)
        }
    }
}
