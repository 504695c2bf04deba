use alloy::primitives::B256;
use color_eyre::eyre::{eyre, Result};

use crate::cli::WalletArgs;

pub fn private_key(args: &WalletArgs) -> Result<B256> {
    // Priority: interactive > private_key
    if args.interactive {
        let key = rpassword::prompt_password("Enter private key: ")?;
        parse_private_key(&key)
    } else if let Some(private_key) = &args.private_key {
        parse_private_key(private_key)
    } else {
        Err(eyre!("No wallet specified. Use --private-key or --interactive"))
    }
}

fn parse_private_key(key: &str) -> Result<B256> {
    let key = key.trim();
    let key = key.strip_prefix("0x").unwrap_or(key);

    key.parse::<B256>()
        .map_err(|_| eyre!("Invalid private key: expected 32 bytes of hex"))
}
