//! Well-known chain IDs for Safe deployments

/// Well-known chain IDs
pub mod chain_ids {
    pub const MAINNET: u64 = 1;
    pub const SEPOLIA: u64 = 11155111;
    pub const ARBITRUM: u64 = 42161;
    pub const OPTIMISM: u64 = 10;
    pub const BASE: u64 = 8453;
    pub const POLYGON: u64 = 137;
    pub const BSC: u64 = 56;
    pub const AVALANCHE: u64 = 43114;
    pub const GNOSIS: u64 = 100;
}

/// Looks up a chain ID by its common name, case-insensitively
pub fn chain_id_from_name(name: &str) -> Option<u64> {
    let id = match name.trim().to_lowercase().as_str() {
        "mainnet" | "ethereum" => chain_ids::MAINNET,
        "sepolia" => chain_ids::SEPOLIA,
        "arbitrum" => chain_ids::ARBITRUM,
        "optimism" => chain_ids::OPTIMISM,
        "base" => chain_ids::BASE,
        "polygon" | "matic" => chain_ids::POLYGON,
        "bsc" => chain_ids::BSC,
        "avalanche" => chain_ids::AVALANCHE,
        "gnosis" | "xdai" => chain_ids::GNOSIS,
        _ => return None,
    };
    Some(id)
}
