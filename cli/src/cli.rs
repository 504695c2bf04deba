use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "safe-tx")]
#[command(about = "Offline hashing and signing of Safe transactions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the domain separator, struct hash and safeTxHash
    Hash(TxArgs),

    /// Sign the safeTxHash with an owner key
    Sign(SignArgs),

    /// Recover the owner address from a signature
    Recover(RecoverArgs),

    /// Print the EIP-712 typed data for external signers
    TypedData(TxArgs),
}

/// The Safe a transaction belongs to
#[derive(Args, Clone)]
pub struct SafeArgs {
    /// Safe contract address
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// Safe singleton version (e.g. 1.3.0, 1.4.1+L2)
    #[arg(long, env = "SAFE_VERSION", default_value = "1.3.0")]
    pub safe_version: String,

    /// Chain id or well-known chain name (mainnet, gnosis, ...)
    #[arg(long, env = "CHAIN_ID", default_value = "1")]
    pub chain: String,
}

/// Transaction fields, given explicitly or as a transaction-service payload
#[derive(Args, Clone)]
pub struct TxArgs {
    #[command(flatten)]
    pub safe: SafeArgs,

    /// Path to a transaction details JSON file (client gateway format).
    /// Every transaction field comes from the file.
    #[arg(long, conflicts_with = "to")]
    pub details: Option<String>,

    /// Target address
    #[arg(long, required_unless_present = "details")]
    pub to: Option<String>,

    /// Value in wei (decimal or 0x hex)
    #[arg(long, default_value = "0", conflicts_with = "details")]
    pub value: String,

    /// Calldata as hex
    #[arg(long, default_value = "0x", conflicts_with = "details")]
    pub data: String,

    /// Operation: 0 = Call, 1 = DelegateCall
    #[arg(long, default_value_t = 0, conflicts_with = "details")]
    pub operation: u8,

    #[arg(long, default_value = "0", conflicts_with = "details")]
    pub safe_tx_gas: String,

    /// Base gas (`dataGas` before Safe 1.0.0)
    #[arg(long, default_value = "0", conflicts_with = "details")]
    pub base_gas: String,

    #[arg(long, default_value = "0", conflicts_with = "details")]
    pub gas_price: String,

    /// Refund token (zero address for the native coin)
    #[arg(long, conflicts_with = "details")]
    pub gas_token: Option<String>,

    #[arg(long, conflicts_with = "details")]
    pub refund_receiver: Option<String>,

    /// Safe nonce
    #[arg(long, default_value = "0", conflicts_with = "details")]
    pub nonce: String,
}

#[derive(Parser, Clone)]
pub struct SignArgs {
    #[command(flatten)]
    pub tx: TxArgs,

    /// Refuse to sign unless the computed safeTxHash equals this one
    #[arg(long)]
    pub expected_hash: Option<String>,

    /// Produce an eth_sign signature (v = 31/32) instead of a plain one
    #[arg(long)]
    pub eth_sign: bool,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct RecoverArgs {
    /// The signed hash
    #[arg(long)]
    pub hash: String,

    /// 65-byte signature as hex
    #[arg(long)]
    pub signature: String,
}

#[derive(Args, Clone)]
pub struct WalletArgs {
    /// Raw private key
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Prompt for private key interactively
    #[arg(short, long)]
    pub interactive: bool,
}
