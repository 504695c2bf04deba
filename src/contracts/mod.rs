//! Safe contract ABI and EIP-712 type hashes
//!
//! The type hashes are embedded as literals; the tests below recompute them
//! from their type strings.

use alloy::primitives::{b256, B256};
use alloy::sol;

sol! {
    /// Safe singleton entry point, identical across v0.1.0 - v1.4.1
    interface ISafe {
        /// Execute a transaction (requires valid signatures)
        function execTransaction(
            address to,
            uint256 value,
            bytes calldata data,
            uint8 operation,
            uint256 safeTxGas,
            uint256 baseGas,
            uint256 gasPrice,
            address gasToken,
            address payable refundReceiver,
            bytes memory signatures
        ) external payable returns (bool success);
    }
}

/// EIP-712 type hash for the SafeTx struct, used for the binary encoding of every version
/// keccak256("SafeTx(address to,uint256 value,bytes data,uint8 operation,uint256 safeTxGas,uint256 baseGas,uint256 gasPrice,address gasToken,address refundReceiver,uint256 nonce)")
pub const SAFE_TX_TYPEHASH: B256 =
    b256!("0xbb8310d486368db6bd6f849402fdd73ad53d316b5a4b2644ad6efe0f941286d8");

/// Type hash of the pre-1.0.0 schema that named the sixth field `dataGas`.
/// Only what an external signer derives from the legacy typed-data export.
/// keccak256("SafeTx(address to,uint256 value,bytes data,uint8 operation,uint256 safeTxGas,uint256 dataGas,uint256 gasPrice,address gasToken,address refundReceiver,uint256 nonce)")
pub const LEGACY_SAFE_TX_TYPEHASH: B256 =
    b256!("0x14d461bc7412367e924637b363c7bf29b8f47e2f84869f4426e5633d8af47b20");

/// EIP-712 domain type hash for Safe >= 1.3.0
/// keccak256("EIP712Domain(uint256 chainId,address verifyingContract)")
pub const DOMAIN_SEPARATOR_TYPEHASH: B256 =
    b256!("0x47e79534a245952e8b16893a336b85a3d9ea9fa8c573f3d803afb92a79469218");

/// EIP-712 domain type hash for Safe < 1.3.0
/// keccak256("EIP712Domain(address verifyingContract)")
pub const LEGACY_DOMAIN_SEPARATOR_TYPEHASH: B256 =
    b256!("0x035aff83d86937d35b32e04f0ddc6ff469290eef2f1b692d8a815c89404d4749");
