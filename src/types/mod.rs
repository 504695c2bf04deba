//! Value types for Safe transactions

pub mod address;
pub mod hash;
mod operation;
mod signature;
mod version;

pub use address::{
    address_from_slice, address_from_u256, checksummed, parse_address, parse_checksummed_address,
};
pub use hash::{hash_from_slice, parse_hash};
pub use operation::Operation;
pub use signature::{SafeSignature, SignatureKind};
pub use version::SafeVersion;
