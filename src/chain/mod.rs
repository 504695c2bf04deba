//! Chain identifiers

mod config;

pub use config::{chain_id_from_name, chain_ids};
