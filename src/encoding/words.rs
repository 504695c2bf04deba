//! 32-byte ABI word encoding for EIP-712 struct hashing
//!
//! Every value is one left-zero-padded big-endian word. Dynamic `bytes` are
//! represented by their Keccak-256 hash, which is already a word.

use alloy::primitives::{keccak256, Address, B256, U256};

use crate::types::Operation;

/// 12 zero bytes followed by the 20 address bytes
pub fn address_word(address: Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address.as_slice());
    word
}

/// Big-endian, zero padded on the left
pub fn uint_word(value: U256) -> [u8; 32] {
    value.to_be_bytes::<32>()
}

pub fn u8_word(value: u8) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[31] = value;
    word
}

/// `keccak256(data)`, used verbatim as the word for a `bytes` member
pub fn bytes_hash_word(data: &[u8]) -> [u8; 32] {
    keccak256(data).0
}

/// Append-only buffer of 32-byte words
#[derive(Debug, Default)]
pub struct WordEncoder {
    buf: Vec<u8>,
}

impl WordEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocates room for `words` words
    pub fn with_words(words: usize) -> Self {
        Self {
            buf: Vec::with_capacity(words * 32),
        }
    }

    pub fn push_word(&mut self, word: &B256) -> &mut Self {
        self.buf.extend_from_slice(word.as_slice());
        self
    }

    pub fn push_address(&mut self, address: Address) -> &mut Self {
        self.buf.extend_from_slice(&address_word(address));
        self
    }

    pub fn push_uint(&mut self, value: U256) -> &mut Self {
        self.buf.extend_from_slice(&uint_word(value));
        self
    }

    pub fn push_operation(&mut self, operation: Operation) -> &mut Self {
        self.buf.extend_from_slice(&u8_word(operation.as_u8()));
        self
    }

    pub fn push_bytes_hash(&mut self, data: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(&bytes_hash_word(data));
        self
    }

    /// Number of words written so far
    pub fn len(&self) -> usize {
        self.buf.len() / 32
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Keccak-256 of the concatenated words
    pub fn hash(&self) -> B256 {
        keccak256(&self.buf)
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
