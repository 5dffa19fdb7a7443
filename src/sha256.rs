//! One-call conveniences over the streaming [`Sha256`] engine.

use crate::HashEngine;

pub use ::sha256::{BLOCK_SIZE, HASH_SIZE, HASH_SIZE_BITS, Sha256};

#[must_use]
pub fn hash(input: &str) -> [u8; HASH_SIZE] {
    Sha256::digest(input.as_bytes())
}

/// Digest rendered as lowercase hex.
#[must_use]
pub fn hash_hex(input: &str) -> String {
    crate::hex::encode(&hash(input))
}

/// Digest rendered in standard base64.
#[must_use]
pub fn hash_base64(input: &str) -> String {
    crate::base64::encode(&hash(input))
}
