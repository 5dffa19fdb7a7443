//! One-call conveniences over the streaming [`Sha1`] engine.

use crate::HashEngine;

pub use ::sha1::{BLOCK_SIZE, HASH_SIZE, HASH_SIZE_BITS, Sha1};

#[must_use]
pub fn hash(input: &str) -> [u8; HASH_SIZE] {
    Sha1::digest(input.as_bytes())
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
