//! One-call conveniences over the streaming [`Md5`] engine.

use crate::HashEngine;

pub use ::md5::{BLOCK_SIZE, HASH_SIZE, HASH_SIZE_BITS, Md5};

#[must_use]
pub fn hash(input: &str) -> [u8; HASH_SIZE] {
    Md5::digest(input.as_bytes())
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
