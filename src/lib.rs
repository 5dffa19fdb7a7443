//! Streaming MD5, SHA-1, SHA-256 and SHA-512 behind one engine contract,
//! HMAC over any of the four, and hex/base64 renderings of digests.
//!
//! Each algorithm module pairs its engine type with one-call conveniences
//! (`hash`, `hash_hex`, `hash_base64`). Byte-slice callers hash through
//! [`HashEngine::digest`] or feed an engine incrementally with
//! [`HashEngine::input`].

#![deny(
    dead_code,
    deprecated,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used
)]

pub mod base64;
mod hex;
pub mod md5;
pub mod sha1;
pub mod sha256;
pub mod sha512;

pub use crypto_common::engine::{Error, HashEngine};
pub use hmac::Hmac;

/// HMAC over MD5.
pub type HmacMd5 = Hmac<md5::Md5, 64, 16>;
/// HMAC over SHA-1.
pub type HmacSha1 = Hmac<sha1::Sha1, 64, 20>;
/// HMAC over SHA-256.
pub type HmacSha256 = Hmac<sha256::Sha256, 64, 32>;
/// HMAC over SHA-512.
pub type HmacSha512 = Hmac<sha512::Sha512, 128, 64>;
