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
    clippy::nursery
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::inline_always
)]

use crypto_common::constant_time::ConstantTimeEq;
use crypto_common::engine::{Error, HashEngine};
use crypto_common::erase::Erase;

/// Keyed-hash message authentication code over any streaming hash engine
/// (RFC 2104).
///
/// Keys longer than the engine's block size are replaced by their digest;
/// shorter keys are zero-padded. Finalizing consumes the instance; re-keying
/// means building a new one.
#[derive(Clone)]
pub struct Hmac<E, const B: usize, const H: usize> {
    inner: E,
    outer: E,
}

impl<E, const B: usize, const H: usize> core::fmt::Debug for Hmac<E, B, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Hmac { ... }")
    }
}

impl<E: HashEngine<B, H>, const B: usize, const H: usize> Hmac<E, B, H> {
    #[must_use]
    pub fn new(key: &[u8]) -> Self {
        let mut pad = derive_key::<E, B, H>(key);
        for b in &mut pad {
            *b ^= 0x36;
        }
        let mut inner = E::default();
        inner.input(&pad);
        for b in &mut pad {
            *b ^= 0x36 ^ 0x5c;
        }
        let mut outer = E::default();
        outer.input(&pad);
        pad.erase();
        Self { inner, outer }
    }

    #[inline]
    pub fn update(&mut self, message: &[u8]) {
        self.inner.input(message);
    }

    pub fn finalize(mut self) -> Result<[u8; H], Error> {
        let inner_digest = self.inner.result()?;
        self.outer.input(&inner_digest);
        self.outer.result()
    }

    /// Compares the authenticator against `tag` without early exit on the
    /// first differing byte. A `tag` of the wrong length compares unequal.
    pub fn verify(self, tag: &[u8]) -> Result<bool, Error> {
        let digest = self.finalize()?;
        Ok(bool::from(digest.ct_eq(tag)))
    }

    pub fn calc(message: &[u8], key: &[u8]) -> Result<[u8; H], Error> {
        let mut mac = Self::new(key);
        mac.update(message);
        mac.finalize()
    }

    pub fn calc_into(message: &[u8], key: &[u8], out: &mut [u8]) -> Result<(), Error> {
        if out.len() != H {
            return Err(Error::InvalidLength {
                expected: H,
                got: out.len(),
            });
        }
        out.copy_from_slice(&Self::calc(message, key)?);
        Ok(())
    }

    pub fn calc_hex(message: &[u8], key: &[u8]) -> Result<String, Error> {
        Ok(to_hex(&Self::calc(message, key)?))
    }
}

fn derive_key<E: HashEngine<B, H>, const B: usize, const H: usize>(key: &[u8]) -> [u8; B] {
    let mut der_key = [0; B];
    if key.len() > B {
        der_key[..H].copy_from_slice(&E::digest(key));
    } else {
        der_key[..key.len()].copy_from_slice(key);
    }
    der_key
}

fn to_hex(bytes: &[u8]) -> String {
    const TABLE: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push(TABLE[(b >> 4) as usize] as char);
        out.push(TABLE[(b & 0xf) as usize] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use crypto_common::engine::Error;
    use sha1::Sha1;
    use sha256::Sha256;

    use super::Hmac;

    type HmacSha1 = Hmac<Sha1, 64, 20>;
    type HmacSha256 = Hmac<Sha256, 64, 32>;

    #[test]
    fn streaming_matches_one_shot() {
        let key = b"key";
        let message = b"The quick brown fox jumps over the lazy dog";
        let mut mac = HmacSha256::new(key);
        mac.update(&message[..10]);
        mac.update(&message[10..]);
        assert_eq!(
            mac.finalize().unwrap(),
            HmacSha256::calc(message, key).unwrap()
        );
    }

    #[test]
    fn known_answer() {
        assert_eq!(
            HmacSha1::calc_hex(b"what do ya want for nothing?", b"Jefe").unwrap(),
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"
        );
    }

    #[test]
    fn key_of_every_size_class() {
        // shorter than, equal to, and longer than the block size
        for key_len in [0, 3, 63, 64, 65, 200] {
            let key = vec![0x0b; key_len];
            let direct = HmacSha256::calc(b"data", &key).unwrap();
            let mut mac = HmacSha256::new(&key);
            mac.update(b"data");
            assert_eq!(mac.finalize().unwrap(), direct, "key length {key_len}");
        }
    }

    #[test]
    fn verify_accepts_and_rejects() {
        let tag = HmacSha256::calc(b"payload", b"secret").unwrap();

        let mut mac = HmacSha256::new(b"secret");
        mac.update(b"payload");
        assert!(mac.verify(&tag).unwrap());

        let mut forged = tag;
        forged[0] ^= 1;
        let mut mac = HmacSha256::new(b"secret");
        mac.update(b"payload");
        assert!(!mac.verify(&forged).unwrap());

        let mut mac = HmacSha256::new(b"secret");
        mac.update(b"payload");
        assert!(!mac.verify(&tag[..31]).unwrap());
    }

    #[test]
    fn calc_into_checks_the_slice() {
        let mut out = [0u8; 32];
        HmacSha256::calc_into(b"m", b"k", &mut out).unwrap();
        assert_eq!(out, HmacSha256::calc(b"m", b"k").unwrap());
        let mut short = [0u8; 31];
        assert_eq!(
            HmacSha256::calc_into(b"m", b"k", &mut short),
            Err(Error::InvalidLength {
                expected: 32,
                got: 31
            })
        );
    }

    #[test]
    fn empty_message_and_empty_key() {
        assert_eq!(
            HmacSha256::calc_hex(b"", b"").unwrap(),
            "b613679a0814d9ec772f95d778c35fc5ff1697c493715653c6c712144292c5ad"
        );
        let mac = HmacSha256::new(b"");
        assert_eq!(mac.finalize().unwrap(), HmacSha256::calc(b"", b"").unwrap());
    }
}
