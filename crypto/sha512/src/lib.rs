#![no_std]
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
#![allow(clippy::inline_always)]

mod compress;
mod consts;

use compress::compress;
use crypto_common::engine::{Error, HashEngine, Status};
use crypto_common::erase::Erase;

/// Bytes consumed per compression block.
pub const BLOCK_SIZE: usize = 128;
/// Bytes in a serialized digest.
pub const HASH_SIZE: usize = 64;
/// Digest width in bits.
pub const HASH_SIZE_BITS: usize = HASH_SIZE * 8;

type Block = crypto_common::blocks::Block<BLOCK_SIZE>;
type Buffer = crypto_common::blocks::Buffer<BLOCK_SIZE>;

// largest message the 128-bit length field can represent, with headroom for
// the buffered tail
const MAX_MESSAGE_BYTES: u128 = (u128::MAX >> 3) - BLOCK_SIZE as u128;

#[allow(missing_copy_implementations)]
#[derive(Clone)]
struct Core {
    state: [u64; 8],
    bytes: u128,
    overflow: bool,
}

impl Default for Core {
    fn default() -> Self {
        Self {
            state: consts::H,
            bytes: 0,
            overflow: false,
        }
    }
}

impl Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block]) {
        match self.bytes.checked_add((blocks.len() * BLOCK_SIZE) as u128) {
            Some(n) if n <= MAX_MESSAGE_BYTES => self.bytes = n,
            _ => self.overflow = true,
        }
        compress(&mut self.state, blocks);
    }

    #[inline]
    fn finalize(&mut self, buffer: &mut Buffer) {
        let bit_len = 8 * (buffer.pos() as u128 + self.bytes);
        buffer.len128_padding_be(bit_len, |b| {
            compress(&mut self.state, core::slice::from_ref(b));
        });
    }

    #[inline]
    fn serialize(&self) -> [u8; HASH_SIZE] {
        let mut out = [0; HASH_SIZE];
        for (chunk, v) in out.chunks_exact_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
        out
    }
}

/// Streaming SHA-512.
#[derive(Clone, Default)]
pub struct Sha512 {
    core: Core,
    buffer: Buffer,
    status: Status,
}

impl core::fmt::Debug for Sha512 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Sha512 { ... }")
    }
}

impl Sha512 {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HashEngine<BLOCK_SIZE, HASH_SIZE> for Sha512 {
    #[inline]
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn input(&mut self, data: &[u8]) {
        match self.status {
            Status::Streaming => {
                let Self { core, buffer, .. } = self;
                buffer.digest_blocks(data, |blocks| core.update_blocks(blocks));
                if core.overflow {
                    self.status = Status::Failed(Error::Corrupted);
                }
            }
            Status::Finalized => self.status = Status::Failed(Error::AlreadyFinalized),
            Status::Failed(_) => {}
        }
    }

    fn result(&mut self) -> Result<[u8; HASH_SIZE], Error> {
        match self.status {
            Status::Streaming => {
                let Self { core, buffer, .. } = self;
                core.finalize(buffer);
                buffer.erase();
                self.status = Status::Finalized;
                Ok(self.core.serialize())
            }
            Status::Finalized => Ok(self.core.serialize()),
            Status::Failed(e) => Err(e),
        }
    }

    #[inline]
    fn digest(data: &[u8]) -> [u8; HASH_SIZE] {
        let mut hasher = Core::default();
        let mut buffer = Buffer::default();
        buffer.digest_blocks(data, |b| hasher.update_blocks(b));
        debug_assert!(!hasher.overflow);
        hasher.finalize(&mut buffer);
        hasher.serialize()
    }
}
