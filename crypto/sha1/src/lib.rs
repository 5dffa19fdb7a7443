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
use crypto_common::blocks::{Block as Block_, Buffer as Buffer_};
use crypto_common::engine::{Error, HashEngine, Status};
use crypto_common::erase::Erase;

/// Bytes consumed per compression block.
pub const BLOCK_SIZE: usize = 64;
/// Bytes in a serialized digest.
pub const HASH_SIZE: usize = 20;
/// Digest width in bits.
pub const HASH_SIZE_BITS: usize = HASH_SIZE * 8;

type Block = Block_<BLOCK_SIZE>;
type Buffer = Buffer_<BLOCK_SIZE>;

const MAX_MESSAGE_BYTES: u64 = (u64::MAX >> 3) - BLOCK_SIZE as u64;

#[allow(missing_copy_implementations)]
#[derive(Clone)]
struct Core {
    state: [u32; 5],
    bytes: u64,
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
        match self.bytes.checked_add((blocks.len() * BLOCK_SIZE) as u64) {
            Some(n) if n <= MAX_MESSAGE_BYTES => self.bytes = n,
            _ => self.overflow = true,
        }
        compress(&mut self.state, blocks);
    }

    #[inline]
    fn finalize(&mut self, buffer: &mut Buffer) {
        let bit_len = 8 * (buffer.pos() as u64 + self.bytes);
        buffer.len64_padding_be(bit_len, |b| {
            compress(&mut self.state, core::slice::from_ref(b));
        });
    }

    #[inline]
    fn serialize(&self) -> [u8; HASH_SIZE] {
        let mut out = [0; HASH_SIZE];
        for (chunk, v) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
        out
    }
}

/// Streaming SHA-1.
#[derive(Clone, Default)]
pub struct Sha1 {
    core: Core,
    buffer: Buffer,
    status: Status,
}

impl core::fmt::Debug for Sha1 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Sha1 { ... }")
    }
}

impl Sha1 {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HashEngine<BLOCK_SIZE, HASH_SIZE> for Sha1 {
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
