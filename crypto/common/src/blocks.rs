pub type Block<const N: usize> = [u8; N];

/// One-block byte window with encapsulated position bookkeeping.
///
/// Full blocks that never need buffering are handed to the compression
/// callback straight from caller memory; only the unconsumed tail is copied
/// in. The position can never advance past capacity.
#[allow(missing_copy_implementations)]
#[derive(Clone, Debug)]
pub struct Buffer<const N: usize> {
    buffer: Block<N>,
    // block sizes in this workspace fit a byte
    pos: u8,
}

impl<const N: usize> Default for Buffer<N> {
    fn default() -> Self {
        Self {
            buffer: [0; N],
            pos: 0,
        }
    }
}

impl<const N: usize> Buffer<N> {
    #[inline]
    pub fn digest_blocks(&mut self, mut input: &[u8], mut compress: impl FnMut(&[Block<N>])) {
        let pos = self.pos();
        let rem = N - pos;
        let n = input.len();
        if n < rem {
            self.buffer[pos..][..n].copy_from_slice(input);
            self.set_pos(pos + n);
            return;
        }
        if pos != 0 {
            let (left, right) = input.split_at(rem);
            input = right;
            self.buffer[pos..].copy_from_slice(left);
            compress(core::slice::from_ref(&self.buffer));
        }
        let (blocks, tail) = input.as_chunks::<N>();
        if !blocks.is_empty() {
            compress(blocks);
        }
        self.buffer[..tail.len()].copy_from_slice(tail);
        self.set_pos(tail.len());
    }

    #[inline(always)]
    #[must_use]
    pub fn pos(&self) -> usize {
        usize::from(self.pos)
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    fn set_pos(&mut self, pos: usize) {
        debug_assert!(pos < N);
        self.pos = pos as u8;
    }

    #[inline]
    pub fn len64_padding_be(&mut self, bit_len: u64, mut compress: impl FnMut(&Block<N>)) {
        let pos = self.pos();
        self.buffer[pos] = 0x80;
        self.buffer[pos + 1..].fill(0);
        if N - pos - 1 < 8 {
            compress(&self.buffer);
            let mut block = [0; N];
            block[N - 8..].copy_from_slice(&bit_len.to_be_bytes());
            compress(&block);
        } else {
            self.buffer[N - 8..].copy_from_slice(&bit_len.to_be_bytes());
            compress(&self.buffer);
        }
        self.set_pos(0);
    }

    #[inline]
    pub fn len64_padding_le(&mut self, bit_len: u64, mut compress: impl FnMut(&Block<N>)) {
        let pos = self.pos();
        self.buffer[pos] = 0x80;
        self.buffer[pos + 1..].fill(0);
        if N - pos - 1 < 8 {
            compress(&self.buffer);
            let mut block = [0; N];
            block[N - 8..].copy_from_slice(&bit_len.to_le_bytes());
            compress(&block);
        } else {
            self.buffer[N - 8..].copy_from_slice(&bit_len.to_le_bytes());
            compress(&self.buffer);
        }
        self.set_pos(0);
    }

    #[inline]
    pub fn len128_padding_be(&mut self, bit_len: u128, mut compress: impl FnMut(&Block<N>)) {
        let pos = self.pos();
        self.buffer[pos] = 0x80;
        self.buffer[pos + 1..].fill(0);
        if N - pos - 1 < 16 {
            compress(&self.buffer);
            let mut block = [0; N];
            block[N - 16..].copy_from_slice(&bit_len.to_be_bytes());
            compress(&block);
        } else {
            self.buffer[N - 16..].copy_from_slice(&bit_len.to_be_bytes());
            compress(&self.buffer);
        }
        self.set_pos(0);
    }
}

impl<const N: usize> super::erase::Erase for Buffer<N> {
    fn erase(&mut self) {
        self.buffer.erase();
        self.pos.erase();
    }
}
