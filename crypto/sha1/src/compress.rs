use crate::{consts, Block};

#[inline(always)]
const fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
const fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
const fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

fn compress_block(state: &mut [u32; 5], block: &Block) {
    let mut w = [0u32; 80];
    let (words, _) = block.as_chunks::<4>();
    for (wi, chunk) in w.iter_mut().zip(words.iter()) {
        *wi = u32::from_be_bytes(*chunk);
    }
    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, wi) in w.iter().enumerate() {
        let f = match i {
            0..=19 => ch(b, c, d),
            20..=39 | 60..=79 => parity(b, c, d),
            _ => maj(b, c, d),
        };
        let t = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(consts::K[i / 20])
            .wrapping_add(*wi);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = t;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

pub fn compress(state: &mut [u32; 5], blocks: &[Block]) {
    for block in blocks {
        compress_block(state, block);
    }
}
