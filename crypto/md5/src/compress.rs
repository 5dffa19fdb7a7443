use crate::{consts, Block};

fn compress_block(state: &mut [u32; 4], block: &Block) {
    let mut m = [0u32; 16];
    let (words, _) = block.as_chunks::<4>();
    for (mi, chunk) in m.iter_mut().zip(words.iter()) {
        *mi = u32::from_le_bytes(*chunk);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for i in 0..64 {
        let (f, g) = match i / 16 {
            0 => ((b & c) | (!b & d), i),
            1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
            2 => (b ^ c ^ d, (3 * i + 5) % 16),
            _ => (c ^ (b | !d), (7 * i) % 16),
        };
        let temp = d;
        d = c;
        c = b;
        b = b.wrapping_add(
            a.wrapping_add(f)
                .wrapping_add(consts::K[i])
                .wrapping_add(m[g])
                .rotate_left(consts::S[i]),
        );
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

pub fn compress(state: &mut [u32; 4], blocks: &[Block]) {
    for block in blocks {
        compress_block(state, block);
    }
}
