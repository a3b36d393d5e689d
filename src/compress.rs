//! The SHA-1 compression function.

/// The size of a single input block in bytes.
pub const BLOCK_LEN: usize = 64;

/// The number of 32-bit words in the hash state.
pub const STATE_LEN: usize = 5;

const SCHEDULE_LEN: usize = 80;

const K0: u32 = 0x5a827999;
const K1: u32 = 0x6ed9eba1;
const K2: u32 = 0x8f1bbcdc;
const K3: u32 = 0xca62c1d6;

#[inline(always)]
fn ch(b: u32, c: u32, d: u32) -> u32 {
    d ^ (b & (c ^ d))
}

#[inline(always)]
fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
fn maj(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (d & (b | c))
}

/// Expands one block into the 80 word message schedule.
#[inline(always)]
fn schedule(block: &[u8; BLOCK_LEN]) -> [u32; SCHEDULE_LEN] {
    let mut words = [0u32; SCHEDULE_LEN];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for i in 16..SCHEDULE_LEN {
        words[i] = (words[i - 3] ^ words[i - 8] ^ words[i - 14] ^ words[i - 16]).rotate_left(1);
    }
    words
}

/// Runs one 20 round stage over the working variables.
#[inline(always)]
fn stage(vars: &mut [u32; STATE_LEN], words: &[u32], k: u32, f: fn(u32, u32, u32) -> u32) {
    let [mut a, mut b, mut c, mut d, mut e] = *vars;
    for &w in words {
        let tmp = a
            .rotate_left(5)
            .wrapping_add(f(b, c, d))
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(w);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = tmp;
    }
    *vars = [a, b, c, d, e];
}

/// Advances `state` by one 64 byte block.
///
/// This is the raw SHA-1 compression function.  It does no padding and
/// touches nothing but the two arguments, so it can be called on any
/// state, including ones that are not a valid intermediate hash value
/// (the benchmark driver runs it on an all-zero state).
///
/// ```rust
/// let mut state = [0u32; 5];
/// sha1_kernel::compress(&mut state, &[0u8; 64]);
/// assert_ne!(state, [0u32; 5]);
/// ```
pub fn compress(state: &mut [u32; STATE_LEN], block: &[u8; BLOCK_LEN]) {
    let words = schedule(block);

    let mut vars = *state;
    stage(&mut vars, &words[0..20], K0, ch);
    stage(&mut vars, &words[20..40], K1, parity);
    stage(&mut vars, &words[40..60], K2, maj);
    stage(&mut vars, &words[60..80], K3, parity);

    for (s, v) in state.iter_mut().zip(vars.iter()) {
        *s = s.wrapping_add(*v);
    }
}
