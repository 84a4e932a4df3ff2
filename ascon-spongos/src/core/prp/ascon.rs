use zeroize::{Zeroize, ZeroizeOnDrop};

use super::Rounds;

/// Size of the permutation state in bytes.
pub const STATE_SIZE: usize = 40;

/// The 320-bit Ascon-p permutation state.
///
/// Byte `i` of the state is byte `i % 8` of word `i / 8` in big-endian
/// order, so byte-level absorbing matches the word-level description of
/// every Ascon mode.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct AsconP {
    state: [u64; 5],
}

impl AsconP {
    /// Create a permutation state from its five words.
    #[cfg(test)]
    pub(crate) fn from_words(state: [u64; 5]) -> Self {
        Self { state }
    }

    /// Run the final `rounds` rounds of Ascon-p.
    pub fn permutation(&mut self, rounds: Rounds) {
        for i in rounds.start()..12 {
            round(&mut self.state, ((0xf - i) << 4) | i);
        }
    }

    /// Read state byte `i`.
    #[inline]
    pub fn byte(&self, i: usize) -> u8 {
        (self.state[i / 8] >> shift(i)) as u8
    }

    /// Overwrite state byte `i`.
    #[inline]
    pub fn set_byte(&mut self, i: usize, b: u8) {
        let w = &mut self.state[i / 8];
        *w = (*w & !(0xff << shift(i))) | (u64::from(b) << shift(i));
    }

    /// XOR `b` into state byte `i`.
    #[inline]
    pub fn xor_byte(&mut self, i: usize, b: u8) {
        self.state[i / 8] ^= u64::from(b) << shift(i);
    }
}

#[inline]
fn shift(i: usize) -> u32 {
    56 - 8 * (i % 8) as u32
}

#[inline]
fn round(s: &mut [u64; 5], rc: u64) {
    // add round constant
    s[2] ^= rc;

    // substitution layer
    s[0] ^= s[4];
    s[4] ^= s[3];
    s[2] ^= s[1];

    let t0 = !s[0] & s[1];
    let t1 = !s[1] & s[2];
    let t2 = !s[2] & s[3];
    let t3 = !s[3] & s[4];
    let t4 = !s[4] & s[0];

    s[0] ^= t1;
    s[1] ^= t2;
    s[2] ^= t3;
    s[3] ^= t4;
    s[4] ^= t0;

    s[1] ^= s[0];
    s[0] ^= s[4];
    s[3] ^= s[2];
    s[2] = !s[2];

    // linear diffusion
    s[0] ^= s[0].rotate_right(19) ^ s[0].rotate_right(28);
    s[1] ^= s[1].rotate_right(61) ^ s[1].rotate_right(39);
    s[2] ^= s[2].rotate_right(1) ^ s[2].rotate_right(6);
    s[3] ^= s[3].rotate_right(10) ^ s[3].rotate_right(17);
    s[4] ^= s[4].rotate_right(7) ^ s[4].rotate_right(41);
}
