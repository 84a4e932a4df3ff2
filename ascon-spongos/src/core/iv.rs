//! Initialization vectors.
//!
//! Every Ascon mode starts from a state whose leading bytes encode the mode
//! parameters: key length, rate, round counts and, depending on the family,
//! output or tag length. The constructors here are `const` so each mode can
//! keep its IV as an associated constant.

use super::prp::{
    ascon::STATE_SIZE,
    Rounds,
};

/// Size of the AEAD nonce, fixed for every AEAD variant.
const NONCE_SIZE: usize = 16;

/// Mode-specific initialization vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Iv {
    bytes: [u8; 8],
    width: usize,
}

impl Iv {
    /// An IV given as its raw big-endian word.
    #[cfg(test)]
    pub(crate) const fn from_word(word: u64) -> Self {
        Self {
            bytes: word.to_be_bytes(),
            width: 8,
        }
    }

    /// AEAD IV: `key bits, rate bits, a, b`.
    ///
    /// IV, key and nonce together fill the whole state, so for a 20-byte key
    /// only the leading 4 IV bytes are kept.
    pub const fn aead(key_size: usize, rate: usize, a: Rounds, b: Rounds) -> Self {
        Self {
            bytes: [(key_size * 8) as u8, (rate * 8) as u8, a.as_u8(), b.as_u8(), 0, 0, 0, 0],
            width: STATE_SIZE - key_size - NONCE_SIZE,
        }
    }

    /// Hash/XOF IV: `0, rate bits, a, a - b, output bits (32-bit BE)`.
    ///
    /// `output_bits` is zero for the extendable-output variants.
    pub const fn hash(rate: usize, a: Rounds, b: Rounds, output_bits: u32) -> Self {
        let o = output_bits.to_be_bytes();
        Self {
            bytes: [0, (rate * 8) as u8, a.as_u8(), a.as_u8() - b.as_u8(), o[0], o[1], o[2], o[3]],
            width: 8,
        }
    }

    /// PRF/MAC IV: `key bits, output rate bits, 0x80 | a, a - b, 0, 0, 0, tag bits`.
    ///
    /// `tag_bits` is zero when the PRF is used as a plain PRF.
    pub const fn prf(key_size: usize, out_rate: usize, a: Rounds, b: Rounds, tag_bits: u8) -> Self {
        Self {
            bytes: [
                (key_size * 8) as u8,
                (out_rate * 8) as u8,
                0x80 | a.as_u8(),
                a.as_u8() - b.as_u8(),
                0,
                0,
                0,
                tag_bits,
            ],
            width: 8,
        }
    }

    /// PRF-short IV: `key bits, input bits, 0x40 | a, output bits, 0, 0, 0, 0`.
    pub const fn prf_short(key_size: usize, input_len: usize, a: Rounds, output_len: usize) -> Self {
        Self {
            bytes: [
                (key_size * 8) as u8,
                (input_len * 8) as u8,
                0x40 | a.as_u8(),
                (output_len * 8) as u8,
                0,
                0,
                0,
                0,
            ],
            width: 8,
        }
    }

    /// Bytes loaded into the leading state bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.width]
    }

    /// The full IV as a big-endian word, trailing bytes zero.
    pub const fn word(&self) -> u64 {
        u64::from_be_bytes(self.bytes)
    }
}
