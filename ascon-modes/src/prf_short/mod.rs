//! Ascon-PrfShort: a single-permutation PRF for inputs and outputs of at
//! most 16 bytes.
//!
//! The input is loaded into the last two state words instead of being
//! absorbed, and its length is part of the IV, so no padding is needed.

use generic_array::typenum::U16;
use zeroize::Zeroizing;

use ascon_spongos::{
    ct_eq,
    Error,
    Expected,
    Iv,
    Result,
    Rounds,
    Spongos,
    STATE_SIZE,
};

pub const KEY_SIZE: usize = 16;

pub const INPUT_SIZE: usize = 16;

pub const OUTPUT_SIZE: usize = 16;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AsconPrfShort;

impl AsconPrfShort {
    fn permuted(out_len: usize, input: &[u8], key: &[u8]) -> Result<Spongos<U16>> {
        Error::check_length("output", Expected::Between(1, OUTPUT_SIZE), out_len)?;
        Error::check_length("input", Expected::AtMost(INPUT_SIZE), input.len())?;
        Error::check_length("key", Expected::Exactly(KEY_SIZE), key.len())?;

        let iv = Iv::prf_short(KEY_SIZE, input.len(), Rounds::Twelve, out_len);
        let mut s = Spongos::init(iv, key, input, Rounds::Twelve);
        s.xor_tail(key);
        Ok(s)
    }

    /// Derive `output.len()` bytes, 1 to [`OUTPUT_SIZE`], from `input`.
    pub fn derive_key(output: &mut [u8], input: &[u8], key: &[u8]) -> Result<()> {
        let s = Self::permuted(output.len(), input, key)?;
        s.extract_at(STATE_SIZE - INPUT_SIZE, output);
        Ok(())
    }

    /// Recompute the output for `input` and compare it to `tag` in constant
    /// time. The tag length selects the output length.
    pub fn verify_tag(tag: &[u8], input: &[u8], key: &[u8]) -> Result<bool> {
        let s = Self::permuted(tag.len(), input, key)?;
        let mut expected = Zeroizing::new([0_u8; OUTPUT_SIZE]);
        s.extract_at(STATE_SIZE - INPUT_SIZE, &mut expected[..tag.len()]);
        Ok(ct_eq(&expected[..tag.len()], tag))
    }
}
