//! Ascon-Prf and Ascon-Prfa.
//!
//! A keyed sponge: the key sits in the state next to the IV, the message is
//! absorbed in wide blocks and the output is squeezed 16 bytes at a time.
//! The same construction in MAC mode backs [`crate::mac`].

use core::marker::PhantomData;

use generic_array::{
    typenum::{
        U16,
        U32,
        U40,
    },
    ArrayLength,
};
use log::trace;

use ascon_spongos::{
    Error,
    Expected,
    Iv,
    Result,
    Rounds,
    Spongos,
};

pub const KEY_SIZE: usize = 16;

/// Largest tag produced in MAC mode.
pub const TAG_SIZE: usize = 16;

/// Bytes squeezed per permutation call.
pub const OUTPUT_RATE: usize = 16;

pub(crate) type OutputRate = U16;

mod sealed {
    pub trait Sealed {}
}

/// Block size and round count of a PRF/MAC family member.
pub trait PrfVariant: sealed::Sealed {
    const NAME: &'static str;

    /// Bytes absorbed per permutation call.
    type BlockSize: ArrayLength<u8>;

    /// Permutation rounds between blocks.
    const ROUNDS: Rounds;
}

/// 32-byte blocks, `p^12` between blocks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Standard;

impl sealed::Sealed for Standard {}

impl PrfVariant for Standard {
    const NAME: &'static str = "Ascon-Prf";
    type BlockSize = U32;
    const ROUNDS: Rounds = Rounds::Twelve;
}

/// 40-byte blocks, `p^8` between blocks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Fast;

impl sealed::Sealed for Fast {}

impl PrfVariant for Fast {
    const NAME: &'static str = "Ascon-Prfa";
    type BlockSize = U40;
    const ROUNDS: Rounds = Rounds::Eight;
}

/// The IV of variant `V`, `tag_bits` is non-zero only in MAC mode.
pub fn iv<V: PrfVariant>(mac_mode: bool) -> Iv {
    let tag_bits = if mac_mode { (TAG_SIZE * 8) as u8 } else { 0 };
    Iv::prf(KEY_SIZE, OUTPUT_RATE, Rounds::Twelve, V::ROUNDS, tag_bits)
}

/// Accepted output length: at most one squeeze block in MAC mode.
fn output_len(mac_mode: bool) -> Expected {
    if mac_mode {
        Expected::Between(1, TAG_SIZE)
    } else {
        Expected::AtLeast(1)
    }
}

/// Keyed state ready to absorb the message.
pub(crate) fn keyed<V: PrfVariant>(key: &[u8], mac_mode: bool) -> Result<Spongos<V::BlockSize>> {
    Error::check_length("key", Expected::Exactly(KEY_SIZE), key.len())?;
    Ok(Spongos::init(iv::<V>(mac_mode), key, &[], V::ROUNDS))
}

/// Close the message and switch to the squeeze rate.
pub(crate) fn finish<V: PrfVariant>(mut s: Spongos<V::BlockSize>) -> Spongos<OutputRate> {
    s.pad();
    s.separate();
    s.transform(Rounds::Twelve);
    s.into_rate()
}

/// Keyed pseudorandom function of variant `V`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Prf<V>(PhantomData<V>);

impl<V: PrfVariant> Prf<V> {
    fn squeezing(
        name: &'static str,
        out_len: usize,
        message: &[u8],
        key: &[u8],
        mac_mode: bool,
    ) -> Result<Spongos<OutputRate>> {
        Error::check_length(name, output_len(mac_mode), out_len)?;
        let mut s = keyed::<V>(key, mac_mode)?;
        trace!("{}: {} message bytes, {} output bytes", V::NAME, message.len(), out_len);
        s.absorb(message);
        Ok(finish::<V>(s))
    }

    /// Fill `tag` with the PRF of `message` under `key`.
    ///
    /// In MAC mode the IV carries the tag length and `tag` may be at most
    /// [`TAG_SIZE`] bytes long; otherwise any non-empty length works.
    pub fn compute_tag(tag: &mut [u8], message: &[u8], key: &[u8], mac_mode: bool) -> Result<()> {
        let mut s = Self::squeezing("tag", tag.len(), message, key, mac_mode)?;
        s.squeeze_mut(tag);
        Ok(())
    }

    /// Recompute the tag of `message` and compare it to `tag` in constant time.
    pub fn verify_tag(tag: &[u8], message: &[u8], key: &[u8], mac_mode: bool) -> Result<bool> {
        let mut s = Self::squeezing("tag", tag.len(), message, key, mac_mode)?;
        Ok(bool::from(s.squeeze_eq(tag)))
    }

    /// Derive `output.len()` bytes of key material from `input`.
    pub fn derive_key(output: &mut [u8], input: &[u8], key: &[u8]) -> Result<()> {
        let mut s = Self::squeezing("output", output.len(), input, key, false)?;
        s.squeeze_mut(output);
        Ok(())
    }
}

pub type AsconPrf = Prf<Standard>;

pub type AsconPrfa = Prf<Fast>;
