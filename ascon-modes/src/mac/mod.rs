//! Ascon-Mac and Ascon-Maca, the incremental form of the PRF in MAC mode.

use log::trace;

use ascon_spongos::{
    Error,
    Expected,
    Result,
    Spongos,
};

use crate::prf::{
    self,
    Fast,
    PrfVariant,
    Standard,
};

pub use crate::prf::{
    KEY_SIZE,
    TAG_SIZE,
};

const TAG_LEN: Expected = Expected::Between(1, TAG_SIZE);

/// Incremental message authentication code of variant `V`.
///
/// Produces the same tags as [`prf::Prf::compute_tag`] in MAC mode. The
/// message may be fed in any number of chunks; only the unfinished block is
/// held in the permutation state.
#[derive(Clone, Debug)]
pub struct Mac<V: PrfVariant> {
    /// Keyed state before any message byte, restored by `reset`.
    fresh: Spongos<V::BlockSize>,
    s: Spongos<V::BlockSize>,
}

impl<V: PrfVariant> Mac<V> {
    pub fn new(key: &[u8]) -> Result<Self> {
        let fresh = prf::keyed::<V>(key, true)?;
        Ok(Self {
            s: fresh.clone(),
            fresh,
        })
    }

    pub fn update<T: AsRef<[u8]>>(&mut self, data: T) {
        self.s.absorb(data);
    }

    /// Write the tag, 1 to [`TAG_SIZE`] bytes, into `tag`.
    pub fn finalize(mut self, tag: &mut [u8]) -> Result<()> {
        self.finalize_reset(tag)
    }

    /// Like [`finalize`](Self::finalize) but keeps the key for a new message.
    ///
    /// The absorbed message is kept when the tag length is rejected.
    pub fn finalize_reset(&mut self, tag: &mut [u8]) -> Result<()> {
        Error::check_length("tag", TAG_LEN, tag.len())?;
        self.finish().squeeze_mut(tag);
        Ok(())
    }

    /// Compare the tag of the absorbed message to `tag` in constant time.
    pub fn verify(mut self, tag: &[u8]) -> Result<bool> {
        Error::check_length("tag", TAG_LEN, tag.len())?;
        Ok(bool::from(self.finish().squeeze_eq(tag)))
    }

    /// Forget the absorbed message.
    pub fn reset(&mut self) {
        self.s = self.fresh.clone();
    }

    fn finish(&mut self) -> Spongos<prf::OutputRate> {
        trace!("{}: finalizing tag", V::NAME);
        let s = core::mem::replace(&mut self.s, self.fresh.clone());
        prf::finish::<V>(s)
    }

    /// One-shot tag of `message`.
    pub fn compute_tag(tag: &mut [u8], message: &[u8], key: &[u8]) -> Result<()> {
        Error::check_length("tag", TAG_LEN, tag.len())?;
        let mut mac = Self::new(key)?;
        mac.update(message);
        mac.finalize(tag)
    }

    /// One-shot constant-time verification of `tag` over `message`.
    pub fn verify_tag(tag: &[u8], message: &[u8], key: &[u8]) -> Result<bool> {
        Error::check_length("tag", TAG_LEN, tag.len())?;
        let mut mac = Self::new(key)?;
        mac.update(message);
        mac.verify(tag)
    }
}

pub type AsconMac = Mac<Standard>;

pub type AsconMaca = Mac<Fast>;

#[cfg(test)]
mod tests;
