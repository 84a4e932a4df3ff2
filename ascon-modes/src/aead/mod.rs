//! Authenticated encryption with associated data.
//!
//! Three parameter sets share one construction:
//!
//! | Variant     | Key | Rate | Rounds between blocks |
//! |-------------|-----|------|-----------------------|
//! | `Ascon128`  | 16  | 8    | 6                     |
//! | `Ascon128a` | 16  | 16   | 8                     |
//! | `Ascon80pq` | 20  | 8    | 6                     |
//!
//! The ciphertext is the encrypted plaintext followed by a 16-byte tag.

#[cfg(feature = "alloc")]
use alloc::{
    vec,
    vec::Vec,
};

use generic_array::{
    typenum::{
        Unsigned,
        U16,
        U8,
    },
    ArrayLength,
};
use log::trace;
use zeroize::Zeroizing;

use ascon_spongos::{
    ct_eq,
    try_or,
    wipe,
    Error,
    Expected,
    Iv,
    Result,
    Rounds,
    Spongos,
};

/// Nonce size shared by every AEAD variant.
pub const NONCE_SIZE: usize = 16;

/// Tag size shared by every AEAD variant.
pub const TAG_SIZE: usize = 16;

mod sealed {
    pub trait Sealed {}
}

/// An Ascon AEAD parameter set.
///
/// All operations are associated functions; a variant carries no state.
pub trait Aead: sealed::Sealed + Sized {
    /// Human readable name, used in log records.
    const NAME: &'static str;

    const KEY_SIZE: usize;

    const NONCE_SIZE: usize = NONCE_SIZE;

    const TAG_SIZE: usize = TAG_SIZE;

    /// Bytes absorbed per permutation call.
    type Rate: ArrayLength<u8>;

    /// Permutation rounds between data blocks.
    const ROUNDS: Rounds;

    const IV: Iv;

    /// Encrypt `plaintext` into `ciphertext`, which must be exactly
    /// `plaintext.len() + TAG_SIZE` bytes long.
    fn encrypt_into(
        nonce: &[u8],
        key: &[u8],
        associated_data: &[u8],
        plaintext: &[u8],
        ciphertext: &mut [u8],
    ) -> Result<()> {
        Error::check_length(
            "ciphertext",
            Expected::Exactly(plaintext.len() + Self::TAG_SIZE),
            ciphertext.len(),
        )?;
        let mut s = start::<Self>(nonce, key, associated_data)?;
        trace!(
            "{}: encrypting {} bytes with {} bytes of associated data",
            Self::NAME,
            plaintext.len(),
            associated_data.len()
        );

        let (body, tag) = ciphertext.split_at_mut(plaintext.len());
        s.encrypt_mut(plaintext, body)?;
        finish::<Self>(s, key, tag);
        Ok(())
    }

    /// Decrypt `ciphertext` (encrypted data followed by the tag) into
    /// `plaintext`, which must be exactly `ciphertext.len() - TAG_SIZE` bytes
    /// long.
    ///
    /// On a tag mismatch `plaintext` is zeroed and
    /// [`Error::AuthenticationFailure`] is returned.
    fn decrypt_into(
        nonce: &[u8],
        key: &[u8],
        associated_data: &[u8],
        ciphertext: &[u8],
        plaintext: &mut [u8],
    ) -> Result<()> {
        Error::check_length("ciphertext", Expected::AtLeast(Self::TAG_SIZE), ciphertext.len())?;
        let (body, tag) = ciphertext.split_at(ciphertext.len() - Self::TAG_SIZE);
        Error::check_length("plaintext", Expected::Exactly(body.len()), plaintext.len())?;
        let mut s = start::<Self>(nonce, key, associated_data)?;
        trace!(
            "{}: decrypting {} bytes with {} bytes of associated data",
            Self::NAME,
            body.len(),
            associated_data.len()
        );

        s.decrypt_mut(body, plaintext)?;
        let mut expected = Zeroizing::new([0_u8; TAG_SIZE]);
        finish::<Self>(s, key, &mut expected[..]);

        let authentic = ct_eq(&expected[..], tag);
        if !authentic {
            wipe(plaintext);
        }
        try_or!(authentic, Error::AuthenticationFailure);
        Ok(())
    }

    /// Encrypt into a freshly allocated `ciphertext ∥ tag`.
    #[cfg(feature = "alloc")]
    fn encrypt(nonce: &[u8], key: &[u8], associated_data: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut ciphertext = vec![0; plaintext.len() + Self::TAG_SIZE];
        Self::encrypt_into(nonce, key, associated_data, plaintext, &mut ciphertext)?;
        Ok(ciphertext)
    }

    /// Decrypt into a freshly allocated plaintext buffer.
    #[cfg(feature = "alloc")]
    fn decrypt(nonce: &[u8], key: &[u8], associated_data: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        Error::check_length("ciphertext", Expected::AtLeast(Self::TAG_SIZE), ciphertext.len())?;
        let mut plaintext = vec![0; ciphertext.len() - Self::TAG_SIZE];
        Self::decrypt_into(nonce, key, associated_data, ciphertext, &mut plaintext)?;
        Ok(plaintext)
    }
}

/// Keyed initialization followed by the associated data phase.
fn start<A: Aead>(nonce: &[u8], key: &[u8], associated_data: &[u8]) -> Result<Spongos<A::Rate>> {
    Error::check_length("key", Expected::Exactly(A::KEY_SIZE), key.len())?;
    Error::check_length("nonce", Expected::Exactly(A::NONCE_SIZE), nonce.len())?;

    let mut s = Spongos::init(A::IV, key, nonce, A::ROUNDS);
    s.xor_tail(key);

    // Empty associated data is not padded, the domain bit is set regardless.
    if !associated_data.is_empty() {
        s.absorb(associated_data);
        s.commit();
    }
    s.separate();
    Ok(s)
}

/// Pad the last data block and squeeze the tag.
fn finish<A: Aead>(mut s: Spongos<A::Rate>, key: &[u8], tag: &mut [u8]) {
    s.pad();
    s.xor_at(A::Rate::USIZE, key);
    s.transform(Rounds::Twelve);
    s.xor_tail(&key[key.len() - A::TAG_SIZE..]);
    s.extract_tail(tag);
}

/// Ascon-128: 16-byte key, 8-byte rate, `p^6` between blocks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ascon128;

impl sealed::Sealed for Ascon128 {}

impl Aead for Ascon128 {
    const NAME: &'static str = "Ascon-128";
    const KEY_SIZE: usize = 16;
    type Rate = U8;
    const ROUNDS: Rounds = Rounds::Six;
    const IV: Iv = Iv::aead(16, 8, Rounds::Twelve, Rounds::Six);
}

/// Ascon-128a: 16-byte key, 16-byte rate, `p^8` between blocks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ascon128a;

impl sealed::Sealed for Ascon128a {}

impl Aead for Ascon128a {
    const NAME: &'static str = "Ascon-128a";
    const KEY_SIZE: usize = 16;
    type Rate = U16;
    const ROUNDS: Rounds = Rounds::Eight;
    const IV: Iv = Iv::aead(16, 16, Rounds::Twelve, Rounds::Eight);
}

/// Ascon-80pq: Ascon-128 with a 20-byte key.
///
/// The IV shrinks to 4 bytes so that IV, key and nonce fill the state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ascon80pq;

impl sealed::Sealed for Ascon80pq {}

impl Aead for Ascon80pq {
    const NAME: &'static str = "Ascon-80pq";
    const KEY_SIZE: usize = 20;
    type Rate = U8;
    const ROUNDS: Rounds = Rounds::Six;
    const IV: Iv = Iv::aead(20, 8, Rounds::Twelve, Rounds::Six);
}
