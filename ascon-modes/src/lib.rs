//! The Ascon modes of operation.
//!
//! Every mode is a thin framing of the [`ascon_spongos::Spongos`] duplex
//! engine: it picks an IV, a rate and round counts, and decides where the
//! key goes in and where the output comes out.
//!
//! | Mode                                  | Type                                        |
//! |---------------------------------------|---------------------------------------------|
//! | AEAD                                  | [`Ascon128`], [`Ascon128a`], [`Ascon80pq`]  |
//! | Hash / XOF                            | [`AsconHashing`], [`AsconHash`], [`AsconXof`], ... |
//! | MAC                                   | [`AsconMac`], [`AsconMaca`]                 |
//! | PRF                                   | [`AsconPrf`], [`AsconPrfa`], [`AsconPrfShort`] |
#![no_std]

// Tests allocate regardless of features
#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod aead;
pub mod hash;
pub mod mac;
pub mod prf;
pub mod prf_short;

pub use ascon_spongos::{
    ct_eq,
    wipe,
    Error,
    Expected,
    Result,
    Rounds,
};

pub use crate::{
    aead::{
        Aead,
        Ascon128,
        Ascon128a,
        Ascon80pq,
    },
    hash::{
        AsconHash,
        AsconHasha,
        AsconHashing,
        AsconXof,
        AsconXofReader,
        AsconXofa,
        HashVariant,
    },
    mac::{
        AsconMac,
        AsconMaca,
        Mac,
    },
    prf::{
        AsconPrf,
        AsconPrfa,
        Prf,
    },
    prf_short::AsconPrfShort,
};
