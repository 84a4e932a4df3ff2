//! Ascon-p and the duplex sponge engine shared by every Ascon mode.
//!
//! The permutation works on a 320-bit state of five 64-bit words. All modes
//! (AEAD, hashing, MAC, PRF) are framings of [`Spongos`] with a different
//! rate, IV and round counts.
#![no_std]

// Tests allocate regardless of features
#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[doc(hidden)]
pub use log;

#[macro_use]
pub mod error;

mod core;

pub use crate::{
    core::{
        hygiene::{
            ct_eq,
            wipe,
        },
        iv::Iv,
        prp::{
            ascon::{
                AsconP,
                STATE_SIZE,
            },
            Rounds,
        },
        spongos::Spongos,
    },
    error::{
        Error,
        Expected,
        Result,
    },
};
