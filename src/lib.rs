//! The Ascon lightweight cryptography suite.
#![no_std]

/// Ascon-p, the duplex sponge engine and the shared error type.
pub use ascon_spongos;
/// AEAD, Hash/XOF, MAC and PRF modes.
pub use ascon_modes;

pub use ascon_modes::*;
