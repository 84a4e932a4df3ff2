//! Constant-time comparison and wiping of secret buffers.

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Compare two byte strings in time independent of their contents.
///
/// Slices of different lengths compare unequal; only the length itself may
/// influence timing.
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    bool::from(a.ct_eq(b))
}

/// Overwrite `buf` with zeros in a way the optimizer cannot elide.
pub fn wipe(buf: &mut [u8]) {
    buf.zeroize();
}
