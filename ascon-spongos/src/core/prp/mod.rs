pub(crate) mod ascon;

/// Number of rounds of the Ascon-p permutation to run.
///
/// A call with `r` rounds executes the last `r` rounds of the 12-round
/// schedule, so every variant shares the same round constants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rounds {
    /// `p^6`, the internal permutation of Ascon-128 and Ascon-80pq.
    Six = 6,
    /// `p^8`, the internal permutation of every "a" variant.
    Eight = 8,
    /// `p^12`, used for initialization and finalization everywhere.
    Twelve = 12,
}

impl Rounds {
    /// Round count as it is encoded in an IV byte.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Index of the first round executed.
    pub(crate) const fn start(self) -> u64 {
        12 - self as u64
    }
}
