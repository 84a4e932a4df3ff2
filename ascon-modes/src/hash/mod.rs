//! Ascon-Hash, Ascon-Hasha, Ascon-Xof and Ascon-Xofa.
//!
//! [`AsconHashing`] is the incremental hasher for all four variants. The
//! `digest` wrappers ([`AsconHash`], [`AsconHasha`], [`AsconXof`],
//! [`AsconXofa`]) plug it into the RustCrypto trait family.

use core::mem;

use digest::{
    generic_array::GenericArray,
    BlockInput,
    ExtendableOutputDirty,
    FixedOutputDirty,
    Reset,
    Update,
    XofReader,
};
use generic_array::typenum::{
    U32,
    U8,
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

/// Output size of the fixed-length variants.
pub const HASH_SIZE: usize = 32;

/// Bytes absorbed per permutation call, shared by all variants.
pub const RATE: usize = 8;

/// One of the four hashing configurations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashVariant {
    /// 256-bit digest, `p^12` between blocks.
    Hash,
    /// 256-bit digest, `p^8` between blocks.
    Hasha,
    /// Extendable output, `p^12` between blocks.
    Xof,
    /// Extendable output, `p^8` between blocks.
    Xofa,
}

impl HashVariant {
    /// Permutation rounds between blocks.
    pub const fn rounds(self) -> Rounds {
        match self {
            Self::Hash | Self::Xof => Rounds::Twelve,
            Self::Hasha | Self::Xofa => Rounds::Eight,
        }
    }

    /// Whether the output length is chosen by the caller.
    pub const fn is_xof(self) -> bool {
        matches!(self, Self::Xof | Self::Xofa)
    }

    pub const fn iv(self) -> Iv {
        let output_bits = if self.is_xof() { 0 } else { HASH_SIZE as u32 * 8 };
        Iv::hash(RATE, Rounds::Twelve, self.rounds(), output_bits)
    }

    /// Accepted output buffer length.
    pub const fn output_len(self) -> Expected {
        if self.is_xof() {
            Expected::AtLeast(1)
        } else {
            Expected::Exactly(HASH_SIZE)
        }
    }
}

/// Incremental hasher.
///
/// Any number of [`update`](Self::update) calls, of any length including
/// zero, may precede [`finalize`](Self::finalize). The partially filled block
/// lives in the permutation state and is always shorter than [`RATE`].
#[derive(Clone, Debug)]
pub struct AsconHashing {
    variant: HashVariant,
    s: Spongos<U8>,
}

impl AsconHashing {
    pub fn new(variant: HashVariant) -> Self {
        Self {
            variant,
            s: Self::fresh(variant),
        }
    }

    fn fresh(variant: HashVariant) -> Spongos<U8> {
        Spongos::init(variant.iv(), &[], &[], variant.rounds())
    }

    pub fn variant(&self) -> HashVariant {
        self.variant
    }

    /// Absorb the next chunk of the message.
    pub fn update<T: AsRef<[u8]>>(&mut self, data: T) {
        self.s.absorb(data);
    }

    /// Write the digest into `out`, which must be [`HASH_SIZE`] bytes for the
    /// fixed-output variants and at least one byte for the XOF variants.
    pub fn finalize(mut self, out: &mut [u8]) -> Result<()> {
        self.finalize_reset(out)
    }

    /// Like [`finalize`](Self::finalize) but leaves the hasher freshly
    /// initialized for the same variant.
    ///
    /// The state is untouched when the output length is rejected.
    pub fn finalize_reset(&mut self, out: &mut [u8]) -> Result<()> {
        Error::check_length("output", self.variant.output_len(), out.len())?;
        let mut s = self.finish();
        s.squeeze_mut(out);
        Ok(())
    }

    /// Finalize into a reader producing an unbounded output stream.
    pub fn finalize_xof(mut self) -> AsconXofReader {
        AsconXofReader { s: self.finish() }
    }

    /// Discard everything absorbed so far.
    pub fn reset(&mut self) {
        self.s = Self::fresh(self.variant);
    }

    /// Pad the message and run the finalization permutation, resetting `self`.
    fn finish(&mut self) -> Spongos<U8> {
        trace!("{:?}: finalizing", self.variant);
        let mut s = mem::replace(&mut self.s, Self::fresh(self.variant));
        s.pad();
        s.transform(Rounds::Twelve);
        s
    }
}

/// Output stream of a finalized XOF.
///
/// Successive reads continue the stream, so splitting a read never changes
/// the bytes produced.
#[derive(Clone, Debug)]
pub struct AsconXofReader {
    s: Spongos<U8>,
}

impl XofReader for AsconXofReader {
    fn read(&mut self, buffer: &mut [u8]) {
        self.s.squeeze_mut(buffer);
    }
}

macro_rules! digest_wrapper {
    ($(#[$meta:meta])* $name:ident, $variant:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name(AsconHashing);

        impl Default for $name {
            fn default() -> Self {
                Self(AsconHashing::new($variant))
            }
        }

        impl Update for $name {
            fn update(&mut self, data: impl AsRef<[u8]>) {
                self.0.update(data);
            }
        }

        impl BlockInput for $name {
            type BlockSize = U8;
        }

        impl Reset for $name {
            fn reset(&mut self) {
                self.0.reset();
            }
        }
    };
}

macro_rules! fixed_output {
    ($name:ident) => {
        impl FixedOutputDirty for $name {
            type OutputSize = U32;

            fn finalize_into_dirty(&mut self, out: &mut GenericArray<u8, U32>) {
                self.0.finish().squeeze_mut(out.as_mut_slice());
            }
        }
    };
}

macro_rules! extendable_output {
    ($name:ident) => {
        impl ExtendableOutputDirty for $name {
            type Reader = AsconXofReader;

            fn finalize_xof_dirty(&mut self) -> AsconXofReader {
                AsconXofReader { s: self.0.finish() }
            }
        }
    };
}

digest_wrapper!(
    /// Ascon-Hash as a [`digest::Digest`].
    AsconHash,
    HashVariant::Hash
);
fixed_output!(AsconHash);

digest_wrapper!(
    /// Ascon-Hasha as a [`digest::Digest`].
    AsconHasha,
    HashVariant::Hasha
);
fixed_output!(AsconHasha);

digest_wrapper!(
    /// Ascon-Xof as a [`digest::ExtendableOutput`].
    AsconXof,
    HashVariant::Xof
);
extendable_output!(AsconXof);

digest_wrapper!(
    /// Ascon-Xofa as a [`digest::ExtendableOutput`].
    AsconXofa,
    HashVariant::Xofa
);
extendable_output!(AsconXofa);
