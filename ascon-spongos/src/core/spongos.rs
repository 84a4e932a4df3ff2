use core::{
    cmp,
    fmt,
    marker::PhantomData,
    mem,
};

use generic_array::{
    typenum::Unsigned,
    ArrayLength,
};
use subtle::{
    Choice,
    ConstantTimeEq,
};
use zeroize::{
    Zeroize,
    ZeroizeOnDrop,
    Zeroizing,
};

use super::{
    iv::Iv,
    prp::{
        ascon::{
            AsconP,
            STATE_SIZE,
        },
        Rounds,
    },
};
use crate::error::{
    Error::InvalidParameterLength,
    Expected,
    Result,
};

fn xor(s: &mut AsconP, pos: usize, x: &[u8]) {
    for (i, xi) in x.iter().enumerate() {
        s.xor_byte(pos + i, *xi);
    }
}

fn encrypt_xor(s: &mut AsconP, pos: usize, x: &[u8], y: &mut [u8]) {
    for (i, (xi, yi)) in x.iter().zip(y.iter_mut()).enumerate() {
        *yi = s.byte(pos + i) ^ *xi;
        s.set_byte(pos + i, *yi);
    }
}

fn decrypt_xor(s: &mut AsconP, pos: usize, y: &[u8], x: &mut [u8]) {
    for (i, (yi, xi)) in y.iter().zip(x.iter_mut()).enumerate() {
        *xi = s.byte(pos + i) ^ *yi;
        s.set_byte(pos + i, *yi);
    }
}

fn copy(s: &AsconP, pos: usize, y: &mut [u8]) {
    for (i, yi) in y.iter_mut().enumerate() {
        *yi = s.byte(pos + i);
    }
}

/// Duplex sponge over Ascon-p with a rate of `R` bytes.
///
/// The state itself buffers partial blocks: `pos` is the offset within the
/// rate at which the next byte is absorbed or squeezed. Absorbing commits a
/// block as soon as it is full, so between calls `pos < R` holds. Squeezing
/// permutes lazily, right before reading from an exhausted block.
pub struct Spongos<R> {
    /// Permutation state.
    s: AsconP,

    /// Current position (offset in bytes) within the rate.
    pos: usize,

    /// Round count applied between blocks.
    rounds: Rounds,

    rate: PhantomData<R>,
}

impl<R: ArrayLength<u8>> Spongos<R> {
    /// Load `iv ∥ key ∥ nonce` (zero-filled) into a fresh state and run `p^12`.
    pub fn init(iv: Iv, key: &[u8], nonce: &[u8], rounds: Rounds) -> Self {
        let iv = iv.as_bytes();
        debug_assert!(iv.len() + key.len() + nonce.len() <= STATE_SIZE);
        debug_assert!(R::USIZE <= STATE_SIZE);

        let mut s = AsconP::default();
        xor(&mut s, 0, iv);
        xor(&mut s, iv.len(), key);
        xor(&mut s, iv.len() + key.len(), nonce);
        s.permutation(Rounds::Twelve);

        Self {
            s,
            pos: 0,
            rounds,
            rate: PhantomData,
        }
    }

    /// Number of bytes that fit into the current block.
    fn available(&self, n: usize) -> usize {
        cmp::min(R::USIZE - self.pos, n)
    }

    /// Advance by `n` processed bytes, permuting when the block is full.
    fn update(&mut self, n: usize) {
        self.pos += n;
        self.refill();
    }

    /// Move to a fresh block once the current one is exhausted.
    fn refill(&mut self) {
        if self.pos == R::USIZE {
            self.s.permutation(self.rounds);
            self.pos = 0;
        }
    }

    /// Absorb a slice.
    pub fn absorb<T>(&mut self, xr: T)
    where
        T: AsRef<[u8]>,
    {
        let mut x = xr.as_ref();
        while !x.is_empty() {
            let n = self.available(x.len());
            xor(&mut self.s, self.pos, &x[..n]);
            x = &x[n..];
            self.update(n);
        }
    }

    /// Close the current block with the `0x80` padding byte.
    ///
    /// No permutation is run after padding, the caller decides which one
    /// follows. A block exhausted by squeezing is permuted first, so the
    /// padding byte always lands inside the rate.
    pub fn pad(&mut self) {
        self.refill();
        self.s.xor_byte(self.pos, 0x80);
        self.pos = 0;
    }

    /// Pad the current block and run the internal permutation.
    pub fn commit(&mut self) {
        self.pad();
        self.s.permutation(self.rounds);
    }

    /// Encrypt a byte slice, ciphertext bytes replace the rate bytes.
    /// Input and output slices must be non-overlapping.
    pub fn encrypt_mut(&mut self, plain: &[u8], mut cipher: &mut [u8]) -> Result<()> {
        try_or!(
            plain.len() == cipher.len(),
            InvalidParameterLength("ciphertext", Expected::Exactly(plain.len()), cipher.len())
        );
        let mut plain = plain;
        while !plain.is_empty() {
            let n = self.available(plain.len());
            let (head, tail) = mem::take(&mut cipher).split_at_mut(n);
            encrypt_xor(&mut self.s, self.pos, &plain[..n], head);
            plain = &plain[n..];
            cipher = tail;
            self.update(n);
        }
        Ok(())
    }

    /// Decrypt a byte slice, ciphertext bytes replace the rate bytes.
    /// Input and output slices must be non-overlapping.
    pub fn decrypt_mut(&mut self, cipher: &[u8], mut plain: &mut [u8]) -> Result<()> {
        try_or!(
            plain.len() == cipher.len(),
            InvalidParameterLength("plaintext", Expected::Exactly(cipher.len()), plain.len())
        );
        let mut cipher = cipher;
        while !cipher.is_empty() {
            let n = self.available(cipher.len());
            let (head, tail) = mem::take(&mut plain).split_at_mut(n);
            decrypt_xor(&mut self.s, self.pos, &cipher[..n], head);
            cipher = &cipher[n..];
            plain = tail;
            self.update(n);
        }
        Ok(())
    }

    /// Squeeze into `yr`. Successive calls continue the same output stream.
    pub fn squeeze_mut<T>(&mut self, mut yr: T)
    where
        T: AsMut<[u8]>,
    {
        let mut y = yr.as_mut();
        while !y.is_empty() {
            self.refill();
            let n = self.available(y.len());
            let (head, tail) = mem::take(&mut y).split_at_mut(n);
            copy(&self.s, self.pos, head);
            y = tail;
            self.pos += n;
        }
    }

    /// Squeeze `yr.len()` bytes and compare them to `yr` in constant time.
    pub fn squeeze_eq<T>(&mut self, yr: T) -> Choice
    where
        T: AsRef<[u8]>,
    {
        let mut y = yr.as_ref();
        let mut block = Zeroizing::new([0_u8; STATE_SIZE]);
        let mut eq = Choice::from(1);
        while !y.is_empty() {
            let n = cmp::min(R::USIZE, y.len());
            self.squeeze_mut(&mut block[..n]);
            eq &= block[..n].ct_eq(&y[..n]);
            y = &y[n..];
        }
        eq
    }

    /// Continue with a different rate, starting on a block boundary.
    ///
    /// A partially absorbed or squeezed block is closed by the internal
    /// permutation first.
    pub fn into_rate<O: ArrayLength<u8>>(mut self) -> Spongos<O> {
        if self.pos != 0 {
            self.s.permutation(self.rounds);
        }
        let Self { s, rounds, .. } = self;
        Spongos {
            s,
            pos: 0,
            rounds,
            rate: PhantomData,
        }
    }
}

impl<R> Spongos<R> {
    /// Run `rounds` rounds of the permutation on the whole state.
    pub fn transform(&mut self, rounds: Rounds) {
        self.s.permutation(rounds);
    }

    /// Toggle the domain separation bit, the least significant bit of the state.
    pub fn separate(&mut self) {
        self.s.xor_byte(STATE_SIZE - 1, 1);
    }

    /// XOR `x` into the state starting at byte `offset`.
    pub fn xor_at(&mut self, offset: usize, x: &[u8]) {
        debug_assert!(offset + x.len() <= STATE_SIZE);
        xor(&mut self.s, offset, x);
    }

    /// XOR `x` into the trailing `x.len()` bytes of the state.
    pub fn xor_tail(&mut self, x: &[u8]) {
        self.xor_at(STATE_SIZE - x.len(), x);
    }

    /// Copy state bytes starting at `offset` into `y`.
    pub fn extract_at(&self, offset: usize, y: &mut [u8]) {
        debug_assert!(offset + y.len() <= STATE_SIZE);
        copy(&self.s, offset, y);
    }

    /// Copy the trailing `y.len()` state bytes into `y`.
    pub fn extract_tail(&self, y: &mut [u8]) {
        self.extract_at(STATE_SIZE - y.len(), y);
    }

    /// Round count applied between blocks.
    pub fn rounds(&self) -> Rounds {
        self.rounds
    }

    /// Bytes absorbed into or squeezed from the current block.
    #[cfg(test)]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }
}

impl<R> Clone for Spongos<R> {
    fn clone(&self) -> Self {
        Self {
            s: self.s.clone(),
            pos: self.pos,
            rounds: self.rounds,
            rate: PhantomData,
        }
    }
}

impl<R> Zeroize for Spongos<R> {
    fn zeroize(&mut self) {
        self.s.zeroize();
        self.pos.zeroize();
    }
}

// `AsconP` wipes itself on drop.
impl<R> ZeroizeOnDrop for Spongos<R> {}

impl<R: ArrayLength<u8>> fmt::Debug for Spongos<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spongos")
            .field("rate", &R::USIZE)
            .field("pos", &self.pos)
            .field("rounds", &self.rounds)
            .finish()
    }
}
