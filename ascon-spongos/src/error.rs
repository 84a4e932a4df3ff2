//! Ascon Errors

use core::fmt;

use thiserror_no_std::Error;

/// Return `err` from the enclosing function unless `cond` holds, logging the
/// failure location.
#[macro_export]
macro_rules! try_or {
    ($cond:expr, $err:expr) => {{
        if !$cond {
            let err = $err;
            $crate::log::debug!("{} @ {}:{}", err, file!(), line!());
            return Err(err.into());
        }
    }};
}

pub type Result<T> = core::result::Result<T, Error>;

/// Accepted length of a key, nonce, tag or output buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    Exactly(usize),
    Between(usize, usize),
    AtMost(usize),
    AtLeast(usize),
}

impl Expected {
    /// Whether `len` satisfies the bound.
    pub fn accepts(&self, len: usize) -> bool {
        match *self {
            Self::Exactly(n) => len == n,
            Self::Between(min, max) => min <= len && len <= max,
            Self::AtMost(max) => len <= max,
            Self::AtLeast(min) => len >= min,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Exactly(n) => write!(f, "{}", n),
            Self::Between(min, max) => write!(f, "between {} and {}", min, max),
            Self::AtMost(max) => write!(f, "at most {}", max),
            Self::AtLeast(min) => write!(f, "at least {}", min),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0} must be {1} bytes long, but is {2} bytes long instead")]
    InvalidParameterLength(&'static str, Expected, usize),

    #[error("authentication failed, the tag does not match")]
    AuthenticationFailure,
}

impl Error {
    /// Check `len` against `expected`, naming the parameter on failure.
    pub fn check_length(name: &'static str, expected: Expected, len: usize) -> Result<()> {
        try_or!(expected.accepts(len), Error::InvalidParameterLength(name, expected, len));
        Ok(())
    }
}
