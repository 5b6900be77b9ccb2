use std::{
  error::Error,
  fmt::{self, Display},
  io,
};

use crate::Nat;

/// The ways an operation on a [`Nat`] can fail.
///
/// Each variant is raised before the receiving value is touched, so a failed
/// `*_assign` call leaves its receiver exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NatError {
  /// A character of decimal text was not an ASCII digit; `found` is `None`
  /// when the text was empty.
  InvalidDigit { found: Option<char>, offset: usize },
  /// A digit was requested past the most significant position.
  IndexOutOfRange { index: usize, len: usize },
  /// The subtrahend was larger than the minuend.
  NegativeResult { minuend: Nat, subtrahend: Nat },
  DivisionByZero { dividend: Nat },
}

impl Display for NatError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NatError::InvalidDigit { found: Some(found), offset } => {
        write!(f, "invalid digit `{found}` at offset {offset}")
      }
      NatError::InvalidDigit { found: None, .. } => f.write_str("expected at least one digit"),
      NatError::IndexOutOfRange { index, len } => {
        write!(f, "digit index {index} is out of range for a number with {len} digits")
      }
      NatError::NegativeResult { minuend, subtrahend } => {
        write!(f, "cannot subtract {subtrahend} from {minuend}; the result would be negative")
      }
      NatError::DivisionByZero { dividend } => write!(f, "cannot divide {dividend} by zero"),
    }
  }
}

impl Error for NatError {}

/// Failure to read a [`Nat`] from a stream with [`Nat::read_from`].
#[derive(Debug)]
pub enum ReadError {
  Io(io::Error),
  Parse(NatError),
}

impl Display for ReadError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReadError::Io(err) => write!(f, "cannot read number: {err}"),
      ReadError::Parse(err) => Display::fmt(err, f),
    }
  }
}

impl Error for ReadError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      ReadError::Io(err) => Some(err),
      ReadError::Parse(err) => Some(err),
    }
  }
}

impl From<io::Error> for ReadError {
  fn from(err: io::Error) -> Self {
    ReadError::Io(err)
  }
}

impl From<NatError> for ReadError {
  fn from(err: NatError) -> Self {
    ReadError::Parse(err)
  }
}
