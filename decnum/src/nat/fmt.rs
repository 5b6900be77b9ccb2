use std::{
  fmt::{self, Debug, Display},
  io::BufRead,
  str::FromStr,
};

use super::Nat;
use crate::{NatError, ReadError};

impl Display for Nat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits: String = self.digits.iter().rev().map(|&d| char::from(b'0' + d)).collect();
    f.pad_integral(true, "", &digits)
  }
}

impl Debug for Nat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Nat({self})")
  }
}

impl FromStr for Nat {
  type Err = NatError;

  /// Parses plain decimal digits; no sign, whitespace or separators.
  fn from_str(s: &str) -> Result<Nat, NatError> {
    if s.is_empty() {
      return Err(NatError::InvalidDigit { found: None, offset: 0 });
    }
    let digits = s
      .char_indices()
      .rev()
      .map(|(offset, c)| {
        c.to_digit(10).map(|d| d as u8).ok_or(NatError::InvalidDigit { found: Some(c), offset })
      })
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Nat::from_digits(digits))
  }
}

impl Nat {
  /// Reads the next whitespace-delimited token from `reader` and parses it.
  ///
  /// Returns `Ok(None)` if the input ends before a token starts. The
  /// whitespace following the token is left unread.
  pub fn read_from(reader: &mut impl BufRead) -> Result<Option<Nat>, ReadError> {
    let mut token = Vec::new();
    loop {
      let buf = reader.fill_buf()?;
      if buf.is_empty() {
        break;
      }
      let mut used = 0;
      let mut done = false;
      for &byte in buf {
        if byte.is_ascii_whitespace() {
          if !token.is_empty() {
            done = true;
            break;
          }
        } else {
          token.push(byte);
        }
        used += 1;
      }
      reader.consume(used);
      if done {
        break;
      }
    }
    if token.is_empty() {
      return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&token).parse()?))
  }
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  #[test]
  fn parse_and_display() {
    let n: Nat = "12345".parse().unwrap();
    assert_eq!(n, Nat::from(12345u32));
    assert_eq!(n.digit_count(), 5);
    assert_eq!(n.to_string(), "12345");
    assert_eq!(Nat::zero().to_string(), "0");
    assert_eq!(format!("{:?}", n), "Nat(12345)");
  }

  #[test]
  fn leading_zeros_are_normalized() {
    assert_eq!("000123".parse::<Nat>().unwrap().to_string(), "123");
    assert_eq!("0000".parse::<Nat>().unwrap(), Nat::zero());
  }

  #[test]
  fn padding() {
    let n = Nat::from(42u32);
    assert_eq!(format!("{n:>6}"), "    42");
    assert_eq!(format!("{n:06}"), "000042");
    assert_eq!(format!("{n:<4}|"), "42  |");
  }

  #[test]
  fn invalid_digits() {
    assert_eq!("".parse::<Nat>(), Err(NatError::InvalidDigit { found: None, offset: 0 }));
    assert_eq!("12a45".parse::<Nat>(), Err(NatError::InvalidDigit { found: Some('a'), offset: 2 }));
    assert_eq!("-5".parse::<Nat>(), Err(NatError::InvalidDigit { found: Some('-'), offset: 0 }));
    assert_eq!(" 5".parse::<Nat>(), Err(NatError::InvalidDigit { found: Some(' '), offset: 0 }));
    assert_eq!("1_000".parse::<Nat>(), Err(NatError::InvalidDigit { found: Some('_'), offset: 1 }));
    assert!("٣".parse::<Nat>().is_err());
  }

  #[test]
  fn read_tokens() {
    let mut input = Cursor::new("  12345 \n 0042\t7");
    assert_eq!(Nat::read_from(&mut input).unwrap(), Some(Nat::from(12345u32)));
    assert_eq!(Nat::read_from(&mut input).unwrap(), Some(Nat::from(42u32)));
    assert_eq!(Nat::read_from(&mut input).unwrap(), Some(Nat::from(7u32)));
    assert_eq!(Nat::read_from(&mut input).unwrap(), None);
  }

  #[test]
  fn read_invalid_token() {
    let mut input = Cursor::new("12x4 5");
    assert!(matches!(
      Nat::read_from(&mut input),
      Err(ReadError::Parse(NatError::InvalidDigit { found: Some('x'), offset: 2 }))
    ));
    assert_eq!(Nat::read_from(&mut input).unwrap(), Some(Nat::from(5u32)));
  }
}
