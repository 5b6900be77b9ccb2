mod add;
mod cmp;
mod div;
mod fmt;
mod mul;
mod pow;
mod sqrt;

pub use sqrt::sqrt;

use crate::NatError;

/// An arbitrary-precision natural number.
///
/// Stored as decimal digits, least significant first. The digit vector is
/// never empty and never has a zero in its most significant position, except
/// for zero itself, which is exactly `[0]`. Every operation that changes the
/// digits ends with [`Nat::normalize`] to restore this.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Nat {
  digits: Vec<u8>,
}

impl Nat {
  pub fn zero() -> Nat {
    Nat { digits: vec![0] }
  }

  pub fn one() -> Nat {
    Nat { digits: vec![1] }
  }

  /// Builds a value from least-significant-first digits, each `< 10`.
  pub(crate) fn from_digits(mut digits: Vec<u8>) -> Nat {
    debug_assert!(digits.iter().all(|&d| d < 10));
    if digits.is_empty() {
      digits.push(0);
    }
    let mut nat = Nat { digits };
    nat.normalize();
    nat
  }

  /// Strips zeros from the most significant end, keeping at least one digit.
  pub(crate) fn normalize(&mut self) {
    while self.digits.len() > 1 && self.digits.last() == Some(&0) {
      self.digits.pop();
    }
  }

  pub fn is_zero(&self) -> bool {
    self.digits == [0]
  }

  pub(crate) fn is_odd(&self) -> bool {
    self.digits[0] % 2 == 1
  }

  /// The number of decimal digits; zero has one digit.
  pub fn digit_count(&self) -> usize {
    self.digits.len()
  }

  /// The digit at `index`, counting from the least significant position.
  pub fn digit(&self, index: usize) -> Result<u8, NatError> {
    self
      .digits
      .get(index)
      .copied()
      .ok_or(NatError::IndexOutOfRange { index, len: self.digits.len() })
  }

  /// The digits from least to most significant.
  pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
    self.digits.iter().copied()
  }

  pub fn to_u64(&self) -> Option<u64> {
    self.digits.iter().rev().try_fold(0u64, |n, &d| n.checked_mul(10)?.checked_add(d as u64))
  }
}

impl Default for Nat {
  fn default() -> Self {
    Nat::zero()
  }
}

macro_rules! from_unsigned {
  ($($ty:ty),* $(,)?) => {$(
    impl From<$ty> for Nat {
      fn from(mut n: $ty) -> Nat {
        let mut digits = Vec::new();
        loop {
          digits.push((n % 10) as u8);
          n /= 10;
          if n == 0 {
            break;
          }
        }
        Nat { digits }
      }
    }
  )*};
}

from_unsigned!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_unsigned() {
    assert_eq!(Nat::from(0u32).digits, [0]);
    assert_eq!(Nat::from(12345u64).digits, [5, 4, 3, 2, 1]);
    assert_eq!(Nat::from(u128::MAX).digit_count(), 39);
    assert_eq!(Nat::default(), Nat::zero());
  }

  #[test]
  fn from_digits_normalizes() {
    assert_eq!(Nat::from_digits(vec![]), Nat::zero());
    assert_eq!(Nat::from_digits(vec![0, 0, 0]), Nat::zero());
    assert_eq!(Nat::from_digits(vec![7, 0, 1, 0, 0]).digits, [7, 0, 1]);
  }

  #[test]
  fn digit_access() {
    let n = Nat::from(907u32);
    assert_eq!(n.digit(0), Ok(7));
    assert_eq!(n.digit(1), Ok(0));
    assert_eq!(n.digit(2), Ok(9));
    assert_eq!(n.digit(3), Err(NatError::IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(n.digits().rev().collect::<Vec<_>>(), [9, 0, 7]);
  }

  #[test]
  fn to_u64() {
    assert_eq!(Nat::zero().to_u64(), Some(0));
    assert_eq!(Nat::from(u64::MAX).to_u64(), Some(u64::MAX));
    assert_eq!(Nat::from(u64::MAX as u128 + 1).to_u64(), None);
  }
}
