use std::ops::{Mul, MulAssign};

use super::Nat;

impl Nat {
  /// Schoolbook multiplication.
  ///
  /// Every digit product is summed into its column first, and carries are
  /// resolved in one pass over the columns afterwards, so each column only
  /// has to hold `81 * min(m, n)`.
  pub fn mul(&self, rhs: &Nat) -> Nat {
    if self.is_zero() || rhs.is_zero() {
      return Nat::zero();
    }
    let mut columns = vec![0u64; self.digits.len() + rhs.digits.len()];
    for (i, &a) in self.digits.iter().enumerate() {
      for (j, &b) in rhs.digits.iter().enumerate() {
        columns[i + j] += u64::from(a * b);
      }
    }
    let mut carry = 0;
    let digits = columns
      .into_iter()
      .map(|column| {
        let total = column + carry;
        carry = total / 10;
        (total % 10) as u8
      })
      .collect();
    debug_assert_eq!(carry, 0);
    Nat::from_digits(digits)
  }

  pub fn mul_assign(&mut self, rhs: &Nat) {
    *self = Nat::mul(self, rhs);
  }
}

impl Mul<&Nat> for &Nat {
  type Output = Nat;

  fn mul(self, rhs: &Nat) -> Nat {
    Nat::mul(self, rhs)
  }
}

impl MulAssign<&Nat> for Nat {
  fn mul_assign(&mut self, rhs: &Nat) {
    Nat::mul_assign(self, rhs)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn nat(s: &str) -> Nat {
    s.parse().unwrap()
  }

  #[test]
  fn products() {
    assert_eq!(nat("12345").mul(&Nat::from(12345u32)), nat("152399025"));
    assert_eq!(nat("99").mul(&nat("99")), nat("9801"));
    assert_eq!(nat("1").mul(&nat("987654321")), nat("987654321"));
    assert_eq!(
      nat("123456789012345678901234567890").mul(&nat("987654321098765432109876543210")),
      nat("121932631137021795226185032733622923332237463801111263526900"),
    );
  }

  #[test]
  fn zero_short_circuits() {
    assert_eq!(nat("0").mul(&nat("123456789")), Nat::zero());
    assert_eq!(nat("123456789").mul(&nat("0")), Nat::zero());
  }

  #[test]
  fn mul_assign() {
    let mut n = nat("25");
    n *= &nat("4");
    assert_eq!(n, nat("100"));
    n.mul_assign(&n.clone());
    assert_eq!(n, nat("10000"));
    assert_eq!(&n * &Nat::zero(), Nat::zero());
  }

  #[test]
  fn agrees_with_u128() {
    let samples = [0u128, 1, 7, 10, 99, 1000, 31337, 99999999, u64::MAX as u128];
    for a in samples {
      for b in samples {
        assert_eq!(Nat::from(a).mul(&Nat::from(b)), Nat::from(a * b), "{a} * {b}");
      }
    }
  }
}
