use super::Nat;
use crate::NatError;

impl Nat {
  pub fn div(&self, divisor: &Nat) -> Result<Nat, NatError> {
    self.check_divisor(divisor)?;
    Ok(self.long_div(divisor))
  }

  pub fn div_assign(&mut self, divisor: &Nat) -> Result<(), NatError> {
    *self = self.div(divisor)?;
    Ok(())
  }

  /// The remainder `self - (self / divisor) * divisor`.
  pub fn rem(&self, divisor: &Nat) -> Result<Nat, NatError> {
    Ok(self.div_rem(divisor)?.1)
  }

  pub fn rem_assign(&mut self, divisor: &Nat) -> Result<(), NatError> {
    *self = self.rem(divisor)?;
    Ok(())
  }

  pub fn div_rem(&self, divisor: &Nat) -> Result<(Nat, Nat), NatError> {
    let quotient = self.div(divisor)?;
    let mut remainder = self.clone();
    remainder.sub_assign_unchecked(&quotient.mul(divisor));
    Ok((quotient, remainder))
  }

  fn check_divisor(&self, divisor: &Nat) -> Result<(), NatError> {
    if divisor.is_zero() {
      Err(NatError::DivisionByZero { dividend: self.clone() })
    } else {
      Ok(())
    }
  }

  /// Long division, most significant digit first; `divisor` must be nonzero.
  pub(crate) fn long_div(&self, divisor: &Nat) -> Nat {
    debug_assert!(!divisor.is_zero());
    let mut quotient = vec![0; self.digits.len()];
    let mut remainder = Nat::zero();
    for (i, &digit) in self.digits.iter().enumerate().rev() {
      remainder.shift_in(digit);
      let q = quotient_digit(divisor, &remainder);
      quotient[i] = q;
      remainder.sub_assign_unchecked(&divisor.mul(&Nat::from(q)));
    }
    Nat::from_digits(quotient)
  }

  /// Appends `digit` as the new least significant digit, i.e. `10 * self + digit`.
  fn shift_in(&mut self, digit: u8) {
    self.digits.insert(0, digit);
    self.normalize();
  }
}

/// Binary searches `0..=10` for the largest `q` with `divisor * q <= remainder`.
///
/// The remainder is always below `10 * divisor` here, so the result is a
/// single digit.
fn quotient_digit(divisor: &Nat, remainder: &Nat) -> u8 {
  let (mut lo, mut hi) = (0u8, 10u8);
  while lo < hi {
    let mid = (lo + hi + 1) / 2;
    if divisor.mul(&Nat::from(mid)) <= *remainder {
      lo = mid;
    } else {
      hi = mid - 1;
    }
  }
  lo
}
