use std::ops::{Add, AddAssign};

use super::Nat;
use crate::NatError;

impl Nat {
  pub fn add(&self, rhs: &Nat) -> Nat {
    let mut sum = self.clone();
    sum.add_assign(rhs);
    sum
  }

  pub fn add_assign(&mut self, rhs: &Nat) {
    let mut carry = 0;
    let mut i = 0;
    while i < rhs.digits.len() || carry != 0 {
      if i == self.digits.len() {
        self.digits.push(0);
      }
      let sum = self.digits[i] + rhs.digits.get(i).copied().unwrap_or(0) + carry;
      self.digits[i] = sum % 10;
      carry = sum / 10;
      i += 1;
    }
  }

  pub fn sub(&self, rhs: &Nat) -> Result<Nat, NatError> {
    let mut difference = self.clone();
    difference.sub_assign(rhs)?;
    Ok(difference)
  }

  pub fn sub_assign(&mut self, rhs: &Nat) -> Result<(), NatError> {
    if *self < *rhs {
      return Err(NatError::NegativeResult { minuend: self.clone(), subtrahend: rhs.clone() });
    }
    self.sub_assign_unchecked(rhs);
    Ok(())
  }

  /// Subtracts with borrow propagation; `self` must be at least `rhs`.
  pub(crate) fn sub_assign_unchecked(&mut self, rhs: &Nat) {
    debug_assert!(*self >= *rhs);
    let mut borrow = 0;
    for (i, digit) in self.digits.iter_mut().enumerate() {
      if i >= rhs.digits.len() && borrow == 0 {
        break;
      }
      let sub = rhs.digits.get(i).copied().unwrap_or(0) + borrow;
      if *digit >= sub {
        *digit -= sub;
        borrow = 0;
      } else {
        *digit = *digit + 10 - sub;
        borrow = 1;
      }
    }
    self.normalize();
  }

  /// `++x`
  pub fn increment(&mut self) -> &mut Nat {
    self.add_assign(&Nat::one());
    self
  }

  /// `x++`; returns the value before incrementing.
  pub fn post_increment(&mut self) -> Nat {
    let old = self.clone();
    self.increment();
    old
  }

  /// `--x`; fails on zero without changing it.
  pub fn decrement(&mut self) -> Result<&mut Nat, NatError> {
    self.sub_assign(&Nat::one())?;
    Ok(self)
  }

  /// `x--`; returns the value before decrementing.
  pub fn post_decrement(&mut self) -> Result<Nat, NatError> {
    let old = self.clone();
    self.decrement()?;
    Ok(old)
  }
}

impl Add<&Nat> for &Nat {
  type Output = Nat;

  fn add(self, rhs: &Nat) -> Nat {
    Nat::add(self, rhs)
  }
}

impl AddAssign<&Nat> for Nat {
  fn add_assign(&mut self, rhs: &Nat) {
    Nat::add_assign(self, rhs)
  }
}
