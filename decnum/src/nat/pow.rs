use super::Nat;

impl Nat {
  /// Exponentiation by repeated squaring.
  pub fn pow(&self, exponent: &Nat) -> Nat {
    let mut base = self.clone();
    let mut exponent = exponent.clone();
    let mut result = Nat::one();
    while !exponent.is_zero() {
      if exponent.is_odd() {
        result.mul_assign(&base);
      }
      exponent.halve();
      if !exponent.is_zero() {
        base = base.mul(&base);
      }
    }
    result
  }

  pub fn pow_assign(&mut self, exponent: &Nat) {
    *self = self.pow(exponent);
  }

  /// Halves in place, rounding down, carrying from the most significant
  /// digit downwards.
  pub(crate) fn halve(&mut self) {
    let mut carry = 0;
    for digit in self.digits.iter_mut().rev() {
      let current = carry * 10 + *digit;
      *digit = current / 2;
      carry = current % 2;
    }
    self.normalize();
  }
}
