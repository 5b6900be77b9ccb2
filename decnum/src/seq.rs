//! Classical integer sequences, each computed from scratch on every call.

use std::mem;

use crate::Nat;

/// `n!`, with `0! = 1`.
pub fn factorial(n: u64) -> Nat {
  let mut product = Nat::one();
  for k in 2..=n {
    product.mul_assign(&Nat::from(k));
  }
  product
}

/// The zero-indexed Fibonacci number: `F(0) = 0`, `F(1) = 1`, `F(10) = 55`.
pub fn fibonacci(n: u64) -> Nat {
  let (mut a, mut b) = (Nat::zero(), Nat::one());
  for _ in 0..n {
    let next = a.add(&b);
    a = mem::replace(&mut b, next);
  }
  a
}

/// The `n`th Catalan number, `C(0) = 1`, `C(5) = 42`.
///
/// Uses `C(k + 1) = C(k) * 2(2k + 1) / (k + 2)`; every intermediate quotient
/// is exact.
pub fn catalan(n: u64) -> Nat {
  let mut c = Nat::one();
  for k in 0..u128::from(n) {
    c.mul_assign(&Nat::from(2 * (2 * k + 1)));
    c = c.long_div(&Nat::from(k + 2));
  }
  c
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn factorials() {
    assert_eq!(factorial(0), Nat::one());
    assert_eq!(factorial(1), Nat::one());
    assert_eq!(factorial(5).to_string(), "120");
    assert_eq!(factorial(20), Nat::from(2432902008176640000u64));
    assert_eq!(factorial(30).to_string(), "265252859812191058636308480000000");
  }

  #[test]
  fn fibonacci_is_zero_indexed() {
    let expected = [0u32, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
    for (n, f) in expected.into_iter().enumerate() {
      assert_eq!(fibonacci(n as u64), Nat::from(f), "F({n})");
    }
    assert_eq!(fibonacci(100).to_string(), "354224848179261915075");
  }

  #[test]
  fn catalan_numbers() {
    let expected = [1u32, 1, 2, 5, 14, 42, 132, 429, 1430, 4862, 16796];
    for (n, c) in expected.into_iter().enumerate() {
      assert_eq!(catalan(n as u64), Nat::from(c), "C({n})");
    }
    assert_eq!(catalan(50).to_string(), "1978261657756160653623774456");
  }
}
