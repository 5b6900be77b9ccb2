use std::cmp::Ordering;

use super::Nat;

// Normalized values have no leading zeros, so a longer value is always larger
// and values of equal length order by their most significant differing digit.
impl Ord for Nat {
  fn cmp(&self, other: &Nat) -> Ordering {
    self
      .digits
      .len()
      .cmp(&other.digits.len())
      .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
  }
}

impl PartialOrd for Nat {
  fn partial_cmp(&self, other: &Nat) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn length_decides_first() {
    assert!(Nat::from(100u32) > Nat::from(99u32));
    assert!(Nat::from(9u32) < Nat::from(10u32));
    assert!(Nat::zero() < Nat::one());
  }

  #[test]
  fn most_significant_difference_decides() {
    assert!(Nat::from(1299u32) < Nat::from(1300u32));
    assert!(Nat::from(5021u32) > Nat::from(5012u32));
    assert_eq!(Nat::from(4444u32).cmp(&Nat::from(4444u32)), Ordering::Equal);
  }

  #[test]
  fn agrees_with_u128() {
    let samples = [0u128, 1, 9, 10, 11, 99, 100, 12345, 54321, 99999, u64::MAX as u128, u128::MAX];
    for a in samples {
      for b in samples {
        assert_eq!(Nat::from(a).cmp(&Nat::from(b)), a.cmp(&b), "{a} <=> {b}");
      }
    }
  }
}
