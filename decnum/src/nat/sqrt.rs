use super::Nat;

/// The integer square root: the largest `r` with `r * r <= n`.
pub fn sqrt(n: &Nat) -> Nat {
  let mut lo = Nat::one();
  let mut hi = n.clone();
  let mut root = Nat::zero();
  while lo <= hi {
    let mut mid = lo.add(&hi);
    mid.halve();
    if mid.mul(&mid) <= *n {
      lo = mid.add(&Nat::one());
      root = mid;
    } else {
      mid.sub_assign_unchecked(&Nat::one());
      hi = mid;
    }
  }
  root
}

impl Nat {
  pub fn sqrt(&self) -> Nat {
    sqrt(self)
  }
}
