//! Permutation ranking / 排列编号

use crate::{Error, MAX_FACTORIAL, Result};

/// n! as u64
///
/// # Errors
/// `Overflow` if `n > MAX_FACTORIAL`.
pub fn factorial(n: usize) -> Result<u64> {
  if n > MAX_FACTORIAL {
    return Err(Error::Overflow("factorial"));
  }
  Ok((2..=n as u64).product())
}

/// Lexicographic rank of a permutation of `0..k`, in `[0, k!)`
/// 排列在字典序中的编号（Lehmer 码）
///
/// The input must already be a permutation; values are not re-checked.
///
/// # Errors
/// `Overflow` if `k > MAX_FACTORIAL`.
pub fn perm_rank(perm: &[usize]) -> Result<u64> {
  let k = perm.len();
  let mut rank = 0u64;
  for (i, &p) in perm.iter().enumerate() {
    let smaller = perm[i + 1..].iter().filter(|&&q| q < p).count() as u64;
    rank += smaller * factorial(k - 1 - i)?;
  }
  Ok(rank)
}
