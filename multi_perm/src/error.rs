//! Error types / 错误类型

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why an access vector is not a multi-permutation
/// 访问向量不是多排列的原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Invalid {
  #[error("length: expect {expect}, got {got}")]
  Len { expect: usize, got: usize },

  #[error("value {val} at {pos} out of [0, {k})")]
  Range { pos: usize, val: i32, k: usize },

  #[error("value {val} at {pos} repeats in slot {slot}")]
  Dup { pos: usize, val: i32, slot: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("block sizes empty")]
  EmptyBlocks,

  #[error("slot {0} has block size 0")]
  ZeroBlock(usize),

  #[error("too many cells: {cells} > {max}")]
  TooLarge { cells: usize, max: usize },

  #[error("invalid access: {0}")]
  Access(#[from] Invalid),

  #[error("arr: {0}")]
  Arr(#[from] md_arr::Error),

  #[error("overflow: {0}")]
  Overflow(&'static str),
}
