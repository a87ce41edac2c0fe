//! Error types / 错误类型

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("empty shape")]
  EmptyShape,

  #[error("zero extent at dim {0}")]
  ZeroExtent(usize),

  #[error("cell count overflows usize")]
  Overflow,

  #[error("alloc {0} cells failed")]
  Alloc(usize),

  #[error("coords len: expect {expect}, got {got}")]
  Ndim { expect: usize, got: usize },

  #[error("coord {coord} at dim {dim} out of extent {extent}")]
  OutOfBounds {
    dim: usize,
    coord: usize,
    extent: usize,
  },
}
