//! Dense array storage / 稠密数组存储

use crate::{Cnt, Error, Result};

/// Checked cell count of a shape
/// 形状的单元总数（带溢出检查）
///
/// # Errors
/// `EmptyShape` / `ZeroExtent` for degenerate shapes, `Overflow` if the
/// product does not fit `usize`.
pub fn cells(shape: &[usize]) -> Result<usize> {
  if shape.is_empty() {
    return Err(Error::EmptyShape);
  }
  let mut n: usize = 1;
  for (dim, &extent) in shape.iter().enumerate() {
    if extent == 0 {
      return Err(Error::ZeroExtent(dim));
    }
    n = n.checked_mul(extent).ok_or(Error::Overflow)?;
  }
  Ok(n)
}

/// Dense row-major N-dimensional array
/// 稠密行主序 N 维数组
#[derive(Clone, Debug)]
pub struct MdArr<T: Cnt> {
  shape: Box<[usize]>,
  /// Row-major strides, last dim is 1 / 行主序步长，最后一维为 1
  strides: Box<[usize]>,
  data: Box<[T]>,
}

impl<T: Cnt> MdArr<T> {
  /// Allocate by shape, all cells `T::ZERO`
  /// 按形状分配，所有单元为 `T::ZERO`
  ///
  /// # Errors
  /// Shape errors from [`cells`], `Alloc` if the buffer cannot be reserved.
  pub fn new(shape: &[usize]) -> Result<Self> {
    let len = cells(shape)?;

    let mut strides = vec![0; shape.len()].into_boxed_slice();
    let mut acc = 1;
    for (stride, &extent) in strides.iter_mut().zip(shape).rev() {
      *stride = acc;
      acc *= extent;
    }

    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| Error::Alloc(len))?;
    data.resize(len, T::ZERO);

    Ok(Self {
      shape: shape.into(),
      strides,
      data: data.into_boxed_slice(),
    })
  }

  #[inline]
  #[must_use]
  pub fn shape(&self) -> &[usize] {
    &self.shape
  }

  #[inline]
  #[must_use]
  pub fn ndim(&self) -> usize {
    self.shape.len()
  }

  /// Cell count / 单元数
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.data.len()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  /// Flat row-major index of coords
  /// 坐标对应的行主序平坦下标
  ///
  /// # Errors
  /// `Ndim` on length mismatch, `OutOfBounds` on any coord past its extent.
  pub fn offset(&self, coords: &[usize]) -> Result<usize> {
    if coords.len() != self.shape.len() {
      return Err(Error::Ndim {
        expect: self.shape.len(),
        got: coords.len(),
      });
    }
    let mut pos = 0;
    for (dim, ((&coord, &extent), &stride)) in coords
      .iter()
      .zip(self.shape.iter())
      .zip(self.strides.iter())
      .enumerate()
    {
      if coord >= extent {
        return Err(Error::OutOfBounds { dim, coord, extent });
      }
      pos += coord * stride;
    }
    Ok(pos)
  }

  /// Read cell / 读取单元
  #[inline]
  pub fn get(&self, coords: &[usize]) -> Result<T> {
    let pos = self.offset(coords)?;
    Ok(self.data[pos])
  }

  /// Overwrite cell / 覆盖单元
  #[inline]
  pub fn set(&mut self, coords: &[usize], val: T) -> Result<()> {
    let pos = self.offset(coords)?;
    self.data[pos] = val;
    Ok(())
  }

  /// Add delta to cell, return new value; wraps on overflow
  /// 单元加上增量，返回新值；溢出时回绕
  #[inline]
  pub fn add(&mut self, coords: &[usize], delta: T) -> Result<T> {
    let pos = self.offset(coords)?;
    let cell = &mut self.data[pos];
    *cell = cell.wrapping_add(delta);
    Ok(*cell)
  }

  /// Add one / 加一
  #[inline]
  pub fn incr(&mut self, coords: &[usize]) -> Result<T> {
    self.add(coords, T::ONE)
  }

  /// Zero every cell / 所有单元清零
  #[inline]
  pub fn clear(&mut self) {
    self.data.fill(T::ZERO);
  }

  /// Set every cell to `val`
  /// 所有单元置为 `val`
  ///
  /// Not a substitute for [`clear`](Self::clear) when `val` is not zero:
  /// `total` afterwards counts every cell.
  #[inline]
  pub fn fill(&mut self, val: T) {
    self.data.fill(val);
  }

  /// Sum of every cell, wrapping / 所有单元之和（溢出回绕）
  #[must_use]
  pub fn total(&self) -> T {
    self.data.iter().fold(T::ZERO, |acc, &v| acc.wrapping_add(v))
  }
}
