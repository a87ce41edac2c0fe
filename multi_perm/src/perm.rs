//! Multi-permutation table / 多排列计数表

use log::{debug, error};
use md_arr::MdArr;

use crate::{
  AccessIter, Conf, Error, Invalid, Result,
  conf::Opt,
  rank::{factorial, perm_rank},
};

/// Derived backend shape: block size `k` expands to `k` dims of extent `k`
/// 派生的后端形状：块大小 `k` 展开为 `k` 个范围为 `k` 的维度
///
/// `[2, 3]` -> `[2, 2, 3, 3, 3]`
pub fn shape(blocks: &[usize]) -> Box<[usize]> {
  blocks
    .iter()
    .flat_map(|&k| std::iter::repeat_n(k, k))
    .collect()
}

/// Counting table indexed by concatenated permutations
/// 以拼接排列为索引的计数表
///
/// The backend is dense over the full cross product of the derived shape,
/// only permutation-shaped coordinates are reachable through this type.
/// 后端在派生形状的完整笛卡尔积上是稠密的，只有排列形状的坐标可经由本类型访问。
///
/// Validation reuses internal scratch buffers, hence `&mut self` on reads.
/// 校验复用内部缓冲区，因此读取也需要 `&mut self`。
#[derive(Debug)]
pub struct MultiPerm {
  blocks: Box<[usize]>,
  shape: Box<[usize]>,
  /// Occupancy by global offset, reset per check / 按全局偏移的占用位图，每次校验前重置
  seen: Vec<bool>,
  /// Validated access as backend coords / 校验后转换的后端坐标
  coords: Vec<usize>,
  arr: MdArr<i64>,
}

impl MultiPerm {
  /// Build with default options
  /// 以默认选项构建
  ///
  /// The default `MAX_CELLS` cap is a guard against runaway dense
  /// allocation, so some positive block vectors such as `[9]` fail with
  /// `TooLarge`; raise it with `Conf::MaxCells` via
  /// [`with_conf`](Self::with_conf).
  /// 默认 `MAX_CELLS` 上限用于防止稠密分配失控，`[9]` 等正块向量会返回
  /// `TooLarge`，可通过 `Conf::MaxCells` 调高。
  ///
  /// # Errors
  /// See [`with_conf`](Self::with_conf).
  #[inline]
  pub fn new(blocks: &[usize]) -> Result<Self> {
    Self::with_conf(blocks, &[])
  }

  /// Build from block sizes, one per slot
  /// 由块大小构建，每个槽位一个
  ///
  /// # Errors
  /// - `EmptyBlocks` if `blocks` is empty
  /// - `ZeroBlock` if any block size is 0
  /// - `TooLarge` if the dense backend exceeds `Conf::MaxCells`
  /// - `Arr` if the backend cannot be sized or allocated
  pub fn with_conf(blocks: &[usize], conf: &[Conf]) -> Result<Self> {
    let opt = Opt::new(conf);
    if blocks.is_empty() {
      return Err(Error::EmptyBlocks);
    }
    if let Some(slot) = blocks.iter().position(|&k| k == 0) {
      return Err(Error::ZeroBlock(slot));
    }

    let shape = shape(blocks);
    let cells = md_arr::cells(&shape)?;
    if cells > opt.max_cells {
      return Err(Error::TooLarge {
        cells,
        max: opt.max_cells,
      });
    }
    let arr = MdArr::new(&shape)?;
    let dims = shape.len();
    debug!("multi_perm blocks={blocks:?} dims={dims} cells={cells}");

    Ok(Self {
      blocks: blocks.into(),
      shape,
      seen: vec![false; dims],
      coords: Vec::with_capacity(dims),
      arr,
    })
  }

  #[inline]
  #[must_use]
  pub fn blocks(&self) -> &[usize] {
    &self.blocks
  }

  /// Derived shape / 派生形状
  #[inline]
  #[must_use]
  pub fn shape(&self) -> &[usize] {
    &self.shape
  }

  /// Required access vector length / 访问向量所需长度
  #[inline]
  #[must_use]
  pub fn dims(&self) -> usize {
    self.shape.len()
  }

  /// Dense backend cell count / 稠密后端单元数
  #[inline]
  #[must_use]
  pub fn cells(&self) -> usize {
    self.arr.len()
  }

  /// Slot owning dimension `dim` of the derived shape
  /// 派生形状中第 `dim` 维所属的槽位
  #[must_use]
  pub fn block_of(&self, dim: usize) -> Option<usize> {
    let mut rest = dim;
    for (slot, &k) in self.blocks.iter().enumerate() {
      if rest < k {
        return Some(slot);
      }
      rest -= k;
    }
    None
  }

  /// Check that `access` is one permutation per slot
  /// 检查 `access` 是否每个槽位恰为一个排列
  ///
  /// # Errors
  /// The first violated clause: length, range, or duplicate.
  pub fn check(&mut self, access: &[i32]) -> std::result::Result<(), Invalid> {
    let dims = self.shape.len();
    if access.len() != dims {
      debug!("access len {} != {dims}", access.len());
      return Err(Invalid::Len {
        expect: dims,
        got: access.len(),
      });
    }

    self.seen.fill(false);
    let mut offset = 0;
    for (slot, &k) in self.blocks.iter().enumerate() {
      for pos in offset..offset + k {
        let val = access[pos];
        let Some(v) = usize::try_from(val).ok().filter(|&v| v < k) else {
          debug!("access[{pos}]={val} out of [0, {k})");
          return Err(Invalid::Range { pos, val, k });
        };
        let mark = &mut self.seen[offset + v];
        if *mark {
          debug!("access[{pos}]={val} repeats in slot {slot}");
          return Err(Invalid::Dup { pos, val, slot });
        }
        *mark = true;
      }
      offset += k;
    }
    Ok(())
  }

  #[inline]
  #[must_use]
  pub fn is_valid(&mut self, access: &[i32]) -> bool {
    self.check(access).is_ok()
  }

  /// Validate then load backend coords
  /// 校验并载入后端坐标
  fn locate(&mut self, access: &[i32], op: &str) -> Result<()> {
    if let Err(e) = self.check(access) {
      error!("{op}: {e}");
      return Err(e.into());
    }
    self.coords.clear();
    // non-negative after check
    self.coords.extend(access.iter().map(|&v| v as usize));
    Ok(())
  }

  /// Read count / 读取计数
  ///
  /// # Errors
  /// `Access` if `access` is not a multi-permutation.
  pub fn get(&mut self, access: &[i32]) -> Result<i64> {
    self.locate(access, "get")?;
    Ok(self.arr.get(&self.coords)?)
  }

  /// Overwrite count / 覆盖计数
  ///
  /// # Errors
  /// `Access` if `access` is not a multi-permutation; nothing is written.
  pub fn set(&mut self, access: &[i32], val: i64) -> Result<()> {
    self.locate(access, "set")?;
    Ok(self.arr.set(&self.coords, val)?)
  }

  /// Add one, return new count, wrapping past `i64::MAX`
  /// 计数加一并返回新值，超过 `i64::MAX` 时回绕
  ///
  /// # Errors
  /// `Access` if `access` is not a multi-permutation; nothing is written.
  pub fn incr(&mut self, access: &[i32]) -> Result<i64> {
    self.locate(access, "incr")?;
    Ok(self.arr.incr(&self.coords)?)
  }

  /// Zero every backend cell, reachable or not
  /// 将所有后端单元清零（无论是否可达）
  #[inline]
  pub fn clear(&mut self) {
    self.arr.clear();
  }

  /// Sum over every backend cell, wrapping / 所有后端单元之和（溢出回绕）
  #[inline]
  #[must_use]
  pub fn total(&self) -> i64 {
    self.arr.total()
  }

  /// Number of valid access vectors, product of `k!`
  /// 合法访问向量个数，即各 `k!` 之积
  ///
  /// # Errors
  /// `Overflow` if the product does not fit u64.
  pub fn compact_len(&self) -> Result<u64> {
    self.blocks.iter().try_fold(1u64, |acc, &k| {
      acc
        .checked_mul(factorial(k)?)
        .ok_or(Error::Overflow("compact_len"))
    })
  }

  /// Compact index of `access` in `[0, compact_len)`, slot 0 most significant
  /// `access` 的紧凑编号，槽位 0 为最高位
  ///
  /// Matches the order of [`iter`](Self::iter).
  ///
  /// # Errors
  /// `Access` for an invalid vector, `Overflow` if the index does not fit u64.
  pub fn rank(&mut self, access: &[i32]) -> Result<u64> {
    self.locate(access, "rank")?;
    let mut idx = 0u64;
    let mut offset = 0;
    for &k in self.blocks.iter() {
      let r = perm_rank(&self.coords[offset..offset + k])?;
      idx = idx
        .checked_mul(factorial(k)?)
        .and_then(|v| v.checked_add(r))
        .ok_or(Error::Overflow("rank"))?;
      offset += k;
    }
    Ok(idx)
  }

  /// Enumerate every valid access vector
  /// 枚举所有合法访问向量
  #[must_use]
  pub fn iter(&self) -> AccessIter {
    AccessIter::new(&self.blocks)
  }
}
