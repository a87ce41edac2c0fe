//! Table configuration / 计数表配置

use crate::MAX_CELLS;

/// Construction option / 构造选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conf {
  /// Cap on dense backend cells / 稠密后端单元数上限
  MaxCells(usize),
}

/// Resolved options / 解析后的选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Opt {
  pub max_cells: usize,
}

impl Default for Opt {
  fn default() -> Self {
    Self {
      max_cells: MAX_CELLS,
    }
  }
}

impl Opt {
  /// Later entries override earlier ones / 后出现的覆盖先出现的
  pub fn new(conf: &[Conf]) -> Self {
    let mut opt = Self::default();
    for c in conf {
      match c {
        Conf::MaxCells(n) => opt.max_cells = *n,
      }
    }
    opt
  }
}
