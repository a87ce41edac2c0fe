//! Constants / 常量

/// Default cap on dense backend cells (2^28)
/// 稠密后端单元数默认上限
pub const MAX_CELLS: usize = 1 << 28;

/// Largest n whose factorial fits u64
/// 阶乘可放入 u64 的最大 n
pub const MAX_FACTORIAL: usize = 20;
