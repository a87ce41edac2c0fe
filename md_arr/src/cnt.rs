//! Cell value trait
//! 单元值 trait

use std::fmt::Debug;

/// Value stored in a cell
/// 单元中存储的值
pub trait Cnt: Copy + Default + Debug + PartialEq + Send + Sync + 'static {
  /// Cleared cell value / 清零后的单元值
  const ZERO: Self;
  /// Unit increment / 单位增量
  const ONE: Self;

  /// Two's complement add, same result in every build profile
  /// 补码加法，各构建配置下结果一致
  fn wrapping_add(self, rhs: Self) -> Self;
}

macro_rules! impl_cnt {
  ($($t:ty),*) => {
    $(
      impl Cnt for $t {
        const ZERO: Self = 0;
        const ONE: Self = 1;

        #[inline(always)]
        fn wrapping_add(self, rhs: Self) -> Self {
          <$t>::wrapping_add(self, rhs)
        }
      }
    )*
  };
}

impl_cnt!(
  u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize
);
