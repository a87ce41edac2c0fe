//! Dense array tests / 稠密数组测试

use aok::{OK, Void};
use log::info;
use md_arr::{Error, MdArr, cells};
use proptest::prelude::*;

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn test_new_rejects_bad_shape() -> Void {
  info!("> 非法形状 bad shape");

  assert_eq!(MdArr::<i64>::new(&[]).unwrap_err(), Error::EmptyShape);
  assert_eq!(MdArr::<i64>::new(&[3, 0, 2]).unwrap_err(), Error::ZeroExtent(1));
  assert_eq!(
    MdArr::<u8>::new(&[usize::MAX, 2]).unwrap_err(),
    Error::Overflow
  );
  OK
}

#[test]
fn test_cells() -> Void {
  assert_eq!(cells(&[2, 2, 3, 3, 3])?, 108);
  assert_eq!(cells(&[1])?, 1);
  assert_eq!(cells(&[7, 1, 1])?, 7);
  OK
}

#[test]
fn test_starts_zeroed() -> Void {
  let arr: MdArr<i64> = MdArr::new(&[2, 2, 3])?;
  assert_eq!(arr.len(), 12);
  assert_eq!(arr.ndim(), 3);
  assert_eq!(arr.shape(), &[2, 2, 3]);
  assert!(!arr.is_empty());
  assert!(arr.as_slice().iter().all(|&v| v == 0));
  assert_eq!(arr.total(), 0);
  OK
}

#[test]
fn test_offset_row_major() -> Void {
  let arr: MdArr<u32> = MdArr::new(&[2, 3, 4])?;
  assert_eq!(arr.offset(&[0, 0, 0])?, 0);
  assert_eq!(arr.offset(&[0, 0, 1])?, 1);
  assert_eq!(arr.offset(&[0, 1, 0])?, 4);
  assert_eq!(arr.offset(&[1, 0, 0])?, 12);
  assert_eq!(arr.offset(&[1, 2, 3])?, 23);
  OK
}

#[test]
fn test_bad_coords() -> Void {
  info!("> 非法坐标 bad coords");
  let mut arr: MdArr<i64> = MdArr::new(&[2, 3])?;

  assert_eq!(
    arr.get(&[0]).unwrap_err(),
    Error::Ndim { expect: 2, got: 1 }
  );
  assert_eq!(
    arr.set(&[0, 3], 1).unwrap_err(),
    Error::OutOfBounds {
      dim: 1,
      coord: 3,
      extent: 3
    }
  );
  assert_eq!(
    arr.add(&[2, 0], 1).unwrap_err(),
    Error::OutOfBounds {
      dim: 0,
      coord: 2,
      extent: 2
    }
  );
  assert_eq!(arr.total(), 0);
  OK
}

#[test]
fn test_set_get_add() -> Void {
  let mut arr: MdArr<i64> = MdArr::new(&[3, 3])?;
  arr.set(&[1, 2], 7)?;
  assert_eq!(arr.get(&[1, 2])?, 7);
  assert_eq!(arr.get(&[2, 1])?, 0);

  arr.set(&[1, 2], 4)?;
  assert_eq!(arr.get(&[1, 2])?, 4);

  assert_eq!(arr.add(&[0, 0], 1)?, 1);
  assert_eq!(arr.add(&[0, 0], 1)?, 2);
  assert_eq!(arr.add(&[1, 2], -1)?, 3);
  assert_eq!(arr.incr(&[0, 0])?, 3);
  assert_eq!(arr.total(), 6);
  arr.set(&[0, 0], 2)?;
  assert_eq!(arr.total(), 5);
  OK
}

#[test]
fn test_clear_vs_fill() -> Void {
  info!("> clear 与 fill 区别 clear vs fill");
  let mut arr: MdArr<i64> = MdArr::new(&[2, 2, 2])?;

  arr.fill(3);
  assert_eq!(arr.total(), 24);
  assert_eq!(arr.get(&[1, 0, 1])?, 3);

  arr.clear();
  assert_eq!(arr.total(), 0);
  assert!(arr.as_slice().iter().all(|&v| v == 0));
  OK
}

#[test]
fn test_overflow_wraps() -> Void {
  info!("> 溢出回绕 overflow wraps");
  let mut arr: MdArr<i64> = MdArr::new(&[2, 2])?;
  arr.set(&[0, 1], i64::MAX)?;
  arr.set(&[1, 0], 1)?;
  assert_eq!(arr.total(), i64::MIN);

  assert_eq!(arr.incr(&[0, 1])?, i64::MIN);
  assert_eq!(arr.add(&[1, 1], i64::MIN)?, i64::MIN);
  assert_eq!(arr.add(&[1, 1], -1)?, i64::MAX);

  let mut small: MdArr<u8> = MdArr::new(&[1])?;
  small.set(&[0], u8::MAX)?;
  assert_eq!(small.incr(&[0])?, 0);
  OK
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(32))]

  /// Last write wins, total sums distinct cells
  /// 后写覆盖，总和为各单元之和
  #[test]
  fn prop_total_is_last_writes(
    writes in prop::collection::vec((0usize..3, 0usize..4, -50i64..50), 0..40)
  ) {
    let mut arr: MdArr<i64> = MdArr::new(&[3, 4]).unwrap();
    let mut expect = [[0i64; 4]; 3];
    for &(a, b, v) in &writes {
      arr.set(&[a, b], v).unwrap();
      expect[a][b] = v;
    }
    for (a, row) in expect.iter().enumerate() {
      for (b, &v) in row.iter().enumerate() {
        prop_assert_eq!(arr.get(&[a, b]).unwrap(), v);
      }
    }
    let sum: i64 = expect.iter().flatten().sum();
    prop_assert_eq!(arr.total(), sum);
  }
}
