#![cfg_attr(docsrs, feature(doc_cfg))]

//! Dense multi-dimensional array
//! 稠密多维数组
//!
//! Every coordinate combination of the shape owns one cell in a flat
//! row-major buffer.
//! 形状内每个坐标组合在行主序平坦缓冲区中占一个单元。
//!
//! ```rust
//! use md_arr::MdArr;
//!
//! let mut arr: MdArr<i64> = MdArr::new(&[2, 3]).unwrap();
//! arr.set(&[1, 2], 5).unwrap();
//! arr.add(&[0, 1], 2).unwrap();
//! assert_eq!(arr.get(&[1, 2]).unwrap(), 5);
//! assert_eq!(arr.total(), 7);
//! arr.clear();
//! assert_eq!(arr.total(), 0);
//! ```

mod arr;
mod cnt;
mod error;

pub use arr::{MdArr, cells};
pub use cnt::Cnt;
pub use error::{Error, Result};
