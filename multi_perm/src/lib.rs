#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Multi-permutation counting table
//! 多排列计数表
//!
//! Counts indexed by the concatenation of one permutation per slot, as used
//! when tallying ordinal patterns for permutation entropy estimators.
//! 以每个槽位一个排列拼接而成的向量为索引的计数，用于序数模式统计。
//!
//! ```rust
//! use multi_perm::MultiPerm;
//!
//! let mut t = MultiPerm::new(&[2, 3]).unwrap();
//! assert_eq!(t.shape(), &[2, 2, 3, 3, 3]);
//!
//! t.clear();
//! t.set(&[1, 0, 2, 0, 1], 7).unwrap();
//! assert_eq!(t.get(&[1, 0, 2, 0, 1]).unwrap(), 7);
//! assert_eq!(t.total(), 7);
//!
//! // duplicate 0 in the second slot / 第二个槽位出现重复的 0
//! assert!(!t.is_valid(&[1, 0, 2, 0, 0]));
//! assert!(t.get(&[0, 0, 0, 1, 2]).is_err());
//! ```

mod conf;
mod consts;
mod error;
mod iter;
mod perm;
mod rank;

pub use conf::Conf;
pub use consts::{MAX_CELLS, MAX_FACTORIAL};
pub use error::{Error, Invalid, Result};
pub use iter::AccessIter;
pub use perm::{MultiPerm, shape};
pub use rank::{factorial, perm_rank};
