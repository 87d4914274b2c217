//! 通用容器层
//!
//! - `sequence` - 可增长的有序序列 `Sequence<T>`
//! - `sort` - 基于比较函数的原地选择排序

pub mod sequence;
pub mod sort;

pub use sequence::Sequence;
pub use sort::selection_sort_by;
