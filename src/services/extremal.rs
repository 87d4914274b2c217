//! 极值子集提取
//!
//! 先按比较函数升序排序，再从一端取出极值，沿该端向内收集所有键相同的元素，
//! 遇到第一个不相等的元素即停止。排序后相等元素必然连续，
//! 但由于选择排序不稳定，并列元素之间的顺序不作保证。

use std::cmp::Ordering;
use std::fmt::Display;

use crate::collections::{selection_sort_by, Sequence};

/// 取哪一端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    /// 最小值（排序后的开头）
    Min,
    /// 最大值（排序后的末尾）
    Max,
}

/// 排序序列并返回所有并列极值的元素
///
/// 结果按排序后的数组顺序返回；空序列返回空结果。
pub fn extremal_subset<T, C, K, V>(
    seq: &mut Sequence<T>,
    compare: C,
    key: K,
    extreme: Extreme,
) -> Vec<T>
where
    T: Clone,
    C: FnMut(&T, &T) -> Ordering,
    K: Fn(&T) -> V,
    V: PartialEq,
{
    selection_sort_by(seq, compare);

    let items = seq.as_slice();
    let boundary = match extreme {
        Extreme::Min => items.first(),
        Extreme::Max => items.last(),
    };
    let Some(boundary) = boundary else {
        return Vec::new();
    };
    let target = key(boundary);

    match extreme {
        Extreme::Min => items
            .iter()
            .take_while(|item| key(*item) == target)
            .cloned()
            .collect(),
        Extreme::Max => {
            let mut tied: Vec<T> = items
                .iter()
                .rev()
                .take_while(|item| key(*item) == target)
                .cloned()
                .collect();
            tied.reverse();
            tied
        }
    }
}

/// 每条记录一行，去掉末尾空白
pub fn render_records<T: Display>(records: &[T]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}
