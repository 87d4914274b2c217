//! 原地选择排序
//!
//! 从末尾向前，每一轮在未排序前缀中找出最大元素并交换到当前位置，
//! 结果为升序。O(n²) 且不稳定：相等元素之间的相对顺序不作保证。

use std::cmp::Ordering;

use super::Sequence;

/// 按比较函数对序列做升序选择排序
pub fn selection_sort_by<T, F>(seq: &mut Sequence<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let items = seq.as_mut_slice();
    for i in (1..items.len()).rev() {
        let mut max_index = 0;
        for j in 1..=i {
            // 严格大于才替换，相等时保留先出现的
            if compare(&items[j], &items[max_index]) == Ordering::Greater {
                max_index = j;
            }
        }
        items.swap(i, max_index);
    }
}
