//! 可增长的有序序列
//!
//! 元素类型不受约束，插入顺序即初始顺序，允许重复元素。

use crate::error::SequenceError;

/// 动态增长的有序序列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// 创建空序列
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// 按初始容量创建空序列
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// 追加到末尾（均摊 O(1)）
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// 按索引读取
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(SequenceError::IndexOutOfRange { index, len })
    }

    /// 按索引写入，返回被替换的旧元素
    pub fn set(&mut self, index: usize, item: T) -> Result<T, SequenceError> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.items[index], item))
    }

    /// 当前元素数量
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// 供排序使用：只允许重排，不改变元素数量
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    fn check_index(&self, index: usize) -> Result<(), SequenceError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(SequenceError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Vec::from_iter(iter),
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_grows_past_initial_capacity() {
        let mut seq = Sequence::with_capacity(2);
        for i in 0..25 {
            seq.append(i);
        }
        assert_eq!(seq.size(), 25);
        assert_eq!(*seq.get(0).unwrap(), 0);
        assert_eq!(*seq.get(24).unwrap(), 24);
    }

    #[test]
    fn test_get_out_of_range() {
        let seq: Sequence<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(
            seq.get(2),
            Err(SequenceError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_set_replaces_and_checks_bounds() {
        let mut seq: Sequence<String> = vec!["x".to_string(), "y".to_string()]
            .into_iter()
            .collect();

        let old = seq.set(1, "z".to_string()).unwrap();
        assert_eq!(old, "y");
        assert_eq!(seq.get(1).unwrap(), "z");

        assert!(seq.set(5, "w".to_string()).is_err());
        assert_eq!(seq.size(), 2);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut seq = Sequence::new();
        seq.append(7);
        seq.append(7);
        assert_eq!(seq.iter().filter(|v| **v == 7).count(), 2);
    }

    #[test]
    fn test_empty_sequence() {
        let seq: Sequence<u8> = Sequence::default();
        assert!(seq.is_empty());
        assert!(seq.first().is_none());
        assert!(seq.get(0).is_err());
    }
}
