//! 排序依据 - 纯函数
//!
//! 每种排序都由一个键函数定义，比较函数只是对键做升序比较，
//! 这样提取极值子集时可以直接复用同一个键函数。

use std::cmp::Ordering;

use phf::phf_set;

use crate::models::Student;

/// 元音集合（小写）
static VOWELS: phf::Set<char> = phf_set! { 'a', 'e', 'i', 'o', 'u' };

/// 信箱编号
pub fn mailbox_key(student: &Student) -> i32 {
    student.mailbox()
}

/// 姓（小写，用于忽略大小写的字典序）
pub fn surname_key(student: &Student) -> String {
    student.last_name().to_lowercase()
}

/// 名与姓拼接后的元音数量，忽略大小写
pub fn vowel_count(student: &Student) -> usize {
    student
        .first_name()
        .chars()
        .chain(student.last_name().chars())
        .flat_map(char::to_lowercase)
        .filter(|c| VOWELS.contains(c))
        .count()
}

/// 电话号码中出现次数最多的单个数字的次数；没有数字时为 0
pub fn max_digit_repetition(phone: &str) -> usize {
    let mut counts = [0usize; 10];
    for digit in phone.chars().filter_map(|c| c.to_digit(10)) {
        counts[digit as usize] += 1;
    }
    counts.into_iter().max().unwrap_or(0)
}

/// 按学生电话计算的最大重复数字次数
pub fn phone_key(student: &Student) -> usize {
    max_digit_repetition(student.phone())
}

pub fn by_mailbox(a: &Student, b: &Student) -> Ordering {
    mailbox_key(a).cmp(&mailbox_key(b))
}

pub fn by_surname(a: &Student, b: &Student) -> Ordering {
    surname_key(a).cmp(&surname_key(b))
}

pub fn by_vowel_count(a: &Student, b: &Student) -> Ordering {
    vowel_count(a).cmp(&vowel_count(b))
}

pub fn by_phone_repetition(a: &Student, b: &Student) -> Ordering {
    phone_key(a).cmp(&phone_key(b))
}
