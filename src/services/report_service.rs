//! 报告服务 - 业务能力层
//!
//! 按固定顺序执行七个查询，组装报告并渲染为文本或 JSON。

use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::debug;

use crate::collections::Sequence;
use crate::models::Student;
use crate::services::extremal::{extremal_subset, render_records, Extreme};
use crate::services::orderings::{
    by_mailbox, by_phone_repetition, by_surname, by_vowel_count, mailbox_key, phone_key,
    surname_key, vowel_count,
};

/// 查询种类，`ALL` 即报告输出顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    SmallestMailbox,
    LargestMailbox,
    FirstBySurname,
    LastBySurname,
    MostVowels,
    LeastVowels,
    FanciestPhone,
}

impl Query {
    pub const ALL: [Query; 7] = [
        Query::SmallestMailbox,
        Query::LargestMailbox,
        Query::FirstBySurname,
        Query::LastBySurname,
        Query::MostVowels,
        Query::LeastVowels,
        Query::FanciestPhone,
    ];

    /// 报告中的标题
    pub fn label(self) -> &'static str {
        match self {
            Query::SmallestMailbox => "Student with smallest SU box",
            Query::LargestMailbox => "Student with largest SU box",
            Query::FirstBySurname => "First student by last name",
            Query::LastBySurname => "Last student by last name",
            Query::MostVowels => "Student with the most vowels",
            Query::LeastVowels => "Student with the least vowels",
            Query::FanciestPhone => "Student with the fanciest phone number",
        }
    }

    /// 在目录上执行查询，目录会被原地重新排序
    pub fn run(self, directory: &mut Sequence<Student>) -> Vec<Student> {
        match self {
            Query::SmallestMailbox => {
                extremal_subset(directory, by_mailbox, mailbox_key, Extreme::Min)
            }
            Query::LargestMailbox => {
                extremal_subset(directory, by_mailbox, mailbox_key, Extreme::Max)
            }
            Query::FirstBySurname => {
                extremal_subset(directory, by_surname, surname_key, Extreme::Min)
            }
            Query::LastBySurname => {
                extremal_subset(directory, by_surname, surname_key, Extreme::Max)
            }
            Query::MostVowels => {
                extremal_subset(directory, by_vowel_count, vowel_count, Extreme::Max)
            }
            Query::LeastVowels => {
                extremal_subset(directory, by_vowel_count, vowel_count, Extreme::Min)
            }
            Query::FanciestPhone => {
                extremal_subset(directory, by_phone_repetition, phone_key, Extreme::Max)
            }
        }
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 单个查询的结果
#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub query: Query,
    pub label: &'static str,
    pub students: Vec<Student>,
}

impl ReportSection {
    /// 并列的学生，每行一个
    pub fn rendered(&self) -> String {
        render_records(self.students.as_slice())
    }
}

/// 完整报告
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryReport {
    pub generated_at: String,
    pub total_students: usize,
    pub sections: Vec<ReportSection>,
}

impl DirectoryReport {
    pub fn section(&self, query: Query) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.query == query)
    }

    /// 文本格式：标题、并列记录，然后一个空行
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            // 写入 String 不会失败
            let _ = write!(out, "{}: {}\n\n", section.label, section.rendered());
        }
        out
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 依次执行全部查询
pub fn build_report(directory: &mut Sequence<Student>) -> DirectoryReport {
    let sections = Query::ALL
        .iter()
        .map(|&query| {
            let students = query.run(directory);
            debug!("{}: {} 个并列结果", query, students.len());
            ReportSection {
                query,
                label: query.label(),
                students,
            }
        })
        .collect();

    DirectoryReport {
        generated_at: chrono::Local::now()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        total_students: directory.size(),
        sections,
    }
}
