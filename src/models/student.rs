use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// 每行的字段数量：姓名|地址|电话|邮箱|信箱编号
pub const FIELD_COUNT: usize = 5;

/// 学生记录，构造后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    first_name: String,
    /// 姓名字段中最后一个以空白分隔的词
    last_name: String,
    address: String,
    phone: String,
    email: String,
    /// 校园信箱编号（SU box）
    mailbox: i32,
}

impl Student {
    /// 解析一行目录数据
    ///
    /// 错误中的行号为 0，由加载器通过 [`FormatError::at_line`] 补上。
    pub fn parse_line(line: &str) -> Result<Self, FormatError> {
        let parts: Vec<&str> = line.split('|').map(str::trim).collect();
        if parts.len() != FIELD_COUNT {
            return Err(FormatError::FieldCount {
                line: 0,
                found: parts.len(),
            });
        }

        let mut names = parts[0].split_whitespace();
        let first_name = names.next().ok_or(FormatError::EmptyName { line: 0 })?;
        let last_name = names.last().unwrap_or(first_name);

        let mailbox = parts[4]
            .parse::<i32>()
            .map_err(|_| FormatError::InvalidMailbox {
                line: 0,
                value: parts[4].to_string(),
            })?;

        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            address: parts[1].to_string(),
            phone: parts[2].to_string(),
            email: parts[3].to_string(),
            mailbox,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn mailbox(&self) -> i32 {
        self.mailbox
    }
}

impl FromStr for Student {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | {} | {} | {} | {}",
            self.first_name, self.last_name, self.address, self.phone, self.email, self.mailbox
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_line() {
        let student: Student =
            "Ada Byron Lovelace | 12 Maine St | 207-555-0101 | ada@college.edu | 1042"
                .parse()
                .unwrap();

        assert_eq!(student.first_name(), "Ada");
        // 姓取最后一个词
        assert_eq!(student.last_name(), "Lovelace");
        assert_eq!(student.address(), "12 Maine St");
        assert_eq!(student.phone(), "207-555-0101");
        assert_eq!(student.email(), "ada@college.edu");
        assert_eq!(student.mailbox(), 1042);
    }

    #[test]
    fn test_single_token_name() {
        let student = Student::parse_line("Cher|a|1|c@d|3").unwrap();
        assert_eq!(student.first_name(), "Cher");
        assert_eq!(student.last_name(), "Cher");
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!(
            Student::parse_line("Ada Lovelace|12 Maine St|555|ada@x.edu"),
            Err(FormatError::FieldCount { line: 0, found: 4 })
        );
        assert_eq!(
            Student::parse_line("A B|c|d|e|1|extra"),
            Err(FormatError::FieldCount { line: 0, found: 6 })
        );
    }

    #[test]
    fn test_trailing_pipe_is_extra_field() {
        assert_eq!(
            Student::parse_line("Ada Lovelace|x|555|a@b|12|"),
            Err(FormatError::FieldCount { line: 0, found: 6 })
        );
    }

    #[test]
    fn test_invalid_mailbox() {
        let err = Student::parse_line("Ada Lovelace|x|555|a@b|12a").unwrap_err();
        assert!(matches!(err, FormatError::InvalidMailbox { ref value, .. } if value == "12a"));
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            Student::parse_line("   |x|555|a@b|1"),
            Err(FormatError::EmptyName { line: 0 })
        );
    }

    #[test]
    fn test_display_format() {
        let student = Student::parse_line("Eve  Ortiz|Coles Tower|555-1234|eve@x.edu|7").unwrap();
        assert_eq!(
            student.to_string(),
            "Eve Ortiz | Coles Tower | 555-1234 | eve@x.edu | 7"
        );
    }
}
