use crate::collections::Sequence;
use crate::error::{AppError, AppResult, FormatError};
use crate::models::student::Student;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// 从目录文件加载所有学生记录
///
/// 任何一行格式错误都会使整个加载失败；没有任何记录时同样视为格式错误。
pub fn load_directory(path: &Path) -> AppResult<Sequence<Student>> {
    let path_display = path.display().to_string();
    info!("正在加载目录文件: {}", path_display);

    let content =
        fs::read_to_string(path).map_err(|e| AppError::file_read_failed(&path_display, e))?;

    let directory = parse_directory(&content)?;
    if directory.is_empty() {
        return Err(FormatError::EmptyDirectory { path: path_display }.into());
    }

    info!("成功加载 {} 个学生", directory.size());
    Ok(directory)
}

/// 解析目录文本
///
/// 只忽略最后一条记录之后的空白行，记录之间的空行按格式错误处理。
pub fn parse_directory(content: &str) -> Result<Sequence<Student>, FormatError> {
    let lines: Vec<&str> = content.lines().collect();
    let record_lines = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |last| last + 1);
    if record_lines < lines.len() {
        debug!("忽略末尾 {} 个空行", lines.len() - record_lines);
    }

    let mut directory = Sequence::with_capacity(record_lines);
    for (idx, line) in lines[..record_lines].iter().enumerate() {
        let student = Student::parse_line(line).map_err(|e| e.at_line(idx + 1))?;
        directory.append(student);
    }

    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileError;

    const SAMPLE: &str = "\
Ada Lovelace|12 Maine St|207-555-0101|ada@college.edu|1042
Alan Turing|Coles Tower 3B|207-555-7777|alan@college.edu|5
Grace Hopper|Harpswell Apt 2|207-555-0199|grace@college.edu|300
";

    #[test]
    fn test_parse_keeps_file_order() {
        let directory = parse_directory(SAMPLE).unwrap();
        assert_eq!(directory.size(), 3);
        assert_eq!(directory.get(0).unwrap().last_name(), "Lovelace");
        assert_eq!(directory.get(1).unwrap().last_name(), "Turing");
        assert_eq!(directory.get(2).unwrap().last_name(), "Hopper");
    }

    #[test]
    fn test_parse_reports_line_number() {
        let content = "Ada Lovelace|a|1|e|1\nbroken line\n";
        assert_eq!(
            parse_directory(content).unwrap_err(),
            FormatError::FieldCount { line: 2, found: 1 }
        );
    }

    #[test]
    fn test_interior_blank_line_rejected() {
        let content = "Ada Lovelace|a|1|e|1\n\nAlan Turing|b|2|f|2\n";
        assert_eq!(
            parse_directory(content).unwrap_err(),
            FormatError::FieldCount { line: 2, found: 1 }
        );
    }

    #[test]
    fn test_leading_blank_line_rejected() {
        let content = "   \nAda Lovelace|a|1|e|1\n";
        assert_eq!(
            parse_directory(content).unwrap_err(),
            FormatError::FieldCount { line: 1, found: 1 }
        );
    }

    #[test]
    fn test_trailing_blank_lines_ignored() {
        let content = "Ada Lovelace|a|1|e|1\nAlan Turing|b|2|f|2\n\n  \n\n";
        let directory = parse_directory(content).unwrap();
        assert_eq!(directory.size(), 2);
        assert_eq!(directory.get(1).unwrap().last_name(), "Turing");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_directory(Path::new("no/such/directory.txt")).unwrap_err();
        assert!(matches!(err, AppError::File(FileError::NotFound { .. })));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("directory.txt");
        fs::write(&path, "\n  \n").unwrap();

        let err = load_directory(&path).unwrap_err();
        assert!(matches!(
            err,
            AppError::Format(FormatError::EmptyDirectory { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("directory.txt");
        fs::write(&path, SAMPLE).unwrap();

        let directory = load_directory(&path).unwrap();
        assert_eq!(directory.size(), 3);
    }
}
