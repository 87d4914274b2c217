//! 错误类型定义
//!
//! 所有错误在启动阶段都是致命的：读取或解析失败时直接终止，不产生部分报告。

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 目录文件格式错误
    #[error("格式错误: {0}")]
    Format(#[from] FormatError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 序列访问错误
    #[error("序列错误: {0}")]
    Sequence(#[from] SequenceError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 目录文件格式错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// 字段数量不是 5
    #[error("第 {line} 行字段数量错误: 期望 5 个，实际 {found} 个")]
    FieldCount { line: usize, found: usize },
    /// 姓名字段为空
    #[error("第 {line} 行姓名为空")]
    EmptyName { line: usize },
    /// 信箱编号不是合法整数
    #[error("第 {line} 行信箱编号无效: '{value}'")]
    InvalidMailbox { line: usize, value: String },
    /// 目录中没有任何学生
    #[error("目录文件中没有学生记录: {path}")]
    EmptyDirectory { path: String },
}

impl FormatError {
    /// 替换错误中的行号（单行解析时行号为 0，由加载器补上）
    pub fn at_line(self, line: usize) -> Self {
        match self {
            FormatError::FieldCount { found, .. } => FormatError::FieldCount { line, found },
            FormatError::EmptyName { .. } => FormatError::EmptyName { line },
            FormatError::InvalidMailbox { value, .. } => FormatError::InvalidMailbox { line, value },
            other => other,
        }
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("无法读取配置文件 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 配置值无效
    #[error("配置项 {name} 的值 '{value}' 无效, 期望: {expected}")]
    InvalidValue {
        name: String,
        value: String,
        expected: String,
    },
}

/// 序列访问错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// 索引超出范围
    #[error("索引 {index} 超出范围 (长度 {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误，文件不存在时归类为 NotFound
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            AppError::File(FileError::NotFound { path })
        } else {
            AppError::File(FileError::ReadFailed { path, source })
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_classified() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AppError::file_read_failed("a.txt", io);
        assert!(matches!(err, AppError::File(FileError::NotFound { .. })));
    }

    #[test]
    fn test_at_line_rewrites_line_number() {
        let err = FormatError::FieldCount { line: 0, found: 3 }.at_line(7);
        assert_eq!(err, FormatError::FieldCount { line: 7, found: 3 });
        assert!(err.to_string().contains("第 7 行"));
    }
}
