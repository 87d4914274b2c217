use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConfigError;

/// 指定 TOML 配置文件路径的环境变量
pub const CONFIG_FILE_ENV: &str = "DIRECTORY_SORT_CONFIG";

/// 报告输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                name: "REPORT_FORMAT".to_string(),
                value: s.to_string(),
                expected: "text | json".to_string(),
            }),
        }
    }
}

/// 程序配置
///
/// 优先级：命令行参数 > 环境变量 > TOML 配置文件 > 默认值
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 目录文件路径
    pub directory_file: PathBuf,
    /// 报告输出格式
    pub report_format: ReportFormat,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory_file: PathBuf::from("directory-files/directory.txt"),
            report_format: ReportFormat::Text,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量加载配置，设置了 `DIRECTORY_SORT_CONFIG` 时先读取该 TOML 文件
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) => Self::from_toml_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        base.with_overrides(|name| std::env::var(name).ok())
    }

    /// 从 TOML 文件加载配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 用查找函数提供的值覆盖配置项
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("DIRECTORY_FILE") {
            self.directory_file = PathBuf::from(path);
        }
        if let Some(format) = lookup("REPORT_FORMAT") {
            self.report_format = format.parse()?;
        }
        if let Some(verbose) = lookup("VERBOSE_LOGGING") {
            self.verbose_logging =
                verbose
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        name: "VERBOSE_LOGGING".to_string(),
                        value: verbose.clone(),
                        expected: "true | false".to_string(),
                    })?;
        }
        Ok(self)
    }

    /// 命令行指定的目录文件
    pub fn with_directory_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.directory_file = path.into();
        self
    }
}
