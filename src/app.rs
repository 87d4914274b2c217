use crate::collections::Sequence;
use crate::config::{Config, ReportFormat};
use crate::models::{load_directory, Student};
use crate::services::{build_report, DirectoryReport};
use crate::utils::logging::{log_directory_loaded, log_report_finished, log_startup};
use anyhow::Result;
use std::io::Write;

/// 应用主结构
///
/// 持有整个运行期间唯一的目录集合，查询时以参数形式传入。
pub struct App {
    config: Config,
    directory: Sequence<Student>,
}

impl App {
    /// 初始化应用：一次性加载全部学生
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let directory = load_directory(&config.directory_file)?;
        log_directory_loaded(&config.directory_file, directory.size());

        Ok(Self { config, directory })
    }

    /// 已加载的目录
    pub fn directory(&self) -> &Sequence<Student> {
        &self.directory
    }

    /// 执行全部查询
    pub fn report(&mut self) -> DirectoryReport {
        let report = build_report(&mut self.directory);
        log_report_finished(&report);
        report
    }

    /// 按配置的格式渲染报告
    pub fn render(&mut self) -> Result<String> {
        let report = self.report();
        match self.config.report_format {
            ReportFormat::Text => Ok(report.render_text()),
            ReportFormat::Json => report.render_json(),
        }
    }

    /// 运行应用主逻辑，报告写到 `out`
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let rendered = self.render()?;
        out.write_all(rendered.as_bytes())?;
        if self.config.report_format == ReportFormat::Json {
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }
}
