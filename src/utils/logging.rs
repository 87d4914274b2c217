//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::services::DirectoryReport;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📁 目录文件: {}", config.directory_file.display());
    info!("📄 输出格式: {:?}", config.report_format);
    info!("{}", "=".repeat(60));
}

/// 记录目录加载信息
///
/// # 参数
/// - `path`: 目录文件路径
/// - `total`: 学生总数
pub fn log_directory_loaded(path: &Path, total: usize) {
    info!("✓ 从 {} 加载了 {} 个学生", path.display(), total);
}

/// 记录报告完成信息
pub fn log_report_finished(report: &DirectoryReport) {
    info!("{}", "─".repeat(60));
    for section in &report.sections {
        info!("{}: {} 个", section.label, section.students.len());
    }
    info!("✅ 报告生成完成: {}", report.generated_at);
    info!("{}", "─".repeat(60));
}
