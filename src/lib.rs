//! # Directory Sort
//!
//! 读取以 `|` 分隔的学生目录文件，并报告满足各类极值条件的学生。
//!
//! ## 架构设计
//!
//! ### ① 容器层（Collections）
//! - `collections/` - 通用可增长序列 `Sequence<T>` 与原地选择排序
//!
//! ### ② 数据层（Models）
//! - `models/student` - 单行解析为 `Student`，格式错误立即失败
//! - `models/loaders` - 读取目录文件，构建 `Sequence<Student>`
//!
//! ### ③ 业务能力层（Services）
//! - `orderings` - 信箱编号 / 姓 / 元音数 / 电话重复数字 四种排序依据
//! - `extremal` - 排序后从一端收集所有并列极值
//! - `report_service` - 七个固定查询与报告渲染
//!
//! ### ④ 应用层（App）
//! - `App` - 启动时加载一次目录，依次执行查询并输出报告
//!
//! ## 模块结构

pub mod app;
pub mod collections;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use collections::{selection_sort_by, Sequence};
pub use config::{Config, ReportFormat};
pub use error::{AppError, AppResult};
pub use models::Student;
pub use services::{build_report, DirectoryReport, Query};
