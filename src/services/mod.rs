//! 业务能力层
//!
//! - `orderings` - 排序依据（键函数与比较函数）
//! - `extremal` - 极值子集提取
//! - `report_service` - 七个固定查询与报告渲染

pub mod extremal;
pub mod orderings;
pub mod report_service;

pub use extremal::{extremal_subset, render_records, Extreme};
pub use report_service::{build_report, DirectoryReport, Query, ReportSection};
