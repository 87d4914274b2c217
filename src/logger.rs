//! 日志初始化
//!
//! 日志写到 stderr，stdout 只输出报告。

use tracing_subscriber::EnvFilter;

/// 初始化日志，`RUST_LOG` 优先，否则默认 `info`，verbose 时为 `debug`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 重复初始化（例如测试中）直接忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
