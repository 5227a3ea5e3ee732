//! 日志初始化：只写 stderr，stdout 留给进度行。

use tracing_subscriber::EnvFilter;

/// 默认过滤规则，可用 `RUST_LOG` 覆盖
pub const DEFAULT_LOG_FILTER: &str = "info,rdm_fs=debug";

/// 初始化全局 tracing 订阅者；已初始化过时静默跳过
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
