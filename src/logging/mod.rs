// src/logging/mod.rs

pub mod publish_log;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// 初始化全局 tracing 日志
///
/// JSON 格式按小时滚动写入 `log_dir/adx_pipeline.json.*`，级别由 `RUST_LOG`
/// 控制，默认 `info`。返回的 guard 必须在整个运行期间保持存活。
pub fn init_tracing(log_dir: &str) -> anyhow::Result<WorkerGuard> {
    let log_file = RollingFileAppender::builder()
        .rotation(Rotation::HOURLY)
        .filename_prefix("adx_pipeline.json")
        .build(log_dir)
        .with_context(|| format!("Unable to open log file in {}", log_dir))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().json().with_writer(non_blocking));
    tracing::subscriber::set_global_default(subscriber)
        .context("Unable to set global tracing subscriber")?;

    Ok(guard)
}
