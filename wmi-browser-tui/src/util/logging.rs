//! 日志初始化

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 未设置 RUST_LOG 时的过滤规则
const DEFAULT_FILTER: &str = "info";

/// 日志输出目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// 默认日志文件：<data dir>/wmi-browser/wmi-browser.log
pub fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wmi-browser")
        .join("wmi-browser.log")
}

/// 安装全局日志订阅者
///
/// 返回的 guard 必须保持存活到程序退出。
pub fn init_logging(target: &LogTarget) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    match target {
        LogTarget::Stderr => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .without_time()
                        .with_ansi(false),
                )
                .try_init()
                .context("failed to install logger")?;
            Ok(None)
        }
        LogTarget::File(path) => {
            let (directory, file_name) = split_log_path(path)?;
            fs::create_dir_all(&directory).with_context(|| {
                format!("failed to create log directory {}", directory.display())
            })?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .try_init()
                .context("failed to install logger")?;
            Ok(Some(guard))
        }
    }
}

fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((directory, PathBuf::from(file_name)))
}
