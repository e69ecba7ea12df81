//! 命令行参数定义

use std::path::PathBuf;

use clap::Parser;
use wmi_browser_core::{FilterQuery, ALL_COUNTRIES};

use crate::backend::AppConfig;

/// Browse vehicle World Manufacturer Identifier records in the terminal
#[derive(Debug, Parser)]
#[command(name = "wmi-browser")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse vehicle World Manufacturer Identifier (WMI) records")]
pub struct Cli {
    /// Base URL of the data endpoint (e.g. https://localhost:5001/)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Resource path appended to the base URL
    #[arg(long, value_name = "PATH")]
    pub resource_path: Option<String>,

    /// Request timeout in seconds (waits indefinitely when unset)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Accept self-signed TLS certificates
    #[arg(long)]
    pub insecure: bool,

    /// Config file (defaults to <config dir>/wmi-browser/config.json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log file for the interactive mode
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Fetch once, print the table to stdout and exit
    #[arg(long)]
    pub print: bool,

    /// Country filter for --print
    #[arg(long, requires = "print", default_value = ALL_COUNTRIES)]
    pub country: String,

    /// Search pattern (case-insensitive regex) for --print
    #[arg(long, requires = "print", default_value = "")]
    pub search: String,
}

impl Cli {
    /// 命令行参数覆盖配置文件
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(ref base_url) = self.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(ref resource_path) = self.resource_path {
            config.resource_path.clone_from(resource_path);
        }
        if self.timeout.is_some() {
            config.timeout_secs = self.timeout;
        }
        if self.insecure {
            config.accept_invalid_certs = true;
        }
    }

    /// --print 模式的筛选条件
    pub fn query(&self) -> FilterQuery {
        FilterQuery::new(self.country.clone(), self.search.clone())
    }
}
