//! 配置服务

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wmi_browser_core::{SourceConfig, DEFAULT_BASE_URL, DEFAULT_RESOURCE_PATH};

use crate::view::theme::Theme;

/// 标题栏默认文字
pub const DEFAULT_TITLE: &str = "WMI Data - Honda";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 数据接口地址
    pub base_url: String,
    /// 资源路径，拼接在 base_url 之后
    pub resource_path: String,
    /// 请求超时（秒），None 表示一直等待
    pub timeout_secs: Option<u64>,
    /// 是否接受自签名证书
    pub accept_invalid_certs: bool,
    /// 标题栏文字
    pub title: String,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            timeout_secs: None,
            accept_invalid_certs: false,
            title: DEFAULT_TITLE.to_string(),
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// 转换为核心库的数据源配置
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig {
            base_url: self.base_url.clone(),
            resource_path: self.resource_path.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            accept_invalid_certs: self.accept_invalid_certs,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 获取配置目录路径
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wmi-browser")
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// ~/.config/wmi-browser/config.json
    pub fn default_location() -> Self {
        Self::new(get_config_dir().join("config.json"))
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // 文件不存在不是错误，使用默认配置
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read config {}", self.path.display()))
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", self.path.display()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wmi-browser-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_yields_default() {
        let service = JsonConfigService::new(PathBuf::from("/nonexistent/wmi-browser/config.json"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let path = temp_config(
            "partial.json",
            r#"{"base_url": "http://10.0.0.2:5000/", "timeout_secs": 10, "theme": "light"}"#,
        );
        let config = JsonConfigService::new(path).load().unwrap();

        assert_eq!(config.base_url, "http://10.0.0.2:5000/");
        assert_eq!(config.resource_path, DEFAULT_RESOURCE_PATH);
        assert_eq!(config.timeout_secs, Some(10));
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let path = temp_config("broken.json", "{ base_url: ");
        assert!(JsonConfigService::new(path).load().is_err());
    }

    #[test]
    fn test_source_config_conversion() {
        let config = AppConfig {
            timeout_secs: Some(3),
            accept_invalid_certs: true,
            ..AppConfig::default()
        };
        let source = config.source_config();
        assert_eq!(source.timeout, Some(Duration::from_secs(3)));
        assert!(source.accept_invalid_certs);
        assert_eq!(source.endpoint().unwrap().as_str(), "https://localhost:5001/wmi");
    }
}
