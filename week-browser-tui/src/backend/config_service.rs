//! 配置服务
//!
//! 配置文件位置：~/.config/week-browser/config.json
//! 所有字段均可省略，缺省时使用默认值。

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use week_browser_core::visibility::DEFAULT_THRESHOLD;
use week_browser_core::ResourceLayout;

use crate::view::theme::Theme;

/// 覆盖站点根目录的环境变量
pub const BASE_DIR_ENV: &str = "WEEK_BROWSER_BASE_DIR";

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("week-browser")
}

/// 获取日志文件路径
pub fn log_file() -> PathBuf {
    config_dir().join("week-browser.log")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// 站点根目录（包含 converted/ 与 docs/）
    pub base_dir: PathBuf,
    /// 资源布局
    #[serde(flatten)]
    pub layout: ResourceLayout,
    /// 下载目标目录，未设置时使用系统下载目录
    pub download_dir: Option<PathBuf>,
    /// 卡片可见性阈值
    pub visibility_threshold: f32,
    pub theme: Theme,
    /// 语言代码（BCP 47）
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            layout: ResourceLayout::default(),
            download_dir: None,
            visibility_threshold: DEFAULT_THRESHOLD,
            theme: Theme::Dark,
            language: "en-US".to_string(),
        }
    }
}

impl AppConfig {
    /// 应用环境变量覆盖
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_base_override(std::env::var_os(BASE_DIR_ENV))
    }

    #[must_use]
    fn with_base_override(mut self, base: Option<OsString>) -> Self {
        if let Some(base) = base.filter(|b| !b.is_empty()) {
            self.base_dir = PathBuf::from(base);
        }
        self
    }

    /// 实际使用的下载目录
    pub fn effective_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认配置文件位置
    pub fn new() -> Self {
        Self::with_path(config_dir().join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", self.path.display()))?;

        log::info!("Loaded config from {}", self.path.display());
        Ok(config)
    }
}
