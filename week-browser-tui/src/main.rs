//! Week Browser TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 文件读取、下载与配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 文件日志（终端被 TUI 占用）
//!     load config             // ~/.config/week-browser/config.json，失败时使用默认值
//!     tokio Runtime           // 后台文件读取与下载
//!     Browser::new()          // 来自 week-browser-core 的浏览会话
//!     init_terminal()         // 原始模式、备用屏幕、鼠标捕获
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use anyhow::Result;
use tokio::sync::mpsc;
use week_browser_core::{Browser, VisibilityNotifier};

use backend::{log_file, AppConfig, ConfigService, DownloadService, FileViewer, LocalConfigService};
use i18n::Language;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志
    let log_path = log_file();
    if let Err(e) = init_logging(&log_path) {
        eprintln!("Failed to initialize logging at {}: {e:#}", log_path.display());
    }

    // 2. 配置
    let config = load_config();
    view::theme::set_theme(config.theme);
    let language = Language::from_code(&config.language).unwrap_or_else(|| {
        log::warn!("Unknown language {:?}, falling back to en-US", config.language);
        Language::default()
    });
    i18n::set_language(language);
    log::info!(
        "Starting week browser (base dir {}, language {})",
        config.base_dir.display(),
        language.code()
    );

    // 3. 后台运行时与事件通道
    let runtime = tokio::runtime::Runtime::new()?;
    let (tx, mut rx) = mpsc::unbounded_channel();

    let viewer = FileViewer::new(config.base_dir.clone(), runtime.handle().clone(), tx.clone());
    let downloads = DownloadService::new(
        config.base_dir.clone(),
        config.effective_download_dir(),
        runtime.handle().clone(),
        tx,
    );
    let browser = Browser::new(
        viewer,
        config.layout.clone(),
        VisibilityNotifier::new(config.visibility_threshold),
    );

    // 4. 创建应用实例
    let mut app = model::App::new(browser, downloads);

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Week browser exited with error: {e:#}");
    }
    result
}

/// 加载配置，失败时记录警告并使用默认值
fn load_config() -> AppConfig {
    let service = LocalConfigService::new();
    let config = service.load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {e:#}");
        AppConfig::default()
    });
    config.with_env_overrides()
}
