//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责文件读取、下载和配置。
//! 所有耗时操作都在 tokio 运行时上执行，结果以 `BackendEvent`
//! 的形式通过无界通道送回主循环（app.rs），再转为 `AppMessage::Backend`。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置加载（JSON 文件）
//!         mod download_service;   // 原始文件下载（复制到下载目录）
//!         mod file_viewer;        // Viewer trait 的本地文件实现
//!         mod html;               // HTML 文本提取（scraper）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户选中某一周
//!         ↓
//!     Browser::select → ContentLoader::load → FileViewer::navigate
//!         ↓
//!     tokio 任务读取 converted/weekN.html 并提取文本
//!         ↓
//!     BackendEvent::ContentLoaded { event, document } 发送到通道
//!         ↓
//!     主循环 try_recv → update::update(app, AppMessage::Backend(..))
//!         ↓
//!     Browser::on_viewer_event 校验令牌，过期结果直接丢弃
//!

mod config_service;
mod download_service;
mod file_viewer;
mod html;

pub use config_service::{log_file, AppConfig, ConfigService, LocalConfigService};
pub use download_service::{DownloadError, DownloadService};
pub use file_viewer::FileViewer;

use std::path::PathBuf;

use week_browser_core::ViewerEvent;

use crate::model::domain::Document;

/// 后台任务完成事件
#[derive(Debug)]
pub enum BackendEvent {
    /// 内容加载结束
    ContentLoaded {
        event: ViewerEvent,
        /// 加载失败时为 `None`
        document: Option<Document>,
    },
    /// 下载结束
    DownloadFinished(Result<PathBuf, DownloadError>),
}
