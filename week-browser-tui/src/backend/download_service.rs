//! 下载服务
//!
//! 把当前周的原始文件从站点目录复制到下载目录。

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use super::BackendEvent;

/// 下载错误
#[derive(Error, Debug)]
pub enum DownloadError {
    /// 下载地址没有文件名部分
    #[error("Invalid download path: {0}")]
    InvalidPath(String),

    /// 读写失败
    #[error("Failed to copy {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 下载服务
pub struct DownloadService {
    base_dir: PathBuf,
    target_dir: PathBuf,
    handle: Handle,
    events: UnboundedSender<BackendEvent>,
}

impl DownloadService {
    pub fn new(
        base_dir: PathBuf,
        target_dir: PathBuf,
        handle: Handle,
        events: UnboundedSender<BackendEvent>,
    ) -> Self {
        Self {
            base_dir,
            target_dir,
            handle,
            events,
        }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// 开始复制 `href` 指向的文件，结果通过事件通道送回
    pub fn start(&self, href: &str) {
        let source = self.base_dir.join(href);
        let target_dir = self.target_dir.clone();
        let href = href.to_string();
        let events = self.events.clone();

        self.handle.spawn(async move {
            let result = copy_into(&source, &target_dir, &href).await;
            if let Err(ref e) = result {
                log::error!("Download of {href} failed: {e}");
            }
            if events.send(BackendEvent::DownloadFinished(result)).is_err() {
                log::debug!("Download event dropped, main loop has exited");
            }
        });
    }
}

async fn copy_into(source: &Path, target_dir: &Path, href: &str) -> Result<PathBuf, DownloadError> {
    let file_name = source
        .file_name()
        .ok_or_else(|| DownloadError::InvalidPath(href.to_string()))?;

    tokio::fs::create_dir_all(target_dir)
        .await
        .map_err(|e| DownloadError::Io {
            path: target_dir.to_path_buf(),
            source: e,
        })?;

    let target = target_dir.join(file_name);
    tokio::fs::copy(source, &target)
        .await
        .map_err(|e| DownloadError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;

    log::info!("Downloaded {href} to {}", target.display());
    Ok(target)
}
