//! 测试工具
//!
//! 在临时站点目录上构造完整的 `App`，后台任务运行在独立的 tokio 运行时上。

use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use week_browser_core::{Browser, ResourceLayout, VisibilityNotifier};

use crate::backend::{BackendEvent, DownloadService, FileViewer};
use crate::message::AppMessage;
use crate::model::App;
use crate::update::update;

pub struct TestApp {
    pub app: App,
    events: UnboundedReceiver<BackendEvent>,
    site: TempDir,
    downloads: TempDir,
    runtime: Runtime,
}

impl TestApp {
    /// 空站点
    pub fn new() -> Self {
        Self::with_weeks(&[])
    }

    /// 在 `converted/` 下写入指定周的 HTML
    pub fn with_weeks(weeks: &[(u32, &str)]) -> Self {
        let site = tempfile::tempdir().expect("temp site dir");
        let downloads = tempfile::tempdir().expect("temp download dir");
        let layout = ResourceLayout::default();

        for (index, html) in weeks {
            let path = site.path().join(layout.content_path(*index));
            std::fs::create_dir_all(path.parent().expect("content path has a parent"))
                .expect("create content dir");
            std::fs::write(path, html).expect("write week fixture");
        }

        let runtime = Runtime::new().expect("tokio runtime");
        let (tx, events) = mpsc::unbounded_channel();
        let viewer = FileViewer::new(site.path().to_path_buf(), runtime.handle().clone(), tx.clone());
        let service = DownloadService::new(
            site.path().to_path_buf(),
            downloads.path().to_path_buf(),
            runtime.handle().clone(),
            tx,
        );
        let browser = Browser::new(viewer, layout, VisibilityNotifier::default());

        Self {
            app: App::new(browser, service),
            events,
            site,
            downloads,
            runtime,
        }
    }

    /// 空站点，已完成布局与两个启动阶段
    pub fn started(width: u16, height: u16) -> Self {
        let mut harness = Self::new();
        harness.start(width, height);
        harness
    }

    /// 发送一帧尺寸并完成启动
    pub fn start(&mut self, width: u16, height: u16) {
        update(&mut self.app, AppMessage::Frame { width, height });
        update(&mut self.app, AppMessage::Startup);
        update(&mut self.app, AppMessage::Startup);
    }

    /// 在 `docs/` 下写入一个可下载文件
    pub fn write_doc(&self, name: &str, bytes: &[u8]) {
        let dir = self.site.path().join("docs");
        std::fs::create_dir_all(&dir).expect("create docs dir");
        std::fs::write(dir.join(name), bytes).expect("write doc fixture");
    }

    pub fn download_dir(&self) -> PathBuf {
        self.downloads.path().to_path_buf()
    }

    /// 等待下一个后台事件
    pub fn next_event(&mut self) -> BackendEvent {
        let events = &mut self.events;
        self.runtime
            .block_on(async { tokio::time::timeout(Duration::from_secs(5), events.recv()).await })
            .expect("backend event within timeout")
            .expect("backend channel open")
    }
}
