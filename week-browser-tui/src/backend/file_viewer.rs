//! 文件查看器
//!
//! 实现 week-browser-core 的 Viewer trait。
//! 在 tokio 运行时上异步读取本地 HTML 文件，
//! 完成后通过事件通道把结果送回主循环。

use std::path::PathBuf;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use week_browser_core::{LoadOutcome, LoadRequest, LoadToken, Viewer, ViewerEvent};

use super::html;
use super::BackendEvent;

/// 基于本地文件的内容查看器
pub struct FileViewer {
    /// 站点根目录，内容路径相对于此目录解析
    base_dir: PathBuf,
    handle: Handle,
    events: UnboundedSender<BackendEvent>,
}

impl FileViewer {
    pub fn new(base_dir: PathBuf, handle: Handle, events: UnboundedSender<BackendEvent>) -> Self {
        Self {
            base_dir,
            handle,
            events,
        }
    }
}

impl Viewer for FileViewer {
    fn is_attached(&self) -> bool {
        // 主循环退出后接收端被丢弃，此时不再接受加载
        !self.events.is_closed()
    }

    fn navigate(&mut self, request: &LoadRequest, token: LoadToken) {
        let path = self.base_dir.join(&request.content_path);
        let events = self.events.clone();

        self.handle.spawn(async move {
            let (outcome, document) = match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    let rendered = html::render(&bytes);
                    (
                        LoadOutcome::Loaded {
                            accessible: rendered.accessible,
                        },
                        Some(rendered.document),
                    )
                }
                Err(e) => (
                    LoadOutcome::Failed(format!("{}: {e}", path.display())),
                    None,
                ),
            };

            let event = BackendEvent::ContentLoaded {
                event: ViewerEvent { token, outcome },
                document,
            };
            if events.send(event).is_err() {
                log::debug!("Viewer event dropped, main loop has exited ({token:?})");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use week_browser_core::ResourceLayout;

    fn viewer(dir: &tempfile::TempDir) -> (FileViewer, mpsc::UnboundedReceiver<BackendEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (FileViewer::new(dir.path().to_path_buf(), Handle::current(), tx), rx)
    }

    #[tokio::test]
    async fn existing_file_is_loaded() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::create_dir_all(dir.path().join("converted")).expect("mkdir");
        std::fs::write(dir.path().join("converted/week1.html"), "<h1>Week one</h1>")
            .expect("write fixture");

        let (mut viewer, mut rx) = viewer(&dir);
        let request = ResourceLayout::default().request(1);
        viewer.navigate(&request, LoadToken(7));

        let Some(BackendEvent::ContentLoaded { event, document }) = rx.recv().await else {
            panic!("expected content event");
        };
        assert_eq!(event.token, LoadToken(7));
        assert_eq!(event.outcome, LoadOutcome::Loaded { accessible: true });
        let document = document.expect("document present");
        assert_eq!(document.blocks[0].text, "Week one");
    }

    #[tokio::test]
    async fn missing_file_reports_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (mut viewer, mut rx) = viewer(&dir);
        viewer.navigate(&ResourceLayout::default().request(3), LoadToken(1));

        let Some(BackendEvent::ContentLoaded { event, document }) = rx.recv().await else {
            panic!("expected content event");
        };
        assert!(matches!(event.outcome, LoadOutcome::Failed(_)));
        assert!(document.is_none());
    }

    #[tokio::test]
    async fn detached_once_receiver_is_dropped() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (viewer, rx) = viewer(&dir);
        assert!(viewer.is_attached());
        drop(rx);
        assert!(!viewer.is_attached());
    }
}
