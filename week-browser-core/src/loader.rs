//! 内容加载器
//!
//! 根据选中的周序号解析内容路径与下载路径，驱动查看器加载，
//! 并维护查看器的忙碌状态、标题、入场效果标记和下载控件。
//!
//! 每次 [`ContentLoader::load`] 都会签发新的 [`LoadToken`]，
//! 只有最新请求的完成通知会被应用，过期通知直接丢弃。

use crate::error::{BrowserError, BrowserResult};
use crate::layout::{LoadRequest, ResourceLayout};
use crate::traits::{LoadOutcome, LoadToken, Viewer, ViewerEvent};

/// 查看器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerStatus {
    /// 尚未加载任何内容
    #[default]
    Idle,
    /// 正在加载
    Busy,
    /// 加载结束（无论成功与否）
    Ready,
}

impl ViewerStatus {
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// 下载控件状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DownloadControl {
    #[default]
    Hidden,
    /// `generation` 每次显示时递增，前端据此重放入场效果
    Visible { href: String, generation: u64 },
}

impl DownloadControl {
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Hidden => None,
            Self::Visible { href, .. } => Some(href),
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }
}

/// 完成通知的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// 已应用：查看器就绪
    Ready { entrance: bool },
    /// 已应用：加载失败，查看器仍转为就绪
    Failed(BrowserError),
    /// 令牌不是最新请求，已丢弃
    Stale,
}

/// 内容加载器
pub struct ContentLoader<V> {
    viewer: V,
    layout: ResourceLayout,
    status: ViewerStatus,
    title_index: Option<u32>,
    current: Option<LoadRequest>,
    download: DownloadControl,
    download_generation: u64,
    issued: u64,
    pending: Option<LoadToken>,
    entrance_pending: bool,
}

impl<V: Viewer> ContentLoader<V> {
    pub fn new(viewer: V, layout: ResourceLayout) -> Self {
        Self {
            viewer,
            layout,
            status: ViewerStatus::Idle,
            title_index: None,
            current: None,
            download: DownloadControl::Hidden,
            download_generation: 0,
            issued: 0,
            pending: None,
            entrance_pending: false,
        }
    }

    /// 加载指定周的内容
    ///
    /// 查看器不可用时记录错误并中止，不修改任何状态。
    /// 成功时立即返回令牌，加载结果通过 [`Self::complete`] 送回。
    pub fn load(&mut self, index: u32) -> BrowserResult<LoadToken> {
        if !self.viewer.is_attached() {
            let err = BrowserError::MissingSurface("content viewer");
            err.report();
            return Err(err);
        }

        let request = self.layout.request(index);

        self.status = ViewerStatus::Busy;
        self.title_index = Some(index);
        self.entrance_pending = false;

        self.issued += 1;
        let token = LoadToken(self.issued);
        self.pending = Some(token);
        log::debug!("Loading week {index} from {} ({token:?})", request.content_path);
        self.viewer.navigate(&request, token);

        self.update_download(&request);
        self.current = Some(request);

        Ok(token)
    }

    fn update_download(&mut self, request: &LoadRequest) {
        if let Some(href) = &request.download_path {
            self.download_generation += 1;
            self.download = DownloadControl::Visible {
                href: href.clone(),
                generation: self.download_generation,
            };
        } else {
            self.download = DownloadControl::Hidden;
            BrowserError::NoFileMapping(request.index).report();
        }
    }

    /// 处理查看器的完成通知
    pub fn complete(&mut self, event: ViewerEvent) -> Completion {
        if self.pending != Some(event.token) {
            log::debug!(
                "Discarding stale viewer completion {:?} (pending {:?})",
                event.token,
                self.pending
            );
            return Completion::Stale;
        }
        self.pending = None;
        self.status = ViewerStatus::Ready;

        let index = self.current.as_ref().map_or(0, |r| r.index);
        match event.outcome {
            LoadOutcome::Loaded { accessible } => {
                // 无法访问的内容不加入场效果，也不算错误
                self.entrance_pending = accessible;
                log::debug!("Week {index} content ready");
                Completion::Ready {
                    entrance: accessible,
                }
            }
            LoadOutcome::Failed(reason) => {
                let err = BrowserError::ContentLoad { index, reason };
                err.report();
                Completion::Failed(err)
            }
        }
    }

    pub fn status(&self) -> ViewerStatus {
        self.status
    }

    /// 标题引用的周序号
    pub fn title_index(&self) -> Option<u32> {
        self.title_index
    }

    pub fn current_request(&self) -> Option<&LoadRequest> {
        self.current.as_ref()
    }

    pub fn download(&self) -> &DownloadControl {
        &self.download
    }

    /// 已加载内容是否等待播放入场效果
    pub fn entrance_pending(&self) -> bool {
        self.entrance_pending
    }

    /// 取走入场效果标记
    pub fn take_entrance(&mut self) -> bool {
        std::mem::take(&mut self.entrance_pending)
    }

    /// 最近一次签发的令牌
    pub fn latest_token(&self) -> Option<LoadToken> {
        (self.issued > 0).then_some(LoadToken(self.issued))
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut V {
        &mut self.viewer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{capture_logs, RecordingViewer};
    use log::Level;

    fn loader() -> ContentLoader<RecordingViewer> {
        ContentLoader::new(RecordingViewer::new(), ResourceLayout::default())
    }

    fn loaded(token: LoadToken) -> ViewerEvent {
        ViewerEvent {
            token,
            outcome: LoadOutcome::Loaded { accessible: true },
        }
    }

    #[test]
    fn load_marks_busy_and_navigates() {
        let mut l = loader();
        let token = l.load(1).expect("viewer attached");
        assert_eq!(l.status(), ViewerStatus::Busy);
        assert_eq!(l.title_index(), Some(1));
        assert_eq!(l.viewer().last_path(), Some("converted/week1.html"));
        assert_eq!(l.viewer().requests().len(), 1);
        assert_eq!(l.latest_token(), Some(token));
        assert_eq!(l.download().href(), Some("docs/Java-week-1.docx"));

        let request = l.current_request().expect("request recorded");
        assert_eq!(request.index, 1);
        assert_eq!(request.content_path, "converted/week1.html");
        assert_eq!(request.download_path.as_deref(), Some("docs/Java-week-1.docx"));
    }

    #[test]
    fn week_six_download_uses_exact_name() {
        let mut l = loader();
        l.load(6).expect("viewer attached");
        assert_eq!(l.download().href(), Some("docs/java-week-6.docx"));
    }

    #[test]
    fn successful_completion_sets_ready_and_entrance() {
        let mut l = loader();
        let token = l.load(2).expect("viewer attached");
        assert_eq!(l.complete(loaded(token)), Completion::Ready { entrance: true });
        assert_eq!(l.status(), ViewerStatus::Ready);
        assert!(l.take_entrance());
        assert!(!l.entrance_pending());
    }

    #[test]
    fn inaccessible_content_skips_entrance_silently() {
        let mut l = loader();
        let token = l.load(2).expect("viewer attached");
        let completion = l.complete(ViewerEvent {
            token,
            outcome: LoadOutcome::Loaded { accessible: false },
        });
        assert_eq!(completion, Completion::Ready { entrance: false });
        assert_eq!(l.status(), ViewerStatus::Ready);
        assert!(!l.entrance_pending());
    }

    #[test]
    fn failed_load_clears_busy_and_keeps_download() {
        let mut l = loader();
        let token = l.load(3).expect("viewer attached");
        let completion = l.complete(ViewerEvent {
            token,
            outcome: LoadOutcome::Failed("missing".to_string()),
        });
        assert_eq!(
            completion,
            Completion::Failed(BrowserError::ContentLoad {
                index: 3,
                reason: "missing".to_string()
            })
        );
        assert_eq!(l.status(), ViewerStatus::Ready);
        assert_eq!(l.download().href(), Some("docs/Java-week-3.docx"));
    }

    #[test]
    fn failed_load_emits_error() {
        let mut l = loader();
        let token = l.load(3).expect("viewer attached");
        let (_, logs) = capture_logs(|| {
            l.complete(ViewerEvent {
                token,
                outcome: LoadOutcome::Failed("missing".to_string()),
            })
        });
        assert!(logs.contains(Level::Error, "Failed to load week 3 content: missing"));
    }

    #[test]
    fn stale_failure_is_not_reported() {
        let mut l = loader();
        let first = l.load(3).expect("viewer attached");
        l.load(4).expect("viewer attached");
        let (_, logs) = capture_logs(|| {
            l.complete(ViewerEvent {
                token: first,
                outcome: LoadOutcome::Failed("late".to_string()),
            })
        });
        assert_eq!(logs.count(Level::Error), 0);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut l = loader();
        let first = l.load(4).expect("viewer attached");
        let second = l.load(5).expect("viewer attached");
        assert!(second > first);

        assert_eq!(l.complete(loaded(first)), Completion::Stale);
        assert_eq!(l.status(), ViewerStatus::Busy);
        assert!(!l.entrance_pending());

        assert_eq!(l.complete(loaded(second)), Completion::Ready { entrance: true });
        assert_eq!(l.title_index(), Some(5));
    }

    #[test]
    fn duplicate_completion_is_stale() {
        let mut l = loader();
        let token = l.load(4).expect("viewer attached");
        l.complete(loaded(token));
        assert_eq!(l.complete(loaded(token)), Completion::Stale);
    }

    #[test]
    fn unmapped_index_hides_download() {
        let mut l = loader();
        l.load(1).expect("viewer attached");
        assert!(l.download().is_visible());
        let (result, logs) = capture_logs(|| l.load(13));
        result.expect("viewer attached");
        assert_eq!(l.download(), &DownloadControl::Hidden);
        assert!(logs.contains(Level::Warn, "No file mapping found for week 13"));
        assert_eq!(l.current_request().map(|r| r.download_path.clone()), Some(None));
    }

    #[test]
    fn download_generation_advances_on_each_show() {
        let mut l = loader();
        l.load(1).expect("viewer attached");
        let first = l.download().clone();
        l.load(1).expect("viewer attached");
        assert_ne!(&first, l.download());
    }

    #[test]
    fn detached_viewer_aborts_without_state_change() {
        let mut l = loader();
        l.viewer_mut().detach();
        let (result, logs) = capture_logs(|| l.load(1));
        assert_eq!(result, Err(BrowserError::MissingSurface("content viewer")));
        assert!(logs.contains(Level::Error, "Required elements not found"));
        assert_eq!(l.status(), ViewerStatus::Idle);
        assert_eq!(l.title_index(), None);
        assert_eq!(l.download(), &DownloadControl::Hidden);
        assert!(l.viewer().requests().is_empty());
        assert_eq!(l.latest_token(), None);
        assert!(l.current_request().is_none());
    }
}
