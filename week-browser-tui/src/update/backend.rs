//! 后台事件更新逻辑

use week_browser_core::Completion;

use crate::backend::BackendEvent;
use crate::i18n::t;
use crate::model::App;

/// 处理后台任务完成事件
pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::ContentLoaded { event, document } => {
            match app.browser.on_viewer_event(event) {
                // 已被更新的加载取代
                Completion::Stale => {}
                Completion::Ready { .. } => {
                    let entrance = app.browser.loader_mut().take_entrance();
                    app.viewer.show(document, entrance);
                }
                // 错误已由核心记录，查看器留空
                Completion::Failed(_) => app.viewer.show(None, false),
            }
        }

        BackendEvent::DownloadFinished(Ok(path)) => {
            app.set_status(format!("{} {}", t().status_bar.saved_to, path.display()));
        }

        BackendEvent::DownloadFinished(Err(e)) => {
            app.set_status(format!("{}: {e}", t().status_bar.download_failed));
        }
    }
}
