//! 内容查看器更新逻辑

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::App;

/// 处理内容查看器消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::ScrollUp => app.viewer.scroll_by(-1),
        ContentMessage::ScrollDown => app.viewer.scroll_by(1),
        ContentMessage::PageUp => {
            let page = app.viewer.page();
            app.viewer.scroll_by(-page);
        }
        ContentMessage::PageDown => {
            let page = app.viewer.page();
            app.viewer.scroll_by(page);
        }
        ContentMessage::Top => app.viewer.scroll_to_top(),
        ContentMessage::Bottom => app.viewer.scroll_to_bottom(),
        ContentMessage::Download => download(app),
    }
}

/// 下载当前周的原始文件
fn download(app: &mut App) {
    let Some(href) = app.browser.download().href().map(str::to_string) else {
        log::debug!("Download requested while no download control is visible");
        return;
    };

    log::info!(
        "Downloading {href} into {}",
        app.downloads.target_dir().display()
    );
    app.downloads.start(&href);
    app.set_status(format!("{} {href}", t().status_bar.downloading));
}
