//! 卡片列表更新逻辑

use week_browser_core::Direction;

use super::{apply_selection, sync_visibility};
use crate::message::NavigationMessage;
use crate::model::App;

/// 处理卡片列表消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => navigate(app, Direction::Previous),

        NavigationMessage::SelectNext => navigate(app, Direction::Next),

        NavigationMessage::Select(index) => {
            let selection = app.browser.select(index);
            apply_selection(app, selection);
        }

        NavigationMessage::ScrollUp => {
            app.card_list.scroll_up();
            sync_visibility(app);
        }

        NavigationMessage::ScrollDown => {
            let total = app.browser.cards().len();
            app.card_list.scroll_down(total);
            sync_visibility(app);
        }
    }
}

fn navigate(app: &mut App, direction: Direction) {
    // 已在边界或尚无激活项时不做任何事
    if let Some(selection) = app.browser.navigate(direction) {
        apply_selection(app, selection);
    }
}
