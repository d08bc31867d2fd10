//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;            // 后台事件（内容加载完成、下载完成）
//!         mod content;            // 查看器子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod navigation;         // 卡片列表子消息处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 启动阶段
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主循环在 Browser 进入 Ready 之前，每渲染一帧发送一次 AppMessage::Startup：
//!         Pending     → build_cards()     卡片出现，可见性开始观察
//!         CardsBuilt  → auto_select()     默认选中第一周并开始加载
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 布局同步
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     AppMessage::Frame 携带终端尺寸。收到后重新计算区域，
//!     更新列表容量与查看器页高，并把每张卡片的相交比例报告给可见性通知器。
//!     列表滚动、选择变化之后也会重新报告。
//!

mod backend;
mod content;
mod modal;
mod navigation;

use ratatui::layout::Rect;
use week_browser_core::{DownloadControl, SelectOutcome, Selection, StartupPhase};

use crate::i18n::{current_language, set_language};
use crate::message::AppMessage;
use crate::model::App;
use crate::view::layout::{card_capacity, card_slots, regions};
use crate::view::theme::{current_theme, set_theme};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Tick => {
            app.viewer.tick();
            if app.status_ticks > 0 {
                app.status_ticks -= 1;
                if app.status_ticks == 0 {
                    app.status_message = None;
                }
            }
        }

        AppMessage::Frame { width, height } => {
            let screen = Rect::new(0, 0, width, height);
            if screen != app.screen {
                app.screen = screen;
                sync_layout(app);
            }
        }

        AppMessage::Startup => advance_startup(app),

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(event) => {
            backend::update(app, event);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ToggleTheme => {
            let theme = current_theme().next();
            set_theme(theme);
            log::info!("Theme switched to {theme:?}");
        }

        AppMessage::ToggleLanguage => {
            let language = current_language().next();
            set_language(language);
            log::info!("Language switched to {}", language.code());
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 推进一个启动阶段
fn advance_startup(app: &mut App) {
    match app.browser.phase() {
        StartupPhase::Pending => {
            app.browser.build_cards();
            sync_layout(app);
        }
        StartupPhase::CardsBuilt => {
            if let Some(selection) = app.browser.auto_select() {
                apply_selection(app, selection);
            }
        }
        StartupPhase::Ready => {}
    }
}

/// 把一次选择的结果同步到界面状态
pub(crate) fn apply_selection(app: &mut App, selection: Selection) {
    if let SelectOutcome::Changed { current, .. } = selection.outcome {
        if let Some(position) = app.browser.card_list().position(current) {
            let total = app.browser.cards().len();
            app.card_list.reveal(position, total);
        }
    }

    if let Some(Err(err)) = selection.load {
        app.set_status(err.to_string());
    }

    if let DownloadControl::Visible { generation, .. } = app.browser.download() {
        let generation = *generation;
        app.viewer.observe_download(generation);
    }

    sync_visibility(app);
}

/// 根据当前屏幕尺寸更新列表容量、查看器页高和可见性
pub(crate) fn sync_layout(app: &mut App) {
    let regions = regions(app.screen);
    let total = app.browser.cards().len();
    app.card_list.resize(card_capacity(regions.cards), total);
    app.viewer.page_height = usize::from(regions.content.height);
    app.viewer.page_width = usize::from(regions.content.width);
    app.viewer.scroll_by(0);
    sync_visibility(app);
}

/// 向可见性通知器报告每张卡片的相交比例
pub(crate) fn sync_visibility(app: &mut App) {
    let list = regions(app.screen).cards;
    let cards = app.browser.cards();
    let slots = card_slots(list, app.card_list.offset, cards.len());

    let ratios: Vec<(u32, f32)> = cards
        .iter()
        .enumerate()
        .map(|(position, card)| {
            let ratio = slots
                .iter()
                .find(|slot| slot.position == position)
                .map_or(0.0, |slot| slot.ratio);
            (card.index, ratio)
        })
        .collect();

    let flagged = app.browser.report_ratios(&ratios);
    if !flagged.is_empty() {
        log::debug!("Cards entered viewport: {flagged:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ContentMessage, ModalMessage, NavigationMessage};
    use crate::test_utils::TestApp;

    #[test]
    fn startup_runs_one_phase_per_message() {
        let mut t = TestApp::new();
        update(&mut t.app, AppMessage::Frame { width: 100, height: 30 });

        update(&mut t.app, AppMessage::Startup);
        assert_eq!(t.app.browser.phase(), StartupPhase::CardsBuilt);
        assert_eq!(t.app.browser.active(), None);

        update(&mut t.app, AppMessage::Startup);
        assert_eq!(t.app.browser.phase(), StartupPhase::Ready);
        assert_eq!(t.app.browser.active(), Some(1));
        assert!(t.app.browser.status().is_busy());
    }

    #[test]
    fn visible_cards_are_flagged_after_layout() {
        // 30 rows leave 26 list rows: 8 full cards and two thirds of the ninth
        let t = TestApp::started(100, 30);
        let visibility = t.app.browser.visibility();
        assert!((1..=9).all(|i| visibility.is_flagged(i)));
        assert!(!visibility.is_flagged(10));
    }

    #[test]
    fn scrolling_the_list_flags_new_cards() {
        let mut t = TestApp::started(100, 12);
        assert!(!t.app.browser.visibility().is_flagged(12));
        for _ in 0..12 {
            update(&mut t.app, AppMessage::Navigation(NavigationMessage::ScrollDown));
        }
        assert!(t.app.browser.visibility().is_flagged(12));
        assert_eq!(t.app.browser.active(), Some(1));
    }

    #[test]
    fn keyboard_selection_reveals_the_active_card() {
        let mut t = TestApp::started(100, 12);
        for _ in 0..6 {
            update(&mut t.app, AppMessage::Navigation(NavigationMessage::SelectNext));
        }
        assert_eq!(t.app.browser.active(), Some(7));
        let capacity = t.app.card_list.capacity;
        assert!(t.app.card_list.offset + capacity > 6);
        assert!(t.app.card_list.offset <= 6);
    }

    #[test]
    fn navigation_clamps_at_the_last_week() {
        let mut t = TestApp::started(100, 30);
        update(&mut t.app, AppMessage::Navigation(NavigationMessage::Select(12)));
        let token = t.app.browser.loader().latest_token();
        update(&mut t.app, AppMessage::Navigation(NavigationMessage::SelectNext));
        assert_eq!(t.app.browser.active(), Some(12));
        assert_eq!(t.app.browser.loader().latest_token(), token);
    }

    #[test]
    fn status_message_expires_after_ticks() {
        let mut t = TestApp::new();
        t.app.set_status("hello");
        for _ in 1..t.app.status_ticks {
            update(&mut t.app, AppMessage::Tick);
        }
        assert!(t.app.status_message.is_some());
        update(&mut t.app, AppMessage::Tick);
        assert!(t.app.status_message.is_none());
    }

    #[test]
    fn help_opens_and_closes() {
        let mut t = TestApp::new();
        update(&mut t.app, AppMessage::ShowHelp);
        assert!(t.app.modal.is_open());
        update(&mut t.app, AppMessage::Modal(ModalMessage::Close));
        assert!(!t.app.modal.is_open());
    }

    #[test]
    fn download_without_selection_does_nothing() {
        let mut t = TestApp::new();
        update(&mut t.app, AppMessage::Content(ContentMessage::Download));
        assert!(t.app.status_message.is_none());
    }
}
