//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use crate::event::keymap::{any_matches, DefaultKeymap};
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::App;
use crate::view::layout::{card_at, regions};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        // 终端窗口大小改变：下一帧的 Frame 消息会重新计算布局
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::TOGGLE_LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::CLOSE.matches(&key) {
        return AppMessage::ClearStatus;
    }

    if any_matches(&DefaultKeymap::PREVIOUS, &key) {
        return AppMessage::Navigation(NavigationMessage::SelectPrevious);
    }
    if any_matches(&DefaultKeymap::NEXT, &key) {
        return AppMessage::Navigation(NavigationMessage::SelectNext);
    }

    handle_viewer_keys(&key)
}

/// 处理查看器按键
fn handle_viewer_keys(key: &KeyEvent) -> AppMessage {
    let msg = if DefaultKeymap::PAGE_UP.matches(key) {
        ContentMessage::PageUp
    } else if DefaultKeymap::PAGE_DOWN.matches(key) {
        ContentMessage::PageDown
    } else if DefaultKeymap::TOP.matches(key) {
        ContentMessage::Top
    } else if DefaultKeymap::BOTTOM.matches(key) {
        ContentMessage::Bottom
    } else if DefaultKeymap::DOWNLOAD.matches(key) {
        ContentMessage::Download
    } else {
        return AppMessage::Noop;
    };
    AppMessage::Content(msg)
}

/// 处理弹窗按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLOSE.matches(&key)
        || DefaultKeymap::HELP.matches(&key)
        || DefaultKeymap::QUIT.matches(&key)
    {
        AppMessage::Modal(ModalMessage::Close)
    } else {
        AppMessage::Noop
    }
}

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if app.modal.is_open() {
        return AppMessage::Noop;
    }

    let regions = regions(app.screen);
    let position = Position::new(mouse.column, mouse.row);
    let over_cards = regions.cards.contains(position);
    let over_viewer = regions.viewer_panel.contains(position);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if over_cards => {
            let total = app.browser.cards().len();
            card_at(
                regions.cards,
                app.card_list.offset,
                total,
                mouse.column,
                mouse.row,
            )
            .and_then(|position| app.browser.card_list().index_at(position))
            .map_or(AppMessage::Noop, |index| {
                AppMessage::Navigation(NavigationMessage::Select(index))
            })
        }
        MouseEventKind::ScrollUp if over_cards => {
            AppMessage::Navigation(NavigationMessage::ScrollUp)
        }
        MouseEventKind::ScrollDown if over_cards => {
            AppMessage::Navigation(NavigationMessage::ScrollDown)
        }
        MouseEventKind::ScrollUp if over_viewer => AppMessage::Content(ContentMessage::ScrollUp),
        MouseEventKind::ScrollDown if over_viewer => {
            AppMessage::Content(ContentMessage::ScrollDown)
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    use crate::test_utils::TestApp;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn arrows_and_vim_keys_navigate() {
        let h = TestApp::started(100, 30);
        for code in [KeyCode::Up, KeyCode::Left, KeyCode::Char('k'), KeyCode::Char('h')] {
            assert!(matches!(
                handle_event(press(code), &h.app),
                AppMessage::Navigation(NavigationMessage::SelectPrevious)
            ));
        }
        for code in [KeyCode::Down, KeyCode::Right, KeyCode::Char('j'), KeyCode::Char('l')] {
            assert!(matches!(
                handle_event(press(code), &h.app),
                AppMessage::Navigation(NavigationMessage::SelectNext)
            ));
        }
    }

    #[test]
    fn only_press_events_are_handled() {
        let h = TestApp::started(100, 30);
        let release = KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(matches!(
            handle_event(Event::Key(release), &h.app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn viewer_keys_map_to_content_messages() {
        let h = TestApp::started(100, 30);
        assert!(matches!(
            handle_event(press(KeyCode::PageDown), &h.app),
            AppMessage::Content(ContentMessage::PageDown)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::End), &h.app),
            AppMessage::Content(ContentMessage::Bottom)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('d')), &h.app),
            AppMessage::Content(ContentMessage::Download)
        ));
    }

    #[test]
    fn help_modal_captures_keys() {
        let mut h = TestApp::started(100, 30);
        h.app.modal.show_help();
        assert!(matches!(
            handle_event(press(KeyCode::Down), &h.app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &h.app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(ctrl_c, &h.app), AppMessage::Quit));
    }

    #[test]
    fn clicking_a_card_selects_its_week() {
        let h = TestApp::started(100, 30);
        // card list starts at (1, 2); the third card occupies rows 8..=10
        assert!(matches!(
            handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 9), &h.app),
            AppMessage::Navigation(NavigationMessage::Select(3))
        ));
        assert!(matches!(
            handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 50, 9), &h.app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn wheel_scrolls_the_panel_under_the_pointer() {
        let h = TestApp::started(100, 30);
        assert!(matches!(
            handle_event(mouse(MouseEventKind::ScrollDown, 5, 9), &h.app),
            AppMessage::Navigation(NavigationMessage::ScrollDown)
        ));
        assert!(matches!(
            handle_event(mouse(MouseEventKind::ScrollUp, 50, 9), &h.app),
            AppMessage::Content(ContentMessage::ScrollUp)
        ));
    }
}
