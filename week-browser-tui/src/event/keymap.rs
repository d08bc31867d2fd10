//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift：部分终端在输入大写字母时会附带 Shift 修饰。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = if matches!(key.code, KeyCode::Char(_)) {
            key.modifiers - KeyModifiers::SHIFT
        } else {
            key.modifiers
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const CLOSE: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const TOGGLE_THEME: KeyBinding = KeyBinding::key(KeyCode::Char('t'));
    pub const TOGGLE_LANGUAGE: KeyBinding = KeyBinding::key(KeyCode::Char('L'));

    // 卡片导航
    pub const PREVIOUS: [KeyBinding; 4] = [
        KeyBinding::key(KeyCode::Up),
        KeyBinding::key(KeyCode::Left),
        KeyBinding::key(KeyCode::Char('k')),
        KeyBinding::key(KeyCode::Char('h')),
    ];
    pub const NEXT: [KeyBinding; 4] = [
        KeyBinding::key(KeyCode::Down),
        KeyBinding::key(KeyCode::Right),
        KeyBinding::key(KeyCode::Char('j')),
        KeyBinding::key(KeyCode::Char('l')),
    ];

    // 查看器
    pub const PAGE_UP: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const PAGE_DOWN: KeyBinding = KeyBinding::key(KeyCode::PageDown);
    pub const TOP: KeyBinding = KeyBinding::key(KeyCode::Home);
    pub const BOTTOM: KeyBinding = KeyBinding::key(KeyCode::End);
    pub const DOWNLOAD: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
}

/// 是否匹配一组绑定中的任意一个
pub fn any_matches(bindings: &[KeyBinding], key: &KeyEvent) -> bool {
    bindings.iter().any(|b| b.matches(key))
}
