//! 主题和样式定义
//!
//! 当前主题保存在原子变量中，渲染时通过 [`colors`] 读取。
//! 主题由配置文件的 `theme` 字段初始化，运行时按 `t` 切换。

use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// false = Dark, true = Light
static LIGHT_THEME: AtomicBool = AtomicBool::new(false);

/// 主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 另一个主题
    #[must_use]
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// 该主题的颜色方案
    pub fn palette(self) -> &'static ThemeColors {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    LIGHT_THEME.store(theme == Theme::Light, Ordering::Relaxed);
}

/// 获取当前主题
pub fn current_theme() -> Theme {
    if LIGHT_THEME.load(Ordering::Relaxed) {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// 当前主题的颜色方案
pub fn colors() -> &'static ThemeColors {
    current_theme().palette()
}

/// 主题颜色
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    /// 标题栏与状态栏背景
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub heading: Color,
    pub link: Color,
    pub warning: Color,
    pub muted: Color,
}

const DARK: ThemeColors = ThemeColors {
    bg: Color::Rgb(24, 26, 31),
    fg: Color::Rgb(220, 223, 228),
    border: Color::Rgb(70, 74, 82),
    border_focused: Color::Rgb(229, 152, 54),
    highlight: Color::Rgb(176, 98, 24),
    selected_bg: Color::Rgb(229, 152, 54),
    selected_fg: Color::Rgb(24, 26, 31),
    heading: Color::Rgb(240, 184, 96),
    link: Color::Rgb(97, 175, 239),
    warning: Color::Rgb(224, 108, 117),
    muted: Color::Rgb(120, 126, 136),
};

const LIGHT: ThemeColors = ThemeColors {
    bg: Color::Rgb(253, 251, 247),
    fg: Color::Rgb(40, 42, 46),
    border: Color::Rgb(200, 196, 188),
    border_focused: Color::Rgb(196, 110, 20),
    highlight: Color::Rgb(196, 110, 20),
    selected_bg: Color::Rgb(252, 226, 186),
    selected_fg: Color::Rgb(40, 42, 46),
    heading: Color::Rgb(160, 82, 0),
    link: Color::Rgb(1, 98, 180),
    warning: Color::Rgb(190, 40, 50),
    muted: Color::Rgb(140, 140, 140),
};

/// 常用样式
pub struct Styles;

impl Styles {
    /// 激活卡片
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏
    pub fn statusbar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    /// 快捷键
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Rgb(255, 236, 170))
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(245, 240, 232))
    }
}
