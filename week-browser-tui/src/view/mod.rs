//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 卡片列表、查看器、状态栏、弹窗
//!         pub mod layout;     // 区域计算（与事件层共享）
//!         pub mod theme;      // 主题颜色
//!
//!
//!     屏幕布局：
//!         ┌──────────────────────────────────────────────┐
//!         │ 标题栏                                        │
//!         ├────────────┬─────────────────────────────────┤
//!         │ ┌────────┐ │ Week N Content                  │
//!         │ │ Week 1 │ │                                 │
//!         │ └────────┘ │ 正文（可滚动）                   │
//!         │ ┌────────┐ │                                 │
//!         │ │ Week 2 │ │                                 │
//!         │ └────────┘ │ [d] 下载原始文件                 │
//!         ├────────────┴─────────────────────────────────┤
//!         │ 状态栏                                        │
//!         └──────────────────────────────────────────────┘
//!

mod components;
pub mod layout;
pub mod theme;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub use layout::render;

/// 按显示宽度截断文本，超出部分以 `…` 结尾
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
