//! 主布局
//!
//! 区域计算与渲染分开：事件层的鼠标命中测试、Update 层的可见性
//! 报告和 View 层的渲染都使用同一组区域。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::theme::colors;

/// 每张卡片占用的行数（含边框）
pub const CARD_HEIGHT: u16 = 3;

/// 左侧卡片面板宽度
const CARD_PANEL_WIDTH: u16 = 24;

/// 屏幕区域划分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub title: Rect,
    /// 卡片面板（含边框）
    pub card_panel: Rect,
    /// 卡片面板内部，卡片在此区域内排列
    pub cards: Rect,
    /// 查看器面板（含边框）
    pub viewer_panel: Rect,
    /// 查看器正文
    pub content: Rect,
    /// 下载控件所在行
    pub download: Rect,
    pub status: Rect,
}

/// 计算各区域
pub fn regions(area: Rect) -> Regions {
    // 三层布局：标题栏 + 主内容区 + 状态栏
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    // 左右分栏：卡片列表 + 查看器
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CARD_PANEL_WIDTH), Constraint::Min(1)])
        .split(rows[1]);

    let card_panel = columns[0];
    let viewer_panel = columns[1];
    let viewer_inner = inner(viewer_panel);

    // 查看器内部：正文 + 分隔空行 + 下载控件
    let viewer_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(viewer_inner);

    Regions {
        title: rows[0],
        card_panel,
        cards: inner(card_panel),
        viewer_panel,
        content: viewer_rows[0],
        download: viewer_rows[2],
        status: rows[2],
    }
}

/// 带边框面板的内部区域
fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// 列表区域能完整容纳的卡片数
pub fn card_capacity(list: Rect) -> usize {
    usize::from(list.height / CARD_HEIGHT)
}

/// 一张已排版的卡片
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSlot {
    /// 卡片在列表中的位置
    pub position: usize,
    /// 裁剪后的区域
    pub area: Rect,
    /// 可见部分占卡片高度的比例
    pub ratio: f32,
}

/// 从 `offset` 开始排列卡片，只返回落在区域内的卡片
pub fn card_slots(list: Rect, offset: usize, total: usize) -> Vec<CardSlot> {
    let mut slots = Vec::new();
    let mut y = list.y;

    for position in offset..total {
        if y >= list.bottom() {
            break;
        }
        let height = CARD_HEIGHT.min(list.bottom() - y);
        slots.push(CardSlot {
            position,
            area: Rect::new(list.x, y, list.width, height),
            ratio: f32::from(height) / f32::from(CARD_HEIGHT),
        });
        y += height;
    }

    slots
}

/// 鼠标命中测试：返回坐标所在卡片的位置
pub fn card_at(list: Rect, offset: usize, total: usize, column: u16, row: u16) -> Option<usize> {
    card_slots(list, offset, total)
        .into_iter()
        .find(|slot| slot.area.contains((column, row).into()))
        .map(|slot| slot.position)
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let regions = regions(frame.area());

    render_title_bar(frame, regions.title);
    components::cards::render(app, frame, &regions);
    components::viewer::render(app, frame, &regions);
    components::statusbar::render(app, frame, regions.status);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {}", t().common.app_name))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_fill_the_screen() {
        let r = regions(Rect::new(0, 0, 100, 30));
        assert_eq!(r.title.height, 1);
        assert_eq!(r.status.y, 29);
        assert_eq!(r.card_panel.width, CARD_PANEL_WIDTH);
        assert_eq!(r.cards, Rect::new(1, 2, CARD_PANEL_WIDTH - 2, 26));
        assert_eq!(r.download.y + 1, r.viewer_panel.bottom() - 1);
    }

    #[test]
    fn last_card_is_partially_visible() {
        let list = Rect::new(0, 0, 20, 10);
        let slots = card_slots(list, 0, 12);
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[3].area.height, 1);
        assert!((slots[3].ratio - 1.0 / 3.0).abs() < f32::EPSILON);
        assert_eq!(card_capacity(list), 3);
    }

    #[test]
    fn slots_start_at_offset() {
        let slots = card_slots(Rect::new(0, 0, 20, 9), 9, 12);
        let positions: Vec<usize> = slots.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![9, 10, 11]);
    }

    #[test]
    fn hit_test_maps_rows_to_cards() {
        let list = Rect::new(1, 2, 20, 12);
        assert_eq!(card_at(list, 0, 12, 5, 2), Some(0));
        assert_eq!(card_at(list, 0, 12, 5, 4), Some(0));
        assert_eq!(card_at(list, 0, 12, 5, 5), Some(1));
        assert_eq!(card_at(list, 2, 12, 5, 5), Some(3));
        assert_eq!(card_at(list, 0, 12, 30, 5), None);
        assert_eq!(card_at(list, 0, 12, 5, 14), None);
    }
}
