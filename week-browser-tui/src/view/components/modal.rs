//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = app.modal.active() else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let help = &t().help;

    let area = centered_rect(48, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(c.heading).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(c.warning)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section(help.section_weeks),
        entry("↑ ← k h", help.previous_week),
        entry("↓ → j l", help.next_week),
        entry("Click", help.click_card),
        Line::from(""),
        section(help.section_content),
        entry("Wheel", help.scroll_line),
        entry("PgUp/PgDn", help.scroll_page),
        entry("Home/End", help.scroll_ends),
        entry("d", help.download),
        Line::from(""),
        section(help.section_other),
        entry("t", help.toggle_theme),
        entry("L", help.toggle_language),
        entry("q / Ctrl+C", help.quit),
        Line::from(""),
        Line::styled(
            format!("Esc  {}", t().common.close),
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
