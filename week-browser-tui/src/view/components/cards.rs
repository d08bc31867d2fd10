//! 左侧卡片列表组件

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::layout::{card_slots, Regions};
use crate::view::theme::{colors, Styles};
use crate::view::truncate;

/// 渲染卡片列表
pub fn render(app: &App, frame: &mut Frame, regions: &Regions) {
    let c = colors();
    let texts = t();

    let panel = Block::default()
        .title(format!(" {} ", texts.cards.panel_title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border))
        .style(Style::default().bg(c.bg));
    frame.render_widget(panel, regions.card_panel);

    let cards = app.browser.cards();
    let visibility = app.browser.visibility();

    for slot in card_slots(regions.cards, app.card_list.offset, cards.len()) {
        let card = cards[slot.position];

        let (border, text) = if card.is_active {
            (Style::default().fg(c.border_focused), Styles::selected())
        } else if visibility.is_flagged(card.index) {
            (Style::default().fg(c.border), Style::default().fg(c.fg))
        } else {
            // 尚未进入视口的卡片
            let dim = Style::default().fg(c.muted).add_modifier(Modifier::DIM);
            (dim, dim)
        };

        let label_width = usize::from(slot.area.width.saturating_sub(2));
        let label = truncate(&texts.cards.week_label(card.index), label_width);

        let widget = Paragraph::new(label)
            .style(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(widget, slot.area);
    }
}
