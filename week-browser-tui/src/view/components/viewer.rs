//! 右侧内容查看器组件

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use week_browser_core::{DownloadControl, ViewerStatus};

use crate::i18n::t;
use crate::model::domain::{BlockKind, Document, Row, INDENT};
use crate::model::App;
use crate::view::layout::Regions;
use crate::view::theme::{colors, Styles};

/// 渲染内容查看器
pub fn render(app: &App, frame: &mut Frame, regions: &Regions) {
    let c = colors();
    let texts = t();
    let status = app.browser.status();

    let mut title = match app.browser.loader().title_index() {
        Some(index) => texts.viewer.title(index),
        None => texts.common.app_name.to_string(),
    };
    if status.is_busy() {
        title = format!("{title} · {}", texts.common.loading);
    }

    let mut block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));
    if let Some(doc_title) = app.viewer.document.as_ref().and_then(|d| d.title.as_deref()) {
        block = block.title_bottom(
            Line::styled(format!(" {doc_title} "), Style::default().fg(c.muted)).right_aligned(),
        );
    }
    frame.render_widget(block, regions.viewer_panel);

    let body = match (&app.viewer.document, status) {
        (Some(doc), _) if doc.is_empty() => placeholder(texts.viewer.empty_document),
        (Some(doc), _) => document_lines(
            doc,
            usize::from(regions.content.width),
            app.viewer.is_entering(),
        ),
        (None, ViewerStatus::Idle) => placeholder(texts.viewer.placeholder),
        (None, ViewerStatus::Busy) => placeholder(texts.common.loading),
        // 加载失败：正文留空
        (None, ViewerStatus::Ready) => Vec::new(),
    };

    let scroll = u16::try_from(app.viewer.scroll).unwrap_or(u16::MAX);
    // 正文已按宽度折行，滚动上限与之一致
    let paragraph = Paragraph::new(body).scroll((scroll, 0));
    frame.render_widget(paragraph, regions.content);

    if let DownloadControl::Visible { href, .. } = app.browser.download() {
        let file_name = href.rsplit('/').next().unwrap_or(href);
        let mut link = Style::default().fg(c.link).add_modifier(Modifier::UNDERLINED);
        if app.viewer.download_ticks > 0 {
            link = link.add_modifier(Modifier::DIM);
        }
        let line = Line::from(vec![
            Span::styled("[d]", Styles::hint_key()),
            Span::raw(" "),
            Span::styled(texts.viewer.download_label, link),
            Span::styled(format!("  {file_name}"), Style::default().fg(c.muted)),
        ]);
        frame.render_widget(Paragraph::new(line), regions.download);
    }
}

fn placeholder(text: &'static str) -> Vec<Line<'static>> {
    vec![Line::styled(text, Style::default().fg(colors().muted))]
}

/// 把文档按 `width` 列折行并转换为显示行
fn document_lines(doc: &Document, width: usize, entering: bool) -> Vec<Line<'static>> {
    let c = colors();
    let mut base = Style::default().fg(c.fg);
    if entering {
        base = base.add_modifier(Modifier::DIM);
    }
    let gutter = base.fg(c.muted);

    doc.rows(width)
        .into_iter()
        .map(|row| {
            let Row::Text { kind, text, first } = row else {
                return Line::default();
            };
            match kind {
                BlockKind::Heading(level) => {
                    let mut style = base.fg(c.heading).add_modifier(Modifier::BOLD);
                    if level <= 2 {
                        style = style.add_modifier(Modifier::UNDERLINED);
                    }
                    Line::styled(text, style)
                }
                BlockKind::ListItem | BlockKind::TableCell => {
                    let marker = match (kind, first) {
                        (_, false) => " ".repeat(INDENT),
                        (BlockKind::ListItem, true) => "  • ".to_string(),
                        _ => "  │ ".to_string(),
                    };
                    Line::from(vec![Span::styled(marker, gutter), Span::styled(text, base)])
                }
                BlockKind::Preformatted => Line::styled(text, base.fg(c.warning)),
                BlockKind::Paragraph => Line::styled(text, base),
            }
        })
        .collect()
}
