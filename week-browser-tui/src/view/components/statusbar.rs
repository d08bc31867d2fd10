//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(c.warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();

    if app.modal.is_open() {
        return vec![("Esc", texts.common.close)];
    }

    let mut hints = vec![
        ("↑↓", texts.hints.select),
        ("PgUp/PgDn", texts.hints.scroll),
    ];
    if app.browser.download().is_visible() {
        hints.push(("d", texts.hints.download));
    }
    hints.push(("?", texts.hints.help));
    hints.push(("q", texts.hints.quit));
    hints
}
