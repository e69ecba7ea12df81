//! 顶部搜索框组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染搜索框
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = app.focus.is_search();
    let is_invalid = app.records.search_error.is_some();

    let (title, border_style) = if is_invalid {
        (" Search: invalid pattern ", Style::default().fg(c.error))
    } else {
        (" Search ", Styles::border(is_focused))
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::panel_title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let text = app.records.search_text();
    let mut spans = Vec::new();
    if text.is_empty() && !is_focused {
        spans.push(Span::styled("Type to search all columns (regex)", Styles::muted()));
    } else {
        spans.push(Span::styled(text.to_string(), Styles::text()));
    }
    if is_focused {
        spans.push(Span::styled("█", Style::default().fg(c.highlight)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
