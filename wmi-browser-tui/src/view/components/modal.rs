//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(app, frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内容区域（去掉边框与内边距）
fn inner_rect(area: Rect, pad_x: u16, pad_y: u16) -> Rect {
    Rect::new(
        area.x + pad_x,
        area.y + pad_y,
        area.width.saturating_sub(pad_x * 2),
        area.height.saturating_sub(pad_y * 2),
    )
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(60, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.bg));

    frame.render_widget(block, area);

    let mut lines: Vec<Line> = message
        .lines()
        .map(|line| Line::styled(line.to_string(), Style::default().fg(c.fg)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press Esc or Enter to close",
        Style::default().fg(c.muted),
    ));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_rect(area, 2, 2));
}

/// 渲染帮助弹窗
fn render_help(app: &App, frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(58, 22, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(c.bg));

    frame.render_widget(block, area);

    let section = |text: &'static str| {
        Line::styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<16}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section("Global shortcuts"),
        entry("Tab / Shift+Tab", "Switch panel"),
        entry("Ctrl+u", "Clear search"),
        entry("Alt+r", "Reload data"),
        entry("Alt+t", "Toggle theme"),
        entry("Alt+h / ?", "Help"),
        entry("Alt+q / Ctrl+c", "Quit"),
        Line::from(""),
        section("Lists"),
        entry("↑↓ / jk", "Move Up/Down"),
        entry("Home End / g G", "First / Last"),
        entry("PgUp PgDn", "Page Up/Down"),
        entry("/", "Jump to search"),
        entry("q", "Quit"),
        Line::from(""),
        section("Search"),
        Line::styled(
            "  Case-insensitive regex over all columns",
            Style::default().fg(c.fg),
        ),
        Line::from(""),
        Line::styled(
            format!("Source: {}", app.source_label),
            Style::default().fg(c.muted),
        ),
        Line::styled("Press Esc to close the help", Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner_rect(area, 2, 1));
}
