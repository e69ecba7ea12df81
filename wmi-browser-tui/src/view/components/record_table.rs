//! 右侧记录表格组件

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use wmi_browser_core::{RecordRow, COLUMNS};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 各列宽度，顺序与 COLUMNS 一致
const WIDTHS: [Constraint; 8] = [
    Constraint::Length(6),
    Constraint::Fill(3),
    Constraint::Fill(2),
    Constraint::Length(14),
    Constraint::Length(5),
    Constraint::Length(24),
    Constraint::Length(20),
    Constraint::Length(20),
];

/// 渲染记录表格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let records = &app.records;
    let is_focused = app.focus.is_table();

    let title = if records.loading && records.loaded {
        " Records (reloading...) ".to_string()
    } else {
        format!(" Records ({}) ", records.view.total())
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::panel_title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    if !records.loaded {
        let message = if records.loading {
            "Loading..."
        } else {
            "No data. Press Alt+r to retry."
        };
        render_message(frame, area, block, message);
        return;
    }

    if records.view.records.is_empty() {
        render_message(frame, area, block, "No matching records");
        return;
    }

    let c = colors();
    let header = Row::new(COLUMNS.iter().map(|name| Cell::from(*name)))
        .style(Style::default().fg(c.header).add_modifier(Modifier::BOLD));

    let rows = records.view.records.iter().map(|record| {
        let row = RecordRow::from(record);
        Row::new(row.cells.into_iter().map(Cell::from)).style(Styles::text())
    });

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Styles::selected());

    let mut state = TableState::default();
    state.select(Some(records.table_selected));

    frame.render_stateful_widget(table, area, &mut state);
}

/// 空状态 / 加载中
fn render_message(frame: &mut Frame, area: Rect, block: Block, message: &str) {
    let paragraph = Paragraph::new(vec![Line::from(""), Line::styled(message, Styles::muted())])
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
