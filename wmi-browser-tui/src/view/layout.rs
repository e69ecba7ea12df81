//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::Styles;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 搜索框 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(3), // 搜索框
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    components::search_bar::render(app, frame, main_layout[1]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 国家列表
            Constraint::Percentage(80), // 记录表格
        ])
        .split(main_layout[2]);

    components::country_list::render(app, frame, columns[0]);
    components::record_table::render(app, frame, columns[1]);

    components::statusbar::render(app, frame, main_layout[3]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 标题栏文字："<title> | Total: N"
fn title_text(app: &App) -> String {
    format!("{} | Total: {}", app.title, app.records.view.total())
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(format!(" {}", title_text(app))).style(Styles::title_bar());
    frame.render_widget(title, area);
}
