//! 左侧国家列表组件

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use wmi_browser_core::ALL_COUNTRIES;

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染国家列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let is_focused = app.focus.is_countries();

    let block = Block::default()
        .title(" Countries ")
        .title_style(Styles::panel_title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    // 首次加载完成前只有 "All Countries"
    let fallback = [ALL_COUNTRIES.to_string()];
    let countries: &[String] = if app.records.view.countries.is_empty() {
        &fallback
    } else {
        &app.records.view.countries
    };

    let items: Vec<ListItem> = countries
        .iter()
        .map(|country| {
            let style = if *country == app.records.query.selected_country {
                Styles::text()
            } else {
                Styles::muted()
            };
            ListItem::new(Line::from(Span::styled(country.clone(), style)))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    // 使用 ListState 来跟踪选中状态
    let mut state = ListState::default();
    state.select(Some(app.records.country_selected));

    frame.render_stateful_widget(list, area, &mut state);
}
