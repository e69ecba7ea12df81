//! 国家列表与记录表格的光标更新

use crate::message::ListMessage;
use crate::model::App;

/// 国家列表：移动光标即应用选择
pub fn update_countries(app: &mut App, msg: ListMessage) {
    let records = &mut app.records;
    match msg {
        ListMessage::SelectPrevious => records.select_country_previous(),
        ListMessage::SelectNext => records.select_country_next(),
        ListMessage::SelectFirst => records.select_country_first(),
        ListMessage::SelectLast => records.select_country_last(),
        ListMessage::PageUp => records.select_country_page_up(),
        ListMessage::PageDown => records.select_country_page_down(),
    }
}

/// 记录表格：只移动光标
pub fn update_table(app: &mut App, msg: ListMessage) {
    let records = &mut app.records;
    match msg {
        ListMessage::SelectPrevious => records.select_row_previous(),
        ListMessage::SelectNext => records.select_row_next(),
        ListMessage::SelectFirst => records.select_row_first(),
        ListMessage::SelectLast => records.select_row_last(),
        ListMessage::PageUp => records.select_row_page_up(),
        ListMessage::PageDown => records.select_row_page_down(),
    }
}
