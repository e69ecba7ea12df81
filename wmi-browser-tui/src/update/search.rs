//! 搜索框更新

use crate::message::SearchMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: SearchMessage) {
    match msg {
        SearchMessage::Input(c) => app.records.push_search_char(c),
        SearchMessage::Backspace => app.records.pop_search_char(),
        SearchMessage::Clear => app.records.clear_search(),
    }
}
