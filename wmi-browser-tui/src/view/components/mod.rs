//! 界面组件

pub mod country_list;
pub mod modal;
pub mod record_table;
pub mod search_bar;
pub mod statusbar;
