//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod list;           // 国家列表 / 表格光标
//!         mod modal;          // 弹窗
//!         mod search;         // 搜索框编辑
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!     使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!     子消息委托给子模块处理（search、list、modal）。
//!
//!     搜索框和国家列表的每一次变化都会在同一轮 update 中
//!     同步重新计算视图（RecordsState::refresh）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据加载
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     AppMessage::Reload
//!         → app.request_load()            设置 load_requested，标记 loading
//!         → app.rs 下一轮调用 loader.request_load()
//!
//!     AppMessage::Loaded(Ok(records))
//!         → RecordsState::set_records()   替换源数据，重新计算
//!
//!     AppMessage::Loaded(Err(e))
//!         → RecordsState::set_load_error()
//!         → 弹出错误弹窗，提示 Alt+r 重试（不会自动重试）
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod list;
mod modal;
mod search;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::FocusNext => {
            if !app.modal.is_open() {
                app.focus = app.focus.next();
            }
        }

        AppMessage::FocusPrev => {
            if !app.modal.is_open() {
                app.focus = app.focus.prev();
            }
        }

        AppMessage::FocusSearch => {
            if !app.modal.is_open() {
                app.focus = crate::model::FocusPanel::Search;
            }
        }

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
        }

        AppMessage::Countries(list_msg) => {
            list::update_countries(app, list_msg);
        }

        AppMessage::Table(list_msg) => {
            list::update_table(app, list_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Loaded(Ok(records)) => {
            let count = records.len();
            log::info!("loaded {count} records");
            app.records.set_records(records);
            app.set_status(format!("Loaded {count} records"));
        }

        AppMessage::Loaded(Err(e)) => {
            app.records.set_load_error(&e);
            app.modal.show_error(
                "Load failed",
                &format!("{e}\n\nPress Alt+r to retry"),
            );
            app.set_status("Load failed");
        }

        AppMessage::Reload => {
            if app.records.loading {
                app.set_status("Already loading...");
            } else {
                app.request_load();
                app.set_status("Reloading...");
            }
        }

        AppMessage::ToggleTheme => {
            app.theme = app.theme.toggle();
            app.theme.apply();
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}
