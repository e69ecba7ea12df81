//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         当接收到键盘事件时，转入 handle_key_event()
//!         判断顺序：
//!             - 非 Press 事件直接忽略
//!             - Ctrl+c 任何时候都退出
//!             - 有弹窗打开时，调用 handle_modal_keys 处理（Esc / Enter / q 关闭）
//!             - 全局快捷键，就地处理
//!             - 焦点位于搜索框，调用 handle_search_keys 处理
//!             - 焦点位于国家列表或表格，调用 handle_list_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 快捷键一览
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     全局：
//!         Tab / Shift+Tab     → FocusNext / FocusPrev
//!         Ctrl+u              → SearchMessage::Clear
//!         Alt+r               → Reload
//!         Alt+h               → ShowHelp
//!         Alt+t               → ToggleTheme
//!         Alt+q / Ctrl+c      → Quit
//!
//!     搜索框（焦点在 Search）：
//!         字符输入            → SearchMessage::Input(c)，包括 q 和 ?
//!         Backspace           → SearchMessage::Backspace
//!         Enter / ↓           → FocusNext
//!
//!     国家列表 / 表格：
//!         ↑↓ / jk             → SelectPrevious / SelectNext
//!         Home End / g G      → SelectFirst / SelectLast
//!         PageUp PageDown     → PageUp / PageDown
//!         ?                   → ShowHelp
//!         /                   → FocusSearch
//!         q                   → Quit
//!
//!     handler.rs 只负责 "翻译"，返回一个 AppMessage，
//!     真正的状态修改发生在 update::update() 中。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
