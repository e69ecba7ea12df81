//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及日志输出的安装。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志初始化（tracing-subscriber）
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use logging::{default_log_file, init_logging, LogTarget};
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、终端
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/util/terminal.rs 中，有：
//!
//!             pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//!         init_terminal()     进入 raw mode + 备用屏幕，并安装 panic hook
//!         restore_terminal()  退出 raw mode + 备用屏幕，显示光标
//!
//!     panic hook 保证程序崩溃时终端也会被恢复，
//!     否则 shell 会停留在 raw mode 中。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、日志
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/util/logging.rs 中定义：
//!
//!         两个 crate 都只使用 `log` 宏（log::info! 等），
//!         由 tracing-subscriber 的 log 桥接统一收集。
//!
//!         LogTarget::Stderr       --print 模式
//!         LogTarget::File(path)   TUI 模式（终端被占用，只能写文件）
//!
//!         过滤规则来自 RUST_LOG，未设置时为 "info"。
//!         写文件时返回 WorkerGuard，main() 持有它直到退出，
//!         丢弃时会把缓冲区中的日志全部写出。
//!

mod logging;
mod terminal;

pub use logging::{default_log_file, init_logging, LogTarget};
pub use terminal::{init_terminal, restore_terminal, Term};
