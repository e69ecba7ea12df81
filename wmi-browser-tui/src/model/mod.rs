//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//! 筛选与排序本身不在这里实现，RecordsState 只负责在选择变化时
//! 调用 wmi_browser_core::derive() 并保存结果。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Search / Countries / Table）
//!
//!         pub mod state;      // 记录浏览状态 + 弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub records: RecordsState,          // 源数据、筛选条件、派生视图
//!             pub modal: ModalState,              // 弹窗状态
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub title: String,                  // 标题栏文字
//!             pub source_label: String,           // 数据源描述
//!             pub theme: Theme,                   // 当前主题
//!             load_requested: bool,               // 待处理的加载请求
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new(&config, label);
//!         - 在 update/mod.rs 中修改：app.should_quit = true;
//!         - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!         - 在 app.rs 中取出加载请求：app.take_load_request()
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（FocusPanel）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/focus.rs 中定义焦点面板枚举：
//!         - Search：搜索框（可输入）
//!         - Countries：国家列表
//!         - Table：记录表格
//!
//!     数据流：
//!         用户按 Tab / Shift+Tab
//!             ↓
//!         event/handler.rs 返回 AppMessage::FocusNext / FocusPrev
//!             ↓
//!         update/mod.rs 执行 app.focus = app.focus.next()
//!             ↓
//!         view 层根据 app.focus 设置边框颜色
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、记录浏览状态（RecordsState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/records.rs 中定义：
//!
//!         source          完整记录，保持接口返回的顺序，从不被排序
//!         query           FilterQuery { selected_country, search_text }
//!         view            DerivedView { countries, records }
//!         search_error    搜索表达式无效时的提示，此时 view 保持不变
//!         load_error      最近一次加载失败的信息
//!
//!     任何修改 query 的方法都会立刻重新计算 view。
//!

mod app;
mod focus;

pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{Modal, ModalState, RecordsState};
