//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ SearchMsg │               ▼               │   │
//！│  │   ┌─────────┐          │ ListMsg   │          ┌──────────┐         │   │
//！│  │   │  View   │          │ ModalMsg  │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ load_requested    │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │ (Loader) │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │ Loaded(..)         │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ wmi-browser-core  │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：事件与状态变更之间的契约
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // AppMessage：主消息
//!         mod list;       // ListMessage：国家列表 / 记录表格的光标移动
//!         mod modal;      // ModalMessage：弹窗
//!         mod search;     // SearchMessage：搜索框编辑
//!
//!
//!     消息有两个来源：
//!         · Event 层把按键翻译成消息
//!         · Loader 把后台加载结果包装成 AppMessage::Loaded
//!
//!     两者都交给 update::update() 消费，Model 只在那里被修改。
//!

mod app;
mod list;
mod modal;
mod search;

pub use app::AppMessage;
pub use list::ListMessage;
pub use modal::ModalMessage;
pub use search::SearchMessage;
