//!
//! src/view/mod.rs
//! View 层：只读地把 Model 画到终端上
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 各个界面组件
//!         mod layout;         // 主布局
//!
//!         pub mod theme;      // 主题与样式（配置文件中的 theme 字段）
//!
//!
//!     屏幕布局：
//!
//!     ┌──────────────────────────────────────────────────────────────────┐
//!     │ WMI Data - Honda | Total: 42                        （标题栏）   │
//!     ├──────────────────────────────────────────────────────────────────┤
//!     │ Search                                              （搜索框）   │
//!     ├──────────────┬───────────────────────────────────────────────────┤
//!     │ Countries    │ Id  Name  Country  Vehicle Type  WMI  ...         │
//!     │ All Countries│ ...                                               │
//!     │ JAPAN        │                                                   │
//!     │  （20%）     │                      （80%）                      │
//!     ├──────────────┴───────────────────────────────────────────────────┤
//!     │ Tab Switch Panels │ ↑↓ Select │ ...                 （状态栏）   │
//!     └──────────────────────────────────────────────────────────────────┘
//!
//!     每一帧都从 App 完整重绘，View 层不持有任何状态。
//!

mod components;
mod layout;

pub mod theme;

pub use layout::render;
