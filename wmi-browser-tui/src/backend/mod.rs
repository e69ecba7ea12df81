//!
//! src/backend/mod.rs
//! Backend 层：与 UI 解耦的服务
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置加载（JSON 文件）
//!         mod loader;             // 后台加载 WMI 记录
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：~/.config/wmi-browser/config.json
//!         文件不存在时使用默认值；文件格式错误则启动失败。
//!         命令行参数在此之后覆盖（见 cli.rs）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、加载器（Loader）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/loader.rs 中定义：
//!
//!         request_load()  在 tokio 运行时中 spawn 一次 WmiSource::load_all()
//!         try_recv()      主循环每轮调用，把结果包装成 AppMessage::Loaded
//!
//!     数据流：
//!         Update 层设置 app.load_requested
//!             ↓
//!         app.rs 调用 loader.request_load()
//!             ↓
//!         后台任务完成，结果写入 mpsc 通道
//!             ↓
//!         app.rs 取出结果 → update::update(AppMessage::Loaded(..))
//!             ↓
//!         RecordsState 重新计算视图
//!

mod config_service;
mod loader;

pub use config_service::{AppConfig, ConfigService, JsonConfigService};
pub use loader::Loader;
