//! WMI Browser TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与数据加载 (`backend/`)
//!
//! 数据的筛选与排序全部在 `wmi-browser-core` 中完成，
//! 这里只负责把用户输入翻译成 `FilterQuery`，再把 `DerivedView` 画出来。
//!
//!
//! 启动顺序：
//!
//!     Cli::parse()            // 命令行参数
//!     load_config()           // 默认值 < 配置文件 < 命令行
//!     init_logging()          // TUI 模式写日志文件，--print 模式写 stderr
//!     --print ? print::run()  // 一次性输出表格后退出
//!           : init_terminal() → App::new() → app::run() → restore_terminal()

mod app;
mod backend;
mod cli;
mod event;
mod message;
mod model;
mod print;
mod update;
mod util;
mod view;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use wmi_browser_core::{HttpWmiSource, WmiSource};

use backend::{ConfigService, JsonConfigService, Loader};
use cli::Cli;
use util::{init_logging, init_terminal, restore_terminal, LogTarget};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // 1. 加载配置
    let config_service = match cli.config {
        Some(ref path) => JsonConfigService::new(path.clone()),
        None => JsonConfigService::default_location(),
    };
    let mut config = config_service.load()?;
    cli.apply_to(&mut config);

    // 2. 初始化日志（TUI 占用终端，日志只能写文件）
    let log_target = if cli.print {
        LogTarget::Stderr
    } else {
        LogTarget::File(cli.log_file.clone().unwrap_or_else(util::default_log_file))
    };
    let _log_guard = init_logging(&log_target)?;
    log::info!("wmi-browser {} starting", env!("CARGO_PKG_VERSION"));
    log::debug!("effective config: {config:?}");

    // 3. 数据源
    let source: Arc<dyn WmiSource> = Arc::new(
        HttpWmiSource::new(&config.source_config()).context("failed to set up data source")?,
    );
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;

    if cli.print {
        let query = cli.query();
        let mut stdout = io::stdout().lock();
        runtime.block_on(print::run(source.as_ref(), &query, &config.title, &mut stdout))?;
        return Ok(ExitCode::SUCCESS);
    }

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例与加载器
    let mut app = model::App::new(&config, source.describe());
    let mut loader = Loader::new(runtime.handle().clone(), source);

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut loader);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    log::info!("wmi-browser exiting");
    result.map(|()| ExitCode::SUCCESS)
}
