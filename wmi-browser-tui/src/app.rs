//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     if app.take_load_request() { loader.request_load() }   // Update 层请求加载数据
//!     terminal.draw(|f| view::render(&app , f))             // 渲染 UI
//!     if app.should_quit { break }                          // 检查 APP 是否应该退出
//!     while let Some(msg) = loader.try_recv() {             // 取回已完成的加载结果
//!         update::update(&mut app , msg)
//!     }
//!     if let Some(event) = poll_event() {                   // 轮询输入，最多等待 100ms
//!         let msg = handle_event(event , &app);
//!         update::update(&mut app , msg)
//!     }
//! }
//!
//! 网络请求在 tokio 运行时里执行，主循环从不阻塞在网络上。

use std::time::Duration;

use anyhow::Result;

use crate::backend::Loader;
use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, loader: &mut Loader) -> Result<()> {
    loop {
        // 1. 处理加载请求（启动时 App 自带一次）
        if app.take_load_request() {
            loader.request_load();
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 收取后台加载结果
        while let Some(msg) = loader.try_recv() {
            update::update(app, msg);
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
