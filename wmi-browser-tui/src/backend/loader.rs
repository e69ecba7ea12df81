//! 后台数据加载

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use wmi_browser_core::{CoreResult, WmiRecord, WmiSource};

use crate::message::AppMessage;

/// 在 tokio 运行时中执行 `WmiSource::load_all`，结果通过通道送回主循环
pub struct Loader {
    handle: Handle,
    source: Arc<dyn WmiSource>,
    tx: UnboundedSender<CoreResult<Vec<WmiRecord>>>,
    rx: UnboundedReceiver<CoreResult<Vec<WmiRecord>>>,
}

impl Loader {
    pub fn new(handle: Handle, source: Arc<dyn WmiSource>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            source,
            tx,
            rx,
        }
    }

    /// 发起一次加载（不等待结果）
    pub fn request_load(&self) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        log::info!("loading records from {}", source.describe());

        self.handle.spawn(async move {
            let result = source.load_all().await;
            if let Err(ref e) = result {
                log::error!("load failed: {e}");
            }
            // 接收端只会在退出时被丢弃
            let _ = tx.send(result);
        });
    }

    /// 非阻塞地取出一个已完成的加载结果
    pub fn try_recv(&mut self) -> Option<AppMessage> {
        self.rx.try_recv().ok().map(AppMessage::Loaded)
    }

    /// 等待下一个加载结果
    #[cfg(test)]
    pub async fn recv(&mut self) -> Option<AppMessage> {
        self.rx.recv().await.map(AppMessage::Loaded)
    }
}
