//! 应用主状态结构

use crate::backend::AppConfig;
use crate::view::theme::Theme;

use super::{FocusPanel, ModalState, RecordsState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 记录浏览状态
    pub records: RecordsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 标题栏文字
    pub title: String,

    /// 数据源描述（显示在状态栏）
    pub source_label: String,

    /// 当前主题
    pub theme: Theme,

    /// 是否需要主循环发起一次加载
    load_requested: bool,
}

impl App {
    /// 创建新的应用实例，并请求首次加载
    pub fn new(config: &AppConfig, source_label: String) -> Self {
        config.theme.apply();

        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::default(),
            records: RecordsState::new(),
            modal: ModalState::new(),
            status_message: None,
            title: config.title.clone(),
            source_label,
            theme: config.theme,
            load_requested: false,
        };
        app.request_load();
        app
    }

    /// 请求（重新）加载数据
    pub fn request_load(&mut self) {
        self.load_requested = true;
        self.records.start_loading();
    }

    /// 取出加载请求（每个请求只会被取出一次）
    pub fn take_load_request(&mut self) -> bool {
        std::mem::take(&mut self.load_requested)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
