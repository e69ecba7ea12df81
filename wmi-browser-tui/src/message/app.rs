//! 应用主消息枚举

use wmi_browser_core::{CoreResult, WmiRecord};

use super::{ListMessage, ModalMessage, SearchMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个面板
    FocusNext,

    /// 焦点移到上一个面板
    FocusPrev,

    /// 焦点直接跳到搜索框
    FocusSearch,

    /// 搜索框相关消息
    Search(SearchMessage),

    /// 国家列表相关消息
    Countries(ListMessage),

    /// 记录表格相关消息
    Table(ListMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台加载完成
    Loaded(CoreResult<Vec<WmiRecord>>),

    /// 重新加载数据
    Reload,

    /// 切换深色 / 浅色主题
    ToggleTheme,

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
