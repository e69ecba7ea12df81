//! 列表光标消息

/// 国家列表与记录表格共用的光标移动
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    PageUp,
    PageDown,
}
