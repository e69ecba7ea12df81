//! 搜索框消息

/// 搜索框编辑
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMessage {
    /// 输入字符
    Input(char),

    /// 删除最后一个字符
    Backspace,

    /// 清空搜索框
    Clear,
}
