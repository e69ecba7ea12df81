//! 页面状态模块
//!
//! 定义记录浏览与弹窗的状态数据结构

mod modal;
mod records;

pub use modal::{Modal, ModalState};
pub use records::RecordsState;
