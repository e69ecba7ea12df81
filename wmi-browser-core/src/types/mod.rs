//! 类型定义模块

mod query;
mod record;

pub use query::{FilterQuery, ALL_COUNTRIES};
pub use record::WmiRecord;
