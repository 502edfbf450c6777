//! Odoo 日志转换模块
//!
//! 提供字段提取、多行拼接和流式转换

pub mod converter;
pub mod parser;
pub mod reassembler;
pub mod types;
pub mod utils;

// 重新导出核心类型和函数
pub use converter::{convert, convert_with_progress, write_record};
pub use parser::extract;
pub use reassembler::LineReassembler;
pub use types::{ConvertStats, HttpRecord, Mode, SqlRecord};
pub use utils::{format_duration, starts_with_timestamp};
