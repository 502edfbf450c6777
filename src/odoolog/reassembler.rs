//! 多行记录拼接
//!
//! 一条逻辑记录以带时间戳的行开始，后续不带时间戳的行是它的续行。
//! 拼接器同一时刻最多持有一条未完成的记录：
//!
//! ```text
//! 2024-01-01 00:00:00,123 ... [42 ms] query:SELECT *     -> 开始记录
//!     FROM res_partner                                    -> 续行，追加 " FROM res_partner"
//!     WHERE id = 1                                        -> 续行，追加 " WHERE id = 1"
//! 2024-01-01 00:00:01,456 ... [3 ms] query:COMMIT        -> 输出上一条，开始新记录
//! ```
//!
//! 带时间戳的行永远不会被当作续行；既不是记录开头、又没有未完成记录可追加的行
//! 会被静默丢弃，只计入总行数。

use crate::odoolog::parser::extract;
use crate::odoolog::types::{ConvertStats, Mode};
use crate::odoolog::utils::starts_with_timestamp;

/// 行拼接器
#[derive(Debug)]
pub struct LineReassembler {
    mode: Mode,
    /// 正在拼接的输出行，`None` 表示没有未完成的记录
    pending: Option<String>,
    stats: ConvertStats,
}

impl LineReassembler {
    pub fn new(mode: Mode) -> Self {
        Self { mode, pending: None, stats: ConvertStats::default() }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// 当前是否有未完成的记录
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn stats(&self) -> &ConvertStats {
        &self.stats
    }

    /// 处理一行输入，返回因这一行而完成的上一条记录（如果有）。
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        self.stats.total_lines += 1;

        let completed = if self.has_pending() && starts_with_timestamp(line) {
            self.take_pending()
        } else {
            if let Some(buffer) = self.pending.as_mut() {
                buffer.push(' ');
                buffer.push_str(line.trim());
            }
            None
        };

        if self.pending.is_none() {
            self.pending = extract(line, self.mode);
        }
        completed
    }

    /// 输入结束：取出最后一条未完成的记录。
    pub fn finish(&mut self) -> Option<String> {
        self.take_pending()
    }

    /// 记录输入行中有无效 UTF-8
    pub(crate) fn note_lossy_line(&mut self) {
        self.stats.lossy_lines += 1;
    }

    fn take_pending(&mut self) -> Option<String> {
        let record = self.pending.take()?;
        self.stats.parsed_records += 1;
        Some(record)
    }
}
