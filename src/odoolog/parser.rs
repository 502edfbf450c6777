//! 字段提取器：把单行 Odoo 日志转换为 pgBadger 的 stderr 行格式
//!
//! 每种模式只有一条静态正则，对整行做一次匹配：
//!
//! ```text
//! SQL : 2024-01-01 00:00:00,123 ... [42 ms] query:SELECT 1
//! HTTP: 2024-01-01 00:00:00,123 ... werkzeug: 127.0.0.1 - - "GET /web HTTP/1.1" 200 - 3 0.012 0.045
//!                                                                           次数 SQL耗时 剩余耗时
//! ```
//!
//! 两种模式都输出：
//!
//! ```text
//! <时间戳> [1]: LOG:  duration: <毫秒> ms  statement: <文本>
//! ```
//!
//! `LOG:` 后面的两个空格是格式的一部分，pgBadger 按位置解析这一行。

use crate::odoolog::types::{HttpRecord, Mode, SqlRecord};
use crate::odoolog::utils::{format_duration, trim_line_end};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref SQL_RE: Regex = Regex::new(
        r"^(?P<dt>.{19}).*\[(?P<timer>.+) ms\] query:(?P<query>.+)$"
    )
    .unwrap();
    static ref HTTP_RE: Regex = Regex::new(concat!(
        r"^(?P<dt>.{19}).*werkzeug: ",
        r#"(?P<ip>[0-9.]+) .* "(?P<method>[A-Z]+) (?P<path>[^ ]+) HTTP/[0-9.]+" "#,
        r"(?P<status>[0-9]+) .* (?P<query_count>\d+) (?P<query_time>[0-9.]+) (?P<remaining_time>[0-9.]+)$",
    ))
    .unwrap();
}

/// 渲染 pgBadger 的一行输出
fn render(timestamp: &str, duration_ms: f64, statement: &str) -> String {
    format!(
        "{timestamp} [1]: LOG:  duration: {} ms  statement: {statement}",
        format_duration(duration_ms)
    )
}

fn capture<'h>(caps: &Captures<'h>, name: &str) -> Option<&'h str> {
    caps.name(name).map(|m| m.as_str())
}

impl SqlRecord {
    /// 从一行 SQL 日志中解析记录，不匹配时返回 `None`。
    ///
    /// 耗时无法解析为数字（例如 `[abc ms]`）也视为不匹配。
    pub fn parse(line: &str) -> Option<Self> {
        let caps = SQL_RE.captures(trim_line_end(line))?;
        let duration_ms = capture(&caps, "timer")?.trim().parse::<f64>().ok()?;
        Some(Self {
            timestamp: capture(&caps, "dt")?.to_string(),
            duration_ms,
            query: capture(&caps, "query")?.to_string(),
        })
    }

    pub fn render(&self) -> String {
        render(&self.timestamp, self.duration_ms, &self.query)
    }
}

impl HttpRecord {
    /// 从一行 werkzeug 访问日志中解析记录，不匹配时返回 `None`。
    ///
    /// 输出只用到剩余耗时；状态码、SQL 条数和 SQL 耗时解析失败时记为 `None`，
    /// 不影响这一行的输出。
    pub fn parse(line: &str) -> Option<Self> {
        let caps = HTTP_RE.captures(trim_line_end(line))?;
        Some(Self {
            timestamp: capture(&caps, "dt")?.to_string(),
            ip: capture(&caps, "ip")?.to_string(),
            method: capture(&caps, "method")?.to_string(),
            path: capture(&caps, "path")?.to_string(),
            status: capture(&caps, "status")?.parse().ok(),
            query_count: capture(&caps, "query_count")?.parse().ok(),
            query_time: capture(&caps, "query_time")?.parse().ok(),
            remaining_time: capture(&caps, "remaining_time")?.parse().ok()?,
        })
    }

    pub fn render(&self) -> String {
        let statement = format!("{} {}", self.method, self.path);
        render(&self.timestamp, self.duration_ms(), &statement)
    }
}

/// 按模式尝试把一行转换为输出行，`None` 表示该行不是记录的开头。
pub fn extract(line: &str, mode: Mode) -> Option<String> {
    let rendered = match mode {
        Mode::Sql => SqlRecord::parse(line).map(|r| r.render()),
        Mode::Http => HttpRecord::parse(line).map(|r| r.render()),
    };
    #[cfg(feature = "logging")]
    {
        if rendered.is_none() {
            tracing::trace!(%mode, line = trim_line_end(line), "未匹配到记录");
        }
    }
    rendered
}
