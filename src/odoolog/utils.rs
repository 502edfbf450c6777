//! 日志转换的工具函数

use crate::odoolog::types::{TIMESTAMP_FORMAT, TIMESTAMP_LEN};
use chrono::NaiveDateTime;
use std::borrow::Cow;

/// 取出行首的 `TIMESTAMP_LEN` 个字符。
///
/// 按字符而不是字节计数，行首出现多字节字符时也不会切在字符中间。
/// 行不足 `TIMESTAMP_LEN` 个字符时返回 `None`。
#[must_use]
pub fn timestamp_prefix(line: &str) -> Option<&str> {
    match line.char_indices().nth(TIMESTAMP_LEN) {
        Some((end, _)) => Some(&line[..end]),
        None if line.chars().count() == TIMESTAMP_LEN => Some(line),
        None => None,
    }
}

/// 检查前缀是否严格为 `DDDD-DD-DD DD:DD:DD` 的形状，每个数字位都必须是 ASCII 数字。
#[must_use]
pub fn has_timestamp_shape(prefix: &str) -> bool {
    let b = prefix.as_bytes();
    if b.len() != TIMESTAMP_LEN {
        return false;
    }

    b.iter().enumerate().all(|(i, &c)| match i {
        4 | 7 => c == b'-',
        10 => c == b' ',
        13 | 16 => c == b':',
        _ => c.is_ascii_digit(),
    })
}

/// 判断一行是否以合法时间戳开头，即是否开始一条新记录。
///
/// 只返回布尔值：长度不足、格式不符、日期非法（如 2 月 30 日）、秒为 60 都视为 `false`。
#[must_use]
pub fn starts_with_timestamp(line: &str) -> bool {
    timestamp_prefix(line).is_some_and(|prefix| {
        // chrono 会跳过数字前的空白，并接受闰秒 60，先按固定形状过滤
        has_timestamp_shape(prefix)
            && prefix.as_bytes()[17] < b'6'
            && NaiveDateTime::parse_from_str(prefix, TIMESTAMP_FORMAT).is_ok()
    })
}

/// 把耗时渲染为小数形式。
///
/// 整数值保留一位小数（`42` → `42.0`），其他值使用能精确还原的最短十进制表示，
/// 不使用科学计数法。
#[must_use]
pub fn format_duration(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// 去掉行尾的 `\r` / `\n`。
#[must_use]
pub fn trim_line_end(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// 按通用换行规则切分一段字节：`\n`、`\r\n` 和单独的 `\r` 都结束一行。
///
/// 每一段保留自己的行结束符；结尾没有换行符的剩余部分也作为一段返回。
#[must_use]
pub fn split_universal_newlines(chunk: &[u8]) -> Vec<&[u8]> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < chunk.len() {
        let end = match chunk[i] {
            b'\n' => Some(i + 1),
            b'\r' if chunk.get(i + 1) == Some(&b'\n') => Some(i + 2),
            b'\r' => Some(i + 1),
            _ => None,
        };
        match end {
            Some(end) => {
                pieces.push(&chunk[start..end]);
                start = end;
                i = end;
            }
            None => i += 1,
        }
    }
    if start < chunk.len() {
        pieces.push(&chunk[start..]);
    }
    pieces
}

/// 将读取到的字节转换为字符串。
///
/// 有效 UTF-8 时返回 `Cow::Borrowed`，避免额外分配；
/// 否则用替换字符做有损转换并返回 `Cow::Owned`，行内容仍会继续参与转换。
pub fn line_bytes_to_str(line_bytes: &[u8], line_num: u64) -> Cow<'_, str> {
    match std::str::from_utf8(line_bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(e) => {
            #[cfg(feature = "logging")]
            {
                let prefix_len = 8usize.min(line_bytes.len());
                tracing::warn!(
                    line = line_num,
                    len = line_bytes.len(),
                    prefix = ?&line_bytes[..prefix_len],
                    error = %e,
                    "发现无效 UTF-8 字节序列，按有损方式解码"
                );
            }
            #[cfg(not(feature = "logging"))]
            let _ = (line_num, e);
            Cow::Owned(String::from_utf8_lossy(line_bytes).into_owned())
        }
    }
}
