//! utils.rs 模块的单元测试
//!
//! 测试工具函数，包括：
//! - 行首时间戳识别
//! - 通用换行切分
//! - 耗时的小数渲染
//! - UTF-8 字节转换处理

use odoo2pgbadger::odoolog::utils::*;
use std::borrow::Cow;

#[test]
fn test_starts_with_timestamp_valid() {
    assert!(starts_with_timestamp("2024-01-01 00:00:00,123 [42 ms] query:SELECT 1"));
    assert!(starts_with_timestamp("2024-01-01 00:00:00"));
    assert!(starts_with_timestamp("2024-02-29 23:59:59 leap day"));
    assert!(starts_with_timestamp("1999-12-31 12:30:45\n"));
}

#[test]
fn test_starts_with_timestamp_too_short() {
    assert!(!starts_with_timestamp(""));
    assert!(!starts_with_timestamp("\n"));
    assert!(!starts_with_timestamp("2024-01-01"));
    assert!(!starts_with_timestamp("2024-01-01 00:00:0"));
}

#[test]
fn test_starts_with_timestamp_invalid_format() {
    assert!(!starts_with_timestamp("2024/01/01 00:00:00,123"));
    assert!(!starts_with_timestamp("2024-01-01T00:00:00,123"));
    assert!(!starts_with_timestamp("    FROM res_partner WHERE id = 1"));
    assert!(!starts_with_timestamp(" 2024-01-01 00:00:00,123"));
    assert!(!starts_with_timestamp("202X-01-01 00:00:00,123"));
}

#[test]
fn test_starts_with_timestamp_invalid_date() {
    assert!(!starts_with_timestamp("2023-02-29 00:00:00,000"));
    assert!(!starts_with_timestamp("2024-13-01 00:00:00,000"));
    assert!(!starts_with_timestamp("2024-04-31 00:00:00,000"));
    assert!(!starts_with_timestamp("2024-01-01 24:00:00,000"));
    assert!(!starts_with_timestamp("2024-01-01 00:60:00,000"));
    // chrono 会接受闰秒 60
    assert!(!starts_with_timestamp("2024-01-01 00:00:60,123 x"));
}

#[test]
fn test_starts_with_timestamp_inner_spaces_rejected() {
    // chrono 在数字字段前跳过空白，这些都不是合法的时间戳
    assert!(!starts_with_timestamp("2024-01-01 00: 0: 0,123"));
    assert!(!starts_with_timestamp("2024-01-01  0:00:00,123"));
    assert!(!starts_with_timestamp("2024- 1-01 00:00:00,123"));
}

#[test]
fn test_starts_with_timestamp_multibyte_never_panics() {
    // 第 19 个字符落在多字节字符内部时也不能 panic
    assert!(!starts_with_timestamp("2024-01-01 00:00:é0"));
    assert!(!starts_with_timestamp("日志日志日志日志日志日志日志日志日志日志日志"));
    assert!(!starts_with_timestamp("é"));
}

#[test]
fn test_format_duration_integral() {
    assert_eq!(format_duration(42.0), "42.0");
    assert_eq!(format_duration(0.0), "0.0");
    assert_eq!(format_duration(1500.0), "1500.0");
    assert_eq!(format_duration(0.045 * 1000.0), "45.0");
}

#[test]
fn test_format_duration_fractional() {
    assert_eq!(format_duration(0.5), "0.5");
    assert_eq!(format_duration(12.345), "12.345");
    assert_eq!(format_duration(0.0071 * 1000.0), "7.1000000000000005");
}

#[test]
fn test_format_duration_no_exponent() {
    assert_eq!(format_duration(0.00001), "0.00001");
    assert_eq!(format_duration(1e16), "10000000000000000.0");
}

#[test]
fn test_line_bytes_to_str_valid_is_borrowed() {
    let bytes = b"2024-01-01 00:00:00 ok\n";
    match line_bytes_to_str(bytes, 1) {
        Cow::Borrowed(s) => assert_eq!(s, "2024-01-01 00:00:00 ok\n"),
        Cow::Owned(_) => panic!("valid UTF-8 should be borrowed"),
    }
}

#[test]
fn test_line_bytes_to_str_invalid_is_lossy() {
    let bytes = b"query:SELECT '\xff'\n";
    let s = line_bytes_to_str(bytes, 7);
    assert!(matches!(s, Cow::Owned(_)));
    assert_eq!(s, "query:SELECT '\u{FFFD}'\n");
}

#[test]
fn test_split_universal_newlines_keeps_terminators() {
    let pieces = split_universal_newlines(b"x\r  y\rz\r\n");
    assert_eq!(pieces, vec![&b"x\r"[..], b"  y\r", b"z\r\n"]);
    assert_eq!(split_universal_newlines(b"tail"), vec![&b"tail"[..]]);
}
