//! Odoo 日志到 pgBadger 格式的转换库
//!
//! ```no_run
//! use odoo2pgbadger::config::ConvertConfig;
//! use odoo2pgbadger::odoolog::Mode;
//! use odoo2pgbadger::process::convert_file;
//!
//! let config = ConvertConfig::new("odoo.log", "odoo_parsed.log", Mode::Sql);
//! let stats = convert_file(&config)?;
//! println!("{} 行 -> {} 条记录", stats.total_lines, stats.parsed_records);
//! # Ok::<(), odoo2pgbadger::error::OdooLogError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod odoolog;
pub mod process;

// 日志模块 - 需要 logging 功能
#[cfg(feature = "logging")]
pub mod logging;
