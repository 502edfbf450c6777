//! 日志初始化和配置模块
//!
//! 这个模块提供了统一的日志初始化功能，使用 tracing 库。
//! 控制台日志写到 stderr，避免和转换结果混在一起；
//! 配置了日志目录时，额外写入按天滚动的日志文件。

use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, time::SystemTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// 日志文件名前缀
const LOG_FILE_PREFIX: &str = "odoo2pgbadger";

/// 日志配置结构体
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 日志级别
    pub level: Level,
    /// 日志文件目录，`None` 表示只输出到控制台
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    /// 创建新的日志配置，使用默认级别
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置日志级别
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// 设置日志文件目录
    pub fn log_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.log_dir = Some(dir.into());
        self
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: Level::INFO, log_dir: None }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("IO错误: {0}")]
    Io(#[from] io::Error),
    #[error("日志配置错误: {0}")]
    Config(String),
}

/// 日志初始化结果
pub type LogResult<T> = Result<T, LogError>;

/// 把命令行里的级别字符串转换为 `Level`
pub fn parse_level(level: &str) -> LogResult<Level> {
    level
        .parse::<Level>()
        .map_err(|_| LogError::Config(format!("无效的日志级别: {level}")))
}

/// 初始化日志系统
///
/// - 控制台（stderr）始终输出
/// - `log_dir` 存在时写入按天滚动的日志文件
/// - 环境变量 `RUST_LOG` 优先于配置的级别
///
/// 返回文件写入线程的 guard，调用方需要持有它直到程序退出，
/// 否则缓冲中的日志可能丢失。重复初始化不视为错误。
///
/// # Examples
///
/// ```no_run
/// use odoo2pgbadger::logging::{init_logging, LogConfig};
/// use tracing::Level;
///
/// let _guard = init_logging(LogConfig::new().level(Level::DEBUG)).unwrap();
/// ```
pub fn init_logging(config: LogConfig) -> LogResult<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_timer(SystemTime)
        .with_target(true)
        .with_ansi(true);

    let (file_layer, guard) = match config.log_dir.as_ref() {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender =
                tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) =
                tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_timer(SystemTime)
                .with_target(true)
                .with_ansi(false); // 文件中不使用颜色
            (Some(layer.boxed()), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer);

    // 已经初始化过了，这不是错误
    if subscriber.try_init().is_ok() {
        tracing::debug!(
            level = %config.level,
            log_dir = ?config.log_dir,
            "日志系统初始化完成"
        );
    }
    Ok(guard)
}

/// 使用默认配置初始化日志系统（INFO 级别，仅控制台）
pub fn init_default_logging() -> LogResult<Option<WorkerGuard>> {
    init_logging(LogConfig::default())
}
