//! 命令行参数

use crate::config::{ConvertConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::odoolog::Mode;
use clap::Parser;
use std::path::PathBuf;

/// 把 Odoo 日志转换为 pgBadger 可读的格式
#[derive(Debug, Parser)]
#[command(name = "odoo2pgbadger", version, about, long_about = None)]
pub struct Cli {
    /// 输入日志文件
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// 输出文件（存在时覆盖）
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// 解析模式
    #[arg(short, long, value_enum, default_value_t = Mode::Sql)]
    pub mode: Mode,

    /// 诊断日志级别（trace, debug, info, warn, error），RUST_LOG 优先
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// 诊断日志文件目录，不指定时只输出到 stderr
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn convert_config(&self) -> ConvertConfig {
        ConvertConfig::new(&self.input, &self.output, self.mode)
    }

    #[cfg(feature = "logging")]
    pub fn log_config(
        &self,
    ) -> crate::logging::LogResult<crate::logging::LogConfig> {
        let level = crate::logging::parse_level(&self.log_level)?;
        let mut config = crate::logging::LogConfig::new().level(level);
        if let Some(dir) = &self.log_dir {
            config = config.log_dir(dir);
        }
        Ok(config)
    }
}
