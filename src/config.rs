//! 配置管理模块
//!
//! 一次转换只需要输入路径、输出路径和解析模式

use crate::error::{OdooLogError, Result};
use crate::odoolog::Mode;
use std::path::PathBuf;

/// 默认输入文件
pub const DEFAULT_INPUT: &str = "odoo.log";
/// 默认输出文件
pub const DEFAULT_OUTPUT: &str = "odoo_parsed.log";

/// 转换配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// 输入日志文件
    pub input: PathBuf,
    /// 输出文件，存在时会被覆盖
    pub output: PathBuf,
    /// 解析模式
    pub mode: Mode,
}

impl ConvertConfig {
    pub fn new<I, O>(input: I, output: O, mode: Mode) -> Self
    where
        I: Into<PathBuf>,
        O: Into<PathBuf>,
    {
        Self { input: input.into(), output: output.into(), mode }
    }

    /// 验证配置的有效性
    ///
    /// 输出文件会在读取输入之前被截断，所以输入和输出不能指向同一个文件。
    pub fn validate(&self) -> Result<()> {
        if self.input == self.output {
            return Err(OdooLogError::config_error(format!(
                "输入和输出是同一个文件: {}",
                self.input.display()
            )));
        }

        if let (Ok(input), Ok(output)) =
            (self.input.canonicalize(), self.output.canonicalize())
        {
            if input == output {
                return Err(OdooLogError::config_error(format!(
                    "输入 {} 和输出 {} 指向同一个文件",
                    self.input.display(),
                    self.output.display()
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT, Mode::default())
    }
}
