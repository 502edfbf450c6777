//! 错误类型定义
//!
//! 这个模块定义了库中使用的所有错误类型，使用 thiserror 提供丰富的错误信息。
//! 行级的格式问题（无法匹配的行、时间戳探测失败）不属于错误，会被静默丢弃；
//! 这里只收录会终止一次转换的致命错误。

use std::path::PathBuf;

/// 转换过程的结果类型
pub type Result<T> = std::result::Result<T, OdooLogError>;

/// 日志转换错误类型
#[derive(Debug, thiserror::Error)]
pub enum OdooLogError {
    /// 无法打开输入文件
    #[error("无法打开输入文件 {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 无法创建输出文件
    #[error("无法创建输出文件 {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 读写过程中的 IO 错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 日志错误（仅在启用 logging feature 时可用）
    #[cfg(feature = "logging")]
    #[error("日志错误: {0}")]
    Log(#[from] crate::logging::LogError),
}

impl OdooLogError {
    /// 创建一个打开输入文件失败的错误
    pub fn open_input<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        let path = path.into();
        #[cfg(feature = "logging")]
        tracing::error!(path = %path.display(), error = %source, "打开输入文件失败");
        Self::OpenInput { path, source }
    }

    /// 创建一个创建输出文件失败的错误
    pub fn create_output<P: Into<PathBuf>>(
        path: P,
        source: std::io::Error,
    ) -> Self {
        let path = path.into();
        #[cfg(feature = "logging")]
        tracing::error!(path = %path.display(), error = %source, "创建输出文件失败");
        Self::CreateOutput { path, source }
    }

    /// 创建一个配置错误
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        tracing::error!("配置错误: {}", message);
        Self::Config(message)
    }

    /// 检查是否为 IO 类错误（包括打开/创建文件失败）
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            OdooLogError::Io(_)
                | OdooLogError::OpenInput { .. }
                | OdooLogError::CreateOutput { .. }
        )
    }

    /// 检查是否为配置错误
    pub fn is_config_error(&self) -> bool {
        matches!(self, OdooLogError::Config(_))
    }
}
