use std::fmt;

/// 时间戳前缀的长度（`YYYY-MM-DD HH:MM:SS`）
pub const TIMESTAMP_LEN: usize = 19;

/// 时间戳前缀格式（chrono 语法）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 每处理多少行上报一次进度
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// 字段提取模式，整个运行期间固定不变
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum,
)]
pub enum Mode {
    /// Odoo SQL 查询日志（`[<n> ms] query:<sql>`）
    #[default]
    Sql,
    /// werkzeug HTTP 访问日志
    Http,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Sql => "sql",
            Mode::Http => "http",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一条 SQL 日志记录
#[derive(Debug, Clone, PartialEq)]
pub struct SqlRecord {
    /// 行首 19 个字符的时间戳
    pub timestamp: String,
    /// 执行耗时（毫秒）
    pub duration_ms: f64,
    /// 查询语句
    pub query: String,
}

/// 一条 werkzeug 访问日志记录
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRecord {
    /// 行首 19 个字符的时间戳
    pub timestamp: String,
    /// 客户端 IP
    pub ip: String,
    /// HTTP 方法
    pub method: String,
    /// 请求路径
    pub path: String,
    /// HTTP 状态码，超出 `u16` 时为 `None`
    pub status: Option<u16>,
    /// 请求内执行的 SQL 条数（不输出）
    pub query_count: Option<u64>,
    /// SQL 总耗时，秒（不输出）；`0.012.1` 这类无法解析的值为 `None`
    pub query_time: Option<f64>,
    /// 除 SQL 外的剩余耗时，秒
    pub remaining_time: f64,
}

impl HttpRecord {
    /// 输出使用的耗时：剩余耗时换算为毫秒
    pub fn duration_ms(&self) -> f64 {
        self.remaining_time * 1000.0
    }
}

/// 一次转换的计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// 读取的物理行数
    pub total_lines: u64,
    /// 输出的逻辑记录数
    pub parsed_records: u64,
    /// 含无效 UTF-8、经有损解码的行数
    pub lossy_lines: u64,
}
