//! 集成测试公共模块

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 在临时目录中创建测试日志文件
#[allow(dead_code)]
pub fn create_test_log(dir: &TempDir, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}

/// SQL 日志：一条三行的查询、一条单行查询、一行噪声、一条单行查询
#[allow(dead_code)]
pub const SAMPLE_SQL_LOG: &str = "\
2024-03-05 10:15:00,101 4242 DEBUG prod odoo.sql_db: [12 ms] query:SELECT id, name
    FROM res_partner
    WHERE active = true
2024-03-05 10:15:00,250 4242 DEBUG prod odoo.sql_db: [0.7 ms] query:COMMIT
2024-03-05 10:15:01,002 4242 INFO prod odoo.modules.loading: loading 42 modules...
2024-03-05 10:15:02,330 4242 DEBUG prod odoo.sql_db: [1500 ms] query:VACUUM ANALYZE
";

/// SAMPLE_SQL_LOG 的期望输出
#[allow(dead_code)]
pub const SAMPLE_SQL_EXPECTED: &str = "\
2024-03-05 10:15:00 [1]: LOG:  duration: 12.0 ms  statement: SELECT id, name FROM res_partner WHERE active = true
2024-03-05 10:15:00 [1]: LOG:  duration: 0.7 ms  statement: COMMIT
2024-03-05 10:15:02 [1]: LOG:  duration: 1500.0 ms  statement: VACUUM ANALYZE
";

/// werkzeug 访问日志：两条请求，中间夹着一条非访问日志
#[allow(dead_code)]
pub const SAMPLE_HTTP_LOG: &str = r#"2024-03-05 10:20:00,500 4242 INFO prod werkzeug: 10.0.0.7 - - [05/Mar/2024 10:20:00] "POST /web/dataset/call_kw/res.partner/search_read HTTP/1.1" 200 - 12 0.034 0.120
2024-03-05 10:20:01,000 4242 INFO prod odoo.http: session expired
2024-03-05 10:20:02,750 4242 INFO prod werkzeug: 10.0.0.8 - - [05/Mar/2024 10:20:02] "GET /web/login HTTP/1.1" 303 - 1 0.001 2.5
"#;

/// SAMPLE_HTTP_LOG 的期望输出
#[allow(dead_code)]
pub const SAMPLE_HTTP_EXPECTED: &str = "\
2024-03-05 10:20:00 [1]: LOG:  duration: 120.0 ms  statement: POST /web/dataset/call_kw/res.partner/search_read
2024-03-05 10:20:02 [1]: LOG:  duration: 2500.0 ms  statement: GET /web/login
";
