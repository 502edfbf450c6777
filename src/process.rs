use crate::config::ConvertConfig;
use crate::error::{OdooLogError, Result};
use crate::odoolog::{ConvertStats, convert_with_progress};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
    time::Instant,
};

/// 转换单个日志文件。
///
/// # Errors
/// - 配置无效（输入输出是同一个文件）返回 `OdooLogError::Config`
/// - 输入无法打开返回 `OdooLogError::OpenInput`
/// - 输出无法创建返回 `OdooLogError::CreateOutput`
/// - 读写过程中失败返回 `OdooLogError::Io`
pub fn convert_file(config: &ConvertConfig) -> Result<ConvertStats> {
    convert_file_with_progress(config, |_| {})
}

/// 转换单个日志文件，每处理 100000 行调用一次 `progress`。
///
/// 输入先于输出打开，输入不存在时不会创建或截断输出文件。
/// 输出经 `BufWriter` 写入，成功时显式 flush，出错时随 drop 释放。
pub fn convert_file_with_progress<F>(
    config: &ConvertConfig,
    progress: F,
) -> Result<ConvertStats>
where
    F: FnMut(u64),
{
    config.validate()?;

    let input = File::open(&config.input)
        .map_err(|e| OdooLogError::open_input(&config.input, e))?;
    let output = File::create(&config.output)
        .map_err(|e| OdooLogError::create_output(&config.output, e))?;

    #[cfg(feature = "logging")]
    tracing::info!(
        input = %config.input.display(),
        output = %config.output.display(),
        mode = %config.mode,
        "开始转换"
    );

    let start = Instant::now();
    let mut writer = BufWriter::new(output);
    let stats = convert_with_progress(
        BufReader::new(input),
        &mut writer,
        config.mode,
        progress,
    )?;
    writer.flush()?;

    let elapsed = start.elapsed();
    #[cfg(feature = "logging")]
    tracing::info!(
        total_lines = stats.total_lines,
        parsed_records = stats.parsed_records,
        "转换完成，耗时: {elapsed:.2?}"
    );
    #[cfg(not(feature = "logging"))]
    let _ = elapsed;

    Ok(stats)
}

/// pgBadger 的调用提示
pub fn pgbadger_hint(output: &Path) -> String {
    format!("pgbadger {} -f stderr", output.display())
}

/// 写出运行结束时的汇总：总行数、记录数和 pgBadger 调用提示。
pub fn write_report<W: Write>(
    out: &mut W,
    stats: &ConvertStats,
    output: &Path,
) -> std::io::Result<()> {
    writeln!(out, "Total Lines: {}", stats.total_lines)?;
    writeln!(out, "Parsed Lines: {}", stats.parsed_records)?;
    if stats.lossy_lines > 0 {
        writeln!(out, "Lossy UTF-8 Lines: {}", stats.lossy_lines)?;
    }
    writeln!(out, "{}", pgbadger_hint(output))?;
    Ok(())
}
