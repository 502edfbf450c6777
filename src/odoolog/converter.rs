use crate::error::Result;
use crate::odoolog::reassembler::LineReassembler;
use crate::odoolog::types::{ConvertStats, Mode, PROGRESS_INTERVAL};
use crate::odoolog::utils::{line_bytes_to_str, split_universal_newlines};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

/// 写出一条记录，保证以换行结尾。
pub fn write_record<W: Write>(out: &mut W, record: &str) -> io::Result<()> {
    out.write_all(record.as_bytes())?;
    if !record.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// 流式转换：从 `reader` 逐行读取，把完成的记录写入 `writer`。
pub fn convert<R, W>(reader: R, writer: W, mode: Mode) -> Result<ConvertStats>
where
    R: BufRead,
    W: Write,
{
    convert_with_progress(reader, writer, mode, |_| {})
}

/// 流式转换，并且每处理 `PROGRESS_INTERVAL` 行调用一次 `progress`。
///
/// # 参数
/// - `reader`: 输入，按 `\n`、`\r\n` 或单独的 `\r` 切分物理行
/// - `writer`: 输出，每条逻辑记录一行
/// - `mode`: 字段提取模式
/// - `progress`: 进度回调，参数为已读取的行数
///
/// # Errors
/// 读写失败时返回 `OdooLogError::Io`。无法解析的行不算错误。
pub fn convert_with_progress<R, W, F>(
    mut reader: R,
    mut writer: W,
    mode: Mode,
    mut progress: F,
) -> Result<ConvertStats>
where
    R: BufRead,
    W: Write,
    F: FnMut(u64),
{
    #[cfg(feature = "logging")]
    tracing::debug!(%mode, "开始流式转换");

    let mut reassembler = LineReassembler::new(mode);
    let mut buf = Vec::with_capacity(1024);

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        // 单独的 `\r` 也是换行，一次读取可能包含多行
        for piece in split_universal_newlines(&buf) {
            let line_num = reassembler.stats().total_lines + 1;
            let line = line_bytes_to_str(piece, line_num);
            if matches!(line, Cow::Owned(_)) {
                reassembler.note_lossy_line();
            }

            if let Some(record) = reassembler.push_line(&line) {
                write_record(&mut writer, &record)?;
            }

            let total = reassembler.stats().total_lines;
            if total % PROGRESS_INTERVAL == 0 {
                #[cfg(feature = "logging")]
                tracing::debug!(
                    lines = total,
                    records = reassembler.stats().parsed_records,
                    "转换进度"
                );
                progress(total);
            }
        }
    }

    if let Some(record) = reassembler.finish() {
        #[cfg(feature = "logging")]
        tracing::trace!("输入结束，输出最后一条记录");
        write_record(&mut writer, &record)?;
    }
    writer.flush()?;

    let stats = *reassembler.stats();
    #[cfg(feature = "logging")]
    tracing::debug!(
        total_lines = stats.total_lines,
        parsed_records = stats.parsed_records,
        lossy_lines = stats.lossy_lines,
        "流式转换完成"
    );
    Ok(stats)
}
