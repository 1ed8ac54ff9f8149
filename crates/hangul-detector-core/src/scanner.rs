//! 单文件扫描（UTF-8 整读 + 逐行判定）
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::filter::{trim_line, LineFilter};
use crate::types::Detection;

/// 扫描单个文件并返回命中列表
/// - 整读为 UTF-8 文本后按 `\n` 切分；行尾 `\r` 由 trim 去除，不参与切分。
/// - 行号 1 起始，排除行与空行同样计数。
/// - 读取失败（I/O、权限、编码）返回 Err，由调用方按文件隔离，
///   不影响其余文件的扫描。
pub fn scan_file(path: &Path, filter: &LineFilter) -> std::io::Result<Vec<Detection>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;

    let mut detections: Vec<Detection> = Vec::new();
    for (idx, raw) in buf.split('\n').enumerate() {
        let trimmed = trim_line(raw);
        if filter.is_detection(trimmed) {
            detections.push(Detection { line: idx + 1, text: trimmed.to_string() });
        }
    }
    Ok(detections)
}
