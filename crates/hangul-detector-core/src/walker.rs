//! 目录遍历与路径归一化
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use crate::error::ScanError;

/// 一个待扫描文件：磁盘路径 + 归一化后的报告键
/// 归一化在枚举时做一次，下游的聚合键与排序比较都只见 `/` 分隔符。
#[derive(Debug, Clone)]
pub struct ScanTarget {
    pub path: PathBuf,
    pub key: String,
}

/// 把路径分隔符统一为 `/`
pub fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// 递归枚举根目录下所有扩展名匹配的普通文件
/// - 根目录不存在 → RootNotFound，在任何任务派发前返回。
/// - 不可读的目录项跳过并告警，不中断枚举。
pub fn discover(root: &Path, extension: &str) -> Result<Vec<ScanTarget>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound { path: root.to_path_buf() });
    }

    let mut targets: Vec<ScanTarget> = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if !matches_extension(entry.path(), extension) {
            continue;
        }
        let path = entry.into_path();
        let key = normalize_separators(&path);
        targets.push(ScanTarget { path, key });
    }
    Ok(targets)
}

/// 扩展名比较：ASCII 不区分大小写（`Foo.CS` 亦匹配 `cs`）
fn matches_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}
