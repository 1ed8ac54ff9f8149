//! 报告渲染与落盘
//!
//! 渲染是纯函数：同一冻结的 ResultStore 渲染两次得到逐字节一致的报告体。
//! 时间戳由调用方传入，只进入文件名，不进入报告体。
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::warn;

use crate::error::ScanError;
use crate::options::ReportFormat;
use crate::store::ResultStore;

/// 报告文件名前缀与时间戳格式（yyyy-MM-dd_HHmmss）
pub const REPORT_PREFIX: &str = "HangulDetector_";
pub const STAMP_FORMAT: &str = "%Y-%m-%d_%H%M%S";

/// 渲染文本报告：键按字节序、键内按行号升序（ResultStore 已保证），
/// 每条命中一行，固定格式 `<path> (<line>): <text>`。
pub fn render(store: &ResultStore) -> String {
    let mut out = String::new();
    for (path, detections) in store.iter() {
        for d in detections {
            let _ = writeln!(out, "{} ({}): {}", path, d.line, d.text);
        }
    }
    out
}

/// 渲染 JSON 报告：路径 → 命中列表的映射（键序同上）
pub fn render_json(store: &ResultStore) -> Result<String, ScanError> {
    Ok(serde_json::to_string_pretty(store)?)
}

/// 解析报告输出目录：
/// - 指定目录存在 → 直接使用；
/// - 不存在或未指定 → 回退到可执行文件所在目录，再退而求其次用 `.`。
/// 该回退从不致命。
pub fn resolve_output_dir(requested: Option<&Path>) -> PathBuf {
    if let Some(dir) = requested {
        if dir.is_dir() {
            return dir.to_path_buf();
        }
        warn!(requested = %dir.display(), "output directory missing, falling back");
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// 将报告写入 `HangulDetector_<时间戳>.txt`（JSON 格式为 `.json`），
/// 返回报告文件的完整路径。
pub fn write_report(
    store: &ResultStore,
    requested_dir: Option<&Path>,
    stamp: NaiveDateTime,
    format: ReportFormat,
) -> Result<PathBuf, ScanError> {
    let dir = resolve_output_dir(requested_dir);
    let ext = match format {
        ReportFormat::Text => "txt",
        ReportFormat::Json => "json",
    };
    let name = format!("{}{}.{}", REPORT_PREFIX, stamp.format(STAMP_FORMAT), ext);
    let path = dir.join(name);

    let body = match format {
        ReportFormat::Text => render(store),
        ReportFormat::Json => render_json(store)?,
    };
    std::fs::write(&path, body)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Detection;
    use chrono::NaiveDate;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap()
    }

    fn sample_store() -> ResultStore {
        let mut store = ResultStore::new();
        store.insert(
            "src/b.cs".to_string(),
            vec![Detection { line: 4, text: "var y = \"세계\";".to_string() }],
        );
        store.insert(
            "src/a.cs".to_string(),
            vec![Detection { line: 2, text: "var x = \"안녕\";".to_string() }],
        );
        store
    }

    #[test]
    fn renders_exact_line_format_in_path_order() {
        let body = render(&sample_store());
        assert_eq!(
            body,
            "src/a.cs (2): var x = \"안녕\";\nsrc/b.cs (4): var y = \"세계\";\n"
        );
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let store = sample_store();
        assert_eq!(render(&store), render(&store));
    }

    #[test]
    fn empty_store_renders_empty_body() {
        assert_eq!(render(&ResultStore::new()), "");
    }

    #[test]
    fn report_file_name_uses_fixed_stamp_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(&sample_store(), Some(dir.path()), stamp(), ReportFormat::Text).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "HangulDetector_2026-03-01_091500.txt"
        );
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.starts_with("src/a.cs (2): "));
    }

    #[test]
    fn json_report_round_trips_detections() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(&sample_store(), Some(dir.path()), stamp(), ReportFormat::Json).unwrap();
        assert!(path.to_str().unwrap().ends_with(".json"));
        let body = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["src/a.cs"][0]["line"], 2);
        assert_eq!(parsed["src/a.cs"][0]["text"], "var x = \"안녕\";");
    }

    #[test]
    fn missing_output_dir_falls_back() {
        let resolved = resolve_output_dir(Some(Path::new("/no/such/output/dir")));
        assert_ne!(resolved, Path::new("/no/such/output/dir"));
        let existing = tempfile::tempdir().unwrap();
        assert_eq!(resolve_output_dir(Some(existing.path())), existing.path());
    }
}
