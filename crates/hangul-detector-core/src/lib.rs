//! 韩文硬编码检测库
//!
//! 设计要点：
//! - 逐行启发式过滤（排除词 → 双引号 → 谚文字符类），不做语法分析。
//! - 每个文件一个扫描任务，固定大小 Rayon 线程池 + 通道汇聚到单消费者，
//!   聚合结果与任务完成顺序无关。
//! - 报告按路径字节序、行号升序渲染，同一输入可复现逐字节一致的报告体。

mod error;
mod options;
mod types;
mod rules;
mod filter;
mod scanner;
mod walker;
mod store;
mod report;
mod scan;

pub use error::ScanError;
pub use options::{default_exclusions, ReportFormat, ScanConfig, ScanStats, DEFAULT_EXTENSION, DEFAULT_PATTERN};
pub use types::Detection;
pub use rules::{load_rules, RuleFile};
pub use filter::{trim_line, LineFilter};
pub use scanner::scan_file;
pub use walker::{discover, normalize_separators, ScanTarget};
pub use store::ResultStore;
pub use report::{render, render_json, write_report, REPORT_PREFIX, STAMP_FORMAT};
pub use scan::{run_scan, scan_and_report, ScanOutcome};
