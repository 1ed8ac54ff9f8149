//! 扫描配置与统计信息（模块）
use std::path::PathBuf;

/// 默认文件扩展名过滤（不区分大小写）
pub const DEFAULT_EXTENSION: &str = "cs";

/// 默认目标字符类：谚文音节区（U+AC00..U+D7A3），单一连续区间
pub const DEFAULT_PATTERN: &str = "[가-힣]";

/// 默认排除词：注释行与日志调用
pub fn default_exclusions() -> Vec<String> {
    vec!["//".to_string(), "Debug.Log".to_string()]
}

/// 报告格式
/// - Text：固定行格式 `<path> (<line>): <text>`（默认）。
/// - Json：路径 → 命中列表的 JSON 映射。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// 扫描配置：运行开始时构建一次，此后只读
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// 扫描根目录；不存在则在派发任何任务前报 RootNotFound
    pub root: PathBuf,
    /// 文件扩展名过滤（不含点，按 ASCII 不区分大小写比较）
    pub extension: String,
    /// 排除词列表：行内出现任意一个即不计命中
    pub exclusions: Vec<String>,
    /// 目标字符类正则（整行任意位置命中即可）
    pub pattern: String,
    /// 线程数：None 表示自动（等于 CPU 核数）；Some(1) 走串行
    pub threads: Option<usize>,
    /// 报告输出目录；None 或目录不存在时回退到可执行文件所在目录
    pub output_dir: Option<PathBuf>,
    /// 报告格式
    pub format: ReportFormat,
}

impl ScanConfig {
    /// 以内置默认值构建配置
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            exclusions: default_exclusions(),
            pattern: DEFAULT_PATTERN.to_string(),
            threads: None,
            output_dir: None,
            format: ReportFormat::Text,
        }
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub files_found: usize,
    pub files_scanned: usize,
    pub files_failed: usize,
    pub detections: usize,
}
