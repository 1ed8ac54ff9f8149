//! 错误类型（thiserror）
//!
//! 只有整个运行级别的失败才进入该枚举；单文件读取失败在汇聚侧被隔离
//! （warn + files_failed 计数），不会中断兄弟任务。
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// 根目录不存在：在枚举/派发之前触发，不产生任何报告
    #[error("root directory not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    /// 目标字符类正则非法
    #[error("invalid target pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// 排除词自动机构建失败
    #[error("failed to build exclusion matcher: {0}")]
    Exclusions(#[from] aho_corasick::BuildError),

    /// 规则文件读取或解析失败
    #[error("rules file {}: {message}", path.display())]
    Rules { path: PathBuf, message: String },

    /// 报告序列化失败（JSON 格式）
    #[error("report serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// 报告落盘等 I/O 失败
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
