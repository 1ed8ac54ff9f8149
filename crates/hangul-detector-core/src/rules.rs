//! 规则文件加载（TOML）
use serde::Deserialize;
use std::path::Path;

use crate::error::ScanError;

/// 规则文件结构：所有字段可缺省
/// ```toml
/// exclude = ["//", "Debug.Log", "LogError"]
/// pattern = "[가-힣]"
/// extension = "cs"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleFile {
    /// 排除词列表；非空时整体替换内置默认值
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
}

/// 从 TOML 规则文件加载；文件缺失或语法错误都归为 Rules 错误
pub fn load_rules(path: &Path) -> Result<RuleFile, ScanError> {
    let txt = std::fs::read_to_string(path).map_err(|e| ScanError::Rules {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let parsed: RuleFile = toml::from_str(&txt).map_err(|e| ScanError::Rules {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(parsed)
}
