//! 公共类型（对外暴露）
use serde::Serialize;

/// 单条命中（对应报告的一行）
/// - `line`：1 起始行号，排除行与空行同样计数。
/// - `text`：去除首尾空白（含行尾 CR）后的整行文本，创建后不再变动。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub line: usize,
    pub text: String,
}
