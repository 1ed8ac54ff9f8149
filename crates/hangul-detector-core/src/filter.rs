//! 逐行判定（排除词 → 双引号启发 → 目标字符类）
use aho_corasick::AhoCorasick;
use regex::Regex;

use crate::error::ScanError;

/// 去除首尾空白（覆盖行尾残留的 `\r`）；重复调用结果不变
pub fn trim_line(raw: &str) -> &str {
    raw.trim()
}

/// 单行判定器：排除词编译为一个 Aho-Corasick 自动机，字符类正则编译一次，
/// 之后在所有扫描任务间只读共享。
#[derive(Debug)]
pub struct LineFilter {
    exclusions: AhoCorasick,
    target: Regex,
}

impl LineFilter {
    pub fn new(exclusions: &[String], pattern: &str) -> Result<Self, ScanError> {
        let target = Regex::new(pattern)?;
        let exclusions = AhoCorasick::new(exclusions)?;
        Ok(Self { exclusions, target })
    }

    /// 判定一行是否计为命中，按序短路：
    /// 1. 含任意排除词（字面、区分大小写）→ 否
    /// 2. 不含双引号 → 否（只考虑疑似字符串字面量的行）
    /// 3. 不匹配目标字符类 → 否
    /// 4. 其余 → 命中；记录的载荷是整个 trim 后的行，不截取匹配区间
    pub fn is_detection(&self, line: &str) -> bool {
        let trimmed = trim_line(line);
        if self.exclusions.is_match(trimmed) {
            return false;
        }
        if !trimmed.contains('"') {
            return false;
        }
        self.target.is_match(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{default_exclusions, DEFAULT_PATTERN};

    fn default_filter() -> LineFilter {
        LineFilter::new(&default_exclusions(), DEFAULT_PATTERN).unwrap()
    }

    #[test]
    fn no_quote_is_never_detection() {
        let f = default_filter();
        assert!(!f.is_detection("var greeting = 안녕하세요;"));
        assert!(!f.is_detection("안녕"));
        assert!(!f.is_detection(""));
    }

    #[test]
    fn exclusion_wins_over_matching_content() {
        let f = default_filter();
        assert!(!f.is_detection("// \"안녕하세요\""));
        assert!(!f.is_detection("Debug.Log(\"안녕\");"));
    }

    #[test]
    fn quote_plus_hangul_is_detection() {
        let f = default_filter();
        assert!(f.is_detection("var x = \"안녕\";"));
        assert!(f.is_detection("    var x = \"안녕\";  \r"));
    }

    #[test]
    fn quote_without_hangul_is_not_detection() {
        let f = default_filter();
        assert!(!f.is_detection("var x = \"hello\";"));
    }

    #[test]
    fn exclusion_match_is_case_sensitive() {
        let f = default_filter();
        // debug.log 与 Debug.Log 不同，不触发排除
        assert!(f.is_detection("debug.log(\"안녕\");"));
    }

    #[test]
    fn empty_exclusion_set_matches_nothing() {
        let f = LineFilter::new(&[], DEFAULT_PATTERN).unwrap();
        assert!(f.is_detection("// \"안녕\""));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = LineFilter::new(&[], "[가-").unwrap_err();
        assert!(matches!(err, ScanError::Pattern(_)));
    }

    #[test]
    fn trim_is_idempotent() {
        let once = trim_line("  var x = \"안녕\";\r");
        assert_eq!(once, trim_line(once));
        assert_eq!(once, "var x = \"안녕\";");
    }
}
