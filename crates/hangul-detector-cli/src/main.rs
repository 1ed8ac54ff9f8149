use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangul_detector_core::{
    default_exclusions, load_rules, scan_and_report, ReportFormat, RuleFile, ScanConfig,
    DEFAULT_EXTENSION, DEFAULT_PATTERN,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "hangul-detector", version, about = "韩文硬编码字符串检测器")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 扫描目录树并生成 HangulDetector_<时间戳> 报告
    Scan {
        /// 扫描根目录；缺省时使用可执行文件所在目录
        root: Option<PathBuf>,

        /// 报告输出目录（不存在时回退到可执行文件目录）
        #[arg(long)]
        output: Option<PathBuf>,

        /// 规则文件路径（TOML：exclude / pattern / extension）
        #[arg(long)]
        rules: Option<PathBuf>,

        /// 追加排除词（可重复指定）
        #[arg(long = "exclude")]
        excludes: Vec<String>,

        /// 目标字符类正则；默认谚文音节区 [가-힣]
        #[arg(long)]
        pattern: Option<String>,

        /// 文件扩展名过滤（默认 cs）
        #[arg(long)]
        ext: Option<String>,

        /// 线程数（"auto"=CPU 核心数；1=串行）
        #[arg(long, default_value = "auto")]
        threads: String,

        /// 报告格式：text 或 json
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { root, output, rules, excludes, pattern, ext, threads, format } => {
            let root = root.unwrap_or_else(default_root);

            // 优先级：命令行参数 > 规则文件 > 内置默认
            let rule_file = match rules {
                Some(p) => load_rules(&p).context("load rules file")?,
                None => RuleFile::default(),
            };
            let mut exclusions = if rule_file.exclude.is_empty() {
                default_exclusions()
            } else {
                rule_file.exclude.clone()
            };
            exclusions.extend(excludes);

            let config = ScanConfig {
                root,
                extension: ext
                    .or(rule_file.extension)
                    .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
                exclusions,
                pattern: pattern
                    .or(rule_file.pattern)
                    .unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
                threads: parse_threads(&threads),
                output_dir: output,
                format: match format.as_str() {
                    "json" => ReportFormat::Json,
                    _ => ReportFormat::Text,
                },
            };

            let stamp = chrono::Local::now().naive_local();
            let outcome = scan_and_report(&config, stamp).context("scan failed")?;

            info!(
                files_found = outcome.stats.files_found,
                files_scanned = outcome.stats.files_scanned,
                files_failed = outcome.stats.files_failed,
                detections = outcome.stats.detections,
                "scan finished"
            );
            info!(report = %outcome.report_path.display(), "report written");
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 缺省扫描根目录：可执行文件所在目录
fn default_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// 解析线程参数
fn parse_threads(s: &str) -> Option<usize> {
    if s.eq_ignore_ascii_case("auto") {
        return None;
    }
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}
