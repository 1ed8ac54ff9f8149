//! 扫描主流程与并行调度
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::error::ScanError;
use crate::filter::LineFilter;
use crate::options::{ScanConfig, ScanStats};
use crate::report::write_report;
use crate::scanner::scan_file;
use crate::store::ResultStore;
use crate::types::Detection;
use crate::walker::{discover, ScanTarget};

/// 一次完整运行的产出
#[derive(Debug)]
pub struct ScanOutcome {
    pub stats: ScanStats,
    pub report_path: PathBuf,
}

/// 扫描目录树并聚合结果
/// 稳定性保证：
/// - 文件级：每个文件恰好一个任务、一个聚合键，聚合内容与完成顺序无关
/// - 报告级：键按字节序、键内按行号升序，由 ResultStore 在插入时保证
pub fn run_scan(config: &ScanConfig) -> Result<(ResultStore, ScanStats), ScanError> {
    let filter = Arc::new(LineFilter::new(&config.exclusions, &config.pattern)?);
    // 根目录校验与枚举在任何任务派发之前完成
    let targets = discover(&config.root, &config.extension)?;

    let mut stats = ScanStats::default();
    stats.files_found = targets.len();
    let mut store = ResultStore::new();
    info!(root = %config.root.display(), files = targets.len(), "scan started");

    let threads = config.threads.unwrap_or_else(num_cpus::get);
    if threads > 1 {
        scan_parallel(targets, &filter, &mut store, &mut stats, threads);
    } else {
        for target in targets {
            match scan_file(&target.path, &filter) {
                Ok(detections) => {
                    stats.files_scanned += 1;
                    record(&mut store, &mut stats, target.key, detections);
                }
                Err(err) => {
                    stats.files_failed += 1;
                    warn!(file = %target.key, error = %err, "file skipped");
                }
            }
        }
    }

    Ok((store, stats))
}

/// 扫描并落盘报告；时间戳由调用方给定，便于测试复现
pub fn scan_and_report(config: &ScanConfig, stamp: NaiveDateTime) -> Result<ScanOutcome, ScanError> {
    let (store, stats) = run_scan(config)?;
    let report_path = write_report(&store, config.output_dir.as_deref(), stamp, config.format)?;
    Ok(ScanOutcome { stats, report_path })
}

/// 并行调度：
/// - 后台线程内建固定大小 Rayon 线程池（有界并发，避免无上限任务扇出）
/// - worker → collector 经有界通道传递单文件结果
/// - 当前线程是唯一消费者，顺次写入 ResultStore，无共享可变状态
fn scan_parallel(
    targets: Vec<ScanTarget>,
    filter: &Arc<LineFilter>,
    store: &mut ResultStore,
    stats: &mut ScanStats,
    threads: usize,
) {
    use crossbeam_channel as channel;
    use rayon::prelude::*;

    type Msg = (String /*key*/, std::io::Result<Vec<Detection>>);
    let (tx, rx) = channel::bounded::<Msg>(256);

    let filter = Arc::clone(filter);
    let scan_thread = std::thread::spawn(move || {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("build rayon pool");
        pool.install(|| {
            targets.into_par_iter().for_each(|target| {
                let res = scan_file(&target.path, &filter);
                let _ = tx.send((target.key, res));
            });
        });
        // 池内任务跑完后线程结束，Sender 全部释放，Receiver 收到关闭信号
    });

    while let Ok((key, res)) = rx.recv() {
        match res {
            Ok(detections) => {
                stats.files_scanned += 1;
                record(store, stats, key, detections);
            }
            Err(err) => {
                stats.files_failed += 1;
                warn!(file = %key, error = %err, "file skipped");
            }
        }
    }

    let _ = scan_thread.join();
}

/// 命中入库 + 逐条进度通知（通知仅供观察，不影响存储内容）
fn record(store: &mut ResultStore, stats: &mut ScanStats, key: String, detections: Vec<Detection>) {
    for d in &detections {
        stats.detections += 1;
        info!(file = %key, line = d.line, text = %d.text, "hangul detected");
    }
    store.insert(key, detections);
}
