//! 结果聚合（路径 → 命中列表）
//!
//! 聚合采用消息传递：每个扫描任务把单文件结果发往通道，唯一的消费者
//! 按到达顺序写入本结构，因此这里无需任何锁。BTreeMap 使键天然按
//! 字节序排列，插入顺序不影响最终快照。
use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::Detection;

#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ResultStore {
    entries: BTreeMap<String, Vec<Detection>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 运行开始时重置为空
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 记录一个文件的命中列表；空列表直接丢弃（零命中的文件不留占位项）。
    /// 插入时按行号排序，重复排序为幂等操作。
    pub fn insert(&mut self, key: String, detections: Vec<Detection>) {
        if detections.is_empty() {
            return;
        }
        let slot = self.entries.entry(key).or_default();
        slot.extend(detections);
        slot.sort_by_key(|d| d.line);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 含 ≥1 条命中的文件数
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    /// 全部命中总数
    pub fn detection_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// 只读快照：键按字节序升序，键内命中按行号升序
    pub fn iter(&self) -> impl Iterator<Item = (&String, &[Detection])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }
}
