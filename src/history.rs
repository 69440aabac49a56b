//! 直近の計算結果を保持する履歴ログ

use std::collections::VecDeque;

use crate::constants::MAX_HISTORY_LENGTH;
use crate::models::Operation;

/// 計算履歴（新しい順、件数上限あり）
#[derive(Debug, Clone)]
pub struct History {
    records: VecDeque<Operation>,
    capacity: usize,
}

impl History {
    /// 上限 [`MAX_HISTORY_LENGTH`] 件の空の履歴を作成
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY_LENGTH)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// 計算結果を先頭に追加し、上限を超えたら最も古いものを捨てる
    pub fn record(&mut self, question: String, answer: f64) {
        self.records.push_front(Operation::new(question, answer));
        if self.records.len() > self.capacity {
            self.records.pop_back();
        }
    }

    /// 現在の履歴（新しい順）
    pub fn list(&self) -> Vec<Operation> {
        self.records.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
