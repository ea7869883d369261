// src/models/conflict.rs

use std::fmt;

use chrono::{DateTime, Utc};

/// 判定結果のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionStatus {
    Clear,
    ConflictDetected,
}

impl DetectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionStatus::Clear => "clear",
            DetectionStatus::ConflictDetected => "conflict detected",
        }
    }
}

impl fmt::Display for DetectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 検出された競合1件
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictRecord {
    pub mission_id: usize,           // 相手ミッションの入力順の番号
    pub location: [f64; 3],          // 相手側ウェイポイントの座標
    pub time: DateTime<Utc>,         // 相手側ウェイポイントの時刻
    pub primary_time: DateTime<Utc>, // 主ミッション側ウェイポイントの時刻
}

/// 競合判定の結果一式
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictReport {
    pub status: DetectionStatus,
    pub conflicts: Vec<ConflictRecord>,
}

impl ConflictReport {
    /// 競合リストからステータスを決定してレポートを生成する
    pub fn from_conflicts(conflicts: Vec<ConflictRecord>) -> Self {
        let status = if conflicts.is_empty() {
            DetectionStatus::Clear
        } else {
            DetectionStatus::ConflictDetected
        };
        ConflictReport { status, conflicts }
    }

    pub fn is_clear(&self) -> bool {
        self.status == DetectionStatus::Clear
    }

    pub fn into_parts(self) -> (DetectionStatus, Vec<ConflictRecord>) {
        (self.status, self.conflicts)
    }
}
