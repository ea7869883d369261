// src/deconfliction/detector.rs

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::config::parameters::DetectionSettings;
use crate::math::{abs_time_difference, euclidean_distance};
use crate::models::{ConflictRecord, ConflictReport, DeconflictionError, DetectionStatus, Mission, TimedPoint};

/// 検証済みの判定しきい値
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionParameters {
    spatial_buffer: f64,       // 空間バッファ (m)
    temporal_buffer: Duration, // 時間バッファ
}

impl Default for DetectionParameters {
    fn default() -> Self {
        DetectionParameters {
            spatial_buffer: 10.0,
            temporal_buffer: Duration::seconds(30),
        }
    }
}

impl DetectionParameters {
    /// しきい値を検証して生成する
    ///
    /// # 引数
    /// - `spatial_buffer`: 空間バッファ。正の有限値であること
    /// - `temporal_buffer`: 時間バッファ。正の長さであること
    pub fn new(spatial_buffer: f64, temporal_buffer: Duration) -> Result<Self, DeconflictionError> {
        if !spatial_buffer.is_finite() || spatial_buffer <= 0.0 {
            return Err(DeconflictionError::InvalidTrajectoryInput(format!(
                "空間バッファは正の有限値である必要があります: {}",
                spatial_buffer
            )));
        }
        if temporal_buffer <= Duration::zero() {
            return Err(DeconflictionError::InvalidTrajectoryInput(format!(
                "時間バッファは正である必要があります: {}",
                temporal_buffer
            )));
        }
        Ok(DetectionParameters {
            spatial_buffer,
            temporal_buffer,
        })
    }

    /// YAML設定から生成する
    pub fn from_settings(settings: &DetectionSettings) -> Result<Self, DeconflictionError> {
        let temporal_buffer = seconds_to_duration(settings.temporal_buffer_seconds)?;
        DetectionParameters::new(settings.spatial_buffer, temporal_buffer)
    }

    pub fn spatial_buffer(&self) -> f64 {
        self.spatial_buffer
    }

    pub fn temporal_buffer(&self) -> Duration {
        self.temporal_buffer
    }
}

/// 秒数（実数）を`Duration`に変換する（マイクロ秒単位に丸め）
pub fn seconds_to_duration(seconds: f64) -> Result<Duration, DeconflictionError> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(DeconflictionError::InvalidTrajectoryInput(format!(
            "時間は正の有限値である必要があります: {} s",
            seconds
        )));
    }
    let micros = (seconds * 1_000_000.0).round() as i64;
    if micros <= 0 {
        return Err(DeconflictionError::InvalidTrajectoryInput(format!(
            "時間が短すぎます: {} s",
            seconds
        )));
    }
    Ok(Duration::microseconds(micros))
}

/// 空間的競合の判定
///
/// 2点間の距離がバッファ未満の場合に`true`。距離がバッファと等しい場合は競合としない。
pub fn check_spatial_conflict(a: &TimedPoint, b: &TimedPoint, spatial_buffer: f64) -> bool {
    euclidean_distance(&a.position(), &b.position()) < spatial_buffer
}

/// 時間的競合の判定
///
/// 2時刻の差の絶対値がバッファ未満の場合に`true`。
pub fn check_temporal_conflict(t1: DateTime<Utc>, t2: DateTime<Utc>, temporal_buffer: Duration) -> bool {
    abs_time_difference(t1, t2) < temporal_buffer
}

/// 主ミッションと他ミッション群の競合判定
///
/// 他ミッション（入力順）→ 主ミッションのウェイポイント → 他ミッションのウェイポイント
/// の順に全組み合わせを比較し、空間・時間の両方で競合する組をすべて返す。
/// ウェイポイント間の補間は行わない。
///
/// # 引数
/// - `primary`: 主ミッション
/// - `others`: 他ミッション群。添字がそのまま`mission_id`になる
/// - `params`: 判定しきい値
///
/// # 戻り値
/// - 競合レポート
pub fn detect_conflicts(primary: &Mission, others: &[Mission], params: &DetectionParameters) -> ConflictReport {
    let mut conflicts = Vec::new();

    for (mission_id, other) in others.iter().enumerate() {
        for primary_point in primary.waypoints() {
            for other_point in other.waypoints() {
                if check_spatial_conflict(primary_point, other_point, params.spatial_buffer)
                    && check_temporal_conflict(primary_point.time(), other_point.time(), params.temporal_buffer)
                {
                    debug!(
                        mission_id,
                        location = ?other_point.position(),
                        time = %other_point.time(),
                        primary_time = %primary_point.time(),
                        "conflicting waypoint pair"
                    );
                    conflicts.push(ConflictRecord {
                        mission_id,
                        location: other_point.position(),
                        time: other_point.time(),
                        primary_time: primary_point.time(),
                    });
                }
            }
        }
    }

    let report = ConflictReport::from_conflicts(conflicts);
    if report.is_clear() {
        info!(missions = others.len(), status = %report.status, "deconfliction check finished");
    } else {
        warn!(
            missions = others.len(),
            conflicts = report.conflicts.len(),
            status = %report.status,
            "deconfliction check finished"
        );
    }
    report
}

/// しきい値を直接指定して判定する
///
/// # 戻り値
/// - `(ステータス, 競合リスト)`
/// - しきい値が不正な場合は`InvalidTrajectoryInput`
pub fn detect(
    primary: &Mission,
    others: &[Mission],
    spatial_buffer: f64,
    temporal_buffer: Duration,
) -> Result<(DetectionStatus, Vec<ConflictRecord>), DeconflictionError> {
    let params = DetectionParameters::new(spatial_buffer, temporal_buffer)?;
    Ok(detect_conflicts(primary, others, &params).into_parts())
}
