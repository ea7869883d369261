// src/deconfliction/timeline.rs

use chrono::{DateTime, Duration, Utc};

use crate::config::parameters::DetectionSettings;
use crate::deconfliction::detector::{check_temporal_conflict, seconds_to_duration};
use crate::models::{DeconflictionError, Mission, TimedPoint};

/// タイムライン生成の設定
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineSettings {
    frame_interval: Duration,
    frame_count: usize,
}

impl TimelineSettings {
    pub fn new(frame_interval: Duration, frame_count: usize) -> Result<Self, DeconflictionError> {
        if frame_interval <= Duration::zero() {
            return Err(DeconflictionError::InvalidTrajectoryInput(format!(
                "フレーム間隔は正である必要があります: {}",
                frame_interval
            )));
        }
        Ok(TimelineSettings {
            frame_interval,
            frame_count,
        })
    }

    pub fn from_settings(settings: &DetectionSettings) -> Result<Self, DeconflictionError> {
        let frame_interval = seconds_to_duration(settings.frame_interval_seconds)?;
        TimelineSettings::new(frame_interval, settings.frame_count)
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}

/// フレーム時刻付近にある他ミッションのウェイポイント
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub mission_id: usize,
    pub point: TimedPoint,
}

/// ある時刻のスナップショット
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineFrame {
    pub index: usize,
    pub time: DateTime<Utc>,
    pub entries: Vec<TimelineEntry>,
}

/// 時系列表示用のフレーム列を生成する
///
/// 主ミッションの最初のウェイポイント時刻から`frame_interval`刻みで`frame_count`枚のフレームを作り、
/// 各フレームにはフレーム時刻との差が`frame_interval`未満の他ミッションのウェイポイントを入れる。
///
/// # 引数
/// - `primary`: 主ミッション（開始時刻の決定にのみ使用）
/// - `others`: 他ミッション群
/// - `settings`: フレーム設定
///
/// # 戻り値
/// - フレーム列。主ミッションにウェイポイントがない場合は空
pub fn build_timeline(primary: &Mission, others: &[Mission], settings: &TimelineSettings) -> Vec<TimelineFrame> {
    let start = match primary.waypoints().first() {
        Some(first) => first.time(),
        None => return Vec::new(),
    };

    let mut frames = Vec::new();
    for index in 0..settings.frame_count {
        let time = match frame_time(start, settings.frame_interval, index) {
            Some(time) => time,
            None => break,
        };

        let entries = others
            .iter()
            .enumerate()
            .flat_map(|(mission_id, mission)| {
                mission
                    .waypoints()
                    .iter()
                    .filter(move |p| check_temporal_conflict(p.time(), time, settings.frame_interval))
                    .map(move |p| TimelineEntry { mission_id, point: *p })
            })
            .collect();

        frames.push(TimelineFrame { index, time, entries });
    }
    frames
}

fn frame_time(start: DateTime<Utc>, interval: Duration, index: usize) -> Option<DateTime<Utc>> {
    let steps = i32::try_from(index).ok()?;
    let offset = interval.checked_mul(steps)?;
    start.checked_add_signed(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 28, 10, 0, 0).unwrap()
    }

    fn mission(points: &[(f64, i64)]) -> Mission {
        let waypoints = points
            .iter()
            .map(|(x, secs)| TimedPoint::new(*x, *x, 100.0, t0() + Duration::seconds(*secs)).unwrap())
            .collect();
        Mission::new(waypoints, t0(), t0() + Duration::minutes(10)).unwrap()
    }

    #[test]
    fn test_frame_times() {
        let primary = mission(&[(0.0, 0), (50.0, 120)]);
        let settings = TimelineSettings::new(Duration::seconds(30), 4).unwrap();

        let frames = build_timeline(&primary, &[], &settings);
        let times: Vec<DateTime<Utc>> = frames.iter().map(|f| f.time).collect();

        assert_eq!(
            times,
            vec![
                t0(),
                t0() + Duration::seconds(30),
                t0() + Duration::seconds(60),
                t0() + Duration::seconds(90),
            ]
        );
        assert!(frames.iter().all(|f| f.entries.is_empty()));
    }

    #[test]
    fn test_frame_entries_within_interval() {
        let primary = mission(&[(0.0, 0)]);
        let others = vec![mission(&[(200.0, 0), (250.0, 180)]), mission(&[(40.0, 60), (50.0, 75)])];
        let settings = TimelineSettings::new(Duration::seconds(30), 3).unwrap();

        let frames = build_timeline(&primary, &others, &settings);

        // t=0: ミッション0の最初の点のみ
        assert_eq!(frames[0].entries.len(), 1);
        assert_eq!(frames[0].entries[0].mission_id, 0);
        // t=30: 差がちょうど30秒の点は含まない
        assert!(frames[1].entries.is_empty());
        // t=60: ミッション1の2点
        let ids: Vec<usize> = frames[2].entries.iter().map(|e| e.mission_id).collect();
        assert_eq!(ids, vec![1, 1]);
        assert_eq!(frames[2].entries[1].point.position(), [50.0, 50.0, 100.0]);
    }

    #[test]
    fn test_empty_primary_has_no_frames() {
        let primary = mission(&[]);
        let settings = TimelineSettings::new(Duration::seconds(30), 20).unwrap();
        assert!(build_timeline(&primary, &[mission(&[(0.0, 0)])], &settings).is_empty());
    }

    #[test]
    fn test_settings_reject_zero_interval() {
        assert!(TimelineSettings::new(Duration::zero(), 20).is_err());
    }

    #[test]
    fn test_settings_from_yaml_defaults() {
        let settings = TimelineSettings::from_settings(&DetectionSettings::default()).unwrap();
        assert_eq!(settings.frame_interval(), Duration::seconds(30));
        assert_eq!(settings.frame_count(), 20);
    }
}
