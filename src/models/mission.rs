// src/models/mission.rs

use chrono::{DateTime, Utc};

use crate::models::error::DeconflictionError;
use crate::models::waypoint::TimedPoint;

/// 一機分の飛行計画
///
/// 有効時間帯（`window_start`〜`window_end`）は保持するのみで、競合判定では参照しない。
#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    waypoints: Vec<TimedPoint>,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
}

impl Mission {
    /// 飛行計画を生成する
    ///
    /// # 引数
    /// - `waypoints`: 時刻順のウェイポイント列（空でもよい）
    /// - `window_start`: 有効時間帯の開始
    /// - `window_end`: 有効時間帯の終了
    ///
    /// # 戻り値
    /// - `window_end`が`window_start`より前の場合は`InvalidTrajectoryInput`
    pub fn new(
        waypoints: Vec<TimedPoint>,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Result<Self, DeconflictionError> {
        if window_end < window_start {
            return Err(DeconflictionError::InvalidTrajectoryInput(format!(
                "有効時間帯の終了 {} が開始 {} より前です",
                window_end, window_start
            )));
        }
        Ok(Mission {
            waypoints,
            window_start,
            window_end,
        })
    }

    pub fn waypoints(&self) -> &[TimedPoint] {
        &self.waypoints
    }

    pub fn window_start(&self) -> DateTime<Utc> {
        self.window_start
    }

    pub fn window_end(&self) -> DateTime<Utc> {
        self.window_end
    }

    /// 指定したウェイポイントだけを差し替えた新しい飛行計画を返す
    ///
    /// 元の飛行計画は変更しない。
    pub fn with_waypoint(&self, index: usize, point: TimedPoint) -> Result<Self, DeconflictionError> {
        if index >= self.waypoints.len() {
            return Err(DeconflictionError::InvalidTrajectoryInput(format!(
                "ウェイポイント番号 {} が範囲外です（要素数 {}）",
                index,
                self.waypoints.len()
            )));
        }
        let mut waypoints = self.waypoints.clone();
        waypoints[index] = point;
        Ok(Mission {
            waypoints,
            window_start: self.window_start,
            window_end: self.window_end,
        })
    }
}
