// src/models/waypoint.rs

use chrono::{DateTime, Utc};

use crate::models::error::DeconflictionError;

/// ある時刻における機体の位置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedPoint {
    x: f64, // x 座標 (m)
    y: f64, // y 座標 (m)
    z: f64, // z 座標 (m)
    time: DateTime<Utc>,
}

impl TimedPoint {
    /// 時刻付きの点を生成する
    ///
    /// # 引数
    /// - `x`, `y`, `z`: 座標 (m)
    /// - `time`: 絶対時刻
    ///
    /// # 戻り値
    /// - 座標のいずれかが有限値でない場合は`InvalidTrajectoryInput`
    pub fn new(x: f64, y: f64, z: f64, time: DateTime<Utc>) -> Result<Self, DeconflictionError> {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(DeconflictionError::InvalidTrajectoryInput(format!(
                "座標が有限値ではありません: ({}, {}, {})",
                x, y, z
            )));
        }
        Ok(TimedPoint { x, y, z, time })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }
}
