// src/math/time.rs

use chrono::{DateTime, Duration, Utc};

/// 2時刻の差の絶対値
pub fn abs_time_difference(t1: DateTime<Utc>, t2: DateTime<Utc>) -> Duration {
    if t1 >= t2 {
        t1 - t2
    } else {
        t2 - t1
    }
}
