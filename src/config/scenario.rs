// src/config/scenario.rs

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub primary: MissionInstance,
    #[serde(default)]
    pub schedules: Vec<MissionInstance>,
}

#[derive(Debug, Deserialize)]
pub struct MissionInstance {
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    #[serde(default)]
    pub waypoints: Vec<WaypointInstance>,
}

#[derive(Debug, Deserialize)]
pub struct WaypointInstance {
    pub position: [f64; 3], // [x, y, z] 座標 (m)
    pub time: DateTime<Utc>,
}
