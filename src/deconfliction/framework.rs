// src/deconfliction/framework.rs

use crate::config::scenario::{MissionInstance, Scenario};
use crate::models::{DeconflictionError, Mission, TimedPoint};

/// 設定ファイルのミッション記述から飛行計画を生成する
pub fn build_mission(instance: &MissionInstance) -> Result<Mission, DeconflictionError> {
    let waypoints = instance
        .waypoints
        .iter()
        .map(|w| TimedPoint::new(w.position[0], w.position[1], w.position[2], w.time))
        .collect::<Result<Vec<_>, _>>()?;
    Mission::new(waypoints, instance.window_start, instance.window_end)
}

/// シナリオ全体の飛行計画を生成する
///
/// # 戻り値
/// - (主ミッション, 他ミッション群)。他ミッションの順序はシナリオ記述の順序を保つ
pub fn build_missions(scenario: &Scenario) -> Result<(Mission, Vec<Mission>), DeconflictionError> {
    let primary = build_mission(&scenario.primary)?;
    let others = scenario
        .schedules
        .iter()
        .map(build_mission)
        .collect::<Result<Vec<_>, _>>()?;
    Ok((primary, others))
}
