// src/main.rs

use std::env;
use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use deconflict::deconfliction::csv::{create_csv_writer, write_timeline_csv, CsvConflictSink};
use deconflict::deconfliction::framework::build_missions;
use deconflict::deconfliction::load_parameters::{load_detection_settings, load_scenario};
use deconflict::deconfliction::{build_timeline, run_query, DetectionParameters, TimelineSettings};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 引数で設定ファイルを上書き可能
    let mut args = env::args().skip(1);
    let parameters_path = args.next().unwrap_or_else(|| "config/detection_parameters.yaml".to_string());
    let scenario_path = args.next().unwrap_or_else(|| "config/scenario.yaml".to_string());

    // 設定とシナリオの読み込み
    let settings = load_detection_settings(&parameters_path)?;
    let scenario = load_scenario(&scenario_path)?;
    let params = DetectionParameters::from_settings(&settings)?;
    let timeline_settings = TimelineSettings::from_settings(&settings)?;

    let (primary, others) = build_missions(&scenario)?;

    // 競合判定とCSV出力
    let mut sink = CsvConflictSink::new(create_csv_writer("output/conflicts.csv")?);
    let report = run_query(&primary, &others, &params, Some(&mut sink))?;

    info!("Mission Status: {}", report.status);
    for c in &report.conflicts {
        info!(
            "Conflict with mission {} at ({}, {}, {}) at {}",
            c.mission_id, c.location[0], c.location[1], c.location[2], c.time
        );
    }

    // 時系列スナップショットの出力
    let frames = build_timeline(&primary, &others, &timeline_settings);
    let mut timeline_writer = create_csv_writer("output/timeline.csv")?;
    write_timeline_csv(&mut timeline_writer, &frames)?;

    Ok(())
}
