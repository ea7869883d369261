// src/deconfliction/load_parameters.rs

use std::error::Error;
use std::fs::File;
use serde_yaml::from_reader;

use crate::config::{parameters::DetectionSettings, scenario::Scenario};

/// 判定パラメータの読み込み
pub fn load_detection_settings(path: &str) -> Result<DetectionSettings, Box<dyn Error>> {
    let file = File::open(path)?;
    let settings: DetectionSettings = from_reader(file)?;
    Ok(settings)
}

/// シナリオの読み込み
pub fn load_scenario(path: &str) -> Result<Scenario, Box<dyn Error>> {
    let file = File::open(path)?;
    let scenario: Scenario = from_reader(file)?;
    Ok(scenario)
}
