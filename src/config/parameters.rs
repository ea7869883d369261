// src/config/parameters.rs

use serde::Deserialize;

/// 競合判定パラメータ（YAMLから読み込む生の値）
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DetectionSettings {
    #[serde(default = "default_spatial_buffer")]
    pub spatial_buffer: f64, // 空間バッファ (m)
    #[serde(default = "default_temporal_buffer_seconds")]
    pub temporal_buffer_seconds: f64, // 時間バッファ (s)
    #[serde(default = "default_frame_interval_seconds")]
    pub frame_interval_seconds: f64, // タイムラインのフレーム間隔 (s)
    #[serde(default = "default_frame_count")]
    pub frame_count: usize, // タイムラインのフレーム数
}

fn default_spatial_buffer() -> f64 {
    10.0
}

fn default_temporal_buffer_seconds() -> f64 {
    30.0
}

fn default_frame_interval_seconds() -> f64 {
    30.0
}

fn default_frame_count() -> usize {
    20
}

impl Default for DetectionSettings {
    fn default() -> Self {
        DetectionSettings {
            spatial_buffer: default_spatial_buffer(),
            temporal_buffer_seconds: default_temporal_buffer_seconds(),
            frame_interval_seconds: default_frame_interval_seconds(),
            frame_count: default_frame_count(),
        }
    }
}
