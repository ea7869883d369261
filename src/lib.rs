// src/lib.rs

pub mod config;
pub mod deconfliction;
pub mod math;
pub mod models;

pub use deconfliction::{detect, detect_conflicts, run_query, ConflictSink, DetectionParameters};
pub use models::{ConflictRecord, ConflictReport, DeconflictionError, DetectionStatus, Mission, TimedPoint};
