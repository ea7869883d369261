// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::DetectionSettings;
pub use scenario::Scenario;
