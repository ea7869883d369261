// src/models/mod.rs

pub mod conflict;
pub mod error;
pub mod mission;
pub mod waypoint;

pub use conflict::{ConflictRecord, ConflictReport, DetectionStatus};
pub use error::DeconflictionError;
pub use mission::Mission;
pub use waypoint::TimedPoint;
