// src/math/mod.rs

pub mod distance;
pub mod time;

pub use distance::euclidean_distance;
pub use time::abs_time_difference;
