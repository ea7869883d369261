// src/models/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeconflictionError {
    #[error("無効な軌道入力: {0}")]
    InvalidTrajectoryInput(String),
}
