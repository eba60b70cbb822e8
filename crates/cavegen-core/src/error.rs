//! Error types for the level generator.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid level dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: i32, height: i32 },

    #[error("invalid wall size {wall_size} for {width}x{height} level: must be in 1..min(width, height)")]
    InvalidWallSize {
        wall_size: i32,
        width: i32,
        height: i32,
    },

    #[error("invalid wall probability {chance}: must be within [0.0, 1.0]")]
    InvalidProbability { chance: f32 },
}
