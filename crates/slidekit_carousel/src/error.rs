//! Carousel error types

use thiserror::Error;

/// Reasons a [`CarouselConfig`](crate::CarouselConfig) is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Auto-play interval must be longer than zero
    #[error("auto-play interval must be positive")]
    NonPositiveInterval,

    /// A gesture threshold is negative, NaN or infinite
    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidThreshold {
        /// Config field name
        name: &'static str,
        /// Rejected value
        value: f32,
    },

    /// Edge resistance must lie in `[0, 1]`
    #[error("edge resistance must be within 0.0..=1.0 (got {0})")]
    InvalidEdgeResistance(f32),
}

/// Result type for carousel configuration
pub type Result<T> = std::result::Result<T, ConfigError>;
