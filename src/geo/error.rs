//! Error types for coordinate handling.

use thiserror::Error;

/// Errors raised while building geographic values.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeoError {
    /// A coordinate was NaN, infinite or outside its valid range.
    #[error("Invalid coordinate: {field} = {value}")]
    InvalidCoordinate {
        /// Which component was rejected (`latitude` or `longitude`).
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result type alias for geographic operations.
pub type Result<T> = std::result::Result<T, GeoError>;
