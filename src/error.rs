//! Error types for MOS mapping operations.

use thiserror::Error;

/// Result type alias for MOS mapping operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while mapping a metric value to a MOS.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Source video dimensions outside the supported range.
    #[error("Invalid video resolution {width}x{height} (sides must be within 1..=8192)")]
    InvalidResolution {
        /// Video width in pixels.
        width: u32,
        /// Video height in pixels.
        height: u32,
    },

    /// Player window dimensions outside the supported range.
    #[error("Invalid player size {width}x{height} (sides must be within 1..=8192)")]
    InvalidPlayerSize {
        /// Player width in pixels.
        width: u32,
        /// Player height in pixels.
        height: u32,
    },

    /// HDR flag outside {0, 1} at an untyped input boundary.
    #[error("Invalid HDR flag {0} (expected 0 for SDR or 1 for HDR)")]
    InvalidHdrFlag(i64),

    /// Upsampling method name or code outside the defined set.
    #[error("Invalid upsampling method: {0}")]
    InvalidUpsamplingMethod(String),

    /// Device type name or code outside the defined set.
    #[error("Invalid device type: {0}")]
    InvalidDeviceType(String),

    /// Custom device selected but its parameters are absent or out of bounds.
    #[error("Missing or invalid custom device parameters: {0}")]
    MissingOrInvalidCustomParams(String),

    /// Derived viewing parameters fell outside their sane post-condition
    /// range, signalling contradictory geometry inputs.
    #[error(
        "Inconsistent viewing geometry: viewing angle {phi:.3} deg, \
         angular resolution {u:.3} cpd (expected 1..=180 deg and 1..=200 cpd)"
    )]
    GeometryInconsistency {
        /// Derived viewing angle in degrees.
        phi: f64,
        /// Derived angular resolution in cycles per degree.
        u: f64,
    },

    /// Raw metric score outside the metric's documented domain.
    #[error("{metric} value {value} outside valid domain {domain}")]
    InvalidMetricRange {
        /// Name of the metric.
        metric: String,
        /// Rejected raw value.
        value: f64,
        /// Human-readable domain, e.g. `(0, 100)`.
        domain: String,
    },

    /// Calibration-dataset misuse (e.g. no reference scores for a metric).
    #[error("Calibration error: {0}")]
    Calibration(String),

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
