//! Error types for overlay construction and coordinate conversion.

use thiserror::Error;

/// Errors surfaced by the overlay.
///
/// All overlay work is synchronous local computation, so there are no I/O or
/// retry semantics here. Malformed host-view responses (e.g. NaN pixel
/// coordinates) are not sanitized and propagate through conversion results
/// unmodified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlayError {
    /// The bounding region has zero area and cannot anchor an overlay.
    #[error("degenerate bounding region: {reason}")]
    InvalidRegion { reason: String },

    /// The configured unit scale is not a positive finite number.
    #[error("invalid unit scale {unit}: must be a positive finite number")]
    InvalidUnit { unit: f64 },

    /// Coordinate conversion requires a live host view; the overlay has not
    /// been attached (or has been detached), so no pixels-per-unit factor
    /// exists yet.
    #[error("overlay is not attached to a host view")]
    NotAttached,
}
