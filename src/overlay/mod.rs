//! The overlay component and its configuration.
//!
//! `GeoOverlay` keeps one drawable element anchored to a geographic region
//! across the host view's pan/zoom transitions, exposing forward and inverse
//! conversion between geographic and drawing-space coordinates.

mod layer;
mod options;
mod viewport;

pub use layer::GeoOverlay;
pub use options::OverlayOptions;
pub use viewport::ViewportState;
