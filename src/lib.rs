//! Pan/zoom-synchronized vector overlays for geographic maps.
//!
//! A [`GeoOverlay`] sets an independent drawing universe over a map: the
//! overlay's root element pans and zooms in lock-step with the host's tiles
//! while its internal content is never touched. Only a single rectangular
//! transform (translate + scale) is ever applied to the root element, so any
//! drawing library can own the contents.
//!
//! The host map engine and the element plumbing stay behind capability
//! traits ([`HostView`], [`OverlayElement`]): this crate is the geometry
//! layer in between, maintaining an invertible mapping between geographic
//! coordinates, screen pixels, and a fixed-unit drawing space.
//!
//! Not covered, by design: tiling of large content, per-shape re-rendering
//! on zoom, and hit-testing of overlay contents (the host's generic
//! interactive-target mechanism handles the latter).

pub mod element;
pub mod error;
pub mod geo;
pub mod host;
pub mod overlay;

pub use element::{OverlayElement, INTERACTIVE_CLASS, OVERLAY_CLASS, ZOOM_ANIMATED_CLASS};
pub use error::OverlayError;
pub use geo::{ground_distance, GeoRegion};
pub use host::{HostView, ViewEvent};
pub use overlay::{GeoOverlay, OverlayOptions, ViewportState};
