//! Host map view capability.
//!
//! The overlay never reimplements map projection math: it consumes the
//! host engine's geo/pixel conversions and pan/zoom notifications through
//! this trait, staying a thin geometry layer over a trusted collaborator.

use geo_types::Coord;
use glam::DVec2;

/// Projection and view-state capabilities supplied by the host map engine.
///
/// Pixel coordinates are in the host's layering space: the position a layer
/// element would be given on screen at the current view, in pixels.
pub trait HostView {
    /// Projects a geographic coordinate to its screen-pixel position at the
    /// current view.
    fn geo_to_screen_pixel(&self, coord: Coord<f64>) -> DVec2;

    /// Projects a geographic coordinate to the screen-pixel position it will
    /// occupy once the view reaches `zoom` centered on `center`.
    ///
    /// Used while a zoom animation is in flight, before the view state has
    /// actually changed.
    fn geo_to_screen_pixel_toward(&self, coord: Coord<f64>, zoom: f64, center: Coord<f64>)
        -> DVec2;

    /// Inverse projection: screen-pixel position back to geographic
    /// coordinates at the current view.
    fn screen_pixel_to_geo(&self, pixel: DVec2) -> Coord<f64>;

    /// Ratio of the pixel-per-meter scale at `target_zoom` to the scale at
    /// the current zoom level.
    fn zoom_scale(&self, target_zoom: f64) -> f64;

    /// Whether the host runs animated zoom transitions.
    ///
    /// Hosts that zoom discretely never deliver [`ViewEvent::AnimatedZoom`]
    /// and their overlays skip the zoom-animation marker class.
    fn zoom_animated(&self) -> bool {
        true
    }
}

/// View notifications delivered by the host to attached overlays.
///
/// The host's layer manager holds each attached overlay and forwards these
/// in delivery order on the UI thread; the overlay maps each kind to its
/// handler with a fixed match, no dynamic dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    /// The view was panned; positions changed, scale did not.
    Pan,
    /// The zoom level changed (and settled).
    Zoom,
    /// The view was reset wholesale (e.g. after a programmatic jump).
    ViewReset,
    /// An animated zoom transition started toward `zoom` centered on
    /// `center`. The settled state arrives as a later `Zoom`/`ViewReset`.
    AnimatedZoom { zoom: f64, center: Coord<f64> },
}
