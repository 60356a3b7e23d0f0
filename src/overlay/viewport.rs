//! Derived view state for an attached overlay.

use glam::DVec2;

use crate::geo::{ground_distance, GeoRegion};

/// Screen-space state of the overlay's bounding rectangle, recomputed on
/// every view synchronization.
///
/// A state value is always built whole and installed in one step, so a
/// conversion call can never observe a half-updated mix of old and new
/// fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Screen-pixel position of the overlay's top-left corner.
    pub position: DVec2,
    /// Screen-pixel size of the overlay's bounding rectangle.
    pub size: DVec2,
    /// Conversion factor between drawing-space units and screen pixels at
    /// the current zoom. Derived from the horizontal axis only; the vertical
    /// factor differs infinitesimally under projection.
    pub pixels_per_unit: f64,
}

impl ViewportState {
    /// Builds the state from the screen-pixel positions of two opposite
    /// region corners and the fixed drawing-space extent.
    ///
    /// The corners may arrive in either order or axis orientation; the
    /// bounding rectangle is their componentwise min corner and absolute
    /// difference.
    pub fn from_corners(corner_a: DVec2, corner_b: DVec2, extent: DVec2) -> Self {
        let position = corner_a.min(corner_b);
        let size = (corner_b - corner_a).abs();

        Self {
            position,
            size,
            pixels_per_unit: size.x / extent.x,
        }
    }
}

/// Computes the overlay's fixed drawing-space extent: ground distances from
/// the region's northwest corner to its northeast and southwest corners,
/// divided by the unit scale.
///
/// Computed once per overlay on first view synchronization and never again;
/// the extent is the overlay's intrinsic, resolution-independent size.
pub(crate) fn drawing_extent(region: &GeoRegion, unit: f64) -> DVec2 {
    let nw = region.north_west();
    let width_m = ground_distance(nw, region.north_east());
    let height_m = ground_distance(nw, region.south_west());

    DVec2::new(width_m / unit, height_m / unit)
}
