//! Geographic bounding regions.

use geo_types::Coord;
use serde::{Deserialize, Serialize};

use crate::error::OverlayError;

/// An immutable rectangular geographic region, stored as normalized
/// northwest and southeast corners (x = longitude, y = latitude, degrees).
///
/// The region fixes an overlay's ground footprint: it is supplied at
/// construction and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoRegion {
    north_west: Coord<f64>,
    south_east: Coord<f64>,
}

impl GeoRegion {
    /// Creates a region from any two opposite corners.
    ///
    /// The corners are normalized (north = max latitude, west = min
    /// longitude), so an inverted pair denotes the same footprint as the
    /// properly ordered one. Zero-area regions are rejected: a degenerate
    /// footprint cannot anchor a drawing space.
    pub fn new(corner_a: Coord<f64>, corner_b: Coord<f64>) -> Result<Self, OverlayError> {
        let north = corner_a.y.max(corner_b.y);
        let south = corner_a.y.min(corner_b.y);
        let west = corner_a.x.min(corner_b.x);
        let east = corner_a.x.max(corner_b.x);

        if ![north, south, west, east].iter().all(|v| v.is_finite()) {
            return Err(OverlayError::InvalidRegion {
                reason: "corner coordinates must be finite".to_string(),
            });
        }

        if north == south || west == east {
            return Err(OverlayError::InvalidRegion {
                reason: format!(
                    "corners ({}, {}) and ({}, {}) span zero area",
                    corner_a.x, corner_a.y, corner_b.x, corner_b.y
                ),
            });
        }

        Ok(Self {
            north_west: Coord { x: west, y: north },
            south_east: Coord { x: east, y: south },
        })
    }

    /// The northwest corner.
    pub fn north_west(&self) -> Coord<f64> {
        self.north_west
    }

    /// The northeast corner.
    pub fn north_east(&self) -> Coord<f64> {
        Coord {
            x: self.south_east.x,
            y: self.north_west.y,
        }
    }

    /// The southwest corner.
    pub fn south_west(&self) -> Coord<f64> {
        Coord {
            x: self.north_west.x,
            y: self.south_east.y,
        }
    }

    /// The southeast corner.
    pub fn south_east(&self) -> Coord<f64> {
        self.south_east
    }

    /// Whether a coordinate lies within the region (inclusive).
    pub fn contains(&self, coord: Coord<f64>) -> bool {
        coord.x >= self.north_west.x
            && coord.x <= self.south_east.x
            && coord.y >= self.south_east.y
            && coord.y <= self.north_west.y
    }
}
