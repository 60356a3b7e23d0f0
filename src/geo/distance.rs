//! Great-circle distance between geographic coordinates.

use geo_types::Coord;

/// Mean earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Returns the ground distance in meters between two geographic coordinates
/// (x = longitude, y = latitude, in degrees).
///
/// Uses the haversine formula on a sphere of mean earth radius, which is
/// accurate to well under a percent at the footprint scales an overlay
/// covers.
pub fn ground_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();

    let sin_half_dlat = ((b.y - a.y).to_radians() / 2.0).sin();
    let sin_half_dlon = ((b.x - a.x).to_radians() / 2.0).sin();

    let h = sin_half_dlat * sin_half_dlat
        + lat_a.cos() * lat_b.cos() * sin_half_dlon * sin_half_dlon;

    EARTH_RADIUS_M * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}
