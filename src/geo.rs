//! Geodesic helpers: point-plus-radius to bounding box, and great-circle
//! distance between two points.
//!
//! Both use a spherical earth. `bounding_box` is a small-angle planar
//! approximation and is good enough for "gauges within N miles" queries,
//! not for surveying.

use crate::model::{BoundingBox, DistanceUnit, NoaaError};

/// Earth radius used by both helpers, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6373.0;

/// Earth radius used for great-circle distances in miles.
pub const EARTH_RADIUS_MILES: f64 = 3960.0;

pub const KM_PER_MILE: f64 = 1.609344;

/// Rejects coordinates outside [-180, 180] (also applied to latitude).
pub(crate) fn check_coordinate(name: &str, value: f64) -> Result<f64, NoaaError> {
    if !(-180.0..=180.0).contains(&value) {
        return Err(NoaaError::InvalidArgument(format!(
            "{} {} is outside [-180, 180]",
            name, value
        )));
    }
    Ok(value)
}

/// Computes the box extending `half_side` in each direction from
/// (`latitude`, `longitude`).
///
/// # Errors
/// `NoaaError::InvalidArgument` if `half_side` is not positive or either
/// coordinate is outside [-180, 180].
pub fn bounding_box(
    latitude: f64,
    longitude: f64,
    half_side: f64,
    unit: DistanceUnit,
) -> Result<BoundingBox, NoaaError> {
    if !(half_side > 0.0) {
        return Err(NoaaError::InvalidArgument(format!(
            "half side must be > 0, got {}",
            half_side
        )));
    }
    let lat = check_coordinate("latitude", latitude)?.to_radians();
    let lon = check_coordinate("longitude", longitude)?.to_radians();

    let half_side_km = match unit {
        DistanceUnit::Kilometers => half_side,
        DistanceUnit::Miles => half_side * KM_PER_MILE,
    };

    // Radius of the parallel at this latitude
    let parallel_radius = EARTH_RADIUS_KM * lat.cos();

    let lat_span = half_side_km / EARTH_RADIUS_KM;
    let lon_span = half_side_km / parallel_radius;

    Ok(BoundingBox {
        west: (lon - lon_span).to_degrees(),
        south: (lat - lat_span).to_degrees(),
        east: (lon + lon_span).to_degrees(),
        north: (lat + lat_span).to_degrees(),
    })
}

/// Great-circle distance between two points, in `unit`.
///
/// Uses colatitude as the polar angle and longitude as the azimuth. The
/// cosine is clamped to [-1, 1] so identical and antipodal points don't
/// produce NaN from rounding.
pub fn great_circle_distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    unit: DistanceUnit,
) -> f64 {
    let phi1 = (90.0 - lat1).to_radians();
    let phi2 = (90.0 - lat2).to_radians();
    let theta1 = lon1.to_radians();
    let theta2 = lon2.to_radians();

    let cos = phi1.sin() * phi2.sin() * (theta1 - theta2).cos() + phi1.cos() * phi2.cos();
    let arc = cos.clamp(-1.0, 1.0).acos();

    match unit {
        DistanceUnit::Kilometers => arc * EARTH_RADIUS_KM,
        DistanceUnit::Miles => arc * EARTH_RADIUS_MILES,
    }
}
