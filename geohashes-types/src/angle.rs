//! Circular arithmetic on angles measured in degrees.
//!
//! Longitudes live on a circle, so "between" and "midpoint" only make sense
//! along a direction of travel. Every helper here measures eastward (counter
//! clockwise seen from the north pole). The geometry types never compare
//! longitudes by sign; they go through these functions instead.

/// Normalizes an angle into `[-180, 180]`.
///
/// Values are reduced modulo 360. Both `-180` and `180` are fixed points, so a
/// box spanning `[-180, 180]` keeps its full 360 degree sweep.
///
/// # Examples
///
/// ```
/// use geohashes_types::angle::normalize_angle;
///
/// assert_eq!(normalize_angle(180.0), 180.0);
/// assert_eq!(normalize_angle(-181.0), 179.0);
/// assert_eq!(normalize_angle(361.0), 1.0);
/// ```
#[inline]
pub fn normalize_angle(x: f64) -> f64 {
    let x = x % 360.0;
    if x < -180.0 {
        x + 360.0
    } else if x > 180.0 {
        x - 360.0
    } else {
        x
    }
}

/// Eastward angular distance from `from` to `to`, in `[0, 360]`.
///
/// ```
/// use geohashes_types::angle::displacement;
///
/// assert_eq!(displacement(179.0, -179.0), 2.0);
/// assert_eq!(displacement(10.0, 0.0), 350.0);
/// ```
#[inline]
pub fn displacement(from: f64, to: f64) -> f64 {
    let from = normalize_angle(from);
    let mut to = normalize_angle(to);
    if from > to {
        to += 360.0;
    }
    to - from
}

fn on_antimeridian(x: f64) -> bool {
    x == 180.0 || x == -180.0
}

/// Returns true if `val` lies on the eastward arc from `start` to `end`.
///
/// Both endpoints are included. `-180` and `180` name the same meridian, so a
/// value on the antimeridian is always between bounds that touch it.
#[inline]
pub fn between(val: f64, start: f64, end: f64) -> bool {
    if on_antimeridian(val) && (on_antimeridian(start) || on_antimeridian(end)) {
        return true;
    }
    displacement(start, val) <= displacement(start, end)
}

/// The angle halfway along the eastward arc from `start` to `end`.
///
/// ```
/// use geohashes_types::angle::midpoint;
///
/// assert_eq!(midpoint(-10.0, 10.0), 0.0);
/// assert_eq!(midpoint(10.0, -10.0), 180.0);
/// ```
#[inline]
pub fn midpoint(start: f64, end: f64) -> f64 {
    normalize_angle(start + displacement(start, end) / 2.0)
}

/// Clamps a latitude into `[-90, 90]`. Latitudes are never wrapped.
#[inline]
pub fn clamp_latitude(lat: f64) -> f64 {
    if lat > 90.0 {
        90.0
    } else if lat < -90.0 {
        -90.0
    } else {
        lat
    }
}

/// Normalizes a longitude as an angle.
#[inline]
pub fn normalize_longitude(lng: f64) -> f64 {
    normalize_angle(lng)
}
