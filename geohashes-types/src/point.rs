use crate::angle::{between, clamp_latitude, normalize_longitude};
use crate::bbox::BoundingBox;
use crate::geometry::Geometry;
use serde::{Deserialize, Serialize};

/// A single point on the surface of the earth.
///
/// Coordinates are normalized on construction:
///
/// - latitude is clamped to `[-90, 90]`
/// - longitude is wrapped into `(-180, 180]`
/// - at either pole the longitude is pinned to `0`
///
/// Serializes as `[lat, lng]`; deserializing re-applies the normalization.
///
/// # Examples
///
/// ```
/// use geohashes_types::point::Point;
///
/// let p = Point::new(100.0, 45.0);
/// assert_eq!(p.lat(), 90.0);
/// assert_eq!(p.lng(), 0.0);
///
/// let p = Point::new(10.0, -180.0);
/// assert_eq!(p.lng(), 180.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    lat: f64,
    lng: f64,
}

impl Point {
    /// Create a point from a latitude and a longitude, in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        let lat = clamp_latitude(lat);
        let mut lng = if lat == 90.0 || lat == -90.0 {
            0.0
        } else {
            normalize_longitude(lng)
        };
        if lng == -180.0 {
            lng = 180.0;
        }
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn is_north_pole(&self) -> bool {
        self.lat == 90.0
    }

    pub fn is_south_pole(&self) -> bool {
        self.lat == -90.0
    }
}

impl Geometry for Point {
    /// A point intersects a box iff the box contains the point. Longitude is
    /// meaningless at a pole, so a polar point touches any box reaching it.
    fn intersects_box(&self, bbox: &BoundingBox) -> bool {
        (between(self.lat, bbox.south(), bbox.north())
            && between(self.lng, bbox.west(), bbox.east()))
            || (self.is_north_pole() && bbox.north() == 90.0)
            || (self.is_south_pole() && bbox.south() == -90.0)
    }

    /// A point never contains a box, not even a degenerate one.
    fn contains_box(&self, _bbox: &BoundingBox) -> bool {
        false
    }

    fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.lat, point.lng]
    }
}

/// `geo` points are `(x, y)`, that is `(lng, lat)`.
impl From<geo::Point<f64>> for Point {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        geo::Point::new(point.lng, point.lat)
    }
}
