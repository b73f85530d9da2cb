use crate::angle::{between, clamp_latitude, displacement, midpoint, normalize_longitude};
use crate::geometry::Geometry;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// A latitude/longitude range on the surface of the earth.
///
/// The box is the area swept from `south` to `north` and eastward from `west`
/// to `east`. When `west > east` the box crosses the antimeridian; that is a
/// regular box, not an error.
///
/// Latitudes are clamped to `[-90, 90]` and swapped if given out of order.
/// Longitudes are normalized as angles. Serializes as
/// `[south, west, north, east]`.
///
/// # Examples
///
/// ```
/// use geohashes_types::bbox::BoundingBox;
///
/// let bay_area = BoundingBox::new(37.0, -123.0, 38.5, -121.5);
/// assert!(!bay_area.crosses_antimeridian());
/// assert_eq!(bay_area.width(), 1.5);
///
/// let pacific = BoundingBox::new(-10.0, 170.0, 10.0, -170.0);
/// assert!(pacific.crosses_antimeridian());
/// assert_eq!(pacific.width(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

impl BoundingBox {
    /// The whole earth.
    pub const WORLD: BoundingBox = BoundingBox {
        south: -90.0,
        west: -180.0,
        north: 90.0,
        east: 180.0,
    };

    /// Create a box from its `south`, `west`, `north` and `east` bounds.
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        let mut south = clamp_latitude(south);
        let mut north = clamp_latitude(north);
        if south > north {
            std::mem::swap(&mut south, &mut north);
        }
        Self {
            south,
            west: normalize_longitude(west),
            north,
            east: normalize_longitude(east),
        }
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    /// True if the eastward sweep from west to east passes the antimeridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.west > self.east
    }

    /// Eastward longitude span in degrees, in `[0, 360]`.
    pub fn width(&self) -> f64 {
        displacement(self.west, self.east)
    }

    /// Latitude span in degrees.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// The point halfway along both spans.
    pub fn center(&self) -> Point {
        Point::new(
            midpoint(self.south, self.north),
            midpoint(self.west, self.east),
        )
    }

    /// Returns true if `geometry` contains this box.
    ///
    /// Containment is asked of the other operand, so each geometry decides
    /// its own rule.
    pub fn within<G: Geometry + ?Sized>(&self, geometry: &G) -> bool {
        geometry.contains_box(self)
    }

    /// Polygon ring for this box in `(lng, lat)` order.
    ///
    /// A box crossing the antimeridian is unwrapped: its east edge is moved
    /// past 180 so the ring stays a simple rectangle.
    pub fn to_polygon(&self) -> geo::Polygon<f64> {
        geo::Rect::new(
            geo::coord! { x: self.west, y: self.south },
            geo::coord! { x: self.west + self.width(), y: self.north },
        )
        .to_polygon()
    }
}

impl Geometry for BoundingBox {
    fn intersects_box(&self, other: &BoundingBox) -> bool {
        let lat_overlap = between(self.south, other.south, other.north)
            || between(other.south, self.south, self.north)
            || between(self.north, other.south, other.north)
            || between(other.north, self.south, self.north);
        let lng_overlap = between(self.west, other.west, other.east)
            || between(other.west, self.west, self.east)
            || between(self.east, other.west, other.east)
            || between(other.east, self.west, self.east);

        (lat_overlap && lng_overlap)
            || (self.south == -90.0 && other.south == -90.0)
            || (self.north == 90.0 && other.north == 90.0)
    }

    fn contains_box(&self, other: &BoundingBox) -> bool {
        between(other.south, self.south, self.north)
            && between(other.north, self.south, self.north)
            && between(other.west, self.west, self.east)
            && between(other.east, self.west, self.east)
    }

    fn is_finite(&self) -> bool {
        self.south.is_finite()
            && self.west.is_finite()
            && self.north.is_finite()
            && self.east.is_finite()
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([south, west, north, east]: [f64; 4]) -> Self {
        Self::new(south, west, north, east)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.south, bbox.west, bbox.north, bbox.east]
    }
}

/// `geo` rectangles are `(x, y)` with `min <= max`, so they never cross the
/// antimeridian.
impl From<geo::Rect<f64>> for BoundingBox {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self::new(rect.min().y, rect.min().x, rect.max().y, rect.max().x)
    }
}
