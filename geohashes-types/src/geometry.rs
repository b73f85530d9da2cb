use crate::bbox::BoundingBox;

/// A subset of the points on the surface of the earth.
///
/// Covering only needs two questions answered about a geometry: does it touch
/// a box at all, and does it swallow the box whole. Edges are inclusive for
/// both.
pub trait Geometry {
    /// Returns true if this geometry shares at least one point with `bbox`.
    fn intersects_box(&self, bbox: &BoundingBox) -> bool;

    /// Returns true if every point of `bbox` belongs to this geometry.
    fn contains_box(&self, bbox: &BoundingBox) -> bool;

    /// Returns false if any coordinate is NaN or infinite. Such a geometry
    /// intersects nothing.
    fn is_finite(&self) -> bool {
        true
    }
}

impl<G: Geometry + ?Sized> Geometry for &G {
    fn intersects_box(&self, bbox: &BoundingBox) -> bool {
        (**self).intersects_box(bbox)
    }

    fn contains_box(&self, bbox: &BoundingBox) -> bool {
        (**self).contains_box(bbox)
    }

    fn is_finite(&self) -> bool {
        (**self).is_finite()
    }
}
