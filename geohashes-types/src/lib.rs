//! # geohashes-types
//!
//! Latitude/longitude geometry for the `geohashes` crate.
//!
//! - **Angular arithmetic** (`angle`): normalization, eastward displacement,
//!   arc membership and arc midpoints.
//! - **Geometry** (`geometry`): the `Geometry` capability shared by everything
//!   that can be covered with geohashes.
//! - **Primitives**: `Point` and `BoundingBox`.
//!
//! Longitude ranges are always read eastward from west to east, so a box with
//! `west > east` crosses the antimeridian. Poles are handled explicitly: a
//! point at a pole touches every box that reaches that pole.
//!
//! ## Examples
//!
//! ```rust
//! use geohashes_types::{BoundingBox, Geometry, Point};
//!
//! // Aleutians to Kamchatka, across the antimeridian
//! let bbox = BoundingBox::new(41.74172, 170.737608, 46.95318, -165.53192);
//! assert!(bbox.crosses_antimeridian());
//!
//! let point = Point::new(44.0, 180.0);
//! assert!(point.intersects_box(&bbox));
//! ```

pub mod angle;
pub mod bbox;
pub mod geometry;
pub mod point;

pub use bbox::BoundingBox;
pub use geometry::Geometry;
pub use point::Point;
