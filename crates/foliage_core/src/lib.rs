//! The core geometric types for indexing point-like objects in continuous 3D space:
//! - `PointN`: an N-dimensional point, most importantly `Point3f` (world positions) and `Point3i` (chunk keys)
//! - `ExtentN`: an axis-aligned box, most importantly `Extent3f`
//! - `Sphere3` and `Ray3`: the shapes used to describe range queries
//!
//! The `octant` module holds the arithmetic that maps a point to one of the eight children of a cubic node.

pub mod extent;
pub mod octant;
pub mod point;
pub mod ray;
pub mod sphere;

pub use extent::{Extent3, Extent3f, ExtentN};
pub use octant::{child_center, octant_containing_point, OCTANT_SIGNS};
pub use point::{point_traits::*, Point3, Point3f, Point3i, PointN};
pub use ray::Ray3;
pub use sphere::{Sphere, Sphere3};

pub mod prelude {
    pub use super::{
        child_center, octant_containing_point, ConstZero, Distance, DotProduct, Extent3, Extent3f,
        ExtentN, GetComponent, MapComponents, Norm, NormSquared, Point3, Point3f, Point3i,
        PointN, Ray3, Sphere3,
    };
}
