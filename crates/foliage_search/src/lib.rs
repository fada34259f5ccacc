//! Range queries over the spatial indexes of `foliage_storage`.
//!
//! The filters in this crate describe the shapes supported by range queries: spheres, boxes, and thick rays (capsules).
//! The `RangeQueries` extension trait wraps them into one-call queries for anything that implements `ShapeQuery`.

pub mod filter;
pub mod range;

pub use filter::{ExtentFilter, SphereFilter, ThickRayFilter};
pub use range::RangeQueries;

pub mod prelude {
    pub use super::{ExtentFilter, RangeQueries, SphereFilter, ThickRayFilter};
}
