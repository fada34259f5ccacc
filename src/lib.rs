//! Spatial indexing for foliage and other point-like objects scattered through large 3D worlds.
//!
//! This library is organized into several crates. The most fundamental are:
//! - **core**: points, extents, spheres and rays in continuous 3D space
//! - **storage**: the dynamic `SpatialOctree` and the sparse `ChunkGrid` of octrees
//!
//! Then you get extra bits of functionality from the others:
//! - **search**: sphere, box, and thick ray range queries
//! - **field**: foliage instances with burn state, render batching, and mesh surface emitters
//!
//! To learn the basics, start with these doc pages:
//!
//! - [points](crate::core::point::PointN)
//! - [extents](crate::core::extent::ExtentN)
//! - [octrees](crate::storage::octree)
//! - [chunk grids](crate::storage::chunk_grid)

pub use foliage_core as core;
pub use foliage_storage as storage;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::storage::prelude::*;

    #[cfg(feature = "field")]
    pub use super::field::prelude::*;
    #[cfg(feature = "search")]
    pub use super::search::prelude::*;
}

#[cfg(feature = "field")]
pub use foliage_field as field;

#[cfg(feature = "search")]
pub use foliage_search as search;
