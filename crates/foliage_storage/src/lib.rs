//! Storage for point-like objects indexed by their position in continuous 3D space.
//!
//! The core types are:
//!   - `SpatialOctree`: a dynamic octree over a bounded cube that splits and merges as entries come and go
//!   - `ChunkGrid`: an unbounded, sparse grid of `SpatialOctree`s, one per occupied chunk
//!
//! Both implement `ShapeQuery`, which finds every entry inside of a shape described by a `ShapeFilter`. Concrete shapes
//! (spheres, boxes, thick rays) live in the `foliage_search` crate.
//!
//! Neither type does any synchronization. A single owner is expected to perform all mutations and queries, and payloads
//! returned by mutable queries are plain `&mut` borrows.

pub mod chunk_grid;
pub mod config;
pub mod octree;
pub mod shape;

pub use chunk_grid::ChunkGrid;
pub use config::{
    ChunkGridConfig, ConfigError, OctreeConfig, DEFAULT_CHUNK_SIZE, DEFAULT_MIN_HALF_EXTENT,
};
pub use octree::{Entry, OctreeNode, OctreeVisitor, SpatialOctree, VisitStatus};
pub use shape::{ShapeFilter, ShapeQuery};

// Hash types to use for small keys like `Point3i`.
pub type SmallKeyHashMap<K, V> = ahash::AHashMap<K, V>;
pub type SmallKeyBuildHasher = ahash::RandomState;

pub mod prelude {
    pub use super::{
        ChunkGrid, ChunkGridConfig, OctreeConfig, OctreeNode, ShapeFilter, ShapeQuery,
        SpatialOctree, VisitStatus,
    };
}
