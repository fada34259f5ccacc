//! Foliage instances scattered across a world and indexed by position.
//!
//! A `FoliageField` owns the instances and answers range queries over them through a `ChunkGrid`. Instances can be set on
//! fire by sphere or line queries, and are handed out to renderers in fixed-size batches per chunk. The `emitter` module
//! scatters instances over the surface of a triangle mesh.

pub mod emitter;
pub mod field;
pub mod instance;

pub use emitter::{
    sample_surface, EmitterTransform, MeshError, SurfaceEmitter, SurfaceSample, TriangleMesh,
};
pub use field::{
    FieldConfig, FieldConfigError, FoliageField, FoliageInstanceMut, InstanceKey,
    DEFAULT_BATCH_SIZE,
};
pub use instance::FoliageInstance;

pub mod prelude {
    pub use super::{
        EmitterTransform, FieldConfig, FoliageField, FoliageInstance, InstanceKey, SurfaceEmitter,
        TriangleMesh,
    };
}
