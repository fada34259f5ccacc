//! A `FoliageField` owns every foliage instance in a world and keeps them indexed by position.
//!
//! Instances live in a `Slab` and are referred to by `InstanceKey`. The `ChunkGrid` stores only the keys, so an instance
//! found by one query and modified through `get_mut` is the same instance every other query will find.
//!
//! ```
//! use foliage_core::prelude::*;
//! use foliage_field::FoliageField;
//!
//! let mut field = FoliageField::default();
//! let key = field.add(PointN([1.0, 0.0, 1.0]), Point3f::UP);
//! field.add(PointN([50.0, 0.0, 1.0]), Point3f::UP);
//!
//! assert_eq!(field.burn_sphere(Point3f::ZERO, 2.0, 10.0), 1);
//! assert_eq!(field.get(key).unwrap().burn_time, Some(10.0));
//!
//! // Already burning, so the second fire doesn't count it again.
//! assert_eq!(field.burn_sphere(Point3f::ZERO, 100.0, 11.0), 1);
//! ```

use crate::FoliageInstance;

use foliage_core::prelude::*;
use foliage_search::RangeQueries;
use foliage_storage::{ChunkGrid, ChunkGridConfig, ConfigError, ShapeQuery};

use slab::Slab;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of instances drawn together in one batch by default.
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// Refers to one instance in a `FoliageField`. Keys of removed instances may be reused.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InstanceKey(usize);

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize), serde(default))]
pub struct FieldConfig {
    pub grid: ChunkGridConfig,
    /// The maximum number of instances passed to a single `for_each_batch` callback.
    pub batch_size: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            grid: ChunkGridConfig::default(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), FieldConfigError> {
        self.grid.validate()?;
        if self.batch_size == 0 {
            return Err(FieldConfigError::ZeroBatchSize);
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FieldConfigError {
    #[error(transparent)]
    Grid(#[from] ConfigError),
    #[error("batch size must be at least 1")]
    ZeroBatchSize,
}

#[derive(Clone, Debug)]
pub struct FoliageField {
    config: FieldConfig,
    instances: Slab<FoliageInstance>,
    index: ChunkGrid<InstanceKey>,
}

impl Default for FoliageField {
    fn default() -> Self {
        Self {
            config: FieldConfig::default(),
            instances: Slab::new(),
            index: ChunkGrid::default(),
        }
    }
}

impl FoliageField {
    pub fn new(config: FieldConfig) -> Result<Self, FieldConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            instances: Slab::new(),
            index: ChunkGrid::new(config.grid)?,
        })
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The spatial index of instance keys.
    #[inline]
    pub fn grid(&self) -> &ChunkGrid<InstanceKey> {
        &self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Add an unburnt instance at `position`, standing on a surface with `normal`.
    pub fn add(&mut self, position: Point3f, normal: Point3f) -> InstanceKey {
        let key = InstanceKey(self.instances.insert(FoliageInstance::new(position, normal)));
        self.index.insert(position, key);

        key
    }

    /// Remove one instance at exactly `position`.
    pub fn remove(&mut self, position: Point3f) -> Option<FoliageInstance> {
        let key = self.index.remove(position)?;

        self.instances.try_remove(key.0)
    }

    /// The key of an instance at exactly `position`.
    pub fn key_at(&self, position: Point3f) -> Option<InstanceKey> {
        self.index.get(position).copied()
    }

    pub fn get(&self, key: InstanceKey) -> Option<&FoliageInstance> {
        self.instances.get(key.0)
    }

    /// Mutable access to an instance. Moving an instance requires removing it and adding it again, so its position can't
    /// be changed here.
    pub fn get_mut(&mut self, key: InstanceKey) -> Option<FoliageInstanceMut<'_>> {
        self.instances
            .get_mut(key.0)
            .map(|instance| FoliageInstanceMut { instance })
    }

    pub fn iter(&self) -> impl Iterator<Item = (InstanceKey, &FoliageInstance)> {
        self.instances
            .iter()
            .map(|(key, instance)| (InstanceKey(key), instance))
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.index.clear();
    }

    pub fn instances_in_radius(&self, center: Point3f, radius: f32) -> Vec<InstanceKey> {
        self.index
            .query_radius(center, radius)
            .into_iter()
            .copied()
            .collect()
    }

    pub fn instances_in_extent(&self, extent: &Extent3f) -> Vec<InstanceKey> {
        self.index.query_extent(extent).into_iter().copied().collect()
    }

    pub fn instances_on_ray(&self, ray: &Ray3, max_distance: f32, radius: f32) -> Vec<InstanceKey> {
        self.index
            .query_thick_ray(ray, max_distance, radius)
            .into_iter()
            .copied()
            .collect()
    }

    /// Ignite every instance within `radius` of `center` at `time`. Returns the number of instances that weren't
    /// already burning.
    pub fn burn_sphere(&mut self, center: Point3f, radius: f32, time: f32) -> usize {
        let keys = self.index.query_radius(center, radius);
        let ignited = ignite_all(&mut self.instances, keys, time);
        debug!(center = ?center, radius, ignited, "burned sphere");

        ignited
    }

    /// Ignite every instance within `radius` of the segment of `ray` up to `max_distance`. Returns the number of instances
    /// that weren't already burning.
    pub fn burn_line(&mut self, ray: &Ray3, max_distance: f32, radius: f32, time: f32) -> usize {
        let keys = self.index.query_thick_ray(ray, max_distance, radius);
        let ignited = ignite_all(&mut self.instances, keys, time);
        debug!(origin = ?ray.origin, max_distance, radius, ignited, "burned line");

        ignited
    }

    /// Calls `f` with the key of each chunk and the instances in that chunk, split into batches of at most
    /// `FieldConfig::batch_size`. Empty chunks are never visited.
    pub fn for_each_batch(&self, mut f: impl FnMut(Point3i, &[&FoliageInstance])) {
        let mut keys = Vec::new();
        let mut batch = Vec::with_capacity(self.config.batch_size);
        for (chunk_key, octree) in self.index.iter_chunks() {
            keys.clear();
            octree.collect_all(&mut keys);

            for batch_keys in keys.chunks(self.config.batch_size) {
                batch.clear();
                batch.extend(batch_keys.iter().filter_map(|key| self.instances.get(key.0)));
                f(chunk_key, &batch);
            }
        }
    }
}

fn ignite_all(instances: &mut Slab<FoliageInstance>, keys: Vec<&InstanceKey>, time: f32) -> usize {
    let mut ignited = 0;
    for key in keys {
        if let Some(instance) = instances.get_mut(key.0) {
            ignited += instance.ignite(time) as usize;
        }
    }

    ignited
}

/// Mutable access to a `FoliageInstance` that keeps its position fixed.
pub struct FoliageInstanceMut<'a> {
    instance: &'a mut FoliageInstance,
}

impl<'a> FoliageInstanceMut<'a> {
    #[inline]
    pub fn position(&self) -> Point3f {
        self.instance.position
    }

    #[inline]
    pub fn normal_mut(&mut self) -> &mut Point3f {
        &mut self.instance.normal
    }

    #[inline]
    pub fn burn_time_mut(&mut self) -> &mut Option<f32> {
        &mut self.instance.burn_time
    }

    #[inline]
    pub fn ignite(&mut self, time: f32) -> bool {
        self.instance.ignite(time)
    }
}

impl<'a> core::ops::Deref for FoliageInstanceMut<'a> {
    type Target = FoliageInstance;

    #[inline]
    fn deref(&self) -> &FoliageInstance {
        &*self.instance
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
