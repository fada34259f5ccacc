//! A `ChunkGrid` is a sparse grid of `SpatialOctree`s which, unlike a single octree, can index an unbounded region of
//! space.
//!
//! The world is partitioned into cubic chunks with edge length `ChunkGridConfig::chunk_size`. Chunk keys are the world
//! position divided by the chunk size and rounded to the nearest integer (ties to even), so the chunk with key `K` is the
//! cube centered at `K * chunk_size`. Each chunk's octree is created on the first insert into that chunk and dropped as
//! soon as its last entry is removed.
//!
//! Queries visit every chunk. Since each octree has a bounded depth, the cost of an insert or removal doesn't grow with the
//! size of the world, while a query pays for each chunk it touches.
//!
//! ```
//! use foliage_core::prelude::*;
//! use foliage_storage::prelude::*;
//!
//! let mut grid = ChunkGrid::new(ChunkGridConfig::with_chunk_size(10.0)).unwrap();
//! grid.insert(PointN([1.0, 2.0, 3.0]), "here");
//! grid.insert(PointN([100.0, 2.0, 3.0]), "there");
//! assert_eq!(grid.num_chunks(), 2);
//!
//! let mut found = Vec::new();
//! grid.query_shape(&|cube: &Extent3f| cube.minimum.x() < 50.0, &mut found);
//! assert_eq!(found, vec![&"here"]);
//!
//! grid.remove(PointN([100.0, 2.0, 3.0]));
//! assert_eq!(grid.num_chunks(), 1);
//! ```

use crate::{
    ChunkGridConfig, ConfigError, ShapeFilter, ShapeQuery, SmallKeyHashMap, SpatialOctree,
};

use foliage_core::prelude::*;

use tracing::{debug, trace_span};

#[derive(Clone, Debug)]
pub struct ChunkGrid<T> {
    config: ChunkGridConfig,
    octrees: SmallKeyHashMap<Point3i, SpatialOctree<T>>,
    len: usize,
}

impl<T> Default for ChunkGrid<T> {
    fn default() -> Self {
        Self {
            config: ChunkGridConfig::default(),
            octrees: SmallKeyHashMap::default(),
            len: 0,
        }
    }
}

impl<T> ChunkGrid<T> {
    pub fn new(config: ChunkGridConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            ..Default::default()
        })
    }

    #[inline]
    pub fn config(&self) -> &ChunkGridConfig {
        &self.config
    }

    #[inline]
    pub fn chunk_size(&self) -> f32 {
        self.config.chunk_size
    }

    /// The key of the chunk that owns `position`.
    #[inline]
    pub fn chunk_key_containing(&self, position: Point3f) -> Point3i {
        (position / self.config.chunk_size).round_ties_even().as_3i()
    }

    /// The center of the chunk with `key`.
    #[inline]
    pub fn chunk_center(&self, key: Point3i) -> Point3f {
        Point3f::from(key) * self.config.chunk_size
    }

    /// The cube spanned by the chunk with `key`.
    #[inline]
    pub fn chunk_extent(&self, key: Point3i) -> Extent3f {
        Extent3f::from_center_and_half_extent(self.chunk_center(key), self.config.chunk_size / 2.0)
    }

    /// The total number of entries in all chunks.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of chunks that currently hold at least one entry.
    #[inline]
    pub fn num_chunks(&self) -> usize {
        self.octrees.len()
    }

    pub fn chunk(&self, key: Point3i) -> Option<&SpatialOctree<T>> {
        self.octrees.get(&key)
    }

    pub fn iter_chunks(&self) -> impl Iterator<Item = (Point3i, &SpatialOctree<T>)> {
        self.octrees.iter().map(|(key, octree)| (*key, octree))
    }

    pub fn insert(&mut self, position: Point3f, payload: T) {
        debug_assert!(position.is_finite(), "{:?} is not finite", position);

        let key = self.chunk_key_containing(position);
        let center = self.chunk_center(key);
        let config = self.config;

        let octree = self.octrees.entry(key).or_insert_with(|| {
            debug!(key = ?key, "creating chunk");

            SpatialOctree::new(center, config.chunk_size, config.octree)
        });
        octree.insert(position, payload);
        self.len += 1;
    }

    /// Remove the first entry found at exactly `position` and return its payload. A chunk left empty is dropped.
    pub fn remove(&mut self, position: Point3f) -> Option<T> {
        let key = self.chunk_key_containing(position);
        let octree = self.octrees.get_mut(&key)?;
        let payload = octree.remove(position)?;
        self.len -= 1;

        if octree.is_empty() {
            self.octrees.remove(&key);
            debug!(key = ?key, "dropping empty chunk");
        }

        Some(payload)
    }

    pub fn get(&self, position: Point3f) -> Option<&T> {
        self.octrees
            .get(&self.chunk_key_containing(position))?
            .get(position)
    }

    pub fn get_mut(&mut self, position: Point3f) -> Option<&mut T> {
        let key = self.chunk_key_containing(position);

        self.octrees.get_mut(&key)?.get_mut(position)
    }

    /// Remove every entry and chunk.
    pub fn clear(&mut self) {
        self.octrees.clear();
        self.len = 0;
    }
}

impl<T> ShapeQuery<T> for ChunkGrid<T> {
    fn query_shape<'a, F>(&'a self, filter: &F, out: &mut Vec<&'a T>)
    where
        F: ShapeFilter + ?Sized,
    {
        let _span = trace_span!("chunk_grid_query", num_chunks = self.octrees.len()).entered();

        for octree in self.octrees.values() {
            octree.query_shape(filter, out);
        }
    }

    fn query_shape_mut<'a, F>(&'a mut self, filter: &F, out: &mut Vec<&'a mut T>)
    where
        F: ShapeFilter + ?Sized,
    {
        let _span = trace_span!("chunk_grid_query_mut", num_chunks = self.octrees.len()).entered();

        for octree in self.octrees.values_mut() {
            octree.query_shape_mut(filter, out);
        }
    }

    fn collect_all<'a>(&'a self, out: &mut Vec<&'a T>) {
        out.reserve(self.len);
        for octree in self.octrees.values() {
            octree.collect_all(out);
        }
    }

    fn collect_all_mut<'a>(&'a mut self, out: &mut Vec<&'a mut T>) {
        out.reserve(self.len);
        for octree in self.octrees.values_mut() {
            octree.collect_all_mut(out);
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::prelude::*;
    use std::collections::HashSet;
    use utilities::data_sets::random_points_in_extent;

    #[test]
    fn chunk_keys_round_half_to_even() {
        let grid: ChunkGrid<()> = ChunkGrid::default();

        assert_eq!(grid.chunk_key_containing(Point3f::ZERO), Point3i::ZERO);
        assert_eq!(
            grid.chunk_key_containing(PointN([20.0, 60.0, -20.0])),
            PointN([0, 2, 0])
        );
        assert_eq!(
            grid.chunk_key_containing(PointN([20.1, 59.9, -20.1])),
            PointN([1, 1, -1])
        );
        assert_eq!(grid.chunk_center(PointN([1, -2, 0])), PointN([40.0, -80.0, 0.0]));
    }

    #[test]
    fn chunk_contains_every_position_mapped_to_it() {
        let grid: ChunkGrid<()> = ChunkGrid::new(ChunkGridConfig::with_chunk_size(8.0)).unwrap();

        for p in [
            PointN([4.0, -4.0, 12.0]),
            PointN([3.999, 0.0, -12.0]),
            PointN([-100.5, 7.25, 0.0]),
        ]
        .iter()
        {
            let key = grid.chunk_key_containing(*p);
            assert!(grid.chunk_extent(key).contains(*p), "{:?} not in chunk {:?}", p, key);
        }
    }

    #[test]
    fn chunks_are_created_and_dropped_with_their_entries() {
        let mut grid = ChunkGrid::default();
        let a = PointN([1.0, 1.0, 1.0]);
        let b = PointN([2.0, 1.0, 1.0]);
        let c = PointN([-50.0, 1.0, 1.0]);

        grid.insert(a, 'a');
        grid.insert(b, 'b');
        grid.insert(c, 'c');
        assert_eq!(grid.num_chunks(), 2);
        assert_eq!(grid.len(), 3);

        let key = grid.chunk_key_containing(c);
        assert_eq!(grid.chunk(key).map(|o| o.len()), Some(1));
        assert_eq!(grid.remove(c), Some('c'));
        assert!(grid.chunk(key).is_none());
        assert_eq!(grid.num_chunks(), 1);

        assert_eq!(grid.remove(a), Some('a'));
        assert_eq!(grid.num_chunks(), 1);
        assert_eq!(grid.remove(b), Some('b'));
        assert_eq!(grid.num_chunks(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn remove_from_missing_chunk_is_noop() {
        let mut grid: ChunkGrid<u8> = ChunkGrid::default();
        grid.insert(Point3f::ZERO, 1);

        assert_eq!(grid.remove(PointN([1000.0, 0.0, 0.0])), None);
        assert_eq!(grid.remove(PointN([1.0, 0.0, 0.0])), None);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.num_chunks(), 1);
    }

    #[test]
    fn get_mut_modifies_stored_payload() {
        let mut grid = ChunkGrid::default();
        let p = PointN([33.0, -7.0, 12.5]);
        grid.insert(p, 1);

        *grid.get_mut(p).unwrap() += 10;

        assert_eq!(grid.get(p), Some(&11));
        assert_eq!(grid.get(PointN([33.0, -7.0, 12.0])), None);
    }

    #[test]
    fn empty_grid_queries_are_empty() {
        let grid: ChunkGrid<u32> = ChunkGrid::default();
        let mut out = Vec::new();

        grid.query_shape(&|_: &Extent3f| true, &mut out);
        assert!(out.is_empty());
        grid.collect_all(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn thousand_points_over_many_chunks() {
        let mut rng = StdRng::seed_from_u64(40);
        let region = Extent3f::from_center_and_half_extent(Point3f::ZERO, 100.0);
        let points = random_points_in_extent(&mut rng, &region, 1000);

        let mut grid = ChunkGrid::default();
        for (i, p) in points.iter().enumerate() {
            grid.insert(*p, i);
        }

        assert_eq!(grid.len(), 1000);
        assert!(grid.num_chunks() > 100 && grid.num_chunks() <= 125);

        let mut found = Vec::new();
        grid.query_shape(&|cube: &Extent3f| cube.intersects(&region), &mut found);
        assert_eq!(found.len(), 1000);
        let unique: HashSet<usize> = found.into_iter().cloned().collect();
        assert_eq!(unique.len(), 1000);

        let mut all = Vec::new();
        grid.collect_all(&mut all);
        assert_eq!(all.len(), grid.len());
    }

    #[test]
    fn mutable_queries_span_chunks() {
        let mut grid = ChunkGrid::new(ChunkGridConfig::with_chunk_size(4.0)).unwrap();
        for i in 0..10 {
            grid.insert(PointN([i as f32 * 3.0, 0.0, 0.0]), 0u32);
        }
        assert!(grid.num_chunks() > 1);

        let mut hits = Vec::new();
        grid.query_shape_mut(
            &|cube: &Extent3f| cube.minimum.x() <= 12.0 && cube.max().x() >= 6.0,
            &mut hits,
        );
        for hit in hits {
            *hit += 1;
        }

        let marked: Vec<f32> = (0..10)
            .map(|i| PointN([i as f32 * 3.0, 0.0, 0.0]))
            .filter(|p| grid.get(*p) == Some(&1))
            .map(|p| p.x())
            .collect();
        assert_eq!(marked, vec![6.0, 9.0, 12.0]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result: Result<ChunkGrid<()>, _> = ChunkGrid::new(ChunkGridConfig::with_chunk_size(0.0));

        assert_eq!(result.err(), Some(ConfigError::InvalidChunkSize(0.0)));
    }
}
