//! Convenience range queries for any `ShapeQuery` container, which includes both `SpatialOctree` and `ChunkGrid`.
//!
//! ```
//! use foliage_core::prelude::*;
//! use foliage_search::prelude::*;
//! use foliage_storage::prelude::*;
//!
//! let mut grid = ChunkGrid::default();
//! grid.insert(PointN([0.0, 0.0, 0.0]), 1);
//! grid.insert(PointN([30.0, 0.0, 0.0]), 2);
//! grid.insert(PointN([0.0, 0.0, 60.0]), 3);
//!
//! assert_eq!(grid.query_radius(PointN([25.0, 0.0, 0.0]), 6.0), vec![&2]);
//!
//! let ray = Ray3::new(Point3f::ZERO, PointN([1.0, 0.0, 0.0]));
//! let mut hit = grid.query_thick_ray(&ray, 100.0, 1.0);
//! hit.sort();
//! assert_eq!(hit, vec![&1, &2]);
//!
//! for value in grid.query_extent_mut(&Extent3f::from_min_and_max(Point3f::fill(-1.0), PointN([1.0, 1.0, 80.0]))) {
//!     *value *= 10;
//! }
//! assert_eq!(grid.get(PointN([0.0, 0.0, 60.0])), Some(&30));
//! ```

use crate::{ExtentFilter, SphereFilter, ThickRayFilter};

use foliage_core::prelude::*;
use foliage_storage::ShapeQuery;

/// Sphere, box, and thick ray queries. Implemented for every `ShapeQuery`.
///
/// Results are unordered. Each matching entry appears exactly once.
pub trait RangeQueries<T>: ShapeQuery<T> {
    /// Every payload within `radius` of `center`.
    fn query_radius(&self, center: Point3f, radius: f32) -> Vec<&T> {
        let mut out = Vec::new();
        self.query_shape(&SphereFilter::new(center, radius), &mut out);

        out
    }

    fn query_radius_mut(&mut self, center: Point3f, radius: f32) -> Vec<&mut T> {
        let mut out = Vec::new();
        self.query_shape_mut(&SphereFilter::new(center, radius), &mut out);

        out
    }

    /// Every payload inside of the closed `extent`.
    fn query_extent(&self, extent: &Extent3f) -> Vec<&T> {
        let mut out = Vec::new();
        self.query_shape(&ExtentFilter::new(*extent), &mut out);

        out
    }

    fn query_extent_mut(&mut self, extent: &Extent3f) -> Vec<&mut T> {
        let mut out = Vec::new();
        self.query_shape_mut(&ExtentFilter::new(*extent), &mut out);

        out
    }

    /// Every payload within `radius` of `ray`, up to `max_distance` along the ray.
    fn query_thick_ray(&self, ray: &Ray3, max_distance: f32, radius: f32) -> Vec<&T> {
        let mut out = Vec::new();
        self.query_shape(&ThickRayFilter::new(*ray, max_distance, radius), &mut out);

        out
    }

    fn query_thick_ray_mut(&mut self, ray: &Ray3, max_distance: f32, radius: f32) -> Vec<&mut T> {
        let mut out = Vec::new();
        self.query_shape_mut(&ThickRayFilter::new(*ray, max_distance, radius), &mut out);

        out
    }

    /// Every payload.
    fn get_all(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.collect_all(&mut out);

        out
    }

    fn get_all_mut(&mut self) -> Vec<&mut T> {
        let mut out = Vec::new();
        self.collect_all_mut(&mut out);

        out
    }
}

impl<T, Q> RangeQueries<T> for Q where Q: ShapeQuery<T> {}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
