//! The query primitive shared by every spatial index in this crate.
//!
//! A query is described by a `ShapeFilter` and runs in two tiers. While descending the tree, each child node's cube is
//! tested with `ShapeFilter::intersects_cube`, which must be conservative: it may only return `false` when no point of the
//! cube can be in the shape. At the leaves, each stored position is tested with `ShapeFilter::contains_point`, which must
//! be exact.
//!
//! Any closure `Fn(&Extent3f) -> bool` is a `ShapeFilter`, in which case the exact test is the same closure applied to the
//! zero-volume extent at the entry's position:
//!
//! ```
//! use foliage_core::prelude::*;
//! use foliage_storage::prelude::*;
//!
//! let mut octree = SpatialOctree::with_edge_length(Point3f::ZERO, 8.0);
//! octree.insert(PointN([1.0, 1.0, 1.0]), "near");
//! octree.insert(PointN([-3.0, 2.0, 1.0]), "far");
//!
//! let query = Extent3f::from_min_and_max(Point3f::ZERO, Point3f::fill(2.0));
//! let mut found = Vec::new();
//! octree.query_shape(&|cube: &Extent3f| cube.intersects(&query), &mut found);
//!
//! assert_eq!(found, vec![&"near"]);
//! ```

use foliage_core::prelude::*;

/// A shape that can be tested against the cubes of octree nodes and the exact positions of entries.
pub trait ShapeFilter {
    /// Returns `false` only if no point in `cube` could be inside of the shape.
    fn intersects_cube(&self, cube: &Extent3f) -> bool;

    /// Returns `true` iff `p` is inside of the shape.
    #[inline]
    fn contains_point(&self, p: Point3f) -> bool {
        self.intersects_cube(&Extent3f::from_point(p))
    }
}

impl<F> ShapeFilter for F
where
    F: Fn(&Extent3f) -> bool,
{
    #[inline]
    fn intersects_cube(&self, cube: &Extent3f) -> bool {
        (self)(cube)
    }
}

/// A container of `(position, payload)` entries that supports shape queries.
///
/// Results are appended to `out` in an unspecified order, so the same buffer can be reused across calls or across several
/// indexes.
pub trait ShapeQuery<T> {
    /// Append a reference to every payload whose position satisfies `filter`.
    fn query_shape<'a, F>(&'a self, filter: &F, out: &mut Vec<&'a T>)
    where
        F: ShapeFilter + ?Sized;

    /// Same as `query_shape`, but the payloads can be modified in place.
    fn query_shape_mut<'a, F>(&'a mut self, filter: &F, out: &mut Vec<&'a mut T>)
    where
        F: ShapeFilter + ?Sized;

    /// Append a reference to every payload.
    fn collect_all<'a>(&'a self, out: &mut Vec<&'a T>);

    fn collect_all_mut<'a>(&'a mut self, out: &mut Vec<&'a mut T>);
}
