//! The `SpatialOctree` is a dynamic index of `(position, payload)` entries in a bounded cubic region of continuous space.
//!
//! Unlike a fixed-depth lattice octree, the tree shape follows the data: a node subdivides only when it would hold more than
//! one entry, and only while it is larger than `OctreeConfig::min_half_extent`. Removing entries merges nodes back together,
//! so the tree never keeps branches for space that has been emptied.
//!
//! # Payload Identity
//!
//! The octree owns its payloads. Queries return references to them, and mutation through `get_mut` or the `_mut` queries
//! is visible to every later reader. When several systems must share one object, store a handle (such as a `slab` key) as
//! the payload.
//!
//! # Preconditions
//!
//! Positions must be finite. Entries outside of the root cube are still stored and can be found by `get`, `remove`, and
//! `collect_all`, but shape queries are only guaranteed to find entries inside of the root cube.
//!
//! ```
//! use foliage_core::prelude::*;
//! use foliage_storage::prelude::*;
//!
//! let mut octree = SpatialOctree::with_edge_length(Point3f::ZERO, 16.0);
//! octree.insert(PointN([1.0, 2.0, 3.0]), 'a');
//! octree.insert(PointN([-1.0, 2.0, 3.0]), 'b');
//!
//! *octree.get_mut(PointN([1.0, 2.0, 3.0])).unwrap() = 'c';
//! assert_eq!(octree.get(PointN([1.0, 2.0, 3.0])), Some(&'c'));
//!
//! assert_eq!(octree.remove(PointN([-1.0, 2.0, 3.0])), Some('b'));
//! assert_eq!(octree.len(), 1);
//! assert!(octree.root().is_leaf());
//! ```

pub mod node;

pub use node::{Entry, OctreeNode, OctreeVisitor};

use crate::{OctreeConfig, ShapeFilter, ShapeQuery};

use foliage_core::prelude::*;

#[derive(Clone, Debug)]
pub struct SpatialOctree<T> {
    root: OctreeNode<T>,
    config: OctreeConfig,
}

impl<T> SpatialOctree<T> {
    /// Make an empty octree whose root is the cube centered at `center` with edges of `edge_length`.
    ///
    /// # Panics
    ///
    /// If `center` is not finite, `edge_length` is not positive and finite, or `config` is invalid.
    pub fn new(center: Point3f, edge_length: f32, config: OctreeConfig) -> Self {
        assert!(center.is_finite(), "octree center {:?} is not finite", center);
        assert!(
            edge_length.is_finite() && edge_length > 0.0,
            "octree edge length {} must be positive and finite",
            edge_length
        );
        if let Err(e) = config.validate() {
            panic!("{}", e);
        }

        Self {
            root: OctreeNode::new_leaf(center, edge_length / 2.0),
            config,
        }
    }

    /// Same as `new`, using the default `OctreeConfig`.
    pub fn with_edge_length(center: Point3f, edge_length: f32) -> Self {
        Self::new(center, edge_length, OctreeConfig::default())
    }

    #[inline]
    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    #[inline]
    pub fn root(&self) -> &OctreeNode<T> {
        &self.root
    }

    /// The cube spanned by the root node.
    #[inline]
    pub fn bounds(&self) -> Extent3f {
        self.root.bounds()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.root.count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert `payload` at `position`. Duplicate positions are stored as separate entries.
    pub fn insert(&mut self, position: Point3f, payload: T) {
        debug_assert!(position.is_finite(), "{:?} is not finite", position);

        self.root
            .insert(position, payload, self.config.min_half_extent);
    }

    /// Remove the first entry found at exactly `position` and return its payload.
    pub fn remove(&mut self, position: Point3f) -> Option<T> {
        self.root.remove(position)
    }

    /// The payload of the first entry found at exactly `position`.
    pub fn get(&self, position: Point3f) -> Option<&T> {
        self.root.get(position)
    }

    pub fn get_mut(&mut self, position: Point3f) -> Option<&mut T> {
        self.root.get_mut(position)
    }

    /// Remove every entry, keeping the root cube and configuration.
    pub fn clear(&mut self) {
        self.root = OctreeNode::new_leaf(self.root.center(), self.root.half_extent());
    }

    /// Visit every node in preorder.
    pub fn visit(&self, visitor: &mut impl OctreeVisitor<T>) -> VisitStatus {
        self.root.visit(visitor)
    }
}

impl<T> ShapeQuery<T> for SpatialOctree<T> {
    #[inline]
    fn query_shape<'a, F>(&'a self, filter: &F, out: &mut Vec<&'a T>)
    where
        F: ShapeFilter + ?Sized,
    {
        self.root.query(filter, out)
    }

    #[inline]
    fn query_shape_mut<'a, F>(&'a mut self, filter: &F, out: &mut Vec<&'a mut T>)
    where
        F: ShapeFilter + ?Sized,
    {
        self.root.query_mut(filter, out)
    }

    #[inline]
    fn collect_all<'a>(&'a self, out: &mut Vec<&'a T>) {
        self.root.collect(out)
    }

    #[inline]
    fn collect_all_mut<'a>(&'a mut self, out: &mut Vec<&'a mut T>) {
        self.root.collect_mut(out)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisitStatus {
    /// Continue traversing this branch.
    Continue,
    /// Stop traversing this branch.
    Stop,
    /// Stop traversing the entire tree. No further nodes will be visited.
    ExitEarly,
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
