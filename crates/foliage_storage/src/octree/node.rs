//! The recursive node type of a `SpatialOctree`.
//!
//! Every node is a cube described by a center and a half extent. A node is either a leaf, holding its entries directly, or
//! a branch that owns exactly eight children and no entries. The children are numbered as in `foliage_core::octant`.
//!
//! Nodes split lazily: a leaf only becomes a branch when a second entry arrives and the node is still large enough to
//! subdivide. They also merge lazily: a branch whose subtree shrinks to a single entry pulls that entry up and drops its
//! children.

use crate::{ShapeFilter, VisitStatus};

use foliage_core::prelude::*;

use std::array;
use tracing::trace;

/// A stored payload and the position it was inserted with.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<T> {
    pub position: Point3f,
    pub payload: T,
}

#[derive(Clone, Debug)]
pub struct OctreeNode<T> {
    center: Point3f,
    half_extent: f32,
    // Number of entries in this subtree.
    count: usize,
    // Always empty for branches.
    entries: Vec<Entry<T>>,
    children: Option<Box<[OctreeNode<T>; 8]>>,
}

impl<T> OctreeNode<T> {
    pub(crate) fn new_leaf(center: Point3f, half_extent: f32) -> Self {
        Self {
            center,
            half_extent,
            count: 0,
            entries: Vec::new(),
            children: None,
        }
    }

    #[inline]
    pub fn center(&self) -> Point3f {
        self.center
    }

    /// Half of the edge length of this node's cube.
    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// The number of entries in this node's subtree.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The closed cube covered by this node. Every entry routed into this subtree lies inside of it, as long as the entry
    /// lies inside of the root's cube.
    #[inline]
    pub fn bounds(&self) -> Extent3f {
        Extent3f::from_center_and_half_extent(self.center, self.half_extent)
    }

    /// The entries stored directly in this node. Empty for branches.
    #[inline]
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    #[inline]
    pub fn children(&self) -> Option<&[OctreeNode<T>; 8]> {
        self.children.as_deref()
    }

    pub(crate) fn insert(&mut self, position: Point3f, payload: T, min_half_extent: f32) {
        self.count += 1;

        if self.children.is_none() && (self.count == 1 || self.half_extent < min_half_extent) {
            self.entries.push(Entry { position, payload });
            return;
        }

        if self.children.is_none() {
            self.split(min_half_extent);
        }

        let octant = octant_containing_point(self.center, position);
        if let Some(children) = self.children.as_mut() {
            children[octant].insert(position, payload, min_half_extent);
        }
    }

    fn split(&mut self, min_half_extent: f32) {
        trace!(center = ?self.center, half_extent = self.half_extent, "splitting octree node");

        let center = self.center;
        let half_extent = self.half_extent;
        let mut children: Box<[OctreeNode<T>; 8]> = Box::new(array::from_fn(|octant| {
            OctreeNode::new_leaf(child_center(center, half_extent, octant), half_extent / 2.0)
        }));

        for Entry { position, payload } in self.entries.drain(..) {
            children[octant_containing_point(center, position)].insert(
                position,
                payload,
                min_half_extent,
            );
        }

        self.children = Some(children);
    }

    pub(crate) fn remove(&mut self, position: Point3f) -> Option<T> {
        let payload = match self.children.as_mut() {
            None => {
                let index = self.entries.iter().position(|e| e.position == position)?;

                self.entries.swap_remove(index).payload
            }
            Some(children) => {
                children[octant_containing_point(self.center, position)].remove(position)?
            }
        };

        self.count -= 1;

        if self.count == 1 && self.children.is_some() {
            self.collapse();
        }

        Some(payload)
    }

    fn collapse(&mut self) {
        let mut children = match self.children.take() {
            Some(children) => children,
            None => return,
        };

        trace!(center = ?self.center, half_extent = self.half_extent, "collapsing octree node");

        for child in children.iter_mut() {
            child.drain_entries_into(&mut self.entries);
        }
        debug_assert_eq!(self.entries.len(), self.count);
    }

    fn drain_entries_into(&mut self, out: &mut Vec<Entry<T>>) {
        out.append(&mut self.entries);
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                child.drain_entries_into(out);
            }
        }
    }

    pub(crate) fn get(&self, position: Point3f) -> Option<&T> {
        match &self.children {
            None => self
                .entries
                .iter()
                .find(|e| e.position == position)
                .map(|e| &e.payload),
            Some(children) => children[octant_containing_point(self.center, position)].get(position),
        }
    }

    pub(crate) fn get_mut(&mut self, position: Point3f) -> Option<&mut T> {
        match &mut self.children {
            None => self
                .entries
                .iter_mut()
                .find(|e| e.position == position)
                .map(|e| &mut e.payload),
            Some(children) => {
                children[octant_containing_point(self.center, position)].get_mut(position)
            }
        }
    }

    pub(crate) fn query<'a, F>(&'a self, filter: &F, out: &mut Vec<&'a T>)
    where
        F: ShapeFilter + ?Sized,
    {
        match &self.children {
            None => out.extend(
                self.entries
                    .iter()
                    .filter(|e| filter.contains_point(e.position))
                    .map(|e| &e.payload),
            ),
            Some(children) => {
                for child in children.iter() {
                    if child.count > 0 && filter.intersects_cube(&child.bounds()) {
                        child.query(filter, out);
                    }
                }
            }
        }
    }

    pub(crate) fn query_mut<'a, F>(&'a mut self, filter: &F, out: &mut Vec<&'a mut T>)
    where
        F: ShapeFilter + ?Sized,
    {
        match &mut self.children {
            None => out.extend(
                self.entries
                    .iter_mut()
                    .filter(|e| filter.contains_point(e.position))
                    .map(|e| &mut e.payload),
            ),
            Some(children) => {
                for child in children.iter_mut() {
                    if child.count > 0 && filter.intersects_cube(&child.bounds()) {
                        child.query_mut(filter, out);
                    }
                }
            }
        }
    }

    pub(crate) fn collect<'a>(&'a self, out: &mut Vec<&'a T>) {
        out.extend(self.entries.iter().map(|e| &e.payload));
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect(out);
            }
        }
    }

    pub(crate) fn collect_mut<'a>(&'a mut self, out: &mut Vec<&'a mut T>) {
        out.extend(self.entries.iter_mut().map(|e| &mut e.payload));
        if let Some(children) = &mut self.children {
            for child in children.iter_mut() {
                child.collect_mut(out);
            }
        }
    }

    /// Visit this node and its descendants in preorder.
    pub fn visit(&self, visitor: &mut impl OctreeVisitor<T>) -> VisitStatus {
        let status = visitor.visit_node(self);
        if status != VisitStatus::Continue {
            return status;
        }

        if let Some(children) = &self.children {
            for child in children.iter() {
                if child.visit(visitor) == VisitStatus::ExitEarly {
                    return VisitStatus::ExitEarly;
                }
            }
        }

        VisitStatus::Continue
    }
}

pub trait OctreeVisitor<T> {
    fn visit_node(&mut self, node: &OctreeNode<T>) -> VisitStatus;
}

impl<T, F> OctreeVisitor<T> for F
where
    F: FnMut(&OctreeNode<T>) -> VisitStatus,
{
    #[inline]
    fn visit_node(&mut self, node: &OctreeNode<T>) -> VisitStatus {
        (self)(node)
    }
}
