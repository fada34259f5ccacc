use crate::{point::point_traits::*, Point3f, PointN};

use core::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3-dimensional extent with scalar type `T`.
pub type Extent3<T> = ExtentN<[T; 3]>;
/// A 3-dimensional extent with scalar type `f32`. This is the axis-aligned bounding box (AABB) used for range queries and
/// for the bounds of octree nodes.
pub type Extent3f = ExtentN<[f32; 3]>;

/// An N-dimensional axis-aligned box, represented by a minimum point and a shape. For `f32` extents, the box is closed: both
/// `minimum` and `minimum + shape` are contained. A box with a zero shape is degenerate and contains exactly one point.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ExtentN<N> {
    /// The least point contained in the extent.
    pub minimum: PointN<N>,
    /// The length of each dimension.
    pub shape: PointN<N>,
}

// A few of these traits could be derived. But it seems that derive will not help the compiler infer trait bounds as well.

impl<N> Clone for ExtentN<N>
where
    PointN<N>: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            minimum: self.minimum.clone(),
            shape: self.shape.clone(),
        }
    }
}
impl<N> Copy for ExtentN<N> where PointN<N>: Copy {}

impl<N> PartialEq for ExtentN<N>
where
    PointN<N>: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.minimum.eq(&other.minimum) && self.shape.eq(&other.shape)
    }
}

impl<N> ExtentN<N> {
    /// The default representation of an extent as the minimum point and shape.
    #[inline]
    pub fn from_min_and_shape(minimum: PointN<N>, shape: PointN<N>) -> Self {
        Self { minimum, shape }
    }
}

impl Extent3f {
    /// The extent with `min` and `max` as opposite corners. Components of `max` less than `min` give an empty shape.
    #[inline]
    pub fn from_min_and_max(minimum: Point3f, max: Point3f) -> Self {
        let shape = (max - minimum).map_components_unary(|c| c.max(0.0));

        Self::from_min_and_shape(minimum, shape)
    }

    /// The cube centered at `center` with edges of length `2 * half_extent`.
    #[inline]
    pub fn from_center_and_half_extent(center: Point3f, half_extent: f32) -> Self {
        Self::from_min_and_shape(
            center - Point3f::fill(half_extent),
            Point3f::fill(2.0 * half_extent),
        )
    }

    /// The zero-volume extent containing only `p`.
    #[inline]
    pub fn from_point(p: Point3f) -> Self {
        Self::from_min_and_shape(p, Point3f::ZERO)
    }

    /// The greatest point contained in the extent.
    #[inline]
    pub fn max(&self) -> Point3f {
        self.minimum + self.shape
    }

    #[inline]
    pub fn center(&self) -> Point3f {
        self.minimum + self.shape / 2.0
    }

    /// Returns `true` iff the extent has zero volume in every dimension, i.e. it is a single point.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.shape == Point3f::ZERO
    }

    /// Returns `true` iff the point `p` is contained in this (closed) extent.
    #[inline]
    pub fn contains(&self, p: Point3f) -> bool {
        let max = self.max();

        (0..3).all(|i| self.minimum.at(i) <= p.at(i) && p.at(i) <= max.at(i))
    }

    /// Returns `true` iff `self` and `other` share at least one point. Touching faces count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        let self_max = self.max();
        let other_max = other.max();

        (0..3).all(|i| self.minimum.at(i) <= other_max.at(i) && other.minimum.at(i) <= self_max.at(i))
    }

    /// Returns a new extent that's been padded on all borders by `pad_amount`.
    #[inline]
    pub fn padded(&self, pad_amount: f32) -> Self {
        Self::from_min_and_shape(
            self.minimum - Point3f::fill(pad_amount),
            self.shape + Point3f::fill(2.0 * pad_amount),
        )
    }

    /// The point in the extent closest to `p`.
    #[inline]
    pub fn clamp(&self, p: Point3f) -> Point3f {
        let max = self.max();

        PointN([
            p.x().max(self.minimum.x()).min(max.x()),
            p.y().max(self.minimum.y()).min(max.y()),
            p.z().max(self.minimum.z()).min(max.z()),
        ])
    }

    /// The squared Euclidean distance from `p` to the closest point of the extent. Zero if `p` is contained.
    #[inline]
    pub fn l2_distance_squared_to_point(&self, p: Point3f) -> f32 {
        self.clamp(p).l2_distance_squared(&p)
    }
}

impl<T> Add<PointN<T>> for ExtentN<T>
where
    PointN<T>: Add<Output = PointN<T>>,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: PointN<T>) -> Self::Output {
        ExtentN {
            minimum: self.minimum + rhs,
            shape: self.shape,
        }
    }
}

impl<T> Sub<PointN<T>> for ExtentN<T>
where
    PointN<T>: Sub<Output = PointN<T>>,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: PointN<T>) -> Self::Output {
        ExtentN {
            minimum: self.minimum - rhs,
            shape: self.shape,
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

    #[test]
    fn closed_extent_contains_its_boundary() {
        let extent = Extent3f::from_min_and_shape(Point3f::ZERO, Point3f::fill(2.0));

        assert!(extent.contains(Point3f::ZERO));
        assert!(extent.contains(Point3f::fill(2.0)));
        assert!(extent.contains(PointN([1.0, 2.0, 0.5])));
        assert!(!extent.contains(PointN([1.0, 2.01, 0.5])));
    }

    #[test]
    fn touching_extents_intersect() {
        let a = Extent3f::from_min_and_shape(Point3f::ZERO, Point3f::fill(1.0));
        let b = Extent3f::from_min_and_shape(PointN([1.0, 0.0, 0.0]), Point3f::fill(1.0));
        let c = Extent3f::from_min_and_shape(PointN([1.5, 0.0, 0.0]), Point3f::fill(1.0));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn degenerate_extent_intersects_like_a_point() {
        let cube = Extent3f::from_center_and_half_extent(Point3f::ZERO, 1.0);

        assert!(Extent3f::from_point(Point3f::fill(1.0)).intersects(&cube));
        assert!(!Extent3f::from_point(Point3f::fill(1.0001)).intersects(&cube));
        assert!(Extent3f::from_point(Point3f::ZERO).is_point());
    }

    #[test]
    fn distance_to_point_is_zero_inside() {
        let cube = Extent3f::from_center_and_half_extent(Point3f::ZERO, 1.0);

        assert_eq!(cube.l2_distance_squared_to_point(PointN([0.5, -0.5, 0.0])), 0.0);
        assert_eq!(cube.l2_distance_squared_to_point(PointN([3.0, 0.0, 0.0])), 4.0);
        assert_eq!(cube.l2_distance_squared_to_point(PointN([2.0, 2.0, 1.0])), 2.0);
    }

    #[test]
    fn padding_grows_every_side() {
        let cube = Extent3f::from_center_and_half_extent(Point3f::ZERO, 1.0).padded(0.5);

        assert_eq!(cube.minimum, Point3f::fill(-1.5));
        assert_eq!(cube.max(), Point3f::fill(1.5));
    }
}
