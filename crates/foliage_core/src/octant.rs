//! Octant arithmetic for cubic nodes described by a center and a half extent.
//!
//! Children are numbered `0..8` in the binary format `0bZYX`, where a set bit means the child lies on the positive side of
//! the parent's center along that axis.

use crate::{Point3f, PointN};

/// The sign pattern of each child octant's offset from its parent's center, indexed like `octant_containing_point`.
pub const OCTANT_SIGNS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
];

/// Returns the index of the child octant of a node at `center` that owns `p`.
///
/// A point lying exactly on the center plane of an axis goes to the negative side. A NaN component also compares as not
/// greater and therefore always selects the negative side; callers must only pass finite points.
#[inline]
pub fn octant_containing_point(center: Point3f, p: Point3f) -> usize {
    (p.x() > center.x()) as usize
        | ((p.y() > center.y()) as usize) << 1
        | ((p.z() > center.z()) as usize) << 2
}

/// The center of child `octant` of a node at `parent_center` with `parent_half_extent`. The child's half extent is half
/// the parent's.
#[inline]
pub fn child_center(parent_center: Point3f, parent_half_extent: f32, octant: usize) -> Point3f {
    parent_center + PointN(OCTANT_SIGNS[octant]) * (parent_half_extent / 2.0)
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

    use crate::ConstZero;

    #[test]
    fn octant_index_matches_sign_pattern() {
        let center = Point3f::ZERO;

        for (octant, signs) in OCTANT_SIGNS.iter().enumerate() {
            let p = PointN(*signs) * 0.25;
            assert_eq!(octant_containing_point(center, p), octant);
        }
    }

    #[test]
    fn ties_go_to_negative_octant() {
        let center = Point3f::fill(1.0);

        assert_eq!(octant_containing_point(center, center), 0);
        assert_eq!(octant_containing_point(center, PointN([2.0, 1.0, 1.0])), 1);
        assert_eq!(octant_containing_point(center, PointN([1.0, 1.0, 2.0])), 4);
    }

    #[test]
    fn child_centers_are_in_their_own_octant() {
        let center = PointN([3.0, -1.0, 0.5]);
        let half_extent = 2.0;

        for octant in 0..8 {
            let child = child_center(center, half_extent, octant);
            assert_eq!(octant_containing_point(center, child), octant);
            assert_eq!((child - center).abs(), Point3f::fill(1.0));
        }
    }
}
