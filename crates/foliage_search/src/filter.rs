//! `ShapeFilter`s for the shapes supported by range queries.
//!
//! Every filter here is exact for points. The sphere and extent filters are also exact for cubes. The thick ray filter
//! over-approximates at cubes: it pads the cube by the ray's radius and casts the ray at the padded box, which accepts
//! some corner regions that are farther than the radius from the ray. Only the entries themselves get the exact distance
//! test.

use foliage_core::prelude::*;
use foliage_storage::ShapeFilter;

/// Accepts everything within `sphere.radius` of `sphere.center`, boundary included. A negative radius accepts nothing.
#[derive(Clone, Copy, Debug)]
pub struct SphereFilter {
    pub sphere: Sphere3,
}

impl SphereFilter {
    pub fn new(center: Point3f, radius: f32) -> Self {
        Self {
            sphere: Sphere3::new(center, radius),
        }
    }
}

impl ShapeFilter for SphereFilter {
    #[inline]
    fn intersects_cube(&self, cube: &Extent3f) -> bool {
        let radius = self.sphere.radius;

        radius >= 0.0 && cube.l2_distance_squared_to_point(self.sphere.center) <= radius * radius
    }
}

/// Accepts everything inside of the closed `extent`.
#[derive(Clone, Copy, Debug)]
pub struct ExtentFilter {
    pub extent: Extent3f,
}

impl ExtentFilter {
    pub fn new(extent: Extent3f) -> Self {
        Self { extent }
    }
}

impl ShapeFilter for ExtentFilter {
    #[inline]
    fn intersects_cube(&self, cube: &Extent3f) -> bool {
        cube.intersects(&self.extent)
    }
}

/// Accepts everything within `radius` of the segment of `ray` between distances `0` and `max_distance`, i.e. a capsule. A
/// negative radius or maximum distance accepts nothing.
#[derive(Clone, Copy, Debug)]
pub struct ThickRayFilter {
    pub ray: Ray3,
    pub max_distance: f32,
    pub radius: f32,
}

impl ThickRayFilter {
    pub fn new(ray: Ray3, max_distance: f32, radius: f32) -> Self {
        Self {
            ray,
            max_distance,
            radius,
        }
    }
}

impl ShapeFilter for ThickRayFilter {
    #[inline]
    fn intersects_cube(&self, cube: &Extent3f) -> bool {
        // Padding by a negative radius would invert the box.
        self.radius >= 0.0
            && self
                .ray
                .cast_at_extent(&cube.padded(self.radius))
                .map_or(false, |toi| toi <= self.max_distance)
    }

    #[inline]
    fn contains_point(&self, p: Point3f) -> bool {
        self.radius >= 0.0
            && self.max_distance >= 0.0
            && self.ray.segment_distance_squared(p, self.max_distance) <= self.radius * self.radius
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
    fn sphere_includes_boundary() {
        let filter = SphereFilter::new(Point3f::ZERO, 2.0);

        assert!(filter.contains_point(PointN([2.0, 0.0, 0.0])));
        assert!(!filter.contains_point(PointN([2.0, 0.1, 0.0])));

        let touching = Extent3f::from_min_and_shape(PointN([2.0, -1.0, -1.0]), Point3f::fill(2.0));
        assert!(filter.intersects_cube(&touching));
        assert!(!filter.intersects_cube(&(touching + PointN([0.5, 0.0, 0.0]))));
    }

    #[test]
    fn negative_radius_sphere_is_empty() {
        let filter = SphereFilter::new(Point3f::ZERO, -1.0);

        assert!(!filter.contains_point(Point3f::ZERO));
    }

    #[test]
    fn extent_filter_is_closed() {
        let filter = ExtentFilter::new(Extent3f::from_min_and_shape(Point3f::ZERO, Point3f::fill(1.0)));

        assert!(filter.contains_point(Point3f::fill(1.0)));
        assert!(filter.contains_point(Point3f::ZERO));
        assert!(!filter.contains_point(PointN([1.0, 1.0, 1.01])));
    }

    #[test]
    fn thick_ray_points_are_tested_against_capsule() {
        let ray = Ray3::new(Point3f::ZERO, PointN([1.0, 0.0, 0.0]));
        let filter = ThickRayFilter::new(ray, 10.0, 1.0);

        // Beside the segment.
        assert!(filter.contains_point(PointN([5.0, 1.0, 0.0])));
        assert!(!filter.contains_point(PointN([5.0, 1.01, 0.0])));
        // The padded box would accept this corner, but the capsule does not.
        assert!(!filter.contains_point(PointN([5.0, 0.9, 0.9])));
        // Rounded ends.
        assert!(filter.contains_point(PointN([10.5, 0.5, 0.0])));
        assert!(!filter.contains_point(PointN([11.0, 0.5, 0.0])));
        assert!(filter.contains_point(PointN([-0.5, 0.5, 0.0])));
        assert!(!filter.contains_point(PointN([-1.0, 0.5, 0.0])));
    }

    #[test]
    fn negative_radius_thick_ray_is_empty() {
        let ray = Ray3::new(Point3f::ZERO, PointN([1.0, 0.0, 0.0]));
        let filter = ThickRayFilter::new(ray, 10.0, -1.0);

        assert!(!filter.contains_point(PointN([5.0, 0.0, 0.0])));
        // Padded by -1 this cube would be inverted, but still "hit" by the slab test.
        let cube = Extent3f::from_center_and_half_extent(PointN([5.0, 0.0, 0.0]), 4.0);
        assert!(!filter.intersects_cube(&cube));
    }

    #[test]
    fn thick_ray_cubes_are_limited_by_max_distance() {
        let ray = Ray3::new(Point3f::ZERO, PointN([0.0, 0.0, 1.0]));
        let filter = ThickRayFilter::new(ray, 5.0, 0.5);

        let near = Extent3f::from_center_and_half_extent(PointN([0.0, 0.8, 3.0]), 0.5);
        let far = Extent3f::from_center_and_half_extent(PointN([0.0, 0.0, 7.0]), 0.5);
        let beside = Extent3f::from_center_and_half_extent(PointN([0.0, 2.0, 3.0]), 0.5);
        let behind = Extent3f::from_center_and_half_extent(PointN([0.0, 0.0, -2.0]), 0.5);

        assert!(filter.intersects_cube(&near));
        assert!(!filter.intersects_cube(&far));
        assert!(!filter.intersects_cube(&beside));
        assert!(!filter.intersects_cube(&behind));
    }
}
