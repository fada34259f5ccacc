use crate::{point::point_traits::*, Extent3f, Point3f};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A half-line starting at `origin` and extending forever along the unit vector `dir`. Distances along the ray ("time of
/// impact") are therefore world distances.
///
/// With the `serde` feature, a deserialized direction is normalized the same way as in `Ray3::new`, and a zero or
/// non-finite direction is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(try_from = "UncheckedRay3")
)]
pub struct Ray3 {
    pub origin: Point3f,
    dir: Point3f,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct UncheckedRay3 {
    origin: Point3f,
    dir: Point3f,
}

#[cfg(feature = "serde")]
impl core::convert::TryFrom<UncheckedRay3> for Ray3 {
    type Error = &'static str;

    fn try_from(ray: UncheckedRay3) -> Result<Self, Self::Error> {
        if !ray.origin.is_finite() {
            return Err("ray origin must be finite");
        }
        if !ray.dir.is_finite() || ray.dir.norm_squared() == 0.0 {
            return Err("ray direction must be finite and non-zero");
        }

        Ok(Self::new(ray.origin, ray.dir))
    }
}

impl Ray3 {
    /// Construct a ray from `origin` along `dir`. `dir` is normalized, so it must be finite and non-zero.
    #[inline]
    pub fn new(origin: Point3f, dir: Point3f) -> Self {
        debug_assert!(origin.is_finite());
        debug_assert!(dir.is_finite() && dir.norm_squared() > 0.0);

        Self {
            origin,
            dir: dir.normalized(),
        }
    }

    /// The unit direction of the ray.
    #[inline]
    pub fn dir(&self) -> Point3f {
        self.dir
    }

    #[inline]
    pub fn point_at(&self, toi: f32) -> Point3f {
        self.origin + self.dir * toi
    }

    /// Returns the distance along the ray at which it first touches `extent`, or `None` if it never does. A ray starting
    /// inside of the extent hits at distance 0. Intersections behind the origin are not considered.
    pub fn cast_at_extent(&self, extent: &Extent3f) -> Option<f32> {
        let max = extent.max();
        let mut toi_enter = std::f32::NEG_INFINITY;
        let mut toi_exit = std::f32::INFINITY;

        for i in 0..3 {
            let origin = self.origin.at(i);
            let dir = self.dir.at(i);
            let (lo, hi) = (extent.minimum.at(i), max.at(i));

            if dir == 0.0 {
                // Parallel to this slab, so the origin has to be inside of it.
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv_dir = 1.0 / dir;
            let mut t0 = (lo - origin) * inv_dir;
            let mut t1 = (hi - origin) * inv_dir;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            toi_enter = toi_enter.max(t0);
            toi_exit = toi_exit.min(t1);
            if toi_enter > toi_exit {
                return None;
            }
        }

        if toi_exit < 0.0 {
            return None;
        }

        Some(toi_enter.max(0.0))
    }

    /// The squared distance from `p` to the closest point on the segment of this ray between distances `0` and `max_toi`.
    #[inline]
    pub fn segment_distance_squared(&self, p: Point3f, max_toi: f32) -> f32 {
        let toi = (p - self.origin).dot(&self.dir).max(0.0).min(max_toi.max(0.0));

        self.point_at(toi).l2_distance_squared(&p)
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
