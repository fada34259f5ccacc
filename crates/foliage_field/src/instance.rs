use foliage_core::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single clump of foliage standing on a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct FoliageInstance {
    pub position: Point3f,
    /// The normal of the surface the instance stands on. The instance grows along this direction.
    pub normal: Point3f,
    /// The time at which the instance caught fire, if it has.
    pub burn_time: Option<f32>,
}

impl FoliageInstance {
    pub fn new(position: Point3f, normal: Point3f) -> Self {
        Self {
            position,
            normal,
            burn_time: None,
        }
    }

    #[inline]
    pub fn is_burning(&self) -> bool {
        self.burn_time.is_some()
    }

    /// Sets the instance on fire at `time`. Returns `false` if it was already burning, in which case the original ignition
    /// time is kept.
    pub fn ignite(&mut self, time: f32) -> bool {
        if self.is_burning() {
            return false;
        }
        self.burn_time = Some(time);

        true
    }

    /// The shortest rotation taking `Point3f::UP` to the instance's normal, as a unit quaternion `[x, y, z, w]`. A zero
    /// normal gives the identity.
    pub fn orientation(&self) -> [f32; 4] {
        if self.normal.norm_squared() == 0.0 {
            return [0.0, 0.0, 0.0, 1.0];
        }

        let up = Point3f::UP;
        let normal = self.normal.normalized();
        let cos = up.dot(&normal);

        if cos < -1.0 + 1e-6 {
            // Upside down. Any axis perpendicular to UP works.
            return [1.0, 0.0, 0.0, 0.0];
        }

        let axis = up.cross(&normal);
        let w = 1.0 + cos;
        let norm = (axis.norm_squared() + w * w).sqrt();

        [axis.x() / norm, axis.y() / norm, axis.z() / norm, w / norm]
    }

    /// The column-major rigid transform placing a unit instance mesh at `position` with its up axis along `normal`.
    pub fn object_to_world(&self) -> [[f32; 4]; 4] {
        let [x, y, z, w] = self.orientation();
        let p = self.position;

        [
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y + w * z),
                2.0 * (x * z - w * y),
                0.0,
            ],
            [
                2.0 * (x * y - w * z),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z + w * x),
                0.0,
            ],
            [
                2.0 * (x * z + w * y),
                2.0 * (y * z - w * x),
                1.0 - 2.0 * (x * x + y * y),
                0.0,
            ],
            [p.x(), p.y(), p.z(), 1.0],
        ]
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
