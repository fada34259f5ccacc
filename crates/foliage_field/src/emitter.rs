//! Scattering foliage over the surface of a triangle mesh.
//!
//! Triangles are chosen with probability proportional to their area, and points are uniform within each triangle, so the
//! resulting density is uniform over the whole surface. Every sample carries the face normal of its triangle.

use crate::{FoliageField, InstanceKey};

use foliage_core::prelude::*;

use rand::{
    distributions::{Distribution, WeightedIndex},
    rngs::StdRng,
    Rng, SeedableRng,
};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("triangle {triangle} refers to vertex {vertex}, but there are only {num_vertices} vertices")]
    VertexOutOfBounds {
        triangle: usize,
        vertex: u32,
        num_vertices: usize,
    },
}

/// An indexed triangle mesh. Every index is checked to be in bounds on construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
    positions: Vec<Point3f>,
    triangles: Vec<[u32; 3]>,
}

impl TriangleMesh {
    pub fn new(positions: Vec<Point3f>, triangles: Vec<[u32; 3]>) -> Result<Self, MeshError> {
        for (triangle, indices) in triangles.iter().enumerate() {
            for &vertex in indices.iter() {
                if vertex as usize >= positions.len() {
                    return Err(MeshError::VertexOutOfBounds {
                        triangle,
                        vertex,
                        num_vertices: positions.len(),
                    });
                }
            }
        }

        Ok(Self {
            positions,
            triangles,
        })
    }

    #[inline]
    pub fn positions(&self) -> &[Point3f] {
        &self.positions
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// The corners of triangle `t`.
    #[inline]
    pub fn triangle_corners(&self, t: usize) -> [Point3f; 3] {
        let [a, b, c] = self.triangles[t];

        [
            self.positions[a as usize],
            self.positions[b as usize],
            self.positions[c as usize],
        ]
    }

    pub fn triangle_area(&self, t: usize) -> f32 {
        let [a, b, c] = self.triangle_corners(t);

        (b - a).cross(&(c - a)).norm() / 2.0
    }

    pub fn surface_area(&self) -> f32 {
        (0..self.triangles.len()).map(|t| self.triangle_area(t)).sum()
    }
}

/// A point on a mesh surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSample {
    pub position: Point3f,
    /// Unit normal of the triangle the sample was taken from, following its winding order.
    pub normal: Point3f,
}

/// Draws `count` points uniformly distributed over the surface of `mesh`. Returns nothing if the mesh has no area.
pub fn sample_surface(mesh: &TriangleMesh, count: usize, rng: &mut impl Rng) -> Vec<SurfaceSample> {
    if count == 0 {
        return Vec::new();
    }

    let areas: Vec<f32> = (0..mesh.triangles().len())
        .map(|t| mesh.triangle_area(t))
        .collect();
    let triangle_dist = match WeightedIndex::new(&areas) {
        Ok(dist) => dist,
        Err(e) => {
            debug!("can't sample mesh surface: {}", e);
            return Vec::new();
        }
    };

    (0..count)
        .map(|_| {
            let [a, b, c] = mesh.triangle_corners(triangle_dist.sample(rng));
            let (u, v) = random_barycentric(rng);

            SurfaceSample {
                position: a * u + b * v + c * (1.0 - u - v),
                normal: (b - a).cross(&(c - a)).normalized(),
            }
        })
        .collect()
}

/// Uniform barycentric weights for two of the corners. Samples from the far half of the unit square are reflected back
/// into the triangle.
fn random_barycentric(rng: &mut impl Rng) -> (f32, f32) {
    let u: f32 = rng.gen();
    let v: f32 = rng.gen();

    if u + v > 1.0 {
        (1.0 - u, 1.0 - v)
    } else {
        (u, v)
    }
}

/// Placement of an emitter's mesh in the world. Points are scaled, then rotated, then translated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmitterTransform {
    pub translation: Point3f,
    /// A unit quaternion `[x, y, z, w]`.
    pub rotation: [f32; 4],
    /// Per-axis scale. Every component must be non-zero.
    pub scale: Point3f,
}

impl Default for EmitterTransform {
    fn default() -> Self {
        Self {
            translation: Point3f::ZERO,
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: Point3f::fill(1.0),
        }
    }
}

impl EmitterTransform {
    pub fn from_translation(translation: Point3f) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    #[inline]
    fn rotate(&self, v: Point3f) -> Point3f {
        let [x, y, z, w] = self.rotation;
        let q = PointN([x, y, z]);
        let t = q.cross(&v) * 2.0;

        v + t * w + q.cross(&t)
    }

    #[inline]
    pub fn transform_point(&self, p: Point3f) -> Point3f {
        self.rotate(p * self.scale) + self.translation
    }

    /// Transforms a surface normal by the inverse transpose of the linear part, so it stays perpendicular to the
    /// transformed surface under non-uniform scale. The result has unit length.
    #[inline]
    pub fn transform_normal(&self, n: Point3f) -> Point3f {
        self.rotate(n.map_components_binary(&self.scale, |c, s| c / s))
            .normalized()
    }
}

/// Scatters a fixed number of instances over a mesh placed in the world by `transform`.
///
/// Emission is deterministic for a given `seed`. Emitting again first removes everything the emitter added before, so
/// changing the mesh, count, or placement and calling `emit` replaces the old instances.
#[derive(Clone, Debug)]
pub struct SurfaceEmitter {
    pub mesh: TriangleMesh,
    pub count: usize,
    pub seed: u64,
    pub transform: EmitterTransform,
    emitted: Vec<Point3f>,
}

impl SurfaceEmitter {
    pub fn new(mesh: TriangleMesh, count: usize) -> Self {
        Self {
            mesh,
            count,
            seed: 0,
            transform: EmitterTransform::default(),
            emitted: Vec::new(),
        }
    }

    /// Positions of the instances currently owned by this emitter.
    #[inline]
    pub fn emitted(&self) -> &[Point3f] {
        &self.emitted
    }

    /// Replace this emitter's instances in `field` with a fresh scattering. Returns the keys of the new instances.
    pub fn emit(&mut self, field: &mut FoliageField) -> Vec<InstanceKey> {
        self.clear(field);

        let mut rng = StdRng::seed_from_u64(self.seed);
        let samples = sample_surface(&self.mesh, self.count, &mut rng);

        let mut keys = Vec::with_capacity(samples.len());
        for SurfaceSample { position, normal } in samples {
            let position = self.transform.transform_point(position);
            keys.push(field.add(position, self.transform.transform_normal(normal)));
            self.emitted.push(position);
        }
        info!(count = keys.len(), "emitted foliage");

        keys
    }

    /// Remove every instance this emitter added to `field`.
    pub fn clear(&mut self, field: &mut FoliageField) {
        for position in self.emitted.drain(..) {
            field.remove(position);
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

    /// A 10x10 quad in the XZ plane, wound so the normal points up, plus a zero-area sliver.
    fn ground_quad() -> TriangleMesh {
        TriangleMesh::new(
            vec![
                PointN([0.0, 0.0, 0.0]),
                PointN([10.0, 0.0, 0.0]),
                PointN([10.0, 0.0, 10.0]),
                PointN([0.0, 0.0, 10.0]),
                PointN([20.0, 0.0, 0.0]),
            ],
            vec![[0, 2, 1], [0, 3, 2], [0, 1, 4]],
        )
        .unwrap()
    }

    #[test]
    fn out_of_bounds_index_is_rejected() {
        let result = TriangleMesh::new(vec![Point3f::ZERO; 3], vec![[0, 1, 2], [1, 2, 3]]);

        assert_eq!(
            result,
            Err(MeshError::VertexOutOfBounds {
                triangle: 1,
                vertex: 3,
                num_vertices: 3
            })
        );
    }

    #[test]
    fn area_ignores_degenerate_triangles() {
        let mesh = ground_quad();

        assert_eq!(mesh.triangle_area(0), 50.0);
        assert_eq!(mesh.triangle_area(2), 0.0);
        assert_eq!(mesh.surface_area(), 100.0);
    }

    #[test]
    fn samples_lie_on_the_surface_with_its_normal() {
        let mesh = ground_quad();
        let mut rng = StdRng::seed_from_u64(3);

        let samples = sample_surface(&mesh, 200, &mut rng);

        assert_eq!(samples.len(), 200);
        let square = Extent3f::from_min_and_shape(Point3f::ZERO, PointN([10.0, 0.0, 10.0]));
        for sample in samples.iter() {
            assert!(square.padded(1e-4).contains(sample.position), "{:?}", sample);
            assert_eq!(sample.normal, Point3f::UP);
        }
    }

    #[test]
    fn empty_inputs_give_no_samples() {
        let mut rng = StdRng::seed_from_u64(0);

        assert!(sample_surface(&ground_quad(), 0, &mut rng).is_empty());
        assert!(sample_surface(&TriangleMesh::default(), 10, &mut rng).is_empty());

        let flat = TriangleMesh::new(vec![Point3f::ZERO; 3], vec![[0, 1, 2]]).unwrap();
        assert!(sample_surface(&flat, 10, &mut rng).is_empty());
    }

    #[test]
    fn emission_is_deterministic_and_replaces_old_instances() {
        let mut field = FoliageField::default();
        let mut emitter = SurfaceEmitter::new(ground_quad(), 50);
        emitter.transform = EmitterTransform::from_translation(PointN([100.0, 5.0, 0.0]));

        emitter.emit(&mut field);
        let first: Vec<Point3f> = emitter.emitted().to_vec();
        assert_eq!(field.len(), 50);
        assert!(first.iter().all(|p| p.y() == 5.0 && p.x() >= 100.0));

        emitter.emit(&mut field);
        assert_eq!(field.len(), 50);
        assert_eq!(emitter.emitted(), &first[..]);

        emitter.count = 20;
        emitter.seed = 9;
        let keys = emitter.emit(&mut field);
        assert_eq!(keys.len(), 20);
        assert_eq!(field.len(), 20);

        emitter.clear(&mut field);
        assert!(field.is_empty());
        assert!(emitter.emitted().is_empty());
    }

    fn assert_close(a: Point3f, b: Point3f) {
        assert!(a.l2_distance_squared(&b) < 1e-8, "{:?} != {:?}", a, b);
    }

    #[test]
    fn rotated_and_scaled_emitter_moves_positions_and_normals() {
        let half = std::f32::consts::FRAC_1_SQRT_2;
        let mut field = FoliageField::default();
        let mut emitter = SurfaceEmitter::new(ground_quad(), 50);
        // A quarter turn about +X takes +Y to +Z.
        emitter.transform = EmitterTransform {
            translation: Point3f::ZERO,
            rotation: [half, 0.0, 0.0, half],
            scale: PointN([2.0, 1.0, 1.0]),
        };

        emitter.emit(&mut field);

        assert_eq!(field.len(), 50);
        for (_, instance) in field.iter() {
            let p = instance.position;
            assert!(p.z().abs() < 1e-4, "{:?}", p);
            assert!(p.x() >= 0.0 && p.x() <= 20.0 + 1e-4, "{:?}", p);
            assert!(p.y() <= 1e-4 && p.y() >= -10.0 - 1e-4, "{:?}", p);
            assert_close(instance.normal, PointN([0.0, 0.0, 1.0]));
        }
    }

    #[test]
    fn normals_stay_perpendicular_under_non_uniform_scale() {
        let transform = EmitterTransform {
            scale: PointN([2.0, 1.0, 1.0]),
            ..Default::default()
        };
        let tangent: Point3f = PointN([1.0, -1.0, 0.0]);
        let normal: Point3f = PointN([1.0, 1.0, 0.0]);

        let scaled_tangent = transform.transform_point(tangent);
        let scaled_normal = transform.transform_normal(normal);

        assert!(scaled_tangent.dot(&scaled_normal).abs() < 1e-6);
        assert!((scaled_normal.norm() - 1.0).abs() < 1e-6);
    }
}
