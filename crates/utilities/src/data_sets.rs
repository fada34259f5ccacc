use foliage_core::prelude::*;

use itertools::iproduct;
use rand::Rng;

// These can't live in the crates that use them because of this issue with dev-dependency cycles:
// https://github.com/rust-lang/cargo/issues/6765

/// `count` points drawn uniformly from the half-open box `[extent.minimum, extent.max())`.
pub fn random_points_in_extent(
    rng: &mut impl Rng,
    extent: &Extent3f,
    count: usize,
) -> Vec<Point3f> {
    (0..count)
        .map(|_| {
            let t: Point3f = PointN([rng.gen(), rng.gen(), rng.gen()]);

            extent.minimum + extent.shape * t
        })
        .collect()
}

/// Every point `extent.minimum + spacing * [i, j, k]` that lies inside of `extent`, in x-major order.
pub fn lattice_points(extent: &Extent3f, spacing: f32) -> Vec<Point3f> {
    assert!(spacing > 0.0);

    let steps = (extent.shape / spacing).floor().as_3i();

    iproduct!(0..=steps.z(), 0..=steps.y(), 0..=steps.x())
        .map(|(z, y, x)| extent.minimum + Point3f::from(PointN([x, y, z])) * spacing)
        .collect()
}

/// A small cloud of points hugging the faces, edges, and center planes of `cube`, where naive octant routing and closed
/// box tests are most likely to disagree.
pub fn boundary_points(cube: &Extent3f) -> Vec<Point3f> {
    let min = cube.minimum;
    let max = cube.max();
    let center = cube.center();

    iproduct!(
        [min.x(), center.x(), max.x()].iter(),
        [min.y(), center.y(), max.y()].iter(),
        [min.z(), center.z(), max.z()].iter()
    )
    .map(|(&x, &y, &z)| PointN([x, y, z]))
    .collect()
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
