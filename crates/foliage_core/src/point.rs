#[macro_use]
pub mod point_traits;

mod point3;

#[cfg(feature = "glam")]
mod glam_conversions;
#[cfg(feature = "mint")]
mod mint_conversions;

pub use point3::*;
pub use point_traits::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An N-dimensional point, which is usually just a primitive array of type `N`. World positions are `Point3f`, and the
/// integer coordinates of grid cells are `Point3i`. It is most convenient to construct points as:
///
/// ```
/// use foliage_core::PointN;
///
/// let position = PointN([1.5, 0.0, -2.0]);
/// let cell = PointN([1, 0, -2]);
/// ```
///
/// Points support basic linear algebraic operations such as addition, subtraction, scalar multiplication, and scalar
/// division.
///
/// ```
/// use foliage_core::prelude::*;
///
/// let p1 = PointN([1.0, 2.0, 3.0]);
/// let p2 = PointN([3.0, 4.0, 5.0]);
///
/// assert_eq!(p1 + p2, PointN([4.0, 6.0, 8.0]));
/// assert_eq!(p1 - p2, PointN([-2.0, -2.0, -2.0]));
/// assert_eq!(p1 * 2.0, PointN([2.0, 4.0, 6.0]));
/// assert_eq!(p2 / 2.0, PointN([1.5, 2.0, 2.5]));
/// ```
///
/// Equality on `Point3f` is exact floating point equality on every component. This is what the spatial index uses to match
/// keys on removal and lookup.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PointN<N>(pub N);
