use super::{point_traits::*, PointN};

use core::ops::{Add, Div, Mul, Sub};

/// A 3-dimensional point with scalar type `T`.
pub type Point3<T> = PointN<[T; 3]>;
/// A 3-dimensional point with scalar type `i32`.
pub type Point3i = PointN<[i32; 3]>;
/// A 3-dimensional point with scalar type `f32`.
pub type Point3f = PointN<[f32; 3]>;

impl<T> Point3<T>
where
    T: Copy,
{
    #[inline]
    pub fn fill(value: T) -> Self {
        PointN([value; 3])
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }
}

impl<T> Point3<T>
where
    T: Copy + Mul<Output = T> + Sub<Output = T>,
{
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self([
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        ])
    }
}

impl Point3f {
    pub const UP: Self = PointN([0.0, 1.0, 0.0]);

    /// Rounds each component to the nearest integer, choosing the even integer when a component lies exactly halfway
    /// between two integers. This is the rounding used to assign positions to grid cells.
    #[inline]
    pub fn round_ties_even(&self) -> Self {
        self.map_components_unary(f32::round_ties_even)
    }

    #[inline]
    pub fn floor(&self) -> Self {
        self.map_components_unary(|c| c.floor())
    }

    #[inline]
    pub fn abs(&self) -> Self {
        self.map_components_unary(|c| c.abs())
    }

    #[inline]
    pub fn as_3i(&self) -> Point3i {
        PointN([self.x() as i32, self.y() as i32, self.z() as i32])
    }

    /// Returns `true` iff no component is infinite or NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite() && self.z().is_finite()
    }

    /// Returns the unit vector pointing in the same direction. The result is not finite for the zero vector.
    #[inline]
    pub fn normalized(&self) -> Self {
        *self / self.norm()
    }
}

impl<T> MapComponents for Point3<T>
where
    T: Copy,
{
    type Scalar = T;

    #[inline]
    fn map_components_unary(&self, f: impl Fn(Self::Scalar) -> Self::Scalar) -> Self {
        PointN([f(self.x()), f(self.y()), f(self.z())])
    }

    #[inline]
    fn map_components_binary(
        &self,
        other: &Self,
        f: impl Fn(Self::Scalar, Self::Scalar) -> Self::Scalar,
    ) -> Self {
        PointN([
            f(self.x(), other.x()),
            f(self.y(), other.y()),
            f(self.z(), other.z()),
        ])
    }
}

impl<T> GetComponent for Point3<T>
where
    T: Copy,
{
    type Scalar = T;

    #[inline]
    fn at(&self, component_index: usize) -> T {
        self.0[component_index]
    }
}

impl<T> ConstZero for Point3<T>
where
    T: ConstZero,
{
    const ZERO: Self = PointN([T::ZERO; 3]);
}

impl<T> DotProduct for Point3<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    type Scalar = T;

    #[inline]
    fn dot(&self, other: &Self) -> Self::Scalar {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }
}

impl Distance for Point3f {
    type Scalar = f32;

    #[inline]
    fn l1_distance(&self, other: &Self) -> f32 {
        let diff = (*self - *other).abs();

        diff.x() + diff.y() + diff.z()
    }

    #[inline]
    fn l2_distance_squared(&self, other: &Self) -> f32 {
        let diff = *self - *other;

        diff.dot(&diff)
    }
}

impl Distance for Point3i {
    type Scalar = i32;

    #[inline]
    fn l1_distance(&self, other: &Self) -> i32 {
        let diff = *self - *other;

        diff.x().abs() + diff.y().abs() + diff.z().abs()
    }

    #[inline]
    fn l2_distance_squared(&self, other: &Self) -> i32 {
        let diff = *self - *other;

        diff.dot(&diff)
    }
}

impl NormSquared for Point3i {
    #[inline]
    fn norm_squared(&self) -> f32 {
        self.dot(self) as f32
    }
}

impl NormSquared for Point3f {
    #[inline]
    fn norm_squared(&self) -> f32 {
        self.dot(self)
    }
}

impl<T> From<[T; 3]> for Point3<T> {
    #[inline]
    fn from(components: [T; 3]) -> Self {
        PointN(components)
    }
}

impl From<Point3i> for Point3f {
    #[inline]
    fn from(p: Point3i) -> Self {
        PointN([p.x() as f32, p.y() as f32, p.z() as f32])
    }
}

impl_componentwise_ops!(Point3i, i32);
impl_componentwise_ops!(Point3f, f32);
impl_float_div!(Point3f, f32);

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
