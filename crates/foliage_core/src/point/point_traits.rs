pub trait GetComponent {
    type Scalar: Copy;

    /// Returns the component specified by index. I.e. X = 0, Y = 1, Z = 2.
    fn at(&self, component_index: usize) -> Self::Scalar;
}

pub trait MapComponents {
    type Scalar;

    /// Returns the point after applying `f` component-wise.
    fn map_components_unary(&self, f: impl Fn(Self::Scalar) -> Self::Scalar) -> Self;

    /// Returns the point after applying `f` component-wise to both `self` and `other` in parallel.
    fn map_components_binary(
        &self,
        other: &Self,
        f: impl Fn(Self::Scalar, Self::Scalar) -> Self::Scalar,
    ) -> Self;
}

pub trait Distance {
    type Scalar: Copy;

    /// The L1 distance between points.
    fn l1_distance(&self, other: &Self) -> Self::Scalar;

    /// The square of the L2 (Euclidean) distance between points.
    fn l2_distance_squared(&self, other: &Self) -> Self::Scalar;
}

pub trait NormSquared {
    fn norm_squared(&self) -> f32;
}

pub trait Norm {
    fn norm(&self) -> f32;
}

impl<T> Norm for T
where
    T: NormSquared,
{
    #[inline]
    fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }
}

pub trait DotProduct {
    type Scalar: Copy;

    /// The vector dot product.
    fn dot(&self, other: &Self) -> Self::Scalar;
}

// `Zero` trait doesn't allow associated constants for zero because of bignums.
pub trait ConstZero: Copy {
    const ZERO: Self;
}

impl ConstZero for i32 {
    const ZERO: i32 = 0;
}

impl ConstZero for f32 {
    const ZERO: f32 = 0.0;
}

macro_rules! impl_componentwise_ops {
    ($t:ty, $scalar:ty) => {
        impl Add for $t {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                self.map_components_binary(&rhs, |c1, c2| c1 + c2)
            }
        }

        impl Sub for $t {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self.map_components_binary(&rhs, |c1, c2| c1 - c2)
            }
        }

        impl Mul<$scalar> for $t {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $scalar) -> Self {
                self.map_components_unary(|c| rhs * c)
            }
        }

        impl Mul<$t> for $scalar {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: $t) -> $t {
                rhs * self
            }
        }

        impl Mul<Self> for $t {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self.map_components_binary(&rhs, |c1, c2| c1 * c2)
            }
        }
    };
}

macro_rules! impl_float_div {
    ($t:ty, $scalar:ty) => {
        impl Div<$scalar> for $t {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $scalar) -> Self {
                self.map_components_unary(|c| c / rhs)
            }
        }
    };
}
