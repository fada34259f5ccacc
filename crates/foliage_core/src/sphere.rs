use crate::PointN;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Sphere<N> {
    pub center: PointN<N>,
    pub radius: f32,
}

pub type Sphere3 = Sphere<[f32; 3]>;

impl<N> Sphere<N> {
    #[inline]
    pub fn new(center: PointN<N>, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl<N> Clone for Sphere<N>
where
    PointN<N>: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            center: self.center.clone(),
            radius: self.radius,
        }
    }
}
impl<N> Copy for Sphere<N> where PointN<N>: Copy {}
