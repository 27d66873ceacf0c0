use core::fmt::Debug;
use core::ops::{Add, Index, IndexMut, Mul, Sub};

use num_traits::Float;

use super::point::{Point, PointNorm};

/// Point with dimensions of constant generic size N and of generic type T
/// (Implemented as Newtype Pattern on an array
/// see book or https://www.worthe-it.co.za/blog/2020-10-31-newtype-pattern-in-rust.html)
/// This type only interacts with the library through
/// the point traits, so you are free to use your own
/// Point/Coord/Vec structures instead by implementing the (small) traits.
#[derive(Debug, Copy, Clone)]
pub struct PointN<T, const N: usize>([T; N]);

/// The three dimensional point most curves in this crate are built from.
pub type Point3<T> = PointN<T, 3>;

impl<T, const N: usize> PointN<T, N> {
    pub fn new(array: [T; N]) -> Self {
        PointN(array)
    }

    /// Returns the coordinates as a plain array, e.g. for handing them across an FFI boundary
    pub fn to_array(self) -> [T; N] {
        self.0
    }
}

impl<T, const N: usize> From<[T; N]> for PointN<T, N> {
    fn from(array: [T; N]) -> Self {
        PointN(array)
    }
}

/// Initialize with the Default value for the underlying type
impl<T: Default + Copy, const N: usize> Default for PointN<T, N> {
    fn default() -> Self {
        PointN([T::default(); N])
    }
}

impl<T, const N: usize> PartialEq for PointN<T, N>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Index<usize> for PointN<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for PointN<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const N: usize> Add for PointN<T, N>
where
    T: Add<Output = T> + Copy,
{
    type Output = Self;

    fn add(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] + other.0[i];
        }
        res
    }
}

impl<T, const N: usize> Sub for PointN<T, N>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Self;

    fn sub(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] - other.0[i];
        }
        res
    }
}

impl<T, const N: usize> Mul<T> for PointN<T, N>
where
    // The multiplication is done by multiplying T * T => T for every axis
    T: Mul<T, Output = T> + Copy,
{
    type Output = PointN<T, N>;

    fn mul(self, rhs: T) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] * rhs;
        }
        res
    }
}

impl<T, const N: usize> IntoIterator for PointN<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<Self::Item, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.0)
    }
}

impl<T, const N: usize> Point for PointN<T, N>
where
    T: Float + Default + Debug,
{
    type Scalar = T;
    const DIM: usize = N;
}

impl<T, const N: usize> PointNorm for PointN<T, N>
where
    T: Float + Default + Debug,
{
    fn squared_norm(&self) -> T {
        self.0.iter().fold(T::zero(), |acc, x| acc + *x * *x)
    }
}
