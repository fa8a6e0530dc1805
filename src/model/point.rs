//! Points: the immutable leaf values of the model.

use std::fmt;

use super::Dim;

const AXIS_LABELS: [&str; 3] = ["X", "Y", "Z"];

/// A sample with `N` coordinates of scalar type `T`.
///
/// Only `N` in `1..=3` is used by the model, through the [`Point1D`],
/// [`Point2D`] and [`Point3D`] aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<T, const N: usize> {
    coords: [T; N],
}

pub type Point1D<T> = Point<T, 1>;
pub type Point2D<T> = Point<T, 2>;
pub type Point3D<T> = Point<T, 3>;

/// Rejects, at compile time, any `N` outside `1..=3`.
const fn assert_dims<const N: usize>() {
    assert!(N >= 1 && N <= 3, "points have 1 to 3 coordinates");
}

impl<T: Copy, const N: usize> Point<T, N> {
    /// Build a point from its coordinates.
    ///
    /// `N` must be 1, 2 or 3; any other arity fails to compile:
    ///
    /// ```compile_fail
    /// use containers_model::Point;
    ///
    /// let _ = Point::<i32, 0>::from_array([]);
    /// ```
    ///
    /// ```compile_fail
    /// use containers_model::Point;
    ///
    /// let _ = Point::<i32, 4>::from_array([1, 2, 3, 4]);
    /// ```
    pub fn from_array(coords: [T; N]) -> Self {
        const { assert_dims::<N>() };
        Self { coords }
    }

    pub fn coords(&self) -> &[T; N] {
        &self.coords
    }

    /// First coordinate; every point has one.
    pub fn x(&self) -> T {
        self.coords[0]
    }
}

impl<T: Copy> Point<T, 1> {
    pub fn new(x: T) -> Self {
        Self { coords: [x] }
    }
}

impl<T: Copy> Point<T, 2> {
    pub fn new(x: T, y: T) -> Self {
        Self { coords: [x, y] }
    }

    pub fn y(&self) -> T {
        self.coords[1]
    }
}

impl<T: Copy> Point<T, 3> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { coords: [x, y, z] }
    }

    pub fn y(&self) -> T {
        self.coords[1]
    }

    pub fn z(&self) -> T {
        self.coords[2]
    }
}

/// All-zero coordinates.
impl<T: Default, const N: usize> Default for Point<T, N> {
    fn default() -> Self {
        const { assert_dims::<N>() };
        Self { coords: std::array::from_fn(|_| T::default()) }
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Point<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, v)) in AXIS_LABELS.iter().zip(&self.coords).enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{label}:{v}")?;
        }
        Ok(())
    }
}

/// A borrowed point whose dimensionality is only known at run time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointRef<'a, T> {
    D1(&'a Point1D<T>),
    D2(&'a Point2D<T>),
    D3(&'a Point3D<T>),
}

impl<T> PointRef<'_, T> {
    pub fn dim(&self) -> Dim {
        match self {
            PointRef::D1(_) => Dim::D1,
            PointRef::D2(_) => Dim::D2,
            PointRef::D3(_) => Dim::D3,
        }
    }

    pub fn coords(&self) -> &[T] {
        match self {
            PointRef::D1(p) => &p.coords,
            PointRef::D2(p) => &p.coords,
            PointRef::D3(p) => &p.coords,
        }
    }
}

impl<T: fmt::Display> fmt::Display for PointRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointRef::D1(p) => fmt::Display::fmt(p, f),
            PointRef::D2(p) => fmt::Display::fmt(p, f),
            PointRef::D3(p) => fmt::Display::fmt(p, f),
        }
    }
}
