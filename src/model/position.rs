//! Positions: ordered runs of same-dimensionality points.
//!
//! A [`PointRun`] is the typed body (its `N` fixes the dimensionality at
//! compile time); [`Position`] is the closed sum over the three runs that a
//! [`Matrix`](super::Matrix) stores. Variant equality is a [`Dim`] tag
//! comparison.
//!
//! A run is either *present* (it owns a possibly empty list of points) or
//! *absent* (built with [`PointRun::absent`]). An absent run has no
//! `points_count`, contributes zero to aggregate counts, and rejects every
//! indexed access with [`Error::IndexOutOfRange`].

use std::fmt;

use super::{Point, PointRef};
use crate::{Error, Result};

/// Dimensionality tag of a point or position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dim {
    D1,
    D2,
    D3,
}

impl Dim {
    /// Number of coordinates per point.
    pub fn components(self) -> usize {
        match self {
            Dim::D1 => 1,
            Dim::D2 => 2,
            Dim::D3 => 3,
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.components())
    }
}

// ============================================================================
// PointRun
// ============================================================================

/// An ordered run of `N`-dimensional points, or an absent one.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRun<T, const N: usize> {
    points: Option<Vec<Point<T, N>>>,
}

pub type Position1D<T> = PointRun<T, 1>;
pub type Position2D<T> = PointRun<T, 2>;
pub type Position3D<T> = PointRun<T, 3>;

impl<T, const N: usize> PointRun<T, N> {
    pub fn new(points: impl IntoIterator<Item = Point<T, N>>) -> Self {
        Self { points: Some(points.into_iter().collect()) }
    }

    /// A present run holding no points.
    pub fn empty() -> Self {
        Self { points: Some(Vec::new()) }
    }

    /// A run that was never given a point list.
    pub fn absent() -> Self {
        Self { points: None }
    }

    pub fn is_absent(&self) -> bool {
        self.points.is_none()
    }

    /// Number of points, or `None` for an absent run.
    pub fn points_count(&self) -> Option<usize> {
        self.points.as_ref().map(Vec::len)
    }

    /// Number of points, counting an absent run as zero.
    pub fn len(&self) -> usize {
        self.points_count().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn points(&self) -> &[Point<T, N>] {
        self.points.as_deref().unwrap_or(&[])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point<T, N>> {
        self.points().iter()
    }

    pub fn get(&self, index: usize) -> Result<&Point<T, N>> {
        let points = self.points();
        points.get(index).ok_or(Error::IndexOutOfRange { index, len: points.len() })
    }
}

impl<T, const N: usize> Default for PointRun<T, N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, const N: usize> FromIterator<Point<T, N>> for PointRun<T, N> {
    fn from_iter<I: IntoIterator<Item = Point<T, N>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T, const N: usize> From<Vec<Point<T, N>>> for PointRun<T, N> {
    fn from(points: Vec<Point<T, N>>) -> Self {
        Self { points: Some(points) }
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for PointRun<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points().iter().enumerate() {
            writeln!(f, "\t\t\tPoint{i} [{p}]")?;
        }
        Ok(())
    }
}

// ============================================================================
// Position
// ============================================================================

/// A point run of any of the three dimensionalities.
#[derive(Debug, Clone, PartialEq)]
pub enum Position<T> {
    D1(Position1D<T>),
    D2(Position2D<T>),
    D3(Position3D<T>),
}

impl<T> Position<T> {
    /// An absent position of the given dimensionality.
    pub fn absent(dim: Dim) -> Self {
        match dim {
            Dim::D1 => Position::D1(PointRun::absent()),
            Dim::D2 => Position::D2(PointRun::absent()),
            Dim::D3 => Position::D3(PointRun::absent()),
        }
    }

    /// A present, empty position of the given dimensionality.
    pub fn empty(dim: Dim) -> Self {
        match dim {
            Dim::D1 => Position::D1(PointRun::empty()),
            Dim::D2 => Position::D2(PointRun::empty()),
            Dim::D3 => Position::D3(PointRun::empty()),
        }
    }

    pub fn dim(&self) -> Dim {
        match self {
            Position::D1(_) => Dim::D1,
            Position::D2(_) => Dim::D2,
            Position::D3(_) => Dim::D3,
        }
    }

    pub fn points_count(&self) -> Option<usize> {
        match self {
            Position::D1(run) => run.points_count(),
            Position::D2(run) => run.points_count(),
            Position::D3(run) => run.points_count(),
        }
    }

    /// Number of points, counting an absent position as zero.
    pub fn len(&self) -> usize {
        self.points_count().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_absent(&self) -> bool {
        self.points_count().is_none()
    }

    pub fn get(&self, index: usize) -> Result<PointRef<'_, T>> {
        Ok(match self {
            Position::D1(run) => PointRef::D1(run.get(index)?),
            Position::D2(run) => PointRef::D2(run.get(index)?),
            Position::D3(run) => PointRef::D3(run.get(index)?),
        })
    }
}

impl<T> From<Position1D<T>> for Position<T> {
    fn from(run: Position1D<T>) -> Self {
        Position::D1(run)
    }
}

impl<T> From<Position2D<T>> for Position<T> {
    fn from(run: Position2D<T>) -> Self {
        Position::D2(run)
    }
}

impl<T> From<Position3D<T>> for Position<T> {
    fn from(run: Position3D<T>) -> Self {
        Position::D3(run)
    }
}

impl<T: fmt::Display> fmt::Display for Position<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::D1(run) => fmt::Display::fmt(run, f),
            Position::D2(run) => fmt::Display::fmt(run, f),
            Position::D3(run) => fmt::Display::fmt(run, f),
        }
    }
}
