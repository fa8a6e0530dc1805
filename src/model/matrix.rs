//! Matrix: an ordered set of positions sharing one dimensionality.
//!
//! Construction validates the whole position list in one pass, using the
//! first position as the reference:
//!
//! 1. every position must carry the reference's [`Dim`] tag
//!    ([`Error::PositionType`]);
//! 2. when the reference is 3D, every position must hold as many points as
//!    the reference ([`Error::Matrix3DPointCount`]). Absent positions count
//!    as zero points here.
//!
//! The first violation aborts construction. An empty matrix is valid.

use std::fmt;

use tracing::{debug, trace};

use super::{Dim, Position};
use crate::{Error, Result};

/// An ordered, validated list of positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    positions: Vec<Position<T>>,
}

impl<T> Matrix<T> {
    /// Build a matrix, rejecting mixed dimensionalities and unequal 3D runs.
    pub fn new<I, P>(positions: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position<T>>,
    {
        let positions: Vec<Position<T>> = positions.into_iter().map(Into::into).collect();
        validate(&positions)?;
        trace!(positions = positions.len(), "matrix accepted");
        Ok(Self { positions })
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Position<T>] {
        &self.positions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position<T>> {
        self.positions.iter()
    }

    pub fn get(&self, index: usize) -> Result<&Position<T>> {
        self.positions.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.positions.len(),
        })
    }

    /// Total points over all present positions.
    pub fn points_count(&self) -> usize {
        self.positions.iter().filter_map(Position::points_count).sum()
    }

    /// Dimensionality shared by every position; `None` for an empty matrix.
    pub fn positions_type(&self) -> Option<Dim> {
        self.positions.first().map(Position::dim)
    }

    pub fn is_same_position_type(a: &Matrix<T>, b: &Matrix<T>) -> bool {
        a.positions_type() == b.positions_type()
    }

    pub fn is_same_point_size(a: &Matrix<T>, b: &Matrix<T>) -> bool {
        a.points_count() == b.points_count()
    }

    pub fn is_same_position_size(a: &Matrix<T>, b: &Matrix<T>) -> bool {
        a.len() == b.len()
    }
}

fn validate<T>(positions: &[Position<T>]) -> Result<()> {
    let Some(reference) = positions.first() else {
        return Ok(());
    };
    let expected = reference.dim();

    for (index, position) in positions.iter().enumerate().skip(1) {
        let found = position.dim();
        if found != expected {
            debug!(index, %expected, %found, "matrix rejected: position type mismatch");
            return Err(Error::PositionType { index, expected, found });
        }
        if expected == Dim::D3 && position.len() != reference.len() {
            debug!(
                index,
                expected = reference.len(),
                found = position.len(),
                "matrix rejected: 3D point count mismatch"
            );
            return Err(Error::Matrix3DPointCount {
                index,
                expected: reference.len(),
                found: position.len(),
            });
        }
    }
    Ok(())
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self { positions: Vec::new() }
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a Position<T>;
    type IntoIter = std::slice::Iter<'a, Position<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, position) in self.positions.iter().enumerate() {
            writeln!(f, "\t\tPosition{i}")?;
            writeln!(f, "{position}")?;
        }
        Ok(())
    }
}
