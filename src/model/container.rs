//! Container: an ordered set of matrices with one shared position count.

use std::fmt;

use tracing::{debug, trace};

use super::Matrix;
use crate::{Error, Result};

/// An ordered, validated list of matrices.
///
/// Every matrix holds the same number of positions as the first one. Only
/// the position *count* is compared here; per-position dimensionality is the
/// matrix's own concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Container<T> {
    matrices: Vec<Matrix<T>>,
}

impl<T> Container<T> {
    pub fn new(matrices: impl IntoIterator<Item = Matrix<T>>) -> Result<Self> {
        let matrices: Vec<Matrix<T>> = matrices.into_iter().collect();
        validate(&matrices)?;
        trace!(matrices = matrices.len(), "container accepted");
        Ok(Self { matrices })
    }

    pub fn matrix_count(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    pub fn matrices(&self) -> &[Matrix<T>] {
        &self.matrices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Matrix<T>> {
        self.matrices.iter()
    }

    pub fn get(&self, index: usize) -> Result<&Matrix<T>> {
        self.matrices.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.matrices.len(),
        })
    }
}

fn validate<T>(matrices: &[Matrix<T>]) -> Result<()> {
    let Some(reference) = matrices.first() else {
        return Ok(());
    };
    for (index, matrix) in matrices.iter().enumerate() {
        if !Matrix::is_same_position_size(reference, matrix) {
            debug!(
                matrix = index,
                expected = reference.len(),
                found = matrix.len(),
                "container rejected: matrix position count mismatch"
            );
            return Err(Error::ContainerMatrixPositionSize {
                container: None,
                matrix: index,
                expected: reference.len(),
                found: matrix.len(),
            });
        }
    }
    Ok(())
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self { matrices: Vec::new() }
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a Matrix<T>;
    type IntoIter = std::slice::Iter<'a, Matrix<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matrices.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, matrix) in self.matrices.iter().enumerate() {
            writeln!(f, "\tMatrix{i}")?;
            writeln!(f, "{matrix}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position1D;

    fn absent_1d(n: usize) -> Matrix<u8> {
        Matrix::new((0..n).map(|_| Position1D::<u8>::absent())).unwrap()
    }

    #[test]
    fn test_position_count_mismatch() {
        let err = Container::new(vec![absent_1d(1), absent_1d(4)]).unwrap_err();
        assert!(matches!(
            err,
            Error::ContainerMatrixPositionSize { container: None, matrix: 1, expected: 1, found: 4 }
        ));
    }

    #[test]
    fn test_equal_position_counts() {
        let c = Container::new(vec![absent_1d(3), absent_1d(3), absent_1d(3)]).unwrap();
        assert_eq!(c.matrix_count(), 3);
        assert_eq!(c.get(2).unwrap().len(), 3);
        assert!(matches!(c.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 })));
    }

    #[test]
    fn test_empty_container() {
        let c = Container::<u8>::new(Vec::new()).unwrap();
        assert!(c.is_empty());
        assert_eq!(c, Container::default());
    }
}
