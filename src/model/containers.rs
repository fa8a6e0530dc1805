//! Containers: a collection of containers that all follow one template.
//!
//! The template is the first container. Every later container is checked
//! against it in order, failing fast on the first disagreement:
//!
//! 1. same matrix count ([`Error::ContainersMatrixCount`]), checked before
//!    any per-matrix comparison;
//! 2. then, matrix by matrix:
//!    a. same position type ([`Error::ContainersMatrixType`]),
//!    b. same position count ([`Error::ContainerMatrixPositionSize`]),
//!    c. for 3D template matrices, same total point count
//!       ([`Error::ContainerMatrix3DPointCount`]).
//!
//! Matrix internals are not re-validated; they were checked when each
//! matrix was built.

use std::any::Any;
use std::fmt;

use tracing::{debug, trace};

use super::{Container, Dim, Matrix, Scalar};
use crate::{Error, Result};

/// An ordered, validated list of containers over one scalar type.
#[derive(Debug, Clone, PartialEq)]
pub struct Containers<T> {
    containers: Vec<Container<T>>,
}

impl<T> Containers<T> {
    pub fn new(containers: impl IntoIterator<Item = Container<T>>) -> Result<Self> {
        let containers: Vec<Container<T>> = containers.into_iter().collect();
        validate(&containers)?;
        trace!(containers = containers.len(), "containers accepted");
        Ok(Self { containers })
    }

    /// Number of containers.
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn containers(&self) -> &[Container<T>] {
        &self.containers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Container<T>> {
        self.containers.iter()
    }

    pub fn get(&self, index: usize) -> Result<&Container<T>> {
        self.containers.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.containers.len(),
        })
    }

    /// The container every other one was validated against.
    pub fn template(&self) -> Option<&Container<T>> {
        self.containers.first()
    }
}

fn validate<T>(containers: &[Container<T>]) -> Result<()> {
    let Some(first) = containers.first() else {
        return Ok(());
    };
    let template = first.matrices();

    for (container, candidate) in containers.iter().enumerate().skip(1) {
        if candidate.matrix_count() != template.len() {
            debug!(
                container,
                expected = template.len(),
                found = candidate.matrix_count(),
                "containers rejected: matrix count mismatch"
            );
            return Err(Error::ContainersMatrixCount {
                container,
                expected: template.len(),
                found: candidate.matrix_count(),
            });
        }

        for (matrix, (reference, m)) in template.iter().zip(candidate.matrices()).enumerate() {
            compare_matrix(container, matrix, reference, m)?;
        }
    }
    Ok(())
}

fn compare_matrix<T>(
    container: usize,
    matrix: usize,
    reference: &Matrix<T>,
    candidate: &Matrix<T>,
) -> Result<()> {
    if !Matrix::is_same_position_type(candidate, reference) {
        debug!(container, matrix, "containers rejected: matrix type mismatch");
        return Err(Error::ContainersMatrixType {
            container,
            matrix,
            expected: reference.positions_type(),
            found: candidate.positions_type(),
        });
    }
    if !Matrix::is_same_position_size(candidate, reference) {
        debug!(container, matrix, "containers rejected: matrix position count mismatch");
        return Err(Error::ContainerMatrixPositionSize {
            container: Some(container),
            matrix,
            expected: reference.len(),
            found: candidate.len(),
        });
    }
    if reference.positions_type() == Some(Dim::D3)
        && !Matrix::is_same_point_size(candidate, reference)
    {
        debug!(container, matrix, "containers rejected: 3D point count mismatch");
        return Err(Error::ContainerMatrix3DPointCount {
            container,
            matrix,
            expected: reference.points_count(),
            found: candidate.points_count(),
        });
    }
    Ok(())
}

impl<T> Default for Containers<T> {
    fn default() -> Self {
        Self { containers: Vec::new() }
    }
}

impl<'a, T> IntoIterator for &'a Containers<T> {
    type Item = &'a Container<T>;
    type IntoIter = std::slice::Iter<'a, Container<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.containers.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Containers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, container) in self.containers.iter().enumerate() {
            writeln!(f, "Container{i}")?;
            writeln!(f, "{container}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Untyped handle
// ============================================================================

/// A `Containers<T>` with its scalar type erased, so collections over
/// different scalars can be stored side by side.
pub trait AnyContainers: fmt::Debug + fmt::Display + Send + Sync {
    /// [`Scalar::NAME`] of the erased element type.
    fn scalar_name(&self) -> &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_any(&self) -> &dyn Any;
}

impl<T: Scalar> AnyContainers for Containers<T> {
    fn scalar_name(&self) -> &'static str {
        T::NAME
    }

    fn len(&self) -> usize {
        self.containers.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn AnyContainers {
    /// True if the erased collection holds scalars of type `T`.
    pub fn is<T: Scalar>(&self) -> bool {
        self.as_any().is::<Containers<T>>()
    }

    pub fn downcast_ref<T: Scalar>(&self) -> Option<&Containers<T>> {
        self.as_any().downcast_ref::<Containers<T>>()
    }
}
