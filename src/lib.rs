//! # containers-model — Strictly-Shaped Numeric Containers
//!
//! Models numeric scientific data as a fixed hierarchy of nested containers
//! over any scalar type, and guarantees at construction time that the
//! nesting obeys the dimensional and cardinality rules downstream numeric
//! code relies on.
//!
//! ## Design Principles
//!
//! 1. **Validate once, at the door**: every aggregate checks its children
//!    inside its constructor and is immutable afterwards
//! 2. **Tags, not type identity**: point/position dimensionality is a closed
//!    `Dim` variant, compared by value
//! 3. **Fail fast**: the first violated rule aborts construction with a
//!    typed [`Error`]
//! 4. **Tree ownership**: parents own their children outright
//!
//! ## Quick Start
//!
//! ```rust
//! use containers_model::{Container, Containers, Matrix, Point2D, Position2D};
//!
//! # fn example() -> containers_model::Result<()> {
//! let xy = Matrix::new(vec![
//!     Position2D::new(vec![Point2D::new(1.0, 2.0), Point2D::new(3.0, 4.0)]),
//!     Position2D::empty(),
//! ])?;
//!
//! let collection = Containers::new(vec![
//!     Container::new(vec![xy.clone()])?,
//!     Container::new(vec![xy])?,
//! ])?;
//! assert_eq!(collection.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Validation Rules
//!
//! | Level | Rule | Error |
//! |-------|------|-------|
//! | Matrix | positions share one `Dim` | `PositionType` |
//! | Matrix | 3D positions share one point count | `Matrix3DPointCount` |
//! | Container | matrices share one position count | `ContainerMatrixPositionSize` |
//! | Containers | containers share one matrix count | `ContainersMatrixCount` |
//! | Containers | i-th matrices share one `Dim` | `ContainersMatrixType` |
//! | Containers | i-th matrices share one position count | `ContainerMatrixPositionSize` |
//! | Containers | i-th 3D matrices share one point count | `ContainerMatrix3DPointCount` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod factory;
pub mod samples;
pub mod dump;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Scalar, Decimal, Dim,
    Point, Point1D, Point2D, Point3D, PointRef,
    PointRun, Position, Position1D, Position2D, Position3D,
    Matrix, Container, Containers, AnyContainers,
};

// ============================================================================
// Re-exports: Grouping, samples, dump
// ============================================================================

pub use factory::{containers_list, typed_containers_list};
pub use samples::SampleConfig;
pub use dump::{write_dump, dump_to_file};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Positions type not match at {index} position: expected {expected}, got {found}")]
    PositionType { index: usize, expected: Dim, found: Dim },

    #[error("Points count not match at {index} position: expected {expected}, got {found}")]
    Matrix3DPointCount { index: usize, expected: usize, found: usize },

    /// Raised inside one container (`container: None`) and across
    /// containers (`container: Some(i)`).
    #[error(
        "Matrix position size not match{} at {matrix} matrix: expected {expected}, got {found}",
        .container.map(|c| format!(" in {c} container")).unwrap_or_default()
    )]
    ContainerMatrixPositionSize {
        container: Option<usize>,
        matrix: usize,
        expected: usize,
        found: usize,
    },

    #[error("Matrix count not match at {container} container: expected {expected}, got {found}")]
    ContainersMatrixCount { container: usize, expected: usize, found: usize },

    #[error("Matrix type not match in {container} container at {matrix} matrix: expected {expected:?}, got {found:?}")]
    ContainersMatrixType {
        container: usize,
        matrix: usize,
        expected: Option<Dim>,
        found: Option<Dim>,
    },

    #[error("Matrix points size not match in {container} container at {matrix} matrix: expected {expected}, got {found}")]
    ContainerMatrix3DPointCount {
        container: usize,
        matrix: usize,
        expected: usize,
        found: usize,
    },

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Decimal out of range: mantissa {mantissa} with scale {scale}")]
    DecimalRange { mantissa: i128, scale: u8 },

    #[error("Invalid sample configuration: {0}")]
    Config(String),

    #[error("Malformed configuration file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the shape-validation failures raised by aggregate
    /// constructors, false for bounds, decimal range, configuration and I/O
    /// errors.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::PositionType { .. }
                | Error::Matrix3DPointCount { .. }
                | Error::ContainerMatrixPositionSize { .. }
                | Error::ContainersMatrixCount { .. }
                | Error::ContainersMatrixType { .. }
                | Error::ContainerMatrix3DPointCount { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_classification() {
        assert!(Error::PositionType { index: 1, expected: Dim::D1, found: Dim::D2 }.is_structural());
        assert!(Error::ContainersMatrixCount { container: 1, expected: 2, found: 1 }.is_structural());
        assert!(!Error::IndexOutOfRange { index: 0, len: 0 }.is_structural());
        assert!(!Error::Config("x".into()).is_structural());
    }

    #[test]
    fn test_error_messages() {
        let inner = Error::ContainerMatrixPositionSize {
            container: None,
            matrix: 1,
            expected: 1,
            found: 4,
        };
        assert_eq!(
            inner.to_string(),
            "Matrix position size not match at 1 matrix: expected 1, got 4"
        );

        let across = Error::ContainerMatrixPositionSize {
            container: Some(2),
            matrix: 0,
            expected: 2,
            found: 1,
        };
        assert_eq!(
            across.to_string(),
            "Matrix position size not match in 2 container at 0 matrix: expected 2, got 1"
        );
    }
}
