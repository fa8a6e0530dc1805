//! # Shaped Data Model
//!
//! The fixed hierarchy, leaf to root:
//!
//! ```text
//! Point  →  Position  →  Matrix  →  Container  →  Containers
//! (1–3 T)   (run of     (same-dim   (same         (same matrix layout
//!            points)     positions)  position      across containers)
//!                                    count)
//! ```
//!
//! Each aggregate validates its direct children once, inside its
//! constructor, and is immutable afterwards. Validation never reaches more
//! than one level down.
//!
//! Design rule: pure data. No I/O, no shared ownership, no interior mutability.

pub mod scalar;
pub mod decimal;
pub mod point;
pub mod position;
pub mod matrix;
pub mod container;
pub mod containers;

pub use scalar::Scalar;
pub use decimal::Decimal;
pub use point::{Point, Point1D, Point2D, Point3D, PointRef};
pub use position::{Dim, PointRun, Position, Position1D, Position2D, Position3D};
pub use matrix::Matrix;
pub use container::Container;
pub use containers::{AnyContainers, Containers};
