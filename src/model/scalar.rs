//! Scalar element types accepted by every level of the model.

use std::fmt;

use super::Decimal;

/// A fixed-size numeric value that can sit inside a [`Point`](super::Point).
///
/// Covers the primitive integers, `f32`/`f64`, `bool` (a degenerate numeric
/// domain) and the crate's fixed-point [`Decimal`].
pub trait Scalar:
    Copy + Default + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Human-readable type name, used when collections of different scalars
    /// are grouped behind [`AnyContainers`](super::AnyContainers).
    const NAME: &'static str;
}

macro_rules! scalar_impl {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                const NAME: &'static str = stringify!($t);
            }
        )*
    };
}

scalar_impl!(i8, i16, i32, i64, i128, isize);
scalar_impl!(u8, u16, u32, u64, u128, usize);
scalar_impl!(f32, f64, bool);

impl Scalar for Decimal {
    const NAME: &'static str = "decimal";
}
