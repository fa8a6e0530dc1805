//! Sample datasets and their configuration.
//!
//! Two reference collections, both assembled through the validating
//! constructors:
//!
//! - **decimal**: every container holds `[XY, X]`. The XY matrix's leading
//!   positions carry the configured point counts and the rest are empty; the
//!   X matrix's leading positions carry `1..=x_max_points` random points and
//!   the rest are absent.
//! - **float**: every container holds `xy_matrices` copies of one XY matrix
//!   followed by `x_matrices` copies of one X matrix; every position carries
//!   `1..=max_points` random points.
//!
//! The whole tree is materialized before validation runs, so
//! [`SampleConfig::validate`] caps the estimated point count with
//! `point_budget`.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::decimal::MAX_SCALE;
use crate::model::{
    Container, Containers, Decimal, Matrix, Point1D, Point2D, Position1D, Position2D,
};
use crate::{Error, Result};

/// Default cap on the number of points a configured sample may generate.
pub const DEFAULT_POINT_BUDGET: usize = 2_000_000;

// ============================================================================
// Configuration
// ============================================================================

/// Sizes of the generated datasets. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Fixed RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub point_budget: usize,
    pub decimal: DecimalSampleConfig,
    pub float: FloatSampleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecimalSampleConfig {
    pub containers: usize,
    /// Positions per matrix, leading ones included.
    pub positions: usize,
    /// Point counts of the leading XY positions.
    pub xy_points: Vec<usize>,
    pub x_max_points: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatSampleConfig {
    pub containers: usize,
    pub xy_matrices: usize,
    pub x_matrices: usize,
    pub positions: usize,
    pub max_points: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            point_budget: DEFAULT_POINT_BUDGET,
            decimal: DecimalSampleConfig::default(),
            float: FloatSampleConfig::default(),
        }
    }
}

impl Default for DecimalSampleConfig {
    fn default() -> Self {
        Self {
            containers: 3,
            positions: 100,
            xy_points: vec![50, 200],
            x_max_points: 49,
        }
    }
}

impl Default for FloatSampleConfig {
    fn default() -> Self {
        Self {
            containers: 10,
            xy_matrices: 5,
            x_matrices: 5,
            positions: 10,
            max_points: 49,
        }
    }
}

impl DecimalSampleConfig {
    /// Reject layouts that would produce an empty dataset or an empty
    /// random range.
    pub fn validate(&self) -> Result<()> {
        if self.containers == 0 || self.positions == 0 {
            return Err(Error::Config("decimal sample needs at least one container and position".into()));
        }
        if self.x_max_points == 0 {
            return Err(Error::Config("decimal sample x_max_points must be at least 1".into()));
        }
        if self.positions < self.xy_points.len() {
            return Err(Error::Config(format!(
                "decimal sample has {} leading positions but only {} positions",
                self.xy_points.len(),
                self.positions
            )));
        }
        Ok(())
    }
}

impl FloatSampleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.containers == 0 || self.positions == 0 {
            return Err(Error::Config("float sample needs at least one container and position".into()));
        }
        if self.xy_matrices == 0 && self.x_matrices == 0 {
            return Err(Error::Config("float sample needs at least one matrix".into()));
        }
        if self.max_points == 0 {
            return Err(Error::Config("float sample max_points must be at least 1".into()));
        }
        Ok(())
    }
}

impl SampleConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Upper bound on the points both samples can generate. Saturates
    /// instead of overflowing.
    pub fn estimated_points(&self) -> usize {
        let d = &self.decimal;
        let leading = d.xy_points.len();
        let per_container = d
            .xy_points
            .iter()
            .fold(0, |acc: usize, &n| acc.saturating_add(n))
            .saturating_add(leading.saturating_mul(d.x_max_points));
        let decimal = d.containers.saturating_mul(per_container);

        let f = &self.float;
        let float = f
            .containers
            .saturating_mul(f.xy_matrices.saturating_add(f.x_matrices))
            .saturating_mul(f.positions)
            .saturating_mul(f.max_points);

        decimal.saturating_add(float)
    }

    pub fn validate(&self) -> Result<()> {
        self.decimal.validate()?;
        self.float.validate()?;
        let estimated = self.estimated_points();
        if estimated > self.point_budget {
            return Err(Error::Config(format!(
                "samples may generate {estimated} points, over the budget of {}",
                self.point_budget
            )));
        }
        Ok(())
    }

    /// RNG seeded from `seed`, or from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

// ============================================================================
// Random values
// ============================================================================

/// A random decimal: scale in `0..=28`, random sign, and a 96-bit mantissa
/// assembled from three non-negative 31-bit draws.
pub fn random_decimal<R: Rng + ?Sized>(rng: &mut R) -> Result<Decimal> {
    let scale = rng.gen_range(0..=MAX_SCALE);
    let negative = rng.gen_bool(0.5);
    let lo = rng.gen_range(0..i32::MAX) as u32;
    let mid = rng.gen_range(0..i32::MAX) as u32;
    let hi = rng.gen_range(0..i32::MAX) as u32;
    Decimal::from_parts(lo, mid, hi, negative, scale)
}

// ============================================================================
// Datasets
// ============================================================================

pub fn decimal_sample<R: Rng + ?Sized>(
    config: &DecimalSampleConfig,
    rng: &mut R,
) -> Result<Containers<Decimal>> {
    config.validate()?;
    let leading = config.xy_points.len();
    let total = config.positions;

    let mut xy = Vec::with_capacity(total);
    for &n in &config.xy_points {
        let points = (0..n).map(|_| -> Result<_> {
            Ok(Point2D::new(random_decimal(rng)?, random_decimal(rng)?))
        });
        xy.push(points.collect::<Result<Position2D<_>>>()?);
    }
    xy.extend((leading..total).map(|_| Position2D::empty()));

    let mut x = Vec::with_capacity(total);
    for _ in 0..leading {
        let n = rng.gen_range(1..=config.x_max_points);
        let points = (0..n).map(|_| -> Result<_> { Ok(Point1D::new(random_decimal(rng)?)) });
        x.push(points.collect::<Result<Position1D<_>>>()?);
    }
    x.extend((leading..total).map(|_| Position1D::absent()));

    let xy: Matrix<Decimal> = Matrix::new(xy)?;
    let x: Matrix<Decimal> = Matrix::new(x)?;
    let containers = (0..config.containers)
        .map(|_| Container::new(vec![xy.clone(), x.clone()]))
        .collect::<Result<Vec<_>>>()?;

    debug!(containers = containers.len(), positions = total, "decimal sample built");
    Containers::new(containers)
}

pub fn float_sample<R: Rng + ?Sized>(
    config: &FloatSampleConfig,
    rng: &mut R,
) -> Result<Containers<f64>> {
    config.validate()?;
    let mut xy = Vec::with_capacity(config.positions);
    let mut x = Vec::with_capacity(config.positions);
    for _ in 0..config.positions {
        let n = rng.gen_range(1..=config.max_points);
        xy.push((0..n).map(|_| Point2D::new(rng.r#gen(), rng.r#gen())).collect::<Position2D<f64>>());
    }
    for _ in 0..config.positions {
        let n = rng.gen_range(1..=config.max_points);
        x.push((0..n).map(|_| Point1D::new(rng.r#gen())).collect::<Position1D<f64>>());
    }

    let xy: Matrix<f64> = Matrix::new(xy)?;
    let x: Matrix<f64> = Matrix::new(x)?;
    let containers = (0..config.containers)
        .map(|_| {
            let matrices = std::iter::repeat_n(&xy, config.xy_matrices)
                .chain(std::iter::repeat_n(&x, config.x_matrices))
                .cloned();
            Container::new(matrices)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(containers = containers.len(), "float sample built");
    Containers::new(containers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dim;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_default_config_is_valid() {
        SampleConfig::default().validate().unwrap();
    }

    #[test]
    fn test_budget_enforced() {
        let config = SampleConfig { point_budget: 10, ..SampleConfig::default() };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_estimated_points_saturates() {
        let config = SampleConfig::from_json_str(
            r#"{"decimal": {"xy_points": [18446744073709551615, 1]}}"#,
        );
        assert!(matches!(config, Err(Error::Config(_))));

        let config = SampleConfig {
            decimal: DecimalSampleConfig {
                positions: 2,
                xy_points: vec![usize::MAX, 1],
                x_max_points: usize::MAX,
                ..DecimalSampleConfig::default()
            },
            ..SampleConfig::default()
        };
        assert_eq!(config.estimated_points(), usize::MAX);
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let float = SampleConfig {
            float: FloatSampleConfig { xy_matrices: usize::MAX, x_matrices: 1, ..FloatSampleConfig::default() },
            ..SampleConfig::default()
        };
        assert_eq!(float.estimated_points(), usize::MAX);
    }

    #[test]
    fn test_zero_sized_samples_rejected() {
        for json in [
            r#"{"decimal": {"containers": 0}}"#,
            r#"{"decimal": {"positions": 0, "xy_points": []}}"#,
            r#"{"decimal": {"x_max_points": 0}}"#,
            r#"{"float": {"containers": 0}}"#,
            r#"{"float": {"positions": 0}}"#,
            r#"{"float": {"xy_matrices": 0, "x_matrices": 0}}"#,
            r#"{"float": {"max_points": 0}}"#,
        ] {
            assert!(matches!(SampleConfig::from_json_str(json), Err(Error::Config(_))), "{json}");
        }
    }

    #[test]
    fn test_generators_check_their_config() {
        let decimal = DecimalSampleConfig { x_max_points: 0, ..DecimalSampleConfig::default() };
        assert!(matches!(decimal_sample(&decimal, &mut seeded()), Err(Error::Config(_))));

        let float = FloatSampleConfig { max_points: 0, ..FloatSampleConfig::default() };
        assert!(matches!(float_sample(&float, &mut seeded()), Err(Error::Config(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SampleConfig::from_json_str(r#"{"seed": 3, "float": {"containers": 2}}"#).unwrap();
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.float.containers, 2);
        assert_eq!(config.float.positions, 10);
        assert_eq!(config.decimal, DecimalSampleConfig::default());
    }

    #[test]
    fn test_random_decimal_within_limits() {
        let mut rng = seeded();
        for _ in 0..100 {
            let d = random_decimal(&mut rng).unwrap();
            assert!(d.scale() <= MAX_SCALE);
        }
    }

    #[test]
    fn test_decimal_sample_shape() {
        let config = DecimalSampleConfig::default();
        let cs = decimal_sample(&config, &mut seeded()).unwrap();
        assert_eq!(cs.len(), 3);

        let c = cs.get(0).unwrap();
        assert_eq!(c.matrix_count(), 2);
        let xy = c.get(0).unwrap();
        assert_eq!(xy.len(), 100);
        assert_eq!(xy.positions_type(), Some(Dim::D2));
        assert_eq!(xy.points_count(), 250);
        assert!(c.get(1).unwrap().get(99).unwrap().is_absent());
    }

    #[test]
    fn test_float_sample_shape() {
        let config = FloatSampleConfig { containers: 2, ..FloatSampleConfig::default() };
        let cs = float_sample(&config, &mut seeded()).unwrap();
        assert_eq!(cs.len(), 2);
        let c = cs.get(1).unwrap();
        assert_eq!(c.matrix_count(), 10);
        assert_eq!(c.get(4).unwrap().positions_type(), Some(Dim::D2));
        assert_eq!(c.get(5).unwrap().positions_type(), Some(Dim::D1));
        assert!(c.iter().all(|m| m.iter().all(|p| p.len() >= 1)));
    }
}
