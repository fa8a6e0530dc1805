//! End-to-end tests for sample generation, configuration loading and dumps.

use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;

use containers_model::samples::{decimal_sample, float_sample, FloatSampleConfig};
use containers_model::{containers_list, dump_to_file, Dim, Error, SampleConfig};

#[test]
fn test_seeded_samples_are_reproducible() {
    let config = SampleConfig { seed: Some(42), ..SampleConfig::default() };

    let a = decimal_sample(&config.decimal, &mut config.rng()).unwrap();
    let b = decimal_sample(&config.decimal, &mut config.rng()).unwrap();
    assert_eq!(a, b);

    let c = float_sample(&config.float, &mut config.rng()).unwrap();
    let d = float_sample(&config.float, &mut config.rng()).unwrap();
    assert_eq!(c, d);
}

#[test]
fn test_decimal_sample_layout() {
    let config = SampleConfig::default();
    let cs = decimal_sample(&config.decimal, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(cs.len(), 3);

    for c in &cs {
        let xy = c.get(0).unwrap();
        let x = c.get(1).unwrap();
        assert_eq!(xy.positions_type(), Some(Dim::D2));
        assert_eq!(x.positions_type(), Some(Dim::D1));
        assert_eq!(xy.get(0).unwrap().len(), 50);
        assert_eq!(xy.get(1).unwrap().len(), 200);
        assert_eq!(xy.get(2).unwrap().points_count(), Some(0));
        assert!((1..=49).contains(&x.get(0).unwrap().len()));
        assert!(x.get(2).unwrap().is_absent());
    }
}

#[test]
fn test_float_sample_custom_sizes() {
    let config = FloatSampleConfig {
        containers: 3,
        xy_matrices: 2,
        x_matrices: 1,
        positions: 4,
        max_points: 3,
    };
    let cs = float_sample(&config, &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(cs.len(), 3);
    let c = cs.get(2).unwrap();
    assert_eq!(c.matrix_count(), 3);
    assert!(c.iter().all(|m| m.len() == 4));
    assert!(c.iter().flat_map(|m| m.iter()).all(|p| (1..=3).contains(&p.len())));
}

#[test]
fn test_config_file_roundtrip_through_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"seed": 5, "decimal": {{"containers": 1, "positions": 3}}}}"#).unwrap();

    let config = SampleConfig::load(file.path()).unwrap();
    assert_eq!(config.seed, Some(5));
    assert_eq!(config.decimal.containers, 1);
    assert_eq!(config.decimal.positions, 3);
    assert_eq!(config.decimal.xy_points, vec![50, 200]);
}

#[test]
fn test_invalid_configs() {
    assert!(matches!(
        SampleConfig::from_json_str(r#"{"decimal": {"positions": 1}}"#),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        SampleConfig::from_json_str(r#"{"float": {"max_points": 0}}"#),
        Err(Error::Config(_))
    ));
    assert!(matches!(SampleConfig::from_json_str("{ not json"), Err(Error::Json(_))));
    assert!(matches!(
        SampleConfig::load("/nonexistent/containers.json"),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_dump_to_file() {
    let config = SampleConfig { seed: Some(3), ..SampleConfig::default() };
    let mut rng = config.rng();
    let decimals = decimal_sample(&config.decimal, &mut rng).unwrap();
    let floats = float_sample(&config.float, &mut rng).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("allData.txt");
    dump_to_file(&containers_list![decimals, floats], &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("// containers-model dump\n// Collections: 2\n"));
    assert!(text.contains("// Collection0: 3 containers of decimal"));
    assert!(text.contains("// Collection1: 10 containers of f64"));
    assert!(text.contains("Container9\n\tMatrix0\n\t\tPosition0\n\t\t\tPoint0 [X:"));
}
