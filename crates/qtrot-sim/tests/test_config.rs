//! Tests for decomposer configuration loading.

use std::io::Write;

use qtrot_sim::{ErrorKind, SimError, TrotterConfig};

#[test]
fn builders_set_every_field() {
    let config = TrotterConfig::new(4)
        .with_threshold(1e-6)
        .with_join_components(true)
        .with_randomize_component_order(true)
        .with_randomize(true)
        .with_seed(7);
    assert_eq!(config.steps, 4);
    assert!((config.threshold - 1e-6).abs() < 1e-18);
    assert!(config.join_components);
    assert!(config.randomize_component_order);
    assert!(config.randomize);
    assert_eq!(config.seed, Some(7));
    assert!(config.is_randomized());
    assert!(config.validate().is_ok());
}

#[test]
fn defaults_are_off() {
    let config = TrotterConfig::new(3);
    assert_eq!(config.threshold, 0.0);
    assert!(!config.join_components);
    assert!(!config.is_randomized());
    assert_eq!(config.seed, None);
}

#[test]
fn json_with_only_steps_uses_defaults() {
    let config = TrotterConfig::from_json_str(r#"{ "steps": 5 }"#).unwrap();
    assert_eq!(config, TrotterConfig::new(5));
}

#[test]
fn yaml_full_config() {
    let yaml = "
steps: 4
threshold: 0.001
join_components: true
randomize: true
seed: 99
";
    let config = TrotterConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(
        config,
        TrotterConfig::new(4)
            .with_threshold(0.001)
            .with_join_components(true)
            .with_randomize(true)
            .with_seed(99)
    );
}

#[test]
fn invalid_values_are_rejected_after_parsing() {
    assert!(matches!(
        TrotterConfig::from_json_str(r#"{ "steps": 0 }"#),
        Err(SimError::InvalidSteps(0))
    ));
    assert!(matches!(
        TrotterConfig::from_yaml_str("steps: 2\nthreshold: -1.0\n"),
        Err(SimError::InvalidThreshold(_))
    ));
}

#[test]
fn unknown_and_missing_fields_are_parse_errors() {
    let err = TrotterConfig::from_json_str(r#"{ "steps": 1, "order": 2 }"#).unwrap_err();
    assert!(matches!(err, SimError::Json(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

    assert!(matches!(
        TrotterConfig::from_yaml_str("threshold: 0.1\n"),
        Err(SimError::Yaml(_))
    ));
}

#[test]
fn json_roundtrip_omits_unset_seed() {
    let config = TrotterConfig::new(2).with_join_components(true);
    let json = serde_json::to_string(&config).unwrap();
    assert!(!json.contains("seed"));
    assert_eq!(TrotterConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn from_file_dispatches_on_extension() {
    let dir = tempfile::tempdir().unwrap();

    let yaml_path = dir.path().join("trotter.yml");
    let mut f = std::fs::File::create(&yaml_path).unwrap();
    writeln!(f, "steps: 3\nrandomize_component_order: true").unwrap();
    let config = TrotterConfig::from_file(&yaml_path).unwrap();
    assert_eq!(config.steps, 3);
    assert!(config.randomize_component_order);

    let json_path = dir.path().join("trotter.json");
    std::fs::write(&json_path, r#"{ "steps": 8, "threshold": 0.5 }"#).unwrap();
    assert_eq!(TrotterConfig::from_file(&json_path).unwrap().steps, 8);

    let toml_path = dir.path().join("trotter.toml");
    assert!(matches!(
        TrotterConfig::from_file(&toml_path),
        Err(SimError::UnsupportedConfigFormat(ext)) if ext == "toml"
    ));

    assert!(matches!(
        TrotterConfig::from_file(dir.path().join("missing.json")),
        Err(SimError::Io(_))
    ));
}
