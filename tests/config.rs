//! Integration tests for environment configuration.

use court_schedule::{Config, Variant};
use std::collections::HashMap;
use std::path::PathBuf;

fn config_from(pairs: &[(&str, &str)]) -> Config {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = config_from(&[]);
    assert_eq!(config, Config::default());
    assert_eq!(config.port, 8080);
    assert_eq!(config.variant, Variant::Seeded);
    assert_eq!(config.default_teams, 4);
}

#[test]
fn values_are_read_and_clamped() {
    let config = config_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "9000"),
        ("SCHEDULE_FILE", "/tmp/courts.json"),
        ("SCHEDULE_VARIANT", "fixed-opening"),
        ("DEFAULT_TEAMS", "40"),
    ]);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9000);
    assert_eq!(config.schedule_file, PathBuf::from("/tmp/courts.json"));
    assert_eq!(config.variant, Variant::FixedOpening);
    assert_eq!(config.default_teams, 15);
}

#[test]
fn bad_values_fall_back_to_defaults() {
    let config = config_from(&[
        ("PORT", "eighty"),
        ("SCHEDULE_VARIANT", "round-robin-ish"),
        ("DEFAULT_TEAMS", "-3"),
    ]);
    assert_eq!(config.port, 8080);
    assert_eq!(config.variant, Variant::Seeded);
    assert_eq!(config.default_teams, 4);
}
