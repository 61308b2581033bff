// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

use std::fs;

use serial_test::serial;
use syscontrol::config::{load_active, load_config_file, CONFIG_ENV, PREFER_ENV};
use syscontrol::{AccessConfig, PathPreference};
use tempfile::tempdir;

fn clear_env() {
    std::env::remove_var(CONFIG_ENV);
    std::env::remove_var(PREFER_ENV);
}

#[test]
fn file_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.yaml");
    fs::write(&path, "prefer: symbolic\ntranslate_names: true\n").unwrap();
    let cfg = load_config_file(&path).unwrap();
    assert_eq!(
        cfg,
        AccessConfig {
            prefer: PathPreference::Symbolic,
            translate_names: true,
        }
    );
}

#[test]
fn empty_file_is_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.yaml");
    fs::write(&path, "\n").unwrap();
    assert_eq!(load_config_file(&path).unwrap(), AccessConfig::default());
}

#[test]
fn malformed_file_is_invalid_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.yaml");
    fs::write(&path, "prefer: [numeric\n").unwrap();
    let err = load_config_file(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
#[serial]
fn env_file_then_override() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.yaml");
    fs::write(&path, "translate_names: true\n").unwrap();
    clear_env();
    std::env::set_var(CONFIG_ENV, &path);
    std::env::set_var(PREFER_ENV, "symbolic");
    let cfg = load_active();
    clear_env();
    assert!(cfg.translate_names);
    assert_eq!(cfg.prefer, PathPreference::Symbolic);
}

#[test]
#[serial]
fn bad_env_falls_back_to_defaults() {
    clear_env();
    std::env::set_var(CONFIG_ENV, "/nonexistent/access.yaml");
    std::env::set_var(PREFER_ENV, "sideways");
    let cfg = load_active();
    clear_env();
    assert_eq!(cfg, AccessConfig::default());
}
