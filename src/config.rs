// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-08-20

//! Access configuration.
//!
//! Loaded from the YAML file named by `SYSCONTROL_CONFIG`, with
//! `SYSCONTROL_PREFER` overriding the path preference.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::resolve::PathPreference;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "SYSCONTROL_CONFIG";
/// Environment variable overriding [`AccessConfig::prefer`].
pub const PREFER_ENV: &str = "SYSCONTROL_PREFER";

static SHARED: Lazy<AccessConfig> = Lazy::new(load_active);

/// How fields are turned into registry calls.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AccessConfig {
    /// Form used when a field resolves both ways.
    pub prefer: PathPreference,
    /// Translate dotted names to MIBs before calling the registry.
    pub translate_names: bool,
}

impl AccessConfig {
    /// The process-wide configuration, loaded on first use.
    pub fn shared() -> AccessConfig {
        *SHARED
    }
}

/// Parse a configuration file.
pub fn load_config_file(path: &Path) -> std::io::Result<AccessConfig> {
    let data = fs::read_to_string(path)?;
    if data.trim().is_empty() {
        return Ok(AccessConfig::default());
    }
    serde_yaml::from_str(&data).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Load the configuration from the environment, falling back to defaults.
pub fn load_active() -> AccessConfig {
    let mut config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => match load_config_file(Path::new(&path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("using default access config: {}: {}", Path::new(&path).display(), e);
                AccessConfig::default()
            }
        },
        None => AccessConfig::default(),
    };
    if let Ok(value) = std::env::var(PREFER_ENV) {
        match value.parse() {
            Ok(prefer) => config.prefer = prefer,
            Err(e) => log::warn!("ignoring {PREFER_ENV}: {e}"),
        }
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let cfg: AccessConfig = serde_yaml::from_str("translate_names: true\n").unwrap();
        assert_eq!(cfg.prefer, PathPreference::Numeric);
        assert!(cfg.translate_names);
    }

    #[test]
    fn preference_is_lowercase() {
        let cfg: AccessConfig = serde_yaml::from_str("prefer: symbolic\n").unwrap();
        assert_eq!(cfg.prefer, PathPreference::Symbolic);
        assert!(serde_yaml::from_str::<AccessConfig>("prefer: Symbolic\n").is_err());
    }
}
