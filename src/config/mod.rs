//! Configuration utilities for entity registry.

use semver::Version;

/// Name of this crate.
pub const REGISTRY_NAME: &str = env!("CARGO_CRATE_NAME", "library must be compiled by Cargo");

const REGISTRY_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "library must be compiled by Cargo");
lazy_static::lazy_static! {
    /// Semver version of this crate.
    pub static ref REGISTRY_VERSION: Version = REGISTRY_VERSION_STR
        .parse()
        .unwrap_or_else(|_| Version::new(0, 0, 0));
}

/// This struct represents general configuration of entity registry.
#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    version: Version,
    enable_validation: bool,
}

impl Config {
    /// Creates new configuration with given name, version and validation usage.
    pub const fn new(name: String, version: Version, enable_validation: bool) -> Self {
        Self {
            name,
            version,
            enable_validation,
        }
    }

    /// Name of the registry, used in log messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semver version of your application.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// If registry will cross-check every cached query result
    /// against a full scan (useful for debugging).
    pub fn enable_validation(&self) -> bool {
        self.enable_validation
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("registry".to_string(), Version::new(0, 0, 0), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.name(), "registry");
        assert_eq!(config.version(), &Version::new(0, 0, 0));
        assert!(!config.enable_validation());
    }

    #[test]
    fn test_crate_version() {
        assert_eq!(REGISTRY_NAME, "titan_registry");
        assert_eq!(*REGISTRY_VERSION, Version::new(0, 1, 0));
    }
}
