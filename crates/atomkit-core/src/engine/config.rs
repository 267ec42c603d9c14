use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

/// Default bond length in Angstroms. Two atoms at exactly this distance count
/// as bonded.
pub const DEFAULT_BOND_LENGTH: f64 = 1.8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunable parameters of the geometry queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Maximum distance in Angstroms at which two atoms are considered bonded.
    pub bond_length: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            bond_length: DEFAULT_BOND_LENGTH,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialBondsConfig {
    #[serde(rename = "bond-length")]
    bond_length: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialGeometryConfig {
    bonds: Option<PartialBondsConfig>,
}

impl GeometryConfig {
    /// Loads a configuration from a TOML file. Missing keys keep their defaults.
    ///
    /// ```toml
    /// [bonds]
    /// bond-length = 1.7
    /// ```
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading geometry configuration.");
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let partial: PartialGeometryConfig =
            toml::from_str(content).map_err(|e| ConfigError::Toml {
                path: origin.to_string(),
                source: e,
            })?;

        let mut builder = GeometryConfigBuilder::new();
        if let Some(length) = partial.bonds.and_then(|b| b.bond_length) {
            builder = builder.bond_length(length);
        }
        builder.build()
    }
}

/// Builder for [`GeometryConfig`] that validates values on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct GeometryConfigBuilder {
    bond_length: Option<f64>,
}

impl GeometryConfigBuilder {
    /// Creates a builder with every value unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bond length used for distance-based bond detection.
    ///
    /// # Arguments
    ///
    /// * `length` - The bond length in Angstroms; checked by `build`.
    ///
    /// # Return
    ///
    /// Returns the builder for chaining.
    pub fn bond_length(mut self, length: f64) -> Self {
        self.bond_length = Some(length);
        self
    }

    /// Builds the configuration, filling unset values with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the bond length is not a positive,
    /// finite number.
    pub fn build(self) -> Result<GeometryConfig, ConfigError> {
        let bond_length = self.bond_length.unwrap_or(DEFAULT_BOND_LENGTH);
        if !bond_length.is_finite() || bond_length <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "bond-length",
                reason: format!("must be a positive number, got {}", bond_length),
            });
        }
        Ok(GeometryConfig { bond_length })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn default_uses_default_bond_length() {
        assert_eq!(GeometryConfig::default().bond_length, DEFAULT_BOND_LENGTH);
        assert_eq!(
            GeometryConfigBuilder::new().build().unwrap(),
            GeometryConfig::default()
        );
    }

    #[test]
    fn builder_rejects_non_positive_or_non_finite_lengths() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = GeometryConfigBuilder::new().bond_length(bad).build();
            assert!(
                matches!(result, Err(ConfigError::Invalid { field: "bond-length", .. })),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn from_toml_str_reads_bond_length() {
        let config = GeometryConfig::from_toml_str("[bonds]\nbond-length = 1.7\n").unwrap();
        assert_eq!(config.bond_length, 1.7);
    }

    #[test]
    fn from_toml_str_keeps_defaults_for_missing_sections() {
        assert_eq!(
            GeometryConfig::from_toml_str("").unwrap(),
            GeometryConfig::default()
        );
        assert_eq!(
            GeometryConfig::from_toml_str("[bonds]\n").unwrap(),
            GeometryConfig::default()
        );
    }

    #[test]
    fn from_toml_str_rejects_unknown_keys() {
        let result = GeometryConfig::from_toml_str("[bonds]\nlength = 1.7\n");
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn load_succeeds_with_valid_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("geometry.toml");
        let mut file = File::create(&file_path).unwrap();
        writeln!(
            file,
            r#"
            [bonds]
            bond-length = 1.55
            "#
        )
        .unwrap();

        let config = GeometryConfig::load(&file_path).unwrap();
        assert_eq!(config.bond_length, 1.55);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let result = GeometryConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_rejects_invalid_values() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("geometry.toml");
        std::fs::write(&file_path, "[bonds]\nbond-length = -2.0\n").unwrap();
        assert!(matches!(
            GeometryConfig::load(&file_path),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
