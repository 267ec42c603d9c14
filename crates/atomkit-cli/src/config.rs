use crate::error::Result;
use atomkit::engine::config::{GeometryConfig, GeometryConfigBuilder};
use std::path::Path;
use tracing::debug;

/// Builds the geometry configuration from an optional TOML file and an optional
/// `--bond-length` override. The override wins over the file.
pub fn resolve_geometry(
    config_path: Option<&Path>,
    bond_length: Option<f64>,
) -> Result<GeometryConfig> {
    let from_file = match config_path {
        Some(path) => {
            debug!("Loading configuration from file: {:?}", path);
            GeometryConfig::load(path)?
        }
        None => GeometryConfig::default(),
    };

    let config = GeometryConfigBuilder::new()
        .bond_length(bond_length.unwrap_or(from_file.bond_length))
        .build()?;
    debug!(bond_length = config.bond_length, "Resolved geometry configuration.");
    Ok(config)
}
