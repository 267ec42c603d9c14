use crate::error::{CliError, Result};
use atomkit::core::io::traits::AtomFile;
use atomkit::core::io::xyz::{XyzFile, XyzMetadata};
use atomkit::core::models::atom::Atom;
use std::path::Path;
use tracing::info;

pub mod bonds;
pub mod center;
pub mod dihedral;
pub mod distance;
pub mod element;

pub(crate) fn load_atoms(path: &Path) -> Result<(Vec<Atom>, XyzMetadata)> {
    info!("Reading structure from {:?}", path);
    XyzFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}
