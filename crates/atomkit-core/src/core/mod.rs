//! # Core Module
//!
//! The stateless foundation of the library: reference data, the atom model,
//! coordinate file I/O, and closed-form geometry.
//!
//! - **Reference Data** ([`chem`]) - Element table, physical constants, internal motion types
//! - **Atom Representation** ([`models`]) - The [`models::atom::Atom`] value type
//! - **File I/O** ([`io`]) - Reading and writing XYZ coordinate files
//! - **Geometry** ([`utils`]) - Distances, bond and dihedral angles, spherical directions
//! - **Errors** ([`error`]) - The [`error::ChemError`] kinds shared by lookups and queries

pub mod chem;
pub mod error;
pub mod io;
pub mod models;
pub mod utils;
