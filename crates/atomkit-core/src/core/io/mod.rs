//! Provides input/output for atom coordinate files.
//!
//! A trait-based interface ([`traits::AtomFile`]) with one implementation per
//! format. Only the plain XYZ format is supported.

pub mod traits;
pub mod xyz;
