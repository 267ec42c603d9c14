//! Fixed chemical reference data: the element table, physical constants, and
//! internal motion types.

pub mod constants;
pub mod element;
pub mod motion;
