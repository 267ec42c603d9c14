//! # Core Models Module
//!
//! Data structures for atoms. An [`atom::Atom`] is a plain value: an id, an
//! element from the fixed table, and a position in Angstroms. Collections of
//! atoms are ordinary slices and vectors owned by the caller.
//!
//! ```
//! use atomkit::core::chem::element::Element;
//! use atomkit::core::models::atom::{Atom, sort_by_id};
//!
//! let mut atoms = vec![
//!     Atom::from_xyz(2, Element::O, 1.2, 0.0, 0.0),
//!     Atom::from_xyz(1, Element::C, 0.0, 0.0, 0.0),
//! ];
//! sort_by_id(&mut atoms);
//! assert_eq!(atoms[0].element, Element::C);
//! ```

pub mod atom;
