//! # atomkit
//!
//! Atom models, a fixed element table, physical constants, and closed-form
//! chemistry geometry.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data: the element table and
//!   constants, the `Atom` value type, XYZ file I/O, and geometry functions
//!   (distances, bond and dihedral angles, spherical directions).
//!
//! - **[`engine`]: Queries.** Bond detection and element lookups over slices of
//!   atoms, parameterized by a `GeometryConfig`.
//!
//! ```
//! use atomkit::core::chem::element::Element;
//! use atomkit::core::models::atom::Atom;
//! use atomkit::core::utils::geometry::dihedral_angle;
//! use atomkit::engine::bonds::find_single_bond_atom;
//!
//! let carbon = Atom::from_xyz(1, Element::C, 0.0, 0.0, 0.0);
//! let others = vec![
//!     Atom::from_xyz(2, Element::O, 1.2, 0.0, 0.0),
//!     Atom::from_xyz(3, Element::H, 0.0, 1.1, 0.0),
//! ];
//! let oxygen = find_single_bond_atom(&carbon, &others, Element::O).unwrap();
//! assert_eq!(oxygen.id, 2);
//!
//! let a = Atom::from_xyz(1, Element::C, 0.0, 1.0, 0.0);
//! let b = Atom::from_xyz(2, Element::C, 0.0, 0.0, 0.0);
//! let c = Atom::from_xyz(3, Element::C, 1.5, 0.0, 0.0);
//! let d = Atom::from_xyz(4, Element::C, 1.5, -1.0, 0.0);
//! let angle = dihedral_angle(&a, &b, &c, &d).unwrap();
//! assert!((angle - 180.0).abs() < 1e-6);
//! ```

pub mod core;
pub mod engine;
