use crate::core::chem::element::Element;
use crate::core::error::ChemError;
use nalgebra::{Point3, Vector3};
use std::cmp::Ordering;

/// A point particle with an identifier, an element, and Cartesian coordinates.
///
/// Atoms are plain values owned by whatever collection the caller builds (a
/// molecule's atom list, a parsed coordinate file). Geometry routines borrow
/// them; only [`Atom::center`] and [`Atom::translate`] change coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Identifier, expected to be unique within the caller's atom set.
    pub id: i32,
    /// The chemical element of this atom.
    pub element: Element,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom`.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier of the atom.
    /// * `element` - The chemical element.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(id: i32, element: Element, position: Point3<f64>) -> Self {
        Self {
            id,
            element,
            position,
        }
    }

    pub fn from_xyz(id: i32, element: Element, x: f64, y: f64, z: f64) -> Self {
        Self::new(id, element, Point3::new(x, y, z))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.position.z
    }

    pub fn set_x(&mut self, x: f64) {
        self.position.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.position.y = y;
    }

    pub fn set_z(&mut self, z: f64) {
        self.position.z = z;
    }

    /// Shifts the atom by `offset`.
    pub fn translate(&mut self, offset: &Vector3<f64>) {
        self.position += *offset;
    }

    /// Centers the atom by subtracting the first three values of `xyz` from its
    /// X, Y, and Z coordinates.
    ///
    /// Calling this twice with the same offset shifts the atom twice.
    ///
    /// # Errors
    ///
    /// Returns [`ChemError::InvalidArgument`] if `xyz` has fewer than three
    /// elements. The atom is left untouched in that case.
    pub fn center(&mut self, xyz: &[f64]) -> Result<(), ChemError> {
        match xyz {
            [x, y, z, ..] => {
                self.translate(&-Vector3::new(*x, *y, *z));
                Ok(())
            }
            _ => Err(ChemError::InvalidArgument(format!(
                "XYZ values {:?} have fewer than three elements",
                xyz
            ))),
        }
    }

    /// Compares two atoms by id, ascending.
    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// Sorts atoms in place by ascending id. Atoms with equal ids keep their
/// relative order.
pub fn sort_by_id(atoms: &mut [Atom]) {
    atoms.sort_by(Atom::cmp_by_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_stores_fields() {
        let atom = Atom::new(7, Element::C, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.id, 7);
        assert_eq!(atom.element, Element::C);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!((atom.x(), atom.y(), atom.z()), (1.0, 2.0, 3.0));
    }

    #[test]
    fn setters_update_single_coordinates() {
        let mut atom = Atom::from_xyz(1, Element::O, 0.0, 0.0, 0.0);
        atom.set_x(1.5);
        atom.set_y(-2.5);
        atom.set_z(3.25);
        assert_eq!(atom.position, Point3::new(1.5, -2.5, 3.25));
    }

    #[test]
    fn center_subtracts_offset() {
        let mut atom = Atom::from_xyz(1, Element::C, 2.0, 2.0, 2.0);
        atom.center(&[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(atom.position, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn center_is_not_idempotent() {
        let mut atom = Atom::from_xyz(1, Element::C, 2.0, 2.0, 2.0);
        atom.center(&[1.0, 1.0, 1.0]).unwrap();
        let after_first = atom.position;
        atom.center(&[1.0, 1.0, 1.0]).unwrap();

        assert_ne!(atom.position, after_first);
        assert_eq!(atom.position, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn center_ignores_values_past_the_third() {
        let mut atom = Atom::from_xyz(1, Element::N, 1.0, 2.0, 3.0);
        atom.center(&[1.0, 2.0, 3.0, 99.0]).unwrap();
        assert_eq!(atom.position, Point3::origin());
    }

    #[test]
    fn center_rejects_short_offsets_and_leaves_atom_unchanged() {
        let mut atom = Atom::from_xyz(1, Element::H, 2.0, 2.0, 2.0);
        let result = atom.center(&[1.0, 1.0]);

        assert!(matches!(result, Err(ChemError::InvalidArgument(_))));
        assert_eq!(atom.position, Point3::new(2.0, 2.0, 2.0));
        assert!(atom.center(&[]).is_err());
    }

    #[test]
    fn translate_adds_offset() {
        let mut atom = Atom::from_xyz(1, Element::H, 1.0, 1.0, 1.0);
        atom.translate(&Vector3::new(0.5, -1.0, 2.0));
        assert_eq!(atom.position, Point3::new(1.5, 0.0, 3.0));
    }

    #[test]
    fn cmp_by_id_orders_ascending() {
        let a1 = Atom::from_xyz(1, Element::C, 0.0, 0.0, 0.0);
        let a2 = Atom::from_xyz(2, Element::C, 0.0, 0.0, 0.0);
        assert_eq!(a1.cmp_by_id(&a2), Ordering::Less);
        assert_eq!(a2.cmp_by_id(&a1), Ordering::Greater);
        assert_eq!(a1.cmp_by_id(&a1.clone()), Ordering::Equal);
    }

    #[test]
    fn sort_by_id_sorts_unordered_list() {
        let a1 = Atom::from_xyz(1, Element::C, 0.0, 0.0, 0.0);
        let a2 = Atom::from_xyz(2, Element::O, 1.0, 0.0, 0.0);
        let mut atoms = vec![a2.clone(), a1.clone()];
        sort_by_id(&mut atoms);
        assert_eq!(atoms, vec![a1, a2]);
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::from_xyz(3, Element::S, 0.1, 0.2, 0.3);
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
