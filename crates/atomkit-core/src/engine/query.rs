use crate::core::chem::element::Element;
use crate::core::error::ChemError;
use crate::core::models::atom::Atom;
use tracing::trace;

/// Returns all atoms of type `element`, in input order.
///
/// The returned references point into `atoms`; nothing is copied.
pub fn find_all_of_type(element: Element, atoms: &[Atom]) -> Vec<&Atom> {
    let found: Vec<&Atom> = atoms.iter().filter(|atom| atom.element == element).collect();
    trace!(%element, matches = found.len(), "Filtered atoms by element.");
    found
}

/// Returns the single atom of type `element`.
///
/// # Errors
///
/// * [`ChemError::NotFound`] - no atom has that element.
/// * [`ChemError::TooMany`] - more than one atom has it.
pub fn find_single_of_type(element: Element, atoms: &[Atom]) -> Result<&Atom, ChemError> {
    match find_all_of_type(element, atoms).as_slice() {
        [single] => Ok(*single),
        [] => Err(ChemError::NotFound(format!(
            "No atoms of type {} found",
            element.name()
        ))),
        many => Err(ChemError::TooMany {
            what: format!("atoms of type {}", element.name()),
            count: many.len(),
        }),
    }
}

/// Returns the atom with the given id, if any.
pub fn find_by_id(id: i32, atoms: &[Atom]) -> Result<&Atom, ChemError> {
    atoms
        .iter()
        .find(|atom| atom.id == id)
        .ok_or_else(|| ChemError::NotFound(format!("No atom with id {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms() -> Vec<Atom> {
        vec![
            Atom::from_xyz(1, Element::C, 0.0, 0.0, 0.0),
            Atom::from_xyz(2, Element::H, 1.0, 0.0, 0.0),
            Atom::from_xyz(3, Element::O, 2.0, 0.0, 0.0),
            Atom::from_xyz(4, Element::H, 3.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn find_all_of_type_preserves_order_and_references() {
        let atoms = atoms();
        let hydrogens = find_all_of_type(Element::H, &atoms);

        assert_eq!(hydrogens.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2, 4]);
        assert!(std::ptr::eq(hydrogens[0], &atoms[1]));
        assert!(std::ptr::eq(hydrogens[1], &atoms[3]));
    }

    #[test]
    fn find_all_of_type_returns_empty_when_nothing_matches() {
        let atoms = atoms();
        assert!(find_all_of_type(Element::N, &atoms).is_empty());
        assert!(find_all_of_type(Element::C, &[]).is_empty());
    }

    #[test]
    fn find_single_of_type_returns_unique_atom() {
        let atoms = atoms();
        assert_eq!(find_single_of_type(Element::O, &atoms).unwrap().id, 3);
    }

    #[test]
    fn find_single_of_type_reports_missing_and_ambiguous() {
        let atoms = atoms();
        assert!(matches!(
            find_single_of_type(Element::N, &atoms),
            Err(ChemError::NotFound(_))
        ));
        assert!(matches!(
            find_single_of_type(Element::H, &atoms),
            Err(ChemError::TooMany { count: 2, .. })
        ));
    }

    #[test]
    fn find_by_id_looks_up_atoms() {
        let atoms = atoms();
        assert_eq!(find_by_id(3, &atoms).unwrap().element, Element::O);
        assert!(matches!(find_by_id(9, &atoms), Err(ChemError::NotFound(_))));
    }
}
