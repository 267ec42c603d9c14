use crate::core::chem::element::Element;
use crate::core::error::ChemError;
use crate::core::models::atom::Atom;
use crate::core::utils::geometry::distance;
use crate::engine::config::{DEFAULT_BOND_LENGTH, GeometryConfig};
use tracing::{debug, trace};

/// Distance-based bond detection.
///
/// Two atoms are bonded when their distance is at most `bond_length`. This is a
/// purely geometric criterion; no chemistry is checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondFinder {
    bond_length: f64,
}

impl Default for BondFinder {
    fn default() -> Self {
        Self::new(DEFAULT_BOND_LENGTH)
    }
}

impl BondFinder {
    /// Creates a finder with an explicit bond length.
    ///
    /// No validation is done here; go through [`GeometryConfigBuilder`] for a
    /// checked value.
    ///
    /// # Arguments
    ///
    /// * `bond_length` - The largest distance, in Angstroms, counted as a bond.
    ///
    /// [`GeometryConfigBuilder`]: crate::engine::config::GeometryConfigBuilder
    pub fn new(bond_length: f64) -> Self {
        Self { bond_length }
    }

    /// Creates a finder from a validated geometry configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration supplying the bond length.
    pub fn from_config(config: &GeometryConfig) -> Self {
        Self::new(config.bond_length)
    }

    /// Returns the bond length in Angstroms.
    pub fn bond_length(&self) -> f64 {
        self.bond_length
    }

    /// Returns whether the two atoms are within the bond length of each other.
    pub fn has_bond(&self, first: &Atom, second: &Atom) -> bool {
        distance(first, second) <= self.bond_length
    }

    /// Returns every atom in `candidates` of type `element` bonded to `target`,
    /// in candidate order.
    ///
    /// `target` itself is not skipped; leave it out of `candidates` when
    /// searching for its own element.
    pub fn find_bond_atoms<'a>(
        &self,
        target: &Atom,
        candidates: &'a [Atom],
        element: Element,
    ) -> Vec<&'a Atom> {
        let found: Vec<&Atom> = candidates
            .iter()
            .filter(|atom| atom.element == element && self.has_bond(target, atom))
            .collect();
        trace!(
            atom = target.id,
            %element,
            matches = found.len(),
            "Searched for bonded atoms."
        );
        found
    }

    /// Returns the single atom of type `element` bonded to `target`.
    ///
    /// # Errors
    ///
    /// * [`ChemError::NotFound`] - no candidate of that element is bonded.
    /// * [`ChemError::TooMany`] - more than one candidate is bonded.
    pub fn find_single_bond_atom<'a>(
        &self,
        target: &Atom,
        candidates: &'a [Atom],
        element: Element,
    ) -> Result<&'a Atom, ChemError> {
        let found = self.find_bond_atoms(target, candidates, element);
        match found.as_slice() {
            [single] => Ok(*single),
            [] => {
                debug!(atom = target.id, %element, "No bonded atom found.");
                Err(ChemError::NotFound(format!(
                    "No {} bonded to atom {}",
                    element.name().to_lowercase(),
                    target.id
                )))
            }
            many => {
                debug!(atom = target.id, %element, count = many.len(), "Ambiguous bond.");
                Err(ChemError::TooMany {
                    what: format!(
                        "{} atoms bonded to atom {}",
                        element.name().to_lowercase(),
                        target.id
                    ),
                    count: many.len(),
                })
            }
        }
    }

    /// Distance from `target` to the single bonded atom of type `element`.
    ///
    /// # Errors
    ///
    /// Same as [`BondFinder::find_single_bond_atom`].
    pub fn find_bond_distance(
        &self,
        target: &Atom,
        candidates: &[Atom],
        element: Element,
    ) -> Result<f64, ChemError> {
        self.find_single_bond_atom(target, candidates, element)
            .map(|bonded| distance(target, bonded))
    }
}

/// [`BondFinder::has_bond`] with the default bond length.
pub fn has_bond(first: &Atom, second: &Atom) -> bool {
    BondFinder::default().has_bond(first, second)
}

/// [`BondFinder::find_bond_atoms`] with the default bond length.
pub fn find_bond_atoms<'a>(
    target: &Atom,
    candidates: &'a [Atom],
    element: Element,
) -> Vec<&'a Atom> {
    BondFinder::default().find_bond_atoms(target, candidates, element)
}

/// [`BondFinder::find_single_bond_atom`] with the default bond length.
pub fn find_single_bond_atom<'a>(
    target: &Atom,
    candidates: &'a [Atom],
    element: Element,
) -> Result<&'a Atom, ChemError> {
    BondFinder::default().find_single_bond_atom(target, candidates, element)
}

/// [`BondFinder::find_bond_distance`] with the default bond length.
pub fn find_bond_distance(
    target: &Atom,
    candidates: &[Atom],
    element: Element,
) -> Result<f64, ChemError> {
    BondFinder::default().find_bond_distance(target, candidates, element)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carbon_at_origin() -> Atom {
        Atom::from_xyz(1, Element::C, 0.0, 0.0, 0.0)
    }

    fn fixture() -> Vec<Atom> {
        vec![
            Atom::from_xyz(2, Element::H, 1.09, 0.0, 0.0),
            Atom::from_xyz(3, Element::H, 0.0, 1.09, 0.0),
            Atom::from_xyz(4, Element::O, 0.0, 0.0, 1.43),
        ]
    }

    #[test]
    fn has_bond_is_inclusive_at_threshold() {
        let target = carbon_at_origin();
        let at_threshold = Atom::from_xyz(2, Element::C, DEFAULT_BOND_LENGTH, 0.0, 0.0);
        let beyond = Atom::from_xyz(3, Element::C, DEFAULT_BOND_LENGTH + 1e-9, 0.0, 0.0);

        assert!(has_bond(&target, &at_threshold));
        assert!(!has_bond(&target, &beyond));
    }

    #[test]
    fn has_bond_respects_custom_length() {
        let target = carbon_at_origin();
        let other = Atom::from_xyz(2, Element::C, 1.75, 0.0, 0.0);
        assert!(has_bond(&target, &other));
        assert!(!BondFinder::new(1.7).has_bond(&target, &other));
        assert_eq!(BondFinder::new(1.7).bond_length(), 1.7);
    }

    #[test]
    fn from_config_uses_configured_length() {
        let config = GeometryConfig { bond_length: 1.2 };
        assert_eq!(BondFinder::from_config(&config), BondFinder::new(1.2));
        assert_eq!(BondFinder::default().bond_length(), DEFAULT_BOND_LENGTH);
    }

    #[test]
    fn find_bond_atoms_preserves_candidate_order() {
        let target = carbon_at_origin();
        let candidates = fixture();
        let found = find_bond_atoms(&target, &candidates, Element::H);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, 2);
        assert_eq!(found[1].id, 3);
        assert!(std::ptr::eq(found[0], &candidates[0]));
    }

    #[test]
    fn find_bond_atoms_is_empty_when_nothing_bonds() {
        let target = carbon_at_origin();
        let candidates = vec![Atom::from_xyz(2, Element::H, 5.0, 0.0, 0.0)];
        assert!(find_bond_atoms(&target, &candidates, Element::H).is_empty());
        assert!(find_bond_atoms(&target, &candidates, Element::N).is_empty());
    }

    #[test]
    fn find_single_bond_atom_returns_unique_match() {
        let target = carbon_at_origin();
        let candidates = fixture();
        let oxygen = find_single_bond_atom(&target, &candidates, Element::O).unwrap();
        assert_eq!(oxygen.id, 4);
    }

    #[test]
    fn find_single_bond_atom_rejects_two_matches() {
        let target = carbon_at_origin();
        let candidates = fixture();
        let result = find_single_bond_atom(&target, &candidates, Element::H);
        assert!(matches!(result, Err(ChemError::TooMany { count: 2, .. })));
    }

    #[test]
    fn find_single_bond_atom_reports_missing_match() {
        let target = carbon_at_origin();
        let candidates: Vec<Atom> = fixture()
            .into_iter()
            .filter(|a| a.element != Element::H)
            .collect();
        let result = find_single_bond_atom(&target, &candidates, Element::H);
        assert!(matches!(result, Err(ChemError::NotFound(_))));
    }

    #[test]
    fn find_single_bond_atom_ignores_distant_atoms_of_same_element() {
        let target = carbon_at_origin();
        let candidates = vec![
            Atom::from_xyz(2, Element::O, 1.2, 0.0, 0.0),
            Atom::from_xyz(3, Element::O, 4.0, 0.0, 0.0),
        ];
        let found = find_single_bond_atom(&target, &candidates, Element::O).unwrap();
        assert_eq!(found.id, 2);
    }

    #[test]
    fn find_bond_distance_measures_to_single_match() {
        let target = carbon_at_origin();
        let candidates = fixture();
        let d = find_bond_distance(&target, &candidates, Element::O).unwrap();
        assert!((d - 1.43).abs() < 1e-12);

        assert!(matches!(
            find_bond_distance(&target, &candidates, Element::H),
            Err(ChemError::TooMany { .. })
        ));
        assert!(matches!(
            find_bond_distance(&target, &candidates, Element::N),
            Err(ChemError::NotFound(_))
        ));
    }
}
