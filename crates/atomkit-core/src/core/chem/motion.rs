use crate::core::error::ChemError;
use std::fmt;
use std::str::FromStr;

/// The kind of internal coordinate a vibrational or conformational motion acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InternalMotionType {
    /// Change in a bond length ("R").
    BondStretching,
    /// Change in a bond angle ("A").
    AngleBending,
    /// Rotation about a bond ("D").
    DihedralRotation,
}

impl InternalMotionType {
    pub const ALL: [InternalMotionType; 3] = [
        InternalMotionType::BondStretching,
        InternalMotionType::AngleBending,
        InternalMotionType::DihedralRotation,
    ];

    /// The one-letter symbol for this motion type.
    pub fn symbol(&self) -> &'static str {
        match self {
            InternalMotionType::BondStretching => "R",
            InternalMotionType::AngleBending => "A",
            InternalMotionType::DihedralRotation => "D",
        }
    }

    /// Number of atoms that define the internal coordinate.
    pub fn atoms_required(&self) -> usize {
        match self {
            InternalMotionType::BondStretching => 2,
            InternalMotionType::AngleBending => 3,
            InternalMotionType::DihedralRotation => 4,
        }
    }

    /// Looks a motion type up by its one-letter symbol.
    ///
    /// # Errors
    ///
    /// Returns [`ChemError::InvalidArgument`] if no motion type uses `symbol`.
    pub fn from_symbol(symbol: &str) -> Result<Self, ChemError> {
        Self::ALL
            .into_iter()
            .find(|motion| motion.symbol() == symbol)
            .ok_or_else(|| {
                ChemError::InvalidArgument(format!("No motion type for symbol {}", symbol))
            })
    }
}

impl fmt::Display for InternalMotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for InternalMotionType {
    type Err = ChemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bond-stretching" | "bond_stretching" | "stretch" => Ok(Self::BondStretching),
            "angle-bending" | "angle_bending" | "bend" => Ok(Self::AngleBending),
            "dihedral-rotation" | "dihedral_rotation" | "torsion" => Ok(Self::DihedralRotation),
            _ => Self::from_symbol(s.trim()),
        }
    }
}
