use crate::core::error::ChemError;
use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;

/// Highest atomic number present in the element table.
pub const MAX_ATOMIC_NUMBER: u8 = 82;

/// A chemical element from the fixed reference table.
///
/// The table covers hydrogen through barium and lutetium through lead; the
/// lanthanides (57-70) are not part of it. The discriminant of each variant is
/// its atomic number, so `element as u8` is always the atomic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He,
    Li,
    Be,
    B,
    C,
    N,
    O,
    F,
    Ne,
    Na,
    Mg,
    Al,
    Si,
    P,
    S,
    Cl,
    Ar,
    K,
    Ca,
    Sc,
    Ti,
    V,
    Cr,
    Mn,
    Fe,
    Co,
    Ni,
    Cu,
    Zn,
    Ga,
    Ge,
    As,
    Se,
    Br,
    Kr,
    Rb,
    Sr,
    Y,
    Zr,
    Nb,
    Mo,
    Tc,
    Ru,
    Rh,
    Pd,
    Ag,
    Cd,
    In,
    Sn,
    Sb,
    Te,
    I,
    Xe,
    Cs,
    Ba,
    Lu = 71,
    Hf,
    Ta,
    W,
    Re,
    Os,
    Ir,
    Pt,
    Au,
    Hg,
    Tl,
    Pb,
}

impl Element {
    /// Every element in the table, in ascending atomic-number order.
    pub const ALL: [Element; 68] = [
        Element::H, Element::He, Element::Li, Element::Be, Element::B, Element::C, Element::N,
        Element::O, Element::F, Element::Ne, Element::Na, Element::Mg, Element::Al, Element::Si,
        Element::P, Element::S, Element::Cl, Element::Ar, Element::K, Element::Ca, Element::Sc,
        Element::Ti, Element::V, Element::Cr, Element::Mn, Element::Fe, Element::Co,
        Element::Ni, Element::Cu, Element::Zn, Element::Ga, Element::Ge, Element::As,
        Element::Se, Element::Br, Element::Kr, Element::Rb, Element::Sr, Element::Y,
        Element::Zr, Element::Nb, Element::Mo, Element::Tc, Element::Ru, Element::Rh,
        Element::Pd, Element::Ag, Element::Cd, Element::In, Element::Sn, Element::Sb,
        Element::Te, Element::I, Element::Xe, Element::Cs, Element::Ba, Element::Lu,
        Element::Hf, Element::Ta, Element::W, Element::Re, Element::Os, Element::Ir,
        Element::Pt, Element::Au, Element::Hg, Element::Tl, Element::Pb,
    ];

    #[inline]
    pub fn atomic_number(&self) -> u8 {
        *self as u8
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::He => "He",
            Element::Li => "Li",
            Element::Be => "Be",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Ne => "Ne",
            Element::Na => "Na",
            Element::Mg => "Mg",
            Element::Al => "Al",
            Element::Si => "Si",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Ar => "Ar",
            Element::K => "K",
            Element::Ca => "Ca",
            Element::Sc => "Sc",
            Element::Ti => "Ti",
            Element::V => "V",
            Element::Cr => "Cr",
            Element::Mn => "Mn",
            Element::Fe => "Fe",
            Element::Co => "Co",
            Element::Ni => "Ni",
            Element::Cu => "Cu",
            Element::Zn => "Zn",
            Element::Ga => "Ga",
            Element::Ge => "Ge",
            Element::As => "As",
            Element::Se => "Se",
            Element::Br => "Br",
            Element::Kr => "Kr",
            Element::Rb => "Rb",
            Element::Sr => "Sr",
            Element::Y => "Y",
            Element::Zr => "Zr",
            Element::Nb => "Nb",
            Element::Mo => "Mo",
            Element::Tc => "Tc",
            Element::Ru => "Ru",
            Element::Rh => "Rh",
            Element::Pd => "Pd",
            Element::Ag => "Ag",
            Element::Cd => "Cd",
            Element::In => "In",
            Element::Sn => "Sn",
            Element::Sb => "Sb",
            Element::Te => "Te",
            Element::I => "I",
            Element::Xe => "Xe",
            Element::Cs => "Cs",
            Element::Ba => "Ba",
            Element::Lu => "Lu",
            Element::Hf => "Hf",
            Element::Ta => "Ta",
            Element::W => "W",
            Element::Re => "Re",
            Element::Os => "Os",
            Element::Ir => "Ir",
            Element::Pt => "Pt",
            Element::Au => "Au",
            Element::Hg => "Hg",
            Element::Tl => "Tl",
            Element::Pb => "Pb",
        }
    }

    /// The English name of the element.
    pub fn name(&self) -> &'static str {
        match self {
            Element::H => "Hydrogen",
            Element::He => "Helium",
            Element::Li => "Lithium",
            Element::Be => "Beryllium",
            Element::B => "Boron",
            Element::C => "Carbon",
            Element::N => "Nitrogen",
            Element::O => "Oxygen",
            Element::F => "Fluorine",
            Element::Ne => "Neon",
            Element::Na => "Sodium",
            Element::Mg => "Magnesium",
            Element::Al => "Aluminium",
            Element::Si => "Silicon",
            Element::P => "Phosphorus",
            Element::S => "Sulfur",
            Element::Cl => "Chlorine",
            Element::Ar => "Argon",
            Element::K => "Potassium",
            Element::Ca => "Calcium",
            Element::Sc => "Scandium",
            Element::Ti => "Titanium",
            Element::V => "Vanadium",
            Element::Cr => "Chromium",
            Element::Mn => "Manganese",
            Element::Fe => "Iron",
            Element::Co => "Cobalt",
            Element::Ni => "Nickel",
            Element::Cu => "Copper",
            Element::Zn => "Zinc",
            Element::Ga => "Gallium",
            Element::Ge => "Germanium",
            Element::As => "Arsenic",
            Element::Se => "Selenium",
            Element::Br => "Bromine",
            Element::Kr => "Krypton",
            Element::Rb => "Rubidium",
            Element::Sr => "Strontium",
            Element::Y => "Yttrium",
            Element::Zr => "Zirconium",
            Element::Nb => "Niobium",
            Element::Mo => "Molybdenum",
            Element::Tc => "Technetium",
            Element::Ru => "Ruthenium",
            Element::Rh => "Rhodium",
            Element::Pd => "Palladium",
            Element::Ag => "Silver",
            Element::Cd => "Cadmium",
            Element::In => "Indium",
            Element::Sn => "Tin",
            Element::Sb => "Antimony",
            Element::Te => "Tellurium",
            Element::I => "Iodine",
            Element::Xe => "Xenon",
            Element::Cs => "Cesium",
            Element::Ba => "Barium",
            Element::Lu => "Lutetium",
            Element::Hf => "Hafnium",
            Element::Ta => "Tantalum",
            Element::W => "Tungsten",
            Element::Re => "Rhenium",
            Element::Os => "Osmium",
            Element::Ir => "Iridium",
            Element::Pt => "Platinum",
            Element::Au => "Gold",
            Element::Hg => "Mercury",
            Element::Tl => "Thallium",
            Element::Pb => "Lead",
        }
    }

    /// Standard atomic mass in unified atomic mass units.
    pub fn atomic_mass(&self) -> f64 {
        match self {
            Element::H => 1.00794,
            Element::He => 4.002602,
            Element::Li => 6.941,
            Element::Be => 9.012182,
            Element::B => 10.811,
            Element::C => 12.0107,
            Element::N => 14.0067,
            Element::O => 15.9994,
            Element::F => 18.9984032,
            Element::Ne => 20.1797,
            Element::Na => 22.98976928,
            Element::Mg => 24.3050,
            Element::Al => 26.9815386,
            Element::Si => 28.0855,
            Element::P => 30.973762,
            Element::S => 32.065,
            Element::Cl => 35.453,
            Element::Ar => 39.948,
            Element::K => 39.0983,
            Element::Ca => 40.078,
            Element::Sc => 44.956,
            Element::Ti => 47.867,
            Element::V => 50.942,
            Element::Cr => 51.996,
            Element::Mn => 54.938,
            Element::Fe => 55.845,
            Element::Co => 58.933,
            Element::Ni => 58.693,
            Element::Cu => 63.546,
            Element::Zn => 65.38,
            Element::Ga => 69.723,
            Element::Ge => 72.630,
            Element::As => 74.922,
            Element::Se => 78.971,
            Element::Br => 79.904,
            Element::Kr => 83.798,
            Element::Rb => 85.468,
            Element::Sr => 87.62,
            Element::Y => 88.906,
            Element::Zr => 91.224,
            Element::Nb => 92.906,
            Element::Mo => 95.95,
            Element::Tc => 98.0,
            Element::Ru => 101.07,
            Element::Rh => 102.91,
            Element::Pd => 106.42,
            Element::Ag => 107.87,
            Element::Cd => 112.41,
            Element::In => 114.82,
            Element::Sn => 118.71,
            Element::Sb => 121.76,
            Element::Te => 127.60,
            Element::I => 126.90,
            Element::Xe => 131.29,
            Element::Cs => 132.91,
            Element::Ba => 137.33,
            Element::Lu => 174.97,
            Element::Hf => 178.49,
            Element::Ta => 180.95,
            Element::W => 183.84,
            Element::Re => 186.21,
            Element::Os => 190.23,
            Element::Ir => 192.22,
            Element::Pt => 195.08,
            Element::Au => 196.97,
            Element::Hg => 200.59,
            Element::Tl => 204.38,
            Element::Pb => 207.2,
        }
    }

    /// Looks an element up by atomic number.
    ///
    /// # Errors
    ///
    /// Returns [`ChemError::InvalidArgument`] if no element in the table has the
    /// given number.
    pub fn from_atomic_number(number: u32) -> Result<Self, ChemError> {
        usize::try_from(number)
            .ok()
            .and_then(|idx| BY_NUMBER.get(idx).copied().flatten())
            .ok_or_else(|| ChemError::InvalidArgument(format!("No element number {}", number)))
    }

    /// Looks an element up by its exact, case-sensitive chemical symbol
    /// (e.g. `"Cl"`). Surrounding whitespace is ignored.
    pub fn from_symbol(symbol: &str) -> Result<Self, ChemError> {
        SYMBOLS
            .get(symbol.trim())
            .copied()
            .ok_or_else(|| ChemError::InvalidArgument(format!("No element symbol '{}'", symbol)))
    }

    /// Looks an element up by English name, ignoring case (e.g. `"ARGON"`).
    pub fn from_name(name: &str) -> Result<Self, ChemError> {
        NAMES
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ChemError::InvalidArgument(format!("No element named '{}'", name)))
    }
}

const BY_NUMBER: [Option<Element>; MAX_ATOMIC_NUMBER as usize + 1] = {
    let mut table = [None; MAX_ATOMIC_NUMBER as usize + 1];
    let mut i = 0;
    while i < Element::ALL.len() {
        let element = Element::ALL[i];
        table[element as usize] = Some(element);
        i += 1;
    }
    table
};

static SYMBOLS: Map<&'static str, Element> = phf_map! {
    "H" => Element::H, "He" => Element::He, "Li" => Element::Li, "Be" => Element::Be,
    "B" => Element::B, "C" => Element::C, "N" => Element::N, "O" => Element::O,
    "F" => Element::F, "Ne" => Element::Ne, "Na" => Element::Na, "Mg" => Element::Mg,
    "Al" => Element::Al, "Si" => Element::Si, "P" => Element::P, "S" => Element::S,
    "Cl" => Element::Cl, "Ar" => Element::Ar, "K" => Element::K, "Ca" => Element::Ca,
    "Sc" => Element::Sc, "Ti" => Element::Ti, "V" => Element::V, "Cr" => Element::Cr,
    "Mn" => Element::Mn, "Fe" => Element::Fe, "Co" => Element::Co, "Ni" => Element::Ni,
    "Cu" => Element::Cu, "Zn" => Element::Zn, "Ga" => Element::Ga, "Ge" => Element::Ge,
    "As" => Element::As, "Se" => Element::Se, "Br" => Element::Br, "Kr" => Element::Kr,
    "Rb" => Element::Rb, "Sr" => Element::Sr, "Y" => Element::Y, "Zr" => Element::Zr,
    "Nb" => Element::Nb, "Mo" => Element::Mo, "Tc" => Element::Tc, "Ru" => Element::Ru,
    "Rh" => Element::Rh, "Pd" => Element::Pd, "Ag" => Element::Ag, "Cd" => Element::Cd,
    "In" => Element::In, "Sn" => Element::Sn, "Sb" => Element::Sb, "Te" => Element::Te,
    "I" => Element::I, "Xe" => Element::Xe, "Cs" => Element::Cs, "Ba" => Element::Ba,
    "Lu" => Element::Lu, "Hf" => Element::Hf, "Ta" => Element::Ta, "W" => Element::W,
    "Re" => Element::Re, "Os" => Element::Os, "Ir" => Element::Ir, "Pt" => Element::Pt,
    "Au" => Element::Au, "Hg" => Element::Hg, "Tl" => Element::Tl, "Pb" => Element::Pb,
};

static NAMES: Map<&'static str, Element> = phf_map! {
    "hydrogen" => Element::H,
    "helium" => Element::He,
    "lithium" => Element::Li,
    "beryllium" => Element::Be,
    "boron" => Element::B,
    "carbon" => Element::C,
    "nitrogen" => Element::N,
    "oxygen" => Element::O,
    "fluorine" => Element::F,
    "neon" => Element::Ne,
    "sodium" => Element::Na,
    "magnesium" => Element::Mg,
    "aluminium" => Element::Al,
    "silicon" => Element::Si,
    "phosphorus" => Element::P,
    "sulfur" => Element::S,
    "chlorine" => Element::Cl,
    "argon" => Element::Ar,
    "potassium" => Element::K,
    "calcium" => Element::Ca,
    "scandium" => Element::Sc,
    "titanium" => Element::Ti,
    "vanadium" => Element::V,
    "chromium" => Element::Cr,
    "manganese" => Element::Mn,
    "iron" => Element::Fe,
    "cobalt" => Element::Co,
    "nickel" => Element::Ni,
    "copper" => Element::Cu,
    "zinc" => Element::Zn,
    "gallium" => Element::Ga,
    "germanium" => Element::Ge,
    "arsenic" => Element::As,
    "selenium" => Element::Se,
    "bromine" => Element::Br,
    "krypton" => Element::Kr,
    "rubidium" => Element::Rb,
    "strontium" => Element::Sr,
    "yttrium" => Element::Y,
    "zirconium" => Element::Zr,
    "niobium" => Element::Nb,
    "molybdenum" => Element::Mo,
    "technetium" => Element::Tc,
    "ruthenium" => Element::Ru,
    "rhodium" => Element::Rh,
    "palladium" => Element::Pd,
    "silver" => Element::Ag,
    "cadmium" => Element::Cd,
    "indium" => Element::In,
    "tin" => Element::Sn,
    "antimony" => Element::Sb,
    "tellurium" => Element::Te,
    "iodine" => Element::I,
    "xenon" => Element::Xe,
    "cesium" => Element::Cs,
    "barium" => Element::Ba,
    "lutetium" => Element::Lu,
    "hafnium" => Element::Hf,
    "tantalum" => Element::Ta,
    "tungsten" => Element::W,
    "rhenium" => Element::Re,
    "osmium" => Element::Os,
    "iridium" => Element::Ir,
    "platinum" => Element::Pt,
    "gold" => Element::Au,
    "mercury" => Element::Hg,
    "thallium" => Element::Tl,
    "lead" => Element::Pb,
    "aluminum" => Element::Al,
    "phosphorous" => Element::P,
    "caesium" => Element::Cs,
};

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ChemError;

    /// Parses a chemical symbol, an English name, or an atomic number.
    ///
    /// Symbols are matched exactly first, then with normalized capitalization
    /// (`"CL"` and `"cl"` both give chlorine).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Element::from_atomic_number(number);
        }
        if let Some(element) = SYMBOLS.get(trimmed) {
            return Ok(*element);
        }
        let mut chars = trimmed.chars();
        let normalized: String = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        };
        SYMBOLS
            .get(normalized.as_str())
            .copied()
            .or_else(|| Element::from_name(trimmed).ok())
            .ok_or_else(|| ChemError::InvalidArgument(format!("Unknown element '{}'", s)))
    }
}
