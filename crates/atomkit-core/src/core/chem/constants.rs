//! Physical constants used in thermochemistry and spectroscopy calculations.

/// Gas constant in J/(K·mol).
pub const GAS_JOULES: f64 = 8.314;
/// Kelvin at 25 °C.
pub const KELVIN_25C: f64 = 298.15;
/// Boltzmann's constant, kb (m² kg / s² K).
pub const BOLTZ: f64 = 1.3806503e-23;
/// Planck's constant, h (m² kg / s).
pub const PLANCK: f64 = 6.626068e-34;
/// Universal gas constant, R, in kcal/(K·mol).
pub const GAS_KCAL: f64 = 1.9872156e-3;
/// Speed of light, c, in cm/s.
pub const LIGHT_CM: u64 = 29_979_245_800;
/// Avogadro's number, Na.
pub const AVOGADRO: f64 = 6.0221415e23;
/// Electron mass in kg.
pub const MASS_ELEC_KG: f64 = 0.910938e-30;

/// Factors for converting between units.
pub mod conversions {
    use super::AVOGADRO;

    pub const HARTREE_TO_KCALTH: f64 = 627.509469;
    /// Thermochemical calorie to joule.
    pub const CALTH_TO_JOULE: f64 = 4.184;
    /// One atmosphere in pascals.
    pub const ATM_TO_PASCALS: u32 = 101_325;
    /// Hartrees per particle to joules per mole.
    pub const HARTREES_TO_JOULES: f64 = HARTREE_TO_KCALTH * CALTH_TO_JOULE * 1000.0 / AVOGADRO;
}

#[cfg(test)]
mod tests {
    use super::conversions::*;
    use super::*;

    #[test]
    fn gas_constants_agree_across_units() {
        let kcal_from_joules = GAS_JOULES / CALTH_TO_JOULE / 1000.0;
        assert!((kcal_from_joules - GAS_KCAL).abs() < 1e-6);
    }

    #[test]
    fn hartree_to_joule_factor_is_derived_from_components() {
        let expected = 627.509469 * 4.184 * 1000.0 / 6.0221415e23;
        assert_eq!(HARTREES_TO_JOULES, expected);
        assert!(HARTREES_TO_JOULES > 4.3e-18 && HARTREES_TO_JOULES < 4.4e-18);
    }

    #[test]
    fn boltzmann_is_gas_constant_over_avogadro() {
        assert!((BOLTZ * AVOGADRO - GAS_JOULES).abs() < 1e-3);
    }
}
