//! Physical constants and fixed unit conversions

/// Faraday's constant F (C/mol)
pub const FARADAY_CONSTANT: f64 = 96485.0;

/// Molar mass of hypochlorous acid (g/mol)
pub const MOLAR_MASS_HOCL: f64 = 52.46;

/// Electrons transferred per mole of HOCl produced
///
/// 2Cl⁻ → Cl₂ + 2e⁻, then Cl₂ + H₂O ⇌ HOCl + HCl: one Cl₂ per HOCl.
pub const ELECTRONS_PER_HOCL: f64 = 2.0;

/// ppm is read as mg of solute per liter of solution
pub const MILLIGRAMS_PER_GRAM: f64 = 1000.0;

/// US fluid ounce (L)
pub const FLUID_OUNCE_TO_LITERS: f64 = 0.0295735;

/// Convert US fluid ounces to liters
#[inline]
pub fn fluid_ounces_to_liters(fluid_ounces: f64) -> f64 {
    fluid_ounces * FLUID_OUNCE_TO_LITERS
}
