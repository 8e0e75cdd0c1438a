//! HOCl generation by brine electrolysis
//!
//! Chlorine is produced at the anode and hydrolyses to hypochlorous acid:
//!
//! ```text
//! 2Cl⁻ → Cl₂ + 2e⁻
//! Cl₂ + H₂O ⇌ HOCl + HCl
//! ```
//!
//! One mole of Cl₂ yields one mole of HOCl, so z = 2 electrons per HOCl.
//! Combining Faraday's law with Ohm's law gives the generation time
//!
//! ```text
//! t = ppm · V · z · F / (1000 · I · M_HOCl · η),    I = U / R
//! ```
//!
//! # Example
//!
//! ```rust
//! use hocl_rs::models::{HoclElectrolysis, SupplyConfig};
//! use hocl_rs::physics::{ModelInputs, PhysicalModel};
//!
//! let model = HoclElectrolysis::new().with_supply(SupplyConfig::default());
//! let inputs = ModelInputs::new(100.0, 0.1, 0.5, 7.2, 1.4).unwrap();
//! let outputs = model.evaluate(&inputs);
//!
//! assert!(outputs.secondary_current_amps.is_some());
//! ```

use crate::classification::OutputField;
use crate::error::{InvalidParameterError, Parameter};
use crate::physics::constants::{
    ELECTRONS_PER_HOCL, FARADAY_CONSTANT, MILLIGRAMS_PER_GRAM, MOLAR_MASS_HOCL,
};
use crate::physics::inputs::{fraction, positive};
use crate::physics::{ModelInputs, ModelOutputs, PhysicalModel};

/// Downstream supply feeding the cell (battery + converter)
///
/// Used to report the current drawn from the battery rather than the cell
/// current: `I_supply = P / U_supply / η_supply`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupplyConfig {
    /// Supply voltage (V)
    voltage: f64,
    /// Conversion efficiency in ]0, 1]
    efficiency: f64,
}

impl SupplyConfig {
    /// Create a validated supply configuration
    ///
    /// # Errors
    ///
    /// [`InvalidParameterError`] on a non-positive voltage or an efficiency
    /// outside ]0, 1].
    pub fn new(voltage: f64, efficiency: f64) -> Result<Self, InvalidParameterError> {
        positive(Parameter::SupplyVoltage, voltage)?;
        fraction(Parameter::SupplyEfficiency, efficiency)?;
        Ok(Self { voltage, efficiency })
    }

    /// Supply voltage (V)
    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    /// Conversion efficiency
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }
}

impl Default for SupplyConfig {
    /// Single Li-ion cell (3.7 V nominal) through a 90 % boost converter
    fn default() -> Self {
        Self {
            voltage: 3.7,
            efficiency: 0.9,
        }
    }
}

/// Closed-form HOCl electrolysis estimate
#[derive(Debug, Clone, Default)]
pub struct HoclElectrolysis {
    /// Optional downstream supply for the secondary current
    supply: Option<SupplyConfig>,
}

impl HoclElectrolysis {
    /// Create the model without a downstream supply
    pub fn new() -> Self {
        Self { supply: None }
    }

    /// Report the current drawn from `supply` as well
    pub fn with_supply(mut self, supply: SupplyConfig) -> Self {
        self.supply = Some(supply);
        self
    }

    /// Configured downstream supply
    pub fn supply(&self) -> Option<&SupplyConfig> {
        self.supply.as_ref()
    }
}

impl PhysicalModel for HoclElectrolysis {
    fn evaluate(&self, inputs: &ModelInputs) -> ModelOutputs {
        let grams_needed = inputs.target_ppm() * inputs.volume_liters() / MILLIGRAMS_PER_GRAM;
        let moles_needed = grams_needed / MOLAR_MASS_HOCL;
        let charge_coulombs =
            moles_needed * ELECTRONS_PER_HOCL * FARADAY_CONSTANT / inputs.faradaic_efficiency();

        let current_amps = inputs.voltage() / inputs.resistance_ohms();
        let time_seconds = charge_coulombs / current_amps;
        let power_watts = inputs.voltage() * current_amps;

        let secondary_current_amps = self
            .supply
            .map(|supply| power_watts / supply.voltage / supply.efficiency);

        ModelOutputs {
            grams_needed,
            moles_needed,
            charge_coulombs,
            current_amps,
            time_seconds,
            power_watts,
            secondary_current_amps,
        }
    }

    fn name(&self) -> &str {
        "HOCl Electrolysis"
    }

    fn description(&self) -> Option<&str> {
        Some(
            "Faraday's law at constant current: chloride oxidation to Cl2, \
             hydrolysis to HOCl, z = 2, scaled by faradaic efficiency.",
        )
    }
    fn reports(&self, field: OutputField) -> bool {
        field.is_always_reported() || self.supply.is_some()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
