//! Mock physical models for testing
//!
//! Outputs are trivial functions of the inputs, so expected bands and grids
//! can be written down by hand.

use hocl_rs::physics::{ModelInputs, ModelOutputs, PhysicalModel};

// =================================================================================================
// Product: time = volume × resistance
// =================================================================================================

/// Time is `volume_liters × resistance_ohms`, power is `resistance_ohms`
pub struct ProductModel;

impl PhysicalModel for ProductModel {
    fn evaluate(&self, inputs: &ModelInputs) -> ModelOutputs {
        ModelOutputs {
            grams_needed: 0.0,
            moles_needed: 0.0,
            charge_coulombs: inputs.volume_liters(),
            current_amps: 1.0,
            time_seconds: inputs.volume_liters() * inputs.resistance_ohms(),
            power_watts: inputs.resistance_ohms(),
            secondary_current_amps: None,
        }
    }

    fn name(&self) -> &str {
        "Product"
    }

    fn description(&self) -> Option<&str> {
        Some("time = V x R")
    }
}

// =================================================================================================
// Constant
// =================================================================================================

/// Same outputs everywhere
pub struct ConstantModel {
    pub time_seconds: f64,
}

impl ConstantModel {
    pub fn new(time_seconds: f64) -> Self {
        Self { time_seconds }
    }
}

impl PhysicalModel for ConstantModel {
    fn evaluate(&self, _inputs: &ModelInputs) -> ModelOutputs {
        ModelOutputs {
            grams_needed: 1.0,
            moles_needed: 1.0,
            charge_coulombs: 1.0,
            current_amps: 1.0,
            time_seconds: self.time_seconds,
            power_watts: 1.0,
            secondary_current_amps: None,
        }
    }

    fn name(&self) -> &str {
        "Constant"
    }
}
