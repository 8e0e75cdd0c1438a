//! Derived quantities of one model evaluation

/// Quantities derived from one [`ModelInputs`](crate::physics::ModelInputs)
///
/// All values are in SI units except `grams_needed`. Nothing is rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelOutputs {
    /// HOCl mass to dissolve (g)
    pub grams_needed: f64,

    /// HOCl amount to produce (mol)
    pub moles_needed: f64,

    /// Charge to pass through the cell, efficiency included (C)
    pub charge_coulombs: f64,

    /// Cell current at the applied voltage (A)
    pub current_amps: f64,

    /// Time to reach the target concentration at constant current (s)
    pub time_seconds: f64,

    /// Electrical power drawn by the cell (W)
    pub power_watts: f64,

    /// Current drawn from the downstream supply, when one is configured (A)
    pub secondary_current_amps: Option<f64>,
}

impl ModelOutputs {
    /// Generation time in minutes
    pub fn time_minutes(&self) -> f64 {
        self.time_seconds / 60.0
    }

    /// Energy delivered to the cell over the generation time (J)
    pub fn energy_joules(&self) -> f64 {
        self.power_watts * self.time_seconds
    }

    /// True when every quantity is finite
    pub fn is_finite(&self) -> bool {
        [
            self.grams_needed,
            self.moles_needed,
            self.charge_coulombs,
            self.current_amps,
            self.time_seconds,
            self.power_watts,
        ]
        .iter()
        .all(|x| x.is_finite())
            && self.secondary_current_amps.is_none_or(f64::is_finite)
    }
}
