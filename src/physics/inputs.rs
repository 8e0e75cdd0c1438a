//! Validated model inputs
//!
//! A [`ModelInputs`] can only be built through [`ModelInputs::new`], which
//! checks every precondition of the model. Anything that reaches
//! [`PhysicalModel::evaluate`](crate::physics::PhysicalModel::evaluate) is
//! therefore inside the domain of the equations and yields finite outputs.

use crate::error::{InvalidParameterError, Parameter};
use crate::physics::constants::{
    fluid_ounces_to_liters, ELECTRONS_PER_HOCL, FARADAY_CONSTANT, MILLIGRAMS_PER_GRAM,
    MOLAR_MASS_HOCL,
};

/// One point in parameter space
///
/// # Example
///
/// ```rust
/// use hocl_rs::physics::ModelInputs;
///
/// let inputs = ModelInputs::new(100.0, 0.1, 0.5, 7.2, 1.4).unwrap();
/// assert_eq!(inputs.voltage(), 7.2);
///
/// let err = ModelInputs::new(100.0, 0.1, 0.5, 7.2, 0.0).unwrap_err();
/// assert_eq!(err.field.name(), "resistance_ohms");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInputs {
    /// Target HOCl concentration (mg/L)
    target_ppm: f64,
    /// Fluid volume (L)
    volume_liters: f64,
    /// Faradaic efficiency η in ]0, 1]
    faradaic_efficiency: f64,
    /// Applied load voltage (V)
    voltage: f64,
    /// Electrode circuit resistance (Ω)
    resistance_ohms: f64,
}

impl ModelInputs {
    /// Build and validate a parameter tuple
    ///
    /// Fields are checked in argument order; the first violation is returned.
    ///
    /// # Errors
    ///
    /// [`InvalidParameterError`] when a value is non-finite or outside its
    /// domain, or when the combination drives no current or would overflow
    /// the current, mass, charge, time or power.
    pub fn new(
        target_ppm: f64,
        volume_liters: f64,
        faradaic_efficiency: f64,
        voltage: f64,
        resistance_ohms: f64,
    ) -> Result<Self, InvalidParameterError> {
        positive(Parameter::TargetPpm, target_ppm)?;
        positive(Parameter::VolumeLiters, volume_liters)?;
        fraction(Parameter::FaradaicEfficiency, faradaic_efficiency)?;
        positive(Parameter::Voltage, voltage)?;
        positive(Parameter::ResistanceOhms, resistance_ohms)?;

        let current_amps = voltage / resistance_ohms;
        if !current_amps.is_finite() {
            return Err(InvalidParameterError::new(
                Parameter::ResistanceOhms,
                resistance_ohms,
                "drives a non-finite current at this voltage",
            ));
        }
        if current_amps == 0.0 {
            return Err(InvalidParameterError::new(
                Parameter::ResistanceOhms,
                resistance_ohms,
                "drives no current at this voltage",
            ));
        }
        if !(target_ppm * volume_liters).is_finite() {
            return Err(InvalidParameterError::new(
                Parameter::VolumeLiters,
                volume_liters,
                "dissolved mass overflows at this concentration",
            ));
        }

        // Same operation order as the electrolysis model, so a pass here
        // means its outputs are finite too
        let charge_coulombs = target_ppm * volume_liters / MILLIGRAMS_PER_GRAM / MOLAR_MASS_HOCL
            * ELECTRONS_PER_HOCL
            * FARADAY_CONSTANT
            / faradaic_efficiency;
        if !charge_coulombs.is_finite() {
            return Err(InvalidParameterError::new(
                Parameter::FaradaicEfficiency,
                faradaic_efficiency,
                "required charge overflows at this efficiency",
            ));
        }
        if !(charge_coulombs / current_amps).is_finite() {
            return Err(InvalidParameterError::new(
                Parameter::ResistanceOhms,
                resistance_ohms,
                "electrolysis time overflows at this current",
            ));
        }
        if !(voltage * current_amps).is_finite() {
            return Err(InvalidParameterError::new(
                Parameter::Voltage,
                voltage,
                "power overflows at this resistance",
            ));
        }

        Ok(Self {
            target_ppm,
            volume_liters,
            faradaic_efficiency,
            voltage,
            resistance_ohms,
        })
    }

    /// Same as [`ModelInputs::new`] with the volume given in US fluid ounces
    pub fn from_fluid_ounces(
        target_ppm: f64,
        volume_fluid_ounces: f64,
        faradaic_efficiency: f64,
        voltage: f64,
        resistance_ohms: f64,
    ) -> Result<Self, InvalidParameterError> {
        Self::new(
            target_ppm,
            fluid_ounces_to_liters(volume_fluid_ounces),
            faradaic_efficiency,
            voltage,
            resistance_ohms,
        )
    }

    /// Copy with another volume, re-validated
    pub fn with_volume_liters(&self, volume_liters: f64) -> Result<Self, InvalidParameterError> {
        Self::new(
            self.target_ppm,
            volume_liters,
            self.faradaic_efficiency,
            self.voltage,
            self.resistance_ohms,
        )
    }

    /// Copy with another resistance, re-validated
    pub fn with_resistance_ohms(&self, resistance_ohms: f64) -> Result<Self, InvalidParameterError> {
        Self::new(
            self.target_ppm,
            self.volume_liters,
            self.faradaic_efficiency,
            self.voltage,
            resistance_ohms,
        )
    }

    /// Target HOCl concentration (mg/L)
    pub fn target_ppm(&self) -> f64 {
        self.target_ppm
    }

    /// Fluid volume (L)
    pub fn volume_liters(&self) -> f64 {
        self.volume_liters
    }

    /// Faradaic efficiency η
    pub fn faradaic_efficiency(&self) -> f64 {
        self.faradaic_efficiency
    }

    /// Applied load voltage (V)
    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    /// Electrode circuit resistance (Ω)
    pub fn resistance_ohms(&self) -> f64 {
        self.resistance_ohms
    }
}

/// Finite and strictly positive
pub(crate) fn positive(field: Parameter, value: f64) -> Result<(), InvalidParameterError> {
    if !value.is_finite() {
        return Err(InvalidParameterError::new(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(InvalidParameterError::new(field, value, "must be strictly positive"));
    }
    Ok(())
}

/// Finite and in ]0, 1]
pub(crate) fn fraction(field: Parameter, value: f64) -> Result<(), InvalidParameterError> {
    if !value.is_finite() {
        return Err(InvalidParameterError::new(field, value, "must be finite"));
    }
    if value <= 0.0 || value > 1.0 {
        return Err(InvalidParameterError::new(field, value, "must lie in ]0, 1]"));
    }
    Ok(())
}
