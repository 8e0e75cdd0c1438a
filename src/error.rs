//! Error taxonomy
//!
//! Every failure is raised where it is detected and aborts the whole
//! operation. A sweep never returns a partial grid.
//!
//! - [`InvalidParameterError`]: a scalar violates a model precondition
//! - [`InvalidSweepSpecError`]: a malformed axis or an oversized grid
//! - [`SweepError`]: everything a sweep can fail with

use std::fmt;

use thiserror::Error;

use crate::classification::OutputField;

/// Model parameter identifiers, used to point at the offending field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Target HOCl concentration (mg/L)
    TargetPpm,
    /// Fluid volume (L)
    VolumeLiters,
    /// Faradaic efficiency η
    FaradaicEfficiency,
    /// Applied load voltage (V)
    Voltage,
    /// Electrode circuit resistance (Ω)
    ResistanceOhms,
    /// Downstream supply voltage (V)
    SupplyVoltage,
    /// Downstream supply conversion efficiency
    SupplyEfficiency,
}

impl Parameter {
    /// Field name as it appears on [`ModelInputs`](crate::physics::ModelInputs)
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::TargetPpm => "target_ppm",
            Parameter::VolumeLiters => "volume_liters",
            Parameter::FaradaicEfficiency => "faradaic_efficiency",
            Parameter::Voltage => "voltage",
            Parameter::ResistanceOhms => "resistance_ohms",
            Parameter::SupplyVoltage => "supply_voltage",
            Parameter::SupplyEfficiency => "supply_efficiency",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parameter value outside the domain of the physical model
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid parameter `{field}` = {value}: {reason}")]
pub struct InvalidParameterError {
    /// Offending field
    pub field: Parameter,
    /// Offending value
    pub value: f64,
    /// Violated precondition
    pub reason: &'static str,
}

impl InvalidParameterError {
    pub(crate) fn new(field: Parameter, value: f64, reason: &'static str) -> Self {
        Self { field, value, reason }
    }
}

/// Swept axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisName {
    /// Fluid volume axis (outer loop)
    Volume,
    /// Electrode resistance axis (inner loop)
    Resistance,
}

impl fmt::Display for AxisName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisName::Volume => f.write_str("volume"),
            AxisName::Resistance => f.write_str("resistance"),
        }
    }
}

/// A malformed axis, or a grid larger than the configured limits
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidSweepSpecError {
    #[error("{axis} axis bounds must be finite, got [{min}, {max}]")]
    NonFinite { axis: AxisName, min: f64, max: f64 },

    #[error("{axis} axis is inverted: min {min} > max {max}")]
    Inverted { axis: AxisName, min: f64, max: f64 },

    #[error("{axis} axis needs at least 2 samples, got {samples}")]
    TooFewSamples { axis: AxisName, samples: usize },

    #[error("{axis} axis has a single sample but spans [{min}, {max}]")]
    DegenerateRange { axis: AxisName, min: f64, max: f64 },

    #[error("{axis} axis has {samples} samples, limit is {limit}")]
    TooManySamples { axis: AxisName, samples: usize, limit: usize },

    #[error("grid has {cells} cells, limit is {limit}")]
    TooManyCells { cells: usize, limit: usize },
}

/// Everything a sweep can fail with
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// A fixed scalar of the request is invalid
    #[error(transparent)]
    Parameter(#[from] InvalidParameterError),

    /// An axis or the grid size is invalid
    #[error(transparent)]
    Spec(#[from] InvalidSweepSpecError),

    /// A threshold pair is not finite or not ordered
    #[error("invalid {field} thresholds ({low}, {high}): {reason}")]
    Thresholds {
        field: OutputField,
        low: f64,
        high: f64,
        reason: &'static str,
    },

    /// A classified field is not reported by the model
    #[error("model `{model}` does not report {field}, it cannot be classified")]
    UnreportedField { field: OutputField, model: String },

    /// One or more grid cells failed model validation
    #[error("{failed} of {total} cells are invalid, first at ({row}, {column}): {source}")]
    InvalidCells {
        failed: usize,
        total: usize,
        row: usize,
        column: usize,
        #[source]
        source: InvalidParameterError,
    },
}
