//! Sweep request
//!
//! Fixed scalars, swept axes and classification entries. This is the whole
//! input of a sweep: the result is fully determined by it.

use crate::classification::{CategoryThresholds, Classification, OutputField};
use crate::error::{InvalidParameterError, Parameter};
use crate::physics::inputs::{fraction, positive};
use crate::sweep::{Axis, SweepSpec};

/// Default time bands: ≤ 2 s, 2–5 s, > 5 s
pub const DEFAULT_TIME_THRESHOLDS: CategoryThresholds = CategoryThresholds::new(2.0, 5.0);

/// Parameters of one sweep
///
/// Time is always classified; other fields are added with
/// [`SweepRequest::with_power_thresholds`] or
/// [`SweepRequest::with_classification`]. Entries are keyed by field, so
/// setting a field twice replaces the first entry.
///
/// # Example
///
/// ```rust
/// use hocl_rs::classification::CategoryThresholds;
/// use hocl_rs::sweep::{Axis, SweepRequest, SweepSpec};
///
/// let spec = SweepSpec::new(Axis::new(0.05, 0.5, 10), Axis::new(1.0, 4.0, 10));
/// let request = SweepRequest::new(100.0, 0.5, 7.2, spec)
///     .with_time_thresholds(CategoryThresholds::new(5.0, 15.0))
///     .with_power_thresholds(CategoryThresholds::new(10.0, 30.0));
///
/// assert_eq!(request.classifications().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRequest {
    /// Target HOCl concentration (mg/L)
    pub target_ppm: f64,
    /// Faradaic efficiency η
    pub faradaic_efficiency: f64,
    /// Applied load voltage (V)
    pub voltage: f64,
    /// Swept axes
    pub spec: SweepSpec,
    classifications: Vec<Classification>,
}

impl SweepRequest {
    /// Create a request classified by time with [`DEFAULT_TIME_THRESHOLDS`]
    pub fn new(target_ppm: f64, faradaic_efficiency: f64, voltage: f64, spec: SweepSpec) -> Self {
        Self {
            target_ppm,
            faradaic_efficiency,
            voltage,
            spec,
            classifications: vec![Classification::time(DEFAULT_TIME_THRESHOLDS)],
        }
    }

    /// Builder pattern: set time thresholds
    pub fn with_time_thresholds(self, thresholds: CategoryThresholds) -> Self {
        self.with_classification(Classification::time(thresholds))
    }

    /// Builder pattern: classify power as well
    pub fn with_power_thresholds(self, thresholds: CategoryThresholds) -> Self {
        self.with_classification(Classification::power(thresholds))
    }

    /// Builder pattern: add an entry, or replace the one with the same field
    pub fn with_classification(mut self, classification: Classification) -> Self {
        match self
            .classifications
            .iter_mut()
            .find(|c| c.field == classification.field)
        {
            Some(existing) => *existing = classification,
            None => self.classifications.push(classification),
        }
        self
    }

    /// Classification entries, time first
    pub fn classifications(&self) -> &[Classification] {
        &self.classifications
    }

    /// Entry for `field`
    pub fn classification(&self, field: OutputField) -> Option<&Classification> {
        self.classifications.iter().find(|c| c.field == field)
    }

    /// Check the fixed scalars
    pub fn validate_scalars(&self) -> Result<(), InvalidParameterError> {
        positive(Parameter::TargetPpm, self.target_ppm)?;
        fraction(Parameter::FaradaicEfficiency, self.faradaic_efficiency)?;
        positive(Parameter::Voltage, self.voltage)?;
        Ok(())
    }
}

impl Default for SweepRequest {
    /// Pocket sprayer defaults: 100 ppm, 50 %, 7.2 V,
    /// 0.3–1.0 fl oz × 1.5–4.0 Ω on a 50 × 50 grid
    fn default() -> Self {
        let spec = SweepSpec::new(Axis::new(0.3, 1.0, 50), Axis::new(1.5, 4.0, 50)).in_fluid_ounces();
        Self::new(100.0, 0.5, 7.2, spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::VolumeUnit;

    #[test]
    fn test_time_always_classified() {
        let request = SweepRequest::default();
        assert_eq!(request.classifications().len(), 1);
        assert_eq!(request.classifications()[0].field, OutputField::TimeSeconds);
        assert_eq!(request.classifications()[0].thresholds, DEFAULT_TIME_THRESHOLDS);
    }

    #[test]
    fn test_replace_keeps_position() {
        let request = SweepRequest::default()
            .with_power_thresholds(CategoryThresholds::new(10.0, 30.0))
            .with_time_thresholds(CategoryThresholds::new(1.0, 3.0));

        let fields: Vec<OutputField> = request.classifications().iter().map(|c| c.field).collect();
        assert_eq!(fields, vec![OutputField::TimeSeconds, OutputField::PowerWatts]);
        assert_eq!(
            request.classification(OutputField::TimeSeconds).unwrap().thresholds,
            CategoryThresholds::new(1.0, 3.0)
        );
    }

    #[test]
    fn test_default_pocket_sprayer() {
        let request = SweepRequest::default();
        assert_eq!(request.target_ppm, 100.0);
        assert_eq!(request.faradaic_efficiency, 0.5);
        assert_eq!(request.voltage, 7.2);
        assert_eq!(request.spec.volume_unit, VolumeUnit::FluidOunces);
        assert_eq!(request.spec.cells(), 2_500);
    }

    #[test]
    fn test_validate_scalars() {
        assert!(SweepRequest::default().validate_scalars().is_ok());

        let mut request = SweepRequest::default();
        request.faradaic_efficiency = 0.0;
        assert_eq!(
            request.validate_scalars().unwrap_err().field,
            Parameter::FaradaicEfficiency
        );
    }
}
