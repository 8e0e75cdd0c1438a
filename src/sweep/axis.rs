//! Sweep axes
//!
//! An [`Axis`] is a `(min, max, samples)` triple expanded into evenly spaced
//! values, both endpoints included. A [`SweepSpec`] pairs the volume axis
//! (outer loop) with the resistance axis (inner loop).

use ndarray::Array1;

use crate::error::{AxisName, InvalidSweepSpecError};
use crate::physics::constants::fluid_ounces_to_liters;
use crate::sweep::SweepLimits;

/// Evenly spaced samples over `[min, max]`
///
/// # Example
///
/// ```rust
/// use hocl_rs::sweep::Axis;
///
/// let axis = Axis::new(1.5, 4.0, 6);
/// let values = axis.values();
/// assert_eq!(values.len(), 6);
/// assert_eq!(values[0], 1.5);
/// assert_eq!(values[5], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    min: f64,
    max: f64,
    samples: usize,
}

impl Axis {
    /// Create an axis (checked by [`Axis::validate`])
    pub const fn new(min: f64, max: f64, samples: usize) -> Self {
        Self { min, max, samples }
    }

    /// Degenerate single-sample axis at `value`
    pub const fn point(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            samples: 1,
        }
    }

    /// Lower bound
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of samples
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Check bounds and sample count against `limits`
    ///
    /// A single sample is accepted only for a point axis (`min == max`).
    pub fn validate(&self, axis: AxisName, limits: &SweepLimits) -> Result<(), InvalidSweepSpecError> {
        let (min, max, samples) = (self.min, self.max, self.samples);

        if !min.is_finite() || !max.is_finite() {
            return Err(InvalidSweepSpecError::NonFinite { axis, min, max });
        }
        if min > max {
            return Err(InvalidSweepSpecError::Inverted { axis, min, max });
        }
        if samples == 0 {
            return Err(InvalidSweepSpecError::TooFewSamples { axis, samples });
        }
        if samples == 1 && min != max {
            return Err(InvalidSweepSpecError::DegenerateRange { axis, min, max });
        }
        if samples > limits.max_axis_samples {
            return Err(InvalidSweepSpecError::TooManySamples {
                axis,
                samples,
                limit: limits.max_axis_samples,
            });
        }
        Ok(())
    }

    /// Sample values, first exactly `min`, last exactly `max`
    pub fn values(&self) -> Array1<f64> {
        let mut values = Array1::linspace(self.min, self.max, self.samples);
        if let Some(last) = values.last_mut() {
            *last = self.max;
        }
        values
    }
}

/// Unit of the volume axis values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VolumeUnit {
    /// Liters
    #[default]
    Liters,
    /// US fluid ounces
    FluidOunces,
}

impl VolumeUnit {
    /// Convert a value in this unit to liters
    #[inline]
    pub fn to_liters(&self, value: f64) -> f64 {
        match self {
            VolumeUnit::Liters => value,
            VolumeUnit::FluidOunces => fluid_ounces_to_liters(value),
        }
    }

    /// Unit symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::Liters => "L",
            VolumeUnit::FluidOunces => "fl oz",
        }
    }
}

/// The two swept axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSpec {
    /// Fluid volume, in `volume_unit` (outer loop)
    pub volume: Axis,
    /// Electrode resistance in Ω (inner loop)
    pub resistance: Axis,
    /// Unit of the volume axis
    pub volume_unit: VolumeUnit,
}

impl SweepSpec {
    /// Volume axis in liters
    pub fn new(volume: Axis, resistance: Axis) -> Self {
        Self {
            volume,
            resistance,
            volume_unit: VolumeUnit::Liters,
        }
    }

    /// Builder pattern: read the volume axis in US fluid ounces
    pub fn in_fluid_ounces(mut self) -> Self {
        self.volume_unit = VolumeUnit::FluidOunces;
        self
    }

    /// Number of grid cells (saturating)
    pub fn cells(&self) -> usize {
        self.volume.samples.saturating_mul(self.resistance.samples)
    }

    /// Validate both axes and the grid size
    pub fn validate(&self, limits: &SweepLimits) -> Result<(), InvalidSweepSpecError> {
        self.volume.validate(AxisName::Volume, limits)?;
        self.resistance.validate(AxisName::Resistance, limits)?;

        let cells = self.cells();
        if cells > limits.max_cells {
            return Err(InvalidSweepSpecError::TooManyCells {
                cells,
                limit: limits.max_cells,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_span_endpoints_exactly() {
        let values = Axis::new(0.3, 1.0, 50).values();
        assert_eq!(values.len(), 50);
        assert_eq!(values[0], 0.3);
        assert_eq!(values[49], 1.0);
        assert!(values.windows(2).into_iter().all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_values_evenly_spaced() {
        let values = Axis::new(0.0, 1.0, 5).values();
        assert_eq!(values.to_vec(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_point_axis() {
        let axis = Axis::point(2.5);
        assert!(axis.validate(AxisName::Resistance, &SweepLimits::default()).is_ok());
        assert_eq!(axis.values().to_vec(), vec![2.5]);
    }

    #[test]
    fn test_single_sample_range_rejected() {
        let err = Axis::new(1.0, 2.0, 1)
            .validate(AxisName::Volume, &SweepLimits::default())
            .unwrap_err();
        assert!(matches!(err, InvalidSweepSpecError::DegenerateRange { .. }));
    }

    #[test]
    fn test_invalid_axes() {
        let limits = SweepLimits::default();
        assert!(matches!(
            Axis::new(2.0, 1.0, 5).validate(AxisName::Volume, &limits),
            Err(InvalidSweepSpecError::Inverted { .. })
        ));
        assert!(matches!(
            Axis::new(1.0, 2.0, 0).validate(AxisName::Volume, &limits),
            Err(InvalidSweepSpecError::TooFewSamples { .. })
        ));
        assert!(matches!(
            Axis::new(f64::NEG_INFINITY, 2.0, 5).validate(AxisName::Volume, &limits),
            Err(InvalidSweepSpecError::NonFinite { .. })
        ));
        assert!(matches!(
            Axis::new(1.0, 2.0, limits.max_axis_samples + 1).validate(AxisName::Volume, &limits),
            Err(InvalidSweepSpecError::TooManySamples { .. })
        ));
    }

    #[test]
    fn test_too_many_cells() {
        let limits = SweepLimits {
            max_axis_samples: 100,
            max_cells: 50,
        };
        let spec = SweepSpec::new(Axis::new(0.1, 1.0, 10), Axis::new(1.0, 2.0, 10));
        assert_eq!(
            spec.validate(&limits),
            Err(InvalidSweepSpecError::TooManyCells { cells: 100, limit: 50 })
        );
    }

    #[test]
    fn test_volume_unit() {
        assert_eq!(VolumeUnit::Liters.to_liters(0.5), 0.5);
        assert_eq!(VolumeUnit::FluidOunces.to_liters(1.0), 0.0295735);
        let spec = SweepSpec::new(Axis::point(1.0), Axis::point(1.0)).in_fluid_ounces();
        assert_eq!(spec.volume_unit, VolumeUnit::FluidOunces);
    }
}
