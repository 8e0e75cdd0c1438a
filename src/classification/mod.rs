//! Classification of model outputs into ordered bands
//!
//! A continuous output (time, power, ...) is bucketed into three ordered
//! bands by a [`CategoryThresholds`] pair, and each band gets a label built
//! from the same thresholds by a [`BandLabeler`].
//!
//! # Configuration
//!
//! A sweep is classified along any number of fields, each described by one
//! [`Classification`] entry `{field, thresholds, labeler}`:
//!
//! ```rust
//! use hocl_rs::classification::{Classification, CategoryThresholds, OutputField};
//!
//! let entries = vec![
//!     Classification::time(CategoryThresholds::new(2.0, 5.0)),
//!     Classification::power(CategoryThresholds::new(10.0, 30.0)),
//! ];
//! assert_eq!(entries[1].field, OutputField::PowerWatts);
//! ```
//!
//! # Label / band coupling
//!
//! Labels are never matched as strings: a [`Classifier`] builds its
//! [`Legend`] once and hands out [`Category`] values that carry both the
//! [`Band`] and the legend's label.

pub mod labels;
pub mod thresholds;

use std::fmt;

pub use labels::{BandLabeler, Category, Legend};
pub use thresholds::{Band, CategoryThresholds};

use crate::error::SweepError;
use crate::physics::ModelOutputs;

/// Output quantities that can be classified or read as a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputField {
    /// [`ModelOutputs::time_seconds`]
    TimeSeconds,
    /// [`ModelOutputs::power_watts`]
    PowerWatts,
    /// [`ModelOutputs::current_amps`]
    CurrentAmps,
    /// [`ModelOutputs::charge_coulombs`]
    ChargeCoulombs,
    /// [`ModelOutputs::secondary_current_amps`], only reported by models
    /// configured with a downstream supply
    SecondaryCurrentAmps,
}

impl OutputField {
    /// Read this field from `outputs`
    ///
    /// NaN for [`OutputField::SecondaryCurrentAmps`] when the outputs carry
    /// no supply draw; see [`OutputField::get`].
    #[inline]
    pub fn extract(&self, outputs: &ModelOutputs) -> f64 {
        self.get(outputs).unwrap_or(f64::NAN)
    }

    /// Read this field from `outputs`, `None` if the model did not report it
    #[inline]
    pub fn get(&self, outputs: &ModelOutputs) -> Option<f64> {
        match self {
            OutputField::TimeSeconds => Some(outputs.time_seconds),
            OutputField::PowerWatts => Some(outputs.power_watts),
            OutputField::CurrentAmps => Some(outputs.current_amps),
            OutputField::ChargeCoulombs => Some(outputs.charge_coulombs),
            OutputField::SecondaryCurrentAmps => outputs.secondary_current_amps,
        }
    }

    /// Whether every model reports this field
    pub fn is_always_reported(&self) -> bool {
        !matches!(self, OutputField::SecondaryCurrentAmps)
    }

    /// Column name, as used in exports
    pub fn name(&self) -> &'static str {
        match self {
            OutputField::TimeSeconds => "time_seconds",
            OutputField::PowerWatts => "power_watts",
            OutputField::CurrentAmps => "current_amps",
            OutputField::ChargeCoulombs => "charge_coulombs",
            OutputField::SecondaryCurrentAmps => "secondary_current_amps",
        }
    }

    /// Default labeler for this field
    pub fn default_labeler(&self) -> BandLabeler {
        match self {
            OutputField::TimeSeconds => BandLabeler::time(),
            OutputField::PowerWatts => BandLabeler::power(),
            OutputField::CurrentAmps | OutputField::SecondaryCurrentAmps => BandLabeler::current(),
            OutputField::ChargeCoulombs => BandLabeler::charge(),
        }
    }
}

impl fmt::Display for OutputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classification entry: which field, where to cut, how to label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Classified field
    pub field: OutputField,
    /// Cut points
    pub thresholds: CategoryThresholds,
    /// Label builder
    pub labeler: BandLabeler,
}

impl Classification {
    /// Entry with the field's default labeler
    pub fn new(field: OutputField, thresholds: CategoryThresholds) -> Self {
        Self {
            field,
            thresholds,
            labeler: field.default_labeler(),
        }
    }

    /// Generation time, Fast / Moderate / Slow
    pub fn time(thresholds: CategoryThresholds) -> Self {
        Self::new(OutputField::TimeSeconds, thresholds)
    }

    /// Cell power, Low / Medium / High
    pub fn power(thresholds: CategoryThresholds) -> Self {
        Self::new(OutputField::PowerWatts, thresholds)
    }

    /// Current drawn from the downstream supply, Low / Medium / High
    pub fn secondary_current(thresholds: CategoryThresholds) -> Self {
        Self::new(OutputField::SecondaryCurrentAmps, thresholds)
    }

    /// Builder pattern: set labeler
    pub fn labeler(mut self, labeler: BandLabeler) -> Self {
        self.labeler = labeler;
        self
    }

    /// Validate the thresholds and build the classifier
    pub fn compile(&self) -> Result<Classifier, SweepError> {
        self.thresholds.validate(self.field)?;
        Ok(Classifier {
            field: self.field,
            thresholds: self.thresholds,
            legend: self.labeler.legend(self.field, &self.thresholds),
        })
    }
}

/// A validated [`Classification`] with its legend built
#[derive(Debug, Clone)]
pub struct Classifier {
    field: OutputField,
    thresholds: CategoryThresholds,
    legend: Legend,
}

impl Classifier {
    /// Classified field
    pub fn field(&self) -> OutputField {
        self.field
    }

    /// Labels of the three bands
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Band and label of `outputs`
    #[inline]
    pub fn classify(&self, outputs: &ModelOutputs) -> Category {
        let band = self.thresholds.classify(self.field.extract(outputs));
        self.legend.category(band)
    }
}
