//! Sweep results
//!
//! A [`SweepResult`] is the table handed to renderers and exporters: one
//! [`ResultRecord`] per grid cell in row-major order (volume outer,
//! resistance inner), the axis values, and one [`Legend`] per classified
//! field.
//!
//! ```text
//!                 resistance →
//!            ┌────────┬────────┬────────┐
//!  volume    │ (0, 0) │ (0, 1) │ (0, 2) │   records[0..3]
//!    ↓       ├────────┼────────┼────────┤
//!            │ (1, 0) │ (1, 1) │ (1, 2) │   records[3..6]
//!            └────────┴────────┴────────┘
//! ```

use ndarray::Array2;

use crate::classification::{Band, Category, Legend, OutputField};
use crate::physics::ModelOutputs;
use crate::sweep::VolumeUnit;

/// One grid cell
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    /// Volume axis value, in the sweep's volume unit
    pub volume: f64,
    /// Same volume in liters
    pub volume_liters: f64,
    /// Resistance axis value (Ω)
    pub resistance_ohms: f64,
    /// Model outputs at this cell
    pub outputs: ModelOutputs,
    /// One category per classification entry, in entry order
    pub categories: Vec<Category>,
}

impl ResultRecord {
    /// Category for `field`, if it was classified
    pub fn category(&self, field: OutputField) -> Option<&Category> {
        self.categories.iter().find(|c| c.field == field)
    }

    /// Time category (always present in engine output)
    pub fn time_category(&self) -> Option<&Category> {
        self.category(OutputField::TimeSeconds)
    }

    /// Value of `field`
    pub fn value(&self, field: OutputField) -> f64 {
        field.extract(&self.outputs)
    }
}

/// Complete result table of one sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    volume_values: Vec<f64>,
    resistance_values: Vec<f64>,
    volume_unit: VolumeUnit,
    records: Vec<ResultRecord>,
    legends: Vec<Legend>,
    model_name: String,
}

impl SweepResult {
    pub(crate) fn new(
        volume_values: Vec<f64>,
        resistance_values: Vec<f64>,
        volume_unit: VolumeUnit,
        records: Vec<ResultRecord>,
        legends: Vec<Legend>,
        model_name: String,
    ) -> Self {
        debug_assert_eq!(records.len(), volume_values.len() * resistance_values.len());
        Self {
            volume_values,
            resistance_values,
            volume_unit,
            records,
            legends,
            model_name,
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no record
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(volume samples, resistance samples)`
    pub fn shape(&self) -> (usize, usize) {
        (self.volume_values.len(), self.resistance_values.len())
    }

    /// Volume axis values, in [`SweepResult::volume_unit`]
    pub fn volume_values(&self) -> &[f64] {
        &self.volume_values
    }

    /// Resistance axis values (Ω)
    pub fn resistance_values(&self) -> &[f64] {
        &self.resistance_values
    }

    /// Unit of the volume axis
    pub fn volume_unit(&self) -> VolumeUnit {
        self.volume_unit
    }

    /// Name of the model that produced the table
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// All records, row-major
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Record at `(volume index, resistance index)`
    pub fn record(&self, row: usize, column: usize) -> Option<&ResultRecord> {
        let (rows, columns) = self.shape();
        if row >= rows || column >= columns {
            return None;
        }
        self.records.get(row * columns + column)
    }

    /// Legends, in classification entry order
    pub fn legends(&self) -> &[Legend] {
        &self.legends
    }

    /// Legend of `field`, if it was classified
    pub fn legend(&self, field: OutputField) -> Option<&Legend> {
        self.legends.iter().find(|l| l.field() == field)
    }

    /// Values of `field`, row-major
    pub fn column(&self, field: OutputField) -> Vec<f64> {
        self.records.iter().map(|r| r.value(field)).collect()
    }

    /// Values of `field` as a `[volume × resistance]` grid
    pub fn grid(&self, field: OutputField) -> Array2<f64> {
        let (rows, columns) = self.shape();
        Array2::from_shape_fn((rows, columns), |(i, j)| {
            self.records[i * columns + j].value(field)
        })
    }

    /// Bands of `field` as a `[volume × resistance]` grid, if it was classified
    pub fn band_grid(&self, field: OutputField) -> Option<Array2<Band>> {
        self.legend(field)?;
        let (rows, columns) = self.shape();
        let bands: Vec<Band> = self
            .records
            .iter()
            .map(|r| r.category(field).map_or(Band::Low, |c| c.band))
            .collect();
        Array2::from_shape_vec((rows, columns), bands).ok()
    }

    /// Number of records in each band of `field`, if it was classified
    pub fn band_counts(&self, field: OutputField) -> Option<[usize; 3]> {
        self.legend(field)?;
        let mut counts = [0; 3];
        for category in self.records.iter().filter_map(|r| r.category(field)) {
            counts[category.band.index()] += 1;
        }
        Some(counts)
    }

    /// Smallest value of `field`
    pub fn min(&self, field: OutputField) -> Option<f64> {
        self.records.iter().map(|r| r.value(field)).reduce(f64::min)
    }

    /// Largest value of `field`
    pub fn max(&self, field: OutputField) -> Option<f64> {
        self.records.iter().map(|r| r.value(field)).reduce(f64::max)
    }
}
