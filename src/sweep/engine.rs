//! Sweep engine
//!
//! Expands a [`SweepRequest`] into its grid, evaluates the model on every
//! cell and classifies each result.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ SweepRequest │──▶│ validate      │──▶│ evaluate     │──▶│ SweepResult  │
//! │ scalars+axes │   │ scalars, axes │   │ + classify   │   │ records +    │
//! │ + entries    │   │ thresholds    │   │ every cell   │   │ legends      │
//! └──────────────┘   └───────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! # Failure
//!
//! Any invalid cell fails the whole sweep with
//! [`SweepError::InvalidCells`], reporting how many cells failed and the
//! first one in row-major order. No partial table is ever returned.

use crate::classification::{Classification, Classifier};
use crate::error::{InvalidParameterError, SweepError};
use crate::models::HoclElectrolysis;
use crate::physics::{ModelInputs, PhysicalModel};
use crate::sweep::{EngineConfig, ResultRecord, SweepRequest, SweepResult};

/// Evaluates a physical model over sweep grids
///
/// # Example
///
/// ```rust
/// use hocl_rs::models::{HoclElectrolysis, SupplyConfig};
/// use hocl_rs::sweep::{Axis, SweepEngine, SweepRequest, SweepSpec};
///
/// let model = HoclElectrolysis::new().with_supply(SupplyConfig::default());
/// let engine = SweepEngine::new(Box::new(model));
///
/// let spec = SweepSpec::new(Axis::new(0.1, 0.5, 5), Axis::new(1.0, 4.0, 4));
/// let result = engine.run(&SweepRequest::new(100.0, 0.5, 7.2, spec)).unwrap();
///
/// assert_eq!(result.shape(), (5, 4));
/// assert_eq!(result.len(), 20);
/// ```
pub struct SweepEngine {
    /// Physical model (equations)
    model: Box<dyn PhysicalModel>,

    /// Limits and execution strategy
    config: EngineConfig,
}

impl SweepEngine {
    /// Create an engine with the default configuration
    pub fn new(model: Box<dyn PhysicalModel>) -> Self {
        Self {
            model,
            config: EngineConfig::default(),
        }
    }

    /// Builder pattern: set configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get model name
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Run one sweep
    ///
    /// # Errors
    ///
    /// - [`SweepError::Parameter`]: a fixed scalar is invalid
    /// - [`SweepError::Spec`]: an axis is malformed or the grid exceeds the limits
    /// - [`SweepError::Thresholds`]: a threshold pair is not finite or not ordered
    /// - [`SweepError::UnreportedField`]: a classified field is not reported by the model
    /// - [`SweepError::InvalidCells`]: an axis value is outside the model domain
    pub fn run(&self, request: &SweepRequest) -> Result<SweepResult, SweepError> {
        // ============================= Validation =============================

        request.validate_scalars()?;
        request.spec.validate(&self.config.limits)?;

        let classifiers = request
            .classifications()
            .iter()
            .map(Classification::compile)
            .collect::<Result<Vec<Classifier>, SweepError>>()?;

        if let Some(classifier) = classifiers.iter().find(|c| !self.model.reports(c.field())) {
            return Err(SweepError::UnreportedField {
                field: classifier.field(),
                model: self.model.name().to_string(),
            });
        }

        // ============================= Grid ===================================

        let volumes = request.spec.volume.values().to_vec();
        let resistances = request.spec.resistance.values().to_vec();
        let columns = resistances.len();
        let total = volumes.len() * columns;

        // ============================= Cell kernel ============================
        //
        // Reads the axis vectors and classifiers, writes nothing shared: every
        // cell can be evaluated on any thread.

        let evaluate_cell = |index: usize| -> Result<ResultRecord, InvalidParameterError> {
            let volume = volumes[index / columns];
            let resistance_ohms = resistances[index % columns];
            let volume_liters = request.spec.volume_unit.to_liters(volume);

            let inputs = ModelInputs::new(
                request.target_ppm,
                volume_liters,
                request.faradaic_efficiency,
                request.voltage,
                resistance_ohms,
            )?;
            let outputs = self.model.evaluate(&inputs);
            let categories = classifiers.iter().map(|c| c.classify(&outputs)).collect();

            Ok(ResultRecord {
                volume,
                volume_liters,
                resistance_ohms,
                outputs,
                categories,
            })
        };

        // ============================= Evaluation =============================

        let cells = self.evaluate_all(total, &evaluate_cell);
        let records = collect_records(cells, columns)?;

        log::debug!(
            "{}: swept {} x {} grid ({} classified fields)",
            self.model.name(),
            volumes.len(),
            columns,
            classifiers.len()
        );

        let legends = classifiers.iter().map(|c| c.legend().clone()).collect();

        Ok(SweepResult::new(
            volumes,
            resistances,
            request.spec.volume_unit,
            records,
            legends,
            self.model.name().to_string(),
        ))
    }

    /// Evaluate every cell index, results in index order
    fn evaluate_all<F>(&self, total: usize, kernel: &F) -> Vec<Result<ResultRecord, InvalidParameterError>>
    where
        F: Fn(usize) -> Result<ResultRecord, InvalidParameterError> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            if total >= self.config.parallel_threshold {
                use rayon::prelude::*;

                log::debug!("evaluating {total} cells in parallel");

                // Indexed parallel iterator: collect() preserves index order.
                return (0..total).into_par_iter().map(kernel).collect();
            }
        }

        (0..total).map(kernel).collect()
    }
}

impl Default for SweepEngine {
    fn default() -> Self {
        Self::new(Box::new(HoclElectrolysis::new()))
    }
}

impl std::fmt::Debug for SweepEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SweepEngine")
            .field("model", &self.model.name())
            .field("config", &self.config)
            .finish()
    }
}

/// Unwrap per-cell results, or report every failure at once
fn collect_records(
    cells: Vec<Result<ResultRecord, InvalidParameterError>>,
    columns: usize,
) -> Result<Vec<ResultRecord>, SweepError> {
    let total = cells.len();
    let mut records = Vec::with_capacity(total);
    let mut failed = 0;
    let mut first_failure = None;

    for (index, cell) in cells.into_iter().enumerate() {
        match cell {
            Ok(record) => records.push(record),
            Err(source) => {
                failed += 1;
                first_failure.get_or_insert((index, source));
            }
        }
    }

    match first_failure {
        None => Ok(records),
        Some((index, source)) => {
            log::warn!("sweep rejected: {failed} of {total} cells invalid, first at index {index}: {source}");
            Err(SweepError::InvalidCells {
                failed,
                total,
                row: index / columns,
                column: index % columns,
                source,
            })
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
