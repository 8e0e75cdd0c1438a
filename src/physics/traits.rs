//! Physical model trait

use crate::classification::OutputField;
use crate::physics::{ModelInputs, ModelOutputs};

/// Trait for physical models
///
/// # Responsibility
///
/// Maps one validated point of parameter space to its derived quantities.
/// Does NOT iterate over grids (that's the sweep engine's job).
///
/// The model provides the "physics" (closed-form equations), the engine
/// provides the "sampling" (which points, in which order, on which threads).
///
/// # Contract
///
/// - Deterministic: the same inputs always produce bit-identical outputs
/// - Pure: no interior mutability, safe to call from several threads
/// - Total on validated inputs: every [`ModelInputs`] yields finite outputs
pub trait PhysicalModel: Send + Sync {
    /// Evaluate the model at one point
    fn evaluate(&self, inputs: &ModelInputs) -> ModelOutputs;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }

    /// Whether [`evaluate`](PhysicalModel::evaluate) fills `field`
    ///
    /// The sweep engine refuses to classify a field the model does not
    /// report. Models that set optional outputs must override this.
    fn reports(&self, field: OutputField) -> bool {
        field.is_always_reported()
    }
}
