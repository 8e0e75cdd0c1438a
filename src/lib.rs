//! hocl-rs: HOCl Electrolysis Estimator
//!
//! Estimates the time, current and power needed to produce a target
//! concentration of hypochlorous acid (HOCl) by electrolysis in a given volume
//! of brine, and maps those estimates over a volume × resistance grid.
//!
//! # Architecture
//!
//! hocl-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Exploration**
//!    - Physical models map one parameter point to derived quantities
//!    - The sweep engine decides where to evaluate and how to classify
//!
//! 2. **Validation at the Edges**
//!    - `ModelInputs` can only exist with physically meaningful values
//!    - Sweeps fail as a whole with typed errors, never with partial tables
//!
//! # Quick Start
//!
//! ```rust
//! use hocl_rs::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Single point: 100 ppm in 0.1 L at 7.2 V over 1.4 Ω, 100 % efficient
//! let inputs = ModelInputs::new(100.0, 0.1, 1.0, 7.2, 1.4)?;
//! let outputs = hocl_rs::physics::evaluate(&inputs);
//! assert!((outputs.time_seconds - 7.15).abs() < 0.01);
//!
//! // 2. Sweep: pocket sprayer defaults (50 × 50, fl oz)
//! let request = SweepRequest::default()
//!     .with_power_thresholds(CategoryThresholds::new(15.0, 30.0));
//! let result = hocl_rs::sweep::sweep(&request)?;
//!
//! // 3. Access results
//! let counts = result.band_counts(OutputField::TimeSeconds).unwrap();
//! println!("fast/moderate/slow: {:?}", counts);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Inputs, outputs and the model trait
//! - [`models`]: HOCl electrolysis model
//! - [`classification`]: Thresholds, bands and labels
//! - [`sweep`]: Grid sweep engine and cache
//! - [`output`]: CSV export and heatmaps
//! - [`error`]: Error types

// Core modules
pub mod physics;

pub mod classification;
pub mod error;
pub mod models;
pub mod sweep;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use hocl_rs::prelude::*;
    //! ```
    pub use crate::classification::{Band,
                                    CategoryThresholds,
                                    Classification,
                                    OutputField};
    pub use crate::error::{InvalidParameterError,
                           SweepError};
    pub use crate::models::{HoclElectrolysis,
                            SupplyConfig};
    pub use crate::physics::{ModelInputs,
                             ModelOutputs,
                             PhysicalModel};
    pub use crate::sweep::{Axis,
                           SweepEngine,
                           SweepRequest,
                           SweepResult,
                           SweepSpec};
}
