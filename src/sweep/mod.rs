//! Parameter sweep
//!
//! Evaluates the model over a volume × resistance grid and classifies each
//! cell into bands.
//!
//! # Components
//!
//! - [`Axis`], [`SweepSpec`]: the swept ranges
//! - [`SweepRequest`]: fixed scalars, axes and classification entries
//! - [`SweepEngine`]: validation, evaluation (optionally parallel), classification
//! - [`SweepResult`]: row-major table of [`ResultRecord`]s with legends
//! - [`SweepCache`]: memoizes results by request
//!
//! # Example
//!
//! ```rust
//! use hocl_rs::classification::{Band, OutputField};
//! use hocl_rs::sweep::{self, SweepRequest};
//!
//! let result = sweep::sweep(&SweepRequest::default()).unwrap();
//!
//! assert_eq!(result.shape(), (50, 50));
//! let counts = result.band_counts(OutputField::TimeSeconds).unwrap();
//! assert_eq!(counts.iter().sum::<usize>(), 2_500);
//! assert!(counts[Band::Low.index()] > 0);
//! ```

mod axis;
mod cache;
mod config;
mod engine;
mod request;
mod result;

pub use axis::{Axis, SweepSpec, VolumeUnit};
pub use cache::{SweepCache, SweepKey};
pub use config::{EngineConfig, SweepLimits};
pub use engine::SweepEngine;
pub use request::{DEFAULT_TIME_THRESHOLDS, SweepRequest};
pub use result::{ResultRecord, SweepResult};

use crate::error::SweepError;

/// Run `request` with the default engine (HOCl electrolysis, default limits)
pub fn sweep(request: &SweepRequest) -> Result<SweepResult, SweepError> {
    SweepEngine::default().run(request)
}
