//! Engine configuration

/// Upper bounds on the grid, checked before any cell is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepLimits {
    /// Maximum samples on a single axis (default: 1 000)
    pub max_axis_samples: usize,

    /// Maximum grid cells (default: 250 000)
    pub max_cells: usize,
}

impl Default for SweepLimits {
    fn default() -> Self {
        Self {
            max_axis_samples: 1_000,
            max_cells: 250_000,
        }
    }
}

/// Configuration of a [`SweepEngine`](crate::sweep::SweepEngine)
///
/// # Example
///
/// ```rust
/// use hocl_rs::sweep::{EngineConfig, SweepLimits};
///
/// let config = EngineConfig::default()
///     .limits(SweepLimits { max_axis_samples: 200, max_cells: 10_000 })
///     .parallel_threshold(2_048);
/// assert_eq!(config.parallel_threshold, 2_048);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Grid size limits
    pub limits: SweepLimits,

    /// Cell count from which the grid is evaluated with rayon (default: 4 096)
    ///
    /// Only used when the crate is compiled with the `parallel` feature.
    /// Below the threshold, thread dispatch costs more than the closed-form
    /// evaluation it would spread.
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            limits: SweepLimits::default(),
            parallel_threshold: 4_096,
        }
    }
}

impl EngineConfig {
    /// Always evaluate sequentially
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Default::default()
        }
    }

    /// Builder pattern: set limits
    pub fn limits(mut self, limits: SweepLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Builder pattern: set parallel threshold
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
