//! Threshold pairs and the three ordered bands they delimit

use crate::classification::OutputField;
use crate::error::SweepError;

/// One of three ordered bands
///
/// Ordering follows the classified value: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    /// `value <= low`
    Low,
    /// `low < value <= high`
    Medium,
    /// `value > high`
    High,
}

impl Band {
    /// All bands, in order
    pub const ALL: [Band; 3] = [Band::Low, Band::Medium, Band::High];

    /// Position in [`Band::ALL`]
    pub fn index(self) -> usize {
        match self {
            Band::Low => 0,
            Band::Medium => 1,
            Band::High => 2,
        }
    }
}

/// Two ordered cut points splitting a quantity into three bands
///
/// Boundaries belong to the band below them: a value equal to `low` is
/// [`Band::Low`], a value equal to `high` is [`Band::Medium`].
///
/// # Example
///
/// ```rust
/// use hocl_rs::classification::{Band, CategoryThresholds};
///
/// let thresholds = CategoryThresholds::new(2.0, 5.0);
/// assert_eq!(thresholds.classify(2.0), Band::Low);
/// assert_eq!(thresholds.classify(5.0), Band::Medium);
/// assert_eq!(thresholds.classify(5.01), Band::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryThresholds {
    low: f64,
    high: f64,
}

impl CategoryThresholds {
    /// Create a threshold pair (checked by [`CategoryThresholds::validate`])
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Lower cut point
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper cut point
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Check that both cut points are finite and ordered
    ///
    /// `low == high` is accepted and leaves the middle band empty.
    pub fn validate(&self, field: OutputField) -> Result<(), SweepError> {
        let reason = if !self.low.is_finite() || !self.high.is_finite() {
            "cut points must be finite"
        } else if self.low > self.high {
            "low cut point exceeds high cut point"
        } else {
            return Ok(());
        };

        Err(SweepError::Thresholds {
            field,
            low: self.low,
            high: self.high,
            reason,
        })
    }

    /// Band of `value`
    #[inline]
    pub fn classify(&self, value: f64) -> Band {
        if value <= self.low {
            Band::Low
        } else if value <= self.high {
            Band::Medium
        } else {
            Band::High
        }
    }
}
