//! Band label generation
//!
//! Labels are a pure function of `(labeler, thresholds)` and embed the cut
//! points with one decimal place, so a label can never disagree with the
//! thresholds that produced it. A sweep builds each [`Legend`] once and every
//! [`Category`] it emits shares the legend's label, which lets a renderer key
//! colors on [`Band`] without matching strings.

use std::sync::Arc;

use crate::classification::{Band, CategoryThresholds, OutputField};

/// Band names and unit suffix used to build labels
///
/// | Band | Template |
/// |------|----------|
/// | Low | `{name} (≤ {low}{unit})` |
/// | Medium | `{name} ({low}–{high}{unit})` |
/// | High | `{name} (> {high}{unit})` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BandLabeler {
    /// Names of the low, medium and high bands
    pub names: [&'static str; 3],
    /// Unit appended to the cut points
    pub unit: &'static str,
}

impl BandLabeler {
    /// Custom names and unit
    pub const fn new(names: [&'static str; 3], unit: &'static str) -> Self {
        Self { names, unit }
    }

    /// Generation time: Fast / Moderate / Slow, in seconds
    pub const fn time() -> Self {
        Self::new(["Fast", "Moderate", "Slow"], "s")
    }

    /// Cell power: Low / Medium / High, in watts
    pub const fn power() -> Self {
        Self::new(["Low", "Medium", "High"], "W")
    }

    /// Current: Low / Medium / High, in amperes
    pub const fn current() -> Self {
        Self::new(["Low", "Medium", "High"], "A")
    }

    /// Charge: Low / Medium / High, in coulombs
    pub const fn charge() -> Self {
        Self::new(["Low", "Medium", "High"], "C")
    }

    /// Label of `band` under `thresholds`
    ///
    /// ```rust
    /// use hocl_rs::classification::{Band, BandLabeler, CategoryThresholds};
    ///
    /// let t = CategoryThresholds::new(2.0, 5.0);
    /// assert_eq!(BandLabeler::time().label(Band::Medium, &t), "Moderate (2.0–5.0s)");
    /// assert_eq!(BandLabeler::time().label(Band::High, &t), "Slow (> 5.0s)");
    /// ```
    pub fn label(&self, band: Band, thresholds: &CategoryThresholds) -> String {
        let name = self.names[band.index()];
        let (low, high, unit) = (thresholds.low(), thresholds.high(), self.unit);
        match band {
            Band::Low => format!("{name} (≤ {low:.1}{unit})"),
            Band::Medium => format!("{name} ({low:.1}–{high:.1}{unit})"),
            Band::High => format!("{name} (> {high:.1}{unit})"),
        }
    }

    /// All three labels under `thresholds`
    pub fn legend(&self, field: OutputField, thresholds: &CategoryThresholds) -> Legend {
        Legend {
            field,
            labels: Band::ALL.map(|band| Arc::from(self.label(band, thresholds))),
        }
    }
}

/// The three labels of one classified field, in band order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    field: OutputField,
    labels: [Arc<str>; 3],
}

impl Legend {
    /// Classified field
    pub fn field(&self) -> OutputField {
        self.field
    }

    /// Label of `band`
    pub fn label(&self, band: Band) -> &str {
        &self.labels[band.index()]
    }

    /// `(band, label)` pairs in band order
    pub fn entries(&self) -> impl Iterator<Item = (Band, &str)> {
        Band::ALL.into_iter().zip(self.labels.iter().map(|l| &**l))
    }

    /// Category for `band`, sharing this legend's label
    pub fn category(&self, band: Band) -> Category {
        Category {
            field: self.field,
            band,
            label: Arc::clone(&self.labels[band.index()]),
        }
    }
}

/// Band assigned to one record for one classified field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Classified field
    pub field: OutputField,
    /// Assigned band
    pub band: Band,
    label: Arc<str>,
}

impl Category {
    /// Label text, identical to the legend entry of the same band
    pub fn label(&self) -> &str {
        &self.label
    }
}
