//! Export of sweep results
//!
//! # Architecture
//!
//! The [`Exporter`] trait abstracts the export format. Each format is an
//! independent implementation in its own sub-module, so a new format is a
//! new file.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use hocl_rs::output::export::{CsvExporter, Exporter};
//!
//! let result = sweep::sweep(&SweepRequest::default())?;
//! CsvExporter::default().export(&result, "sweep.csv")?;
//! ```

pub mod csv;

pub use csv::{CsvConfig, CsvError, CsvExporter, CsvMetadata, export_sweep_csv};

use crate::sweep::SweepResult;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so callers can
/// react to the concrete failure without downcasting a `Box<dyn Error>`.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Write every record of `result` to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - `result` contains no record
    fn export(&self, result: &SweepResult, path: &str) -> Result<(), Self::Error>;
}
