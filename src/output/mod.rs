//! Output adapters for sweep results
//!
//! - **Visualization**: PNG/SVG band heatmaps using plotters
//! - **Export**: CSV data export for external analysis
//!
//! Both consume a finished [`SweepResult`](crate::sweep::SweepResult); the
//! sweep engine never depends on this module.
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── heatmap.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hocl_rs::classification::OutputField;
//! use hocl_rs::output::{export_sweep_csv, plot_heatmap};
//!
//! let result = sweep::sweep(&SweepRequest::default())?;
//! export_sweep_csv(&result, "sweep.csv", None)?;
//! plot_heatmap(&result, OutputField::TimeSeconds, "sweep.png", None)?;
//! ```

pub mod export;
pub mod visualization;

pub use visualization::{BandPalette, PlotConfig, plot_heatmap};

pub use export::{CsvConfig, CsvError, CsvExporter, CsvMetadata, Exporter, export_sweep_csv};
