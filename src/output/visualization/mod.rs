//! Visualization of sweep results
//!
//! Static band heatmaps rendered with the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Plot configuration (`PlotConfig`, `BandPalette`)
//! - **heatmap**: Volume × resistance band maps
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hocl_rs::classification::OutputField;
//! use hocl_rs::output::visualization::{plot_heatmap, PlotConfig};
//!
//! let result = sweep::sweep(&SweepRequest::default())?;
//!
//! // Default config
//! plot_heatmap(&result, OutputField::TimeSeconds, "time.png", None)?;
//!
//! // Custom title, vector output
//! let config = PlotConfig::heatmap("Generation time at 100 ppm");
//! plot_heatmap(&result, OutputField::TimeSeconds, "time.svg", Some(&config))?;
//! ```

pub mod config;
pub mod heatmap;

pub use config::{BandPalette, NO_TITLE, PlotConfig};

pub use heatmap::plot_heatmap;
