//! CSV export of sweep results
//!
//! One row per grid cell, in the table's row-major order (volume outer,
//! resistance inner). Compatible with Excel, pandas and most data tools.
//!
//! # Columns
//!
//! | Column                   | Content                                       |
//! |--------------------------|-----------------------------------------------|
//! | `volume`                 | Volume axis value, in the sweep's volume unit |
//! | `volume_liters`          | Same volume in liters                         |
//! | `resistance_ohms`        | Resistance axis value                         |
//! | `grams_needed` … `power_watts` | Model outputs                           |
//! | `secondary_current_amps` | Only when the model reports a supply draw     |
//! | `<field>_category`       | One label column per classified field         |
//!
//! # Example
//!
//! ```rust,ignore
//! use hocl_rs::output::export::{export_sweep_csv, CsvConfig, CsvMetadata};
//!
//! let request = SweepRequest::default();
//! let result = sweep::sweep(&request)?;
//!
//! let config = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_request(&request, result.model_name()));
//! export_sweep_csv(&result, "sweep.csv", Some(&config))?;
//! ```
//!
//! **Output** (`sweep.csv`):
//! ```csv
//! # HOCl Electrolysis Sweep
//! # Generated: 2026-02-11T15:30:00Z
//! # Model: HOCl Electrolysis
//! # Target: 100 ppm
//! # Faradaic Efficiency: 0.5
//! # Voltage: 7.2 V
//! # Volume Unit: fl oz
//! # Grid: 50 x 50
//! #
//! volume,volume_liters,resistance_ohms,grams_needed,...,time_seconds_category
//! 0.300000,0.008872,1.500000,0.000887,...,Fast (≤ 2.0s)
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use super::Exporter;
use crate::sweep::{SweepRequest, SweepResult};

// =============================================================================
// Errors
// =============================================================================

/// Errors raised by the CSV exporter
#[derive(Debug, Error)]
pub enum CsvError {
    /// The result table has no record
    #[error("empty result: nothing to export")]
    EmptyResult,

    /// A numeric value would be written as NaN or Inf
    #[error("invalid data: non-finite {column} in row {row}")]
    NonFinite {
        /// Row index (0-based, data rows only)
        row: usize,
        /// Column name
        column: &'static str,
    },

    /// File creation or write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use hocl_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::european().precision(3);
/// assert_eq!(config.delimiter, ';');
/// assert_eq!(config.decimal_separator, ',');
/// assert_eq!(config.precision, 3);
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only non-None fields are written.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Model name (e.g., "HOCl Electrolysis")
    pub model_name: Option<String>,

    /// Target concentration (ppm)
    pub target_ppm: Option<f64>,

    /// Faradaic efficiency η
    pub faradaic_efficiency: Option<f64>,

    /// Load voltage (V)
    pub voltage: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata describing the fixed scalars of `request`
    pub fn from_request(request: &SweepRequest, model: &str) -> Self {
        Self {
            model_name: Some(model.to_string()),
            target_ppm: Some(request.target_ppm),
            faradaic_efficiency: Some(request.faradaic_efficiency),
            voltage: Some(request.voltage),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

const OUTPUT_COLUMNS: [&str; 9] = [
    "volume",
    "volume_liters",
    "resistance_ohms",
    "grams_needed",
    "moles_needed",
    "charge_coulombs",
    "current_amps",
    "time_seconds",
    "power_watts",
];

const SECONDARY_COLUMN: &str = "secondary_current_amps";

/// Write metadata header comments
fn write_metadata_header<W: Write>(
    out: &mut W,
    metadata: &CsvMetadata,
    result: &SweepResult,
) -> Result<(), CsvError> {
    writeln!(out, "# HOCl Electrolysis Sweep")?;

    let now = chrono::Utc::now();
    writeln!(out, "# Generated: {}", now.to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(ppm) = metadata.target_ppm {
        writeln!(out, "# Target: {} ppm", ppm)?;
    }
    if let Some(eta) = metadata.faradaic_efficiency {
        writeln!(out, "# Faradaic Efficiency: {}", eta)?;
    }
    if let Some(voltage) = metadata.voltage {
        writeln!(out, "# Voltage: {} V", voltage)?;
    }

    let (rows, columns) = result.shape();
    writeln!(out, "# Volume Unit: {}", result.volume_unit().symbol())?;
    writeln!(out, "# Grid: {} x {}", rows, columns)?;

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a sweep result table to CSV
///
/// # Errors
///
/// - [`CsvError::EmptyResult`]: the table has no record
/// - [`CsvError::NonFinite`]: a numeric value is NaN or Inf
/// - [`CsvError::Io`]: the file cannot be created or written
pub fn export_sweep_csv(
    result: &SweepResult,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    // ============================= Validation =============================

    if result.is_empty() {
        return Err(CsvError::EmptyResult);
    }

    let with_secondary = result
        .records()
        .iter()
        .any(|r| r.outputs.secondary_current_amps.is_some());

    for (row, record) in result.records().iter().enumerate() {
        let outputs = &record.outputs;
        let values = [
            record.volume,
            record.volume_liters,
            record.resistance_ohms,
            outputs.grams_needed,
            outputs.moles_needed,
            outputs.charge_coulombs,
            outputs.current_amps,
            outputs.time_seconds,
            outputs.power_watts,
        ];
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(CsvError::NonFinite {
                row,
                column: OUTPUT_COLUMNS[index],
            });
        }
        if outputs.secondary_current_amps.is_some_and(|a| !a.is_finite()) {
            return Err(CsvError::NonFinite {
                row,
                column: SECONDARY_COLUMN,
            });
        }
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);
    let delimiter = configuration.delimiter;

    // ============================= Open File ==============================

    let mut out = BufWriter::new(File::create(output_path)?);

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut out, metadata, result)?;
        }
    }

    // ============================= Write Header ===========================

    let mut header: Vec<String> = OUTPUT_COLUMNS.iter().map(|c| c.to_string()).collect();
    if with_secondary {
        header.push(SECONDARY_COLUMN.to_string());
    }
    for legend in result.legends() {
        header.push(format!("{}_category", legend.field()));
    }
    writeln!(out, "{}", header.join(&delimiter.to_string()))?;

    // ============================= Write Data =============================

    for record in result.records() {
        let outputs = &record.outputs;
        write!(
            out,
            "{}",
            format_number(record.volume, configuration)
        )?;
        for value in [
            record.volume_liters,
            record.resistance_ohms,
            outputs.grams_needed,
            outputs.moles_needed,
            outputs.charge_coulombs,
            outputs.current_amps,
            outputs.time_seconds,
            outputs.power_watts,
        ] {
            write!(out, "{}{}", delimiter, format_number(value, configuration))?;
        }
        if with_secondary {
            let secondary = outputs
                .secondary_current_amps
                .map(|a| format_number(a, configuration))
                .unwrap_or_default();
            write!(out, "{}{}", delimiter, secondary)?;
        }
        for legend in result.legends() {
            let label = record
                .category(legend.field())
                .map(|c| c.label())
                .unwrap_or_default();
            write!(out, "{}{}", delimiter, label)?;
        }
        writeln!(out)?;
    }

    out.flush()?;

    log::debug!(
        "exported {} sweep records to {}",
        result.len(),
        output_path
    );

    Ok(())
}

/// CSV implementation of [`Exporter`]
///
/// # Example
///
/// ```rust,ignore
/// use hocl_rs::output::export::{CsvConfig, CsvExporter, Exporter};
///
/// let exporter = CsvExporter::new(CsvConfig::european());
/// exporter.export(&result, "sweep.csv")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    /// Export configuration
    pub config: CsvConfig,
}

impl CsvExporter {
    /// Exporter with the given configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export(&self, result: &SweepResult, path: &str) -> Result<(), CsvError> {
        export_sweep_csv(result, path, Some(&self.config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::CategoryThresholds;
    use crate::models::{HoclElectrolysis, SupplyConfig};
    use crate::sweep::{Axis, SweepEngine, SweepSpec};
    use std::fs;
    use tempfile::NamedTempFile;

    fn small_request() -> SweepRequest {
        SweepRequest::new(
            100.0,
            0.5,
            7.2,
            SweepSpec::new(Axis::new(0.1, 0.3, 3), Axis::new(1.0, 4.0, 4)),
        )
    }

    fn small_result() -> SweepResult {
        SweepEngine::default().run(&small_request()).unwrap()
    }

    fn data_lines(content: &str) -> Vec<&str> {
        content.lines().filter(|l| !l.starts_with('#')).collect()
    }

    #[test]
    fn test_format_number() {
        let config = CsvConfig::default().precision(2);
        assert_eq!(format_number(3.14159, &config), "3.14");

        let european = CsvConfig::european().precision(2);
        assert_eq!(format_number(3.14159, &european), "3,14");
    }

    #[test]
    fn test_export_header_and_rows() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        export_sweep_csv(&small_result(), path, None).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines = data_lines(&content);
        assert_eq!(lines.len(), 1 + 12);
        assert_eq!(
            lines[0],
            "volume,volume_liters,resistance_ohms,grams_needed,moles_needed,\
             charge_coulombs,current_amps,time_seconds,power_watts,time_seconds_category"
        );
        assert!(lines[1].starts_with("0.100000,0.100000,1.000000,"));
        assert!(lines[12].starts_with("0.300000,0.300000,4.000000,"));
    }

    #[test]
    fn test_export_category_columns() {
        let request = small_request().with_power_thresholds(CategoryThresholds::new(10.0, 30.0));
        let result = SweepEngine::default().run(&request).unwrap();

        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        export_sweep_csv(&result, path, None).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines = data_lines(&content);
        assert!(lines[0].ends_with("time_seconds_category,power_watts_category"));

        // 7.2 V over 1 Ω: 51.84 W
        let first: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(first.len(), 11);
        assert_eq!(first[10], "High (> 30.0W)");
    }

    #[test]
    fn test_export_secondary_current_column() {
        let engine = SweepEngine::new(Box::new(
            HoclElectrolysis::new().with_supply(SupplyConfig::default()),
        ));
        let result = engine.run(&small_request()).unwrap();

        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        export_sweep_csv(&result, path, None).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let header = data_lines(&content)[0];
        assert!(header.contains("power_watts,secondary_current_amps,time_seconds_category"));
    }

    #[test]
    fn test_export_with_metadata() {
        let request = small_request();
        let result = SweepEngine::default().run(&request).unwrap();
        let mut metadata = CsvMetadata::from_request(&request, result.model_name());
        metadata.add_custom("Operator".to_string(), "bench 3".to_string());
        let config = CsvConfig::default().with_metadata(metadata);

        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        export_sweep_csv(&result, path, Some(&config)).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("# HOCl Electrolysis Sweep"));
        assert!(content.contains("# Generated: "));
        assert!(content.contains("# Model: HOCl Electrolysis"));
        assert!(content.contains("# Target: 100 ppm"));
        assert!(content.contains("# Voltage: 7.2 V"));
        assert!(content.contains("# Grid: 3 x 4"));
        assert!(content.contains("# Operator: bench 3"));
        assert_eq!(data_lines(&content).len(), 13);
    }

    #[test]
    fn test_export_european() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        CsvExporter::new(CsvConfig::european())
            .export(&small_result(), path)
            .unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines = data_lines(&content);
        assert!(lines[0].starts_with("volume;volume_liters;"));
        assert!(lines[1].starts_with("0,100000;0,100000;1,000000;"));
    }

    #[test]
    fn test_export_invalid_path() {
        let err = export_sweep_csv(&small_result(), "/nonexistent/dir/sweep.csv", None).unwrap_err();
        assert!(matches!(err, CsvError::Io(_)));
    }
}
