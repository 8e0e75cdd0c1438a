//! Integration tests: sweep module + output module
//!
//! A real sweep is run, then exported and plotted through the public API.

use std::fs;

use tempfile::NamedTempFile;

use hocl_rs::classification::{CategoryThresholds, OutputField};
use hocl_rs::output::export::{CsvConfig, CsvExporter, CsvMetadata, Exporter};
use hocl_rs::output::visualization::{BandPalette, PlotConfig, plot_heatmap};
use hocl_rs::sweep::{self, SweepRequest};

mod common;
use common::test_helpers::small_request;

#[test]
fn test_csv_row_per_cell() {
    let request = small_request(6, 7).with_power_thresholds(CategoryThresholds::new(15.0, 30.0));
    let result = sweep::sweep(&request).unwrap();

    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap();

    let config = CsvConfig::default()
        .precision(4)
        .with_metadata(CsvMetadata::from_request(&request, result.model_name()));
    CsvExporter::new(config).export(&result, path).unwrap();

    let content = fs::read_to_string(path).unwrap();
    let rows: Vec<&str> = content.lines().filter(|l| !l.starts_with('#')).collect();

    assert_eq!(rows.len(), 1 + 42);
    let columns = rows[0].split(',').count();
    assert!(rows.iter().all(|r| r.split(',').count() == columns));
    assert!(rows[0].ends_with("time_seconds_category,power_watts_category"));
}

#[test]
fn test_csv_rows_follow_record_order() {
    let result = sweep::sweep(&small_request(3, 4)).unwrap();

    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap();
    CsvExporter::default().export(&result, path).unwrap();

    let content = fs::read_to_string(path).unwrap();
    for (line, record) in content.lines().skip(1).zip(result.records()) {
        let fields: Vec<&str> = line.split(',').collect();
        let resistance: f64 = fields[2].parse().unwrap();
        assert!((resistance - record.resistance_ohms).abs() < 1e-6);
        assert_eq!(*fields.last().unwrap(), record.time_category().unwrap().label());
    }
}

#[test]
fn test_default_sweep_heatmaps() {
    let request = SweepRequest::default().with_power_thresholds(CategoryThresholds::new(15.0, 30.0));
    let result = sweep::sweep(&request).unwrap();

    let svg = NamedTempFile::new().unwrap().path().with_extension("svg");
    plot_heatmap(&result, OutputField::TimeSeconds, svg.to_str().unwrap(), None).unwrap();
    assert!(svg.exists());

    let png = NamedTempFile::new().unwrap().path().with_extension("png");
    let config = PlotConfig::heatmap("Power draw").palette(BandPalette::grayscale());
    plot_heatmap(&result, OutputField::PowerWatts, png.to_str().unwrap(), Some(&config)).unwrap();
    assert!(png.exists());

    let svg_content = fs::read_to_string(&svg).unwrap();
    assert!(svg_content.contains("HOCl Generation Map"));
}
