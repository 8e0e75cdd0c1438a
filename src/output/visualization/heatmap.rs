//! Band heatmaps of sweep results
//!
//! One filled cell per grid point, resistance on the x axis and volume on the
//! y axis, colored by the band of the chosen classified field.
//!
//! ```text
//!   volume
//!     ▲  ┌───┬───┬───┬───┐
//!     │  │ M │ H │ H │ H │
//!     │  ├───┼───┼───┼───┤
//!     │  │ L │ M │ M │ H │
//!     │  ├───┼───┼───┼───┤
//!     │  │ L │ L │ L │ M │
//!     └──┴───┴───┴───┴───┴──▶ resistance
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use hocl_rs::classification::OutputField;
//! use hocl_rs::output::visualization::{plot_heatmap, PlotConfig};
//!
//! let result = sweep::sweep(&SweepRequest::default())?;
//! plot_heatmap(&result, OutputField::TimeSeconds, "time.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{BandPalette, NO_TITLE, PlotConfig};
use crate::classification::{Band, Legend, OutputField};
use crate::sweep::SweepResult;

/// One drawable cell: `[x0, x1] × [y0, y1]` and its band
struct Cell {
    x: (f64, f64),
    y: (f64, f64),
    band: Band,
}

/// Relative half-width of the cell of a single-sample axis
const POINT_HALF_WIDTH: f64 = 0.05;

/// Half the spacing between samples
///
/// A single-sample axis has no spacing: its cell spans ±5 % of the value, so
/// a positive volume or resistance never gets a negative bound.
fn half_step(values: &[f64]) -> f64 {
    match (values.first(), values.last()) {
        (Some(first), Some(last)) if values.len() > 1 => (last - first) / (values.len() - 1) as f64 / 2.0,
        (Some(only), _) => (POINT_HALF_WIDTH * only.abs()).max(f64::EPSILON),
        _ => 0.5,
    }
}

/// Span of the axis including the half-cells at both ends
fn axis_range(values: &[f64]) -> (f64, f64) {
    let half = half_step(values);
    let first = values.first().copied().unwrap_or(0.0);
    let last = values.last().copied().unwrap_or(0.0);
    (first - half, last + half)
}

/// Build the cells of `field` in row-major order
fn collect_cells(result: &SweepResult, field: OutputField) -> Vec<Cell> {
    let dx = half_step(result.resistance_values());
    let dy = half_step(result.volume_values());

    result
        .records()
        .iter()
        .filter_map(|record| {
            let band = record.category(field)?.band;
            Some(Cell {
                x: (record.resistance_ohms - dx, record.resistance_ohms + dx),
                y: (record.volume - dy, record.volume + dy),
                band,
            })
        })
        .collect()
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot the band map of a classified field
///
/// # Arguments
///
/// * `result`      : Sweep result table
/// * `field`       : Classified field to color by (must have a legend in `result`)
/// * `output_path` : Output file path (`.svg` → vector, anything else → bitmap)
/// * `config`      : Optional plot configuration; `None` uses [`PlotConfig::heatmap`]
///
/// # Errors
///
/// Returns `Err` if `field` was not classified, if the table is empty, or if
/// the backend cannot write to `output_path`.
pub fn plot_heatmap(
    result: &SweepResult,
    field: OutputField,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let legend = result
        .legend(field)
        .ok_or_else(|| format!("field {} was not classified in this sweep", field))?;

    if result.is_empty() {
        return Err("Empty data: the sweep result has no record".into());
    }

    let default_config = PlotConfig::heatmap(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let ylabel = if config.ylabel.is_empty() {
        format!("Volume ({})", result.volume_unit().symbol())
    } else {
        config.ylabel.clone()
    };

    let cells = collect_cells(result, field);
    let x_range = axis_range(result.resistance_values());
    let y_range = axis_range(result.volume_values());

    log::debug!(
        "plotting {} heatmap ({} cells) to {}",
        field,
        cells.len(),
        output_path
    );

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_heatmap_impl(backend, &cells, legend, config, &ylabel, x_range, y_range)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_heatmap_impl(backend, &cells, legend, config, &ylabel, x_range, y_range)
        }
    }
}

// =================================================================================================
// Rendering
// =================================================================================================

/// Render the heatmap with the given drawing backend
fn plot_heatmap_impl<DB: DrawingBackend>(
    backend: DB,
    cells: &[Cell],
    legend: &Legend,
    config: &PlotConfig,
    ylabel: &str,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    let x_formatter = |x: &f64| format!("{:.2}", x);
    let y_formatter = |y: &f64| format!("{:.2}", y);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(ylabel)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    let palette: BandPalette = config.palette;

    // One series per band so each gets its legend entry
    for band in Band::ALL {
        let color = palette.color(band);
        chart
            .draw_series(
                cells
                    .iter()
                    .filter(|cell| cell.band == band)
                    .map(|cell| {
                        Rectangle::new([(cell.x.0, cell.y.0), (cell.x.1, cell.y.1)], color.filled())
                    }),
            )?
            .label(legend.label(band))
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.filled()));
    }

    if config.show_legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&config.background.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::CategoryThresholds;
    use crate::sweep::{Axis, SweepEngine, SweepRequest, SweepSpec};
    use tempfile::NamedTempFile;

    fn small_result() -> SweepResult {
        let request = SweepRequest::new(
            100.0,
            0.5,
            7.2,
            SweepSpec::new(Axis::new(0.01, 0.05, 5), Axis::new(1.0, 4.0, 4)),
        )
        .with_power_thresholds(CategoryThresholds::new(15.0, 30.0));
        SweepEngine::default().run(&request).unwrap()
    }

    #[test]
    fn test_half_step() {
        assert_eq!(half_step(&[1.0, 2.0, 3.0]), 0.5);
        assert_eq!(half_step(&[2.0]), 0.1);
        assert_eq!(axis_range(&[1.0, 2.0, 3.0]), (0.5, 3.5));
    }

    #[test]
    fn test_single_sample_axis_stays_positive() {
        let (low, high) = axis_range(&[0.1]);
        assert!(low > 0.0);
        assert!(low < 0.1 && high > 0.1);

        // Zero-width value still gets a drawable cell
        let (low, high) = axis_range(&[0.0]);
        assert!(low < high);
    }

    #[test]
    fn test_plot_heatmap_single_point() {
        let request = SweepRequest::new(100.0, 0.5, 7.2, SweepSpec::new(Axis::point(0.1), Axis::point(1.4)));
        let result = SweepEngine::default().run(&request).unwrap();

        let cells = collect_cells(&result, OutputField::TimeSeconds);
        assert_eq!(cells.len(), 1);
        assert!(cells[0].y.0 > 0.0);
        assert!(cells[0].x.0 > 0.0);

        let path = NamedTempFile::new().unwrap().path().with_extension("svg");
        assert!(plot_heatmap(&result, OutputField::TimeSeconds, path.to_str().unwrap(), None).is_ok());
    }

    #[test]
    fn test_collect_cells_tile_the_grid() {
        let result = small_result();
        let cells = collect_cells(&result, OutputField::TimeSeconds);
        assert_eq!(cells.len(), 20);

        // Adjacent cells share an edge
        assert!((cells[0].x.1 - cells[1].x.0).abs() < 1e-12);
        assert!((cells[0].y.1 - cells[4].y.0).abs() < 1e-12);
    }

    #[test]
    fn test_plot_heatmap_svg() {
        let path = NamedTempFile::new().unwrap().path().with_extension("svg");
        let result = plot_heatmap(&small_result(), OutputField::TimeSeconds, path.to_str().unwrap(), None);
        assert!(result.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_plot_heatmap_png_power() {
        let path = NamedTempFile::new().unwrap().path().with_extension("png");
        let mut config = PlotConfig::heatmap("Power");
        config.show_grid = false;
        config.width = 400;
        config.height = 300;

        let result = plot_heatmap(
            &small_result(),
            OutputField::PowerWatts,
            path.to_str().unwrap(),
            Some(&config),
        );
        assert!(result.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_plot_heatmap_unclassified_field() {
        let path = NamedTempFile::new().unwrap().path().with_extension("svg");
        let result = plot_heatmap(&small_result(), OutputField::CurrentAmps, path.to_str().unwrap(), None);
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
