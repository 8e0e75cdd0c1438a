//! Demo: HOCl generation map of a small electrolysis cell
//!
//! Runs the default pocket sprayer sweep and writes the
//! result table and band heatmaps to the temporary directory:
//!
//! - Target: 100 ppm HOCl
//! - Faradaic efficiency: 50 %
//! - Load voltage: 7.2 V (two Li-ion cells in series)
//! - Volume: 0.3 to 1.0 US fl oz (50 samples)
//! - Electrode resistance: 1.5 to 4.0 Ω (50 samples)
//! - Single-cell supply: 3.7 V at 90 % converter efficiency

use hocl_rs::{
    classification::{Band, CategoryThresholds, OutputField},
    models::{HoclElectrolysis, SupplyConfig},
    output::{export_sweep_csv, plot_heatmap, CsvConfig, CsvMetadata, PlotConfig},
    physics::{self, ModelInputs},
    sweep::{EngineConfig, SweepEngine, SweepRequest},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  HOCl Electrolysis - Generation Map");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Single point ======

    let inputs = ModelInputs::new(100.0, 0.1, 1.0, 7.2, 1.4)?;
    let outputs = physics::evaluate(&inputs);

    println!("Reference point (100 ppm, 0.1 L, η = 1, 7.2 V, 1.4 Ω):");
    println!("  HOCl mass : {:.4} g", outputs.grams_needed);
    println!("  Moles     : {:.4e} mol", outputs.moles_needed);
    println!("  Charge    : {:.2} C", outputs.charge_coulombs);
    println!("  Current   : {:.3} A", outputs.current_amps);
    println!("  Time      : {:.2} s", outputs.time_seconds);
    println!("  Power     : {:.2} W\n", outputs.power_watts);

    // ====== Sweep ======

    let request = SweepRequest::default()
        .with_power_thresholds(CategoryThresholds::new(15.0, 30.0));

    let model = HoclElectrolysis::new().with_supply(SupplyConfig::default());
    let engine = SweepEngine::new(Box::new(model)).with_config(EngineConfig::default());

    let started = Instant::now();
    let result = engine.run(&request)?;
    let elapsed = started.elapsed().as_secs_f64();

    let (rows, columns) = result.shape();
    println!("Swept {} x {} grid in {:.3} ms", rows, columns, elapsed * 1e3);

    // ====== Band summary ======

    for field in [OutputField::TimeSeconds, OutputField::PowerWatts] {
        let (Some(legend), Some(counts)) = (result.legend(field), result.band_counts(field)) else {
            continue;
        };

        println!("\n{}:", field);
        for band in Band::ALL {
            println!("  {:<24} {:>5} cells", legend.label(band), counts[band.index()]);
        }
    }

    if let (Some(min), Some(max)) = (
        result.min(OutputField::TimeSeconds),
        result.max(OutputField::TimeSeconds),
    ) {
        println!("\nTime range: {:.2} s to {:.2} s", min, max);
    }

    // ====== Output files ======

    let tmp_dir = std::env::temp_dir();
    let csv_path = tmp_dir.join("hocl_sweep.csv");
    let time_path = tmp_dir.join("hocl_time.png");
    let power_path = tmp_dir.join("hocl_power.svg");

    let csv_config = CsvConfig::default()
        .with_metadata(CsvMetadata::from_request(&request, result.model_name()));
    export_sweep_csv(&result, &csv_path.to_string_lossy(), Some(&csv_config))?;

    plot_heatmap(
        &result,
        OutputField::TimeSeconds,
        &time_path.to_string_lossy(),
        Some(&PlotConfig::heatmap("Generation time, 100 ppm")),
    )?;
    plot_heatmap(
        &result,
        OutputField::PowerWatts,
        &power_path.to_string_lossy(),
        Some(&PlotConfig::heatmap("Cell power at 7.2 V")),
    )?;

    println!("\nWrote:");
    println!("  {}", csv_path.display());
    println!("  {}", time_path.display());
    println!("  {}", power_path.display());

    Ok(())
}
