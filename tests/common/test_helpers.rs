//! Helper functions for integration tests

use hocl_rs::physics::ModelInputs;
use hocl_rs::sweep::{Axis, SweepRequest, SweepSpec};

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// 100 ppm, 0.1 L, 7.2 V, 1.4 Ω at efficiency `eta`
pub fn reference_inputs(eta: f64) -> ModelInputs {
    ModelInputs::new(100.0, 0.1, eta, 7.2, 1.4).unwrap()
}

/// 100 ppm, η = 0.5, 7.2 V over a small liter grid
pub fn small_request(volume_samples: usize, resistance_samples: usize) -> SweepRequest {
    SweepRequest::new(
        100.0,
        0.5,
        7.2,
        SweepSpec::new(
            Axis::new(0.02, 0.2, volume_samples),
            Axis::new(1.0, 4.0, resistance_samples),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
