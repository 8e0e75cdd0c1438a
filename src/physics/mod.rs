//! Physical model
//!
//! This module provides the closed-form electrolysis estimate: how much
//! charge, time and power it takes to bring a fluid volume to a target HOCl
//! concentration at constant current.
//!
//! # Core Concepts
//!
//! - **Model Inputs**: validated parameter tuple (concentration, volume,
//!   efficiency, voltage, resistance)
//! - **Model Outputs**: derived quantities (mass, moles, charge, current,
//!   time, power, supply current)
//! - **Physical Model**: the trait mapping one to the other
//!
//! # Equations
//!
//! ```text
//! m = ppm · V / 1000                     (g)
//! n = m / M_HOCl                         (mol)
//! Q = n · z · F / η                      (C)
//! I = U / R                              (A)
//! t = Q / I                              (s)
//! P = U · I                              (W)
//! ```
//!
//! # Example
//!
//! ```rust
//! use hocl_rs::physics::{evaluate, ModelInputs};
//!
//! let inputs = ModelInputs::new(100.0, 0.1, 1.0, 7.2, 1.4).unwrap();
//! let outputs = evaluate(&inputs);
//!
//! assert!((outputs.current_amps - 5.143).abs() < 1e-3);
//! assert!((outputs.time_seconds - 7.15).abs() < 1e-2);
//! ```

pub mod constants;
pub mod inputs;
pub mod outputs;
pub mod traits;

pub use inputs::ModelInputs;
pub use outputs::ModelOutputs;
pub use traits::PhysicalModel;

use crate::models::HoclElectrolysis;

/// Evaluate the default HOCl model (no downstream supply) at one point
pub fn evaluate(inputs: &ModelInputs) -> ModelOutputs {
    HoclElectrolysis::new().evaluate(inputs)
}
