//! Physical models for HOCl generation estimates
//!
//! All models implement the [`PhysicalModel`](crate::physics::PhysicalModel) trait.
//! The sweep engine calls `evaluate` once per grid cell; models are responsible
//! for the physics, the engine for the sampling.
//!
//! # Available Models
//!
//! ## [`HoclElectrolysis`]
//!
//! Constant-current brine electrolysis with a faradaic efficiency factor.
//! Optionally reports the current drawn from a downstream [`SupplyConfig`].

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod electrolysis;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use electrolysis::{HoclElectrolysis, SupplyConfig};
