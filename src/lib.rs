//! Resflow simulates single-phase flow in porous reservoirs with the finite-difference method
//!
//! The reservoir is discretized by a block-centered grid (Cartesian or radial). Each active
//! block yields one pressure equation; the equations account for inter-block transmissibility,
//! gravity, boundary conditions, wells, and (for slightly compressible fluids) accumulation.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod fdm;
pub mod prelude;
