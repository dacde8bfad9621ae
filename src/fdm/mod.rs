//! Implements the block-centered finite-difference method for single-phase flow

mod boundary_resolver;
mod fdm_base;
mod fdm_output;
mod fdm_output_write_csv;
mod inflow;
mod linear_system;
mod post_processing;
mod potential;
mod pressure_solver;
mod simulation;
mod topology;
mod transmissibility;
pub use crate::fdm::boundary_resolver::*;
pub use crate::fdm::fdm_base::*;
pub use crate::fdm::fdm_output::*;
pub use crate::fdm::inflow::*;
pub use crate::fdm::linear_system::*;
pub use crate::fdm::post_processing::*;
pub use crate::fdm::potential::*;
pub use crate::fdm::pressure_solver::*;
pub use crate::fdm::simulation::*;
pub use crate::fdm::topology::*;
pub use crate::fdm::transmissibility::*;
