//! Makes available common structures needed to run a simulation
//!
//! You may write `use resflow::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Bc, Boundaries, Config, Face, Grid, Property, RadialSpacing, RockFluid, UnitConstants};
pub use crate::base::{Mode, Well, WellCondition, WellConfig, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::fdm::{FdmBase, FdmOutput, FdmState, Simulation, WellSolution};
