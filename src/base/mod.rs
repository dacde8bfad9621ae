//! Implements the base structures for a finite-difference reservoir simulation

mod boundaries;
mod config;
mod constants;
mod enums;
mod grid;
mod properties;
mod radial;
mod samples;
mod well;
pub use crate::base::boundaries::*;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::grid::*;
pub use crate::base::properties::*;
pub use crate::base::radial::*;
pub use crate::base::samples::*;
pub use crate::base::well::*;
