use super::{Mode, UnitConstants};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds configuration data such as the solution mode and unit constants
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Unit-conversion constants
    pub constants: UnitConstants,

    /// Solution mode (steady or transient)
    pub mode: Mode,

    /// Prints the timestep information
    pub verbose: bool,
}

impl Config {
    /// Allocates a new instance (incompressible, oilfield units, silent)
    pub fn new() -> Self {
        Config {
            constants: UnitConstants::field(),
            mode: Mode::Incompressible,
            verbose: false,
        }
    }

    /// Sets the unit-conversion constants
    pub fn set_constants(&mut self, constants: UnitConstants) -> Result<&mut Self, StrError> {
        constants.validate()?;
        self.constants = constants;
        Ok(self)
    }

    /// Sets the incompressible (steady-state) mode
    pub fn set_incompressible(&mut self) -> Result<&mut Self, StrError> {
        self.mode = Mode::Incompressible;
        Ok(self)
    }

    /// Sets the slightly-compressible (transient) mode
    pub fn set_slightly_compressible(&mut self, dt: f64, n_steps: usize) -> Result<&mut Self, StrError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err("dt must be > 0.0");
        }
        if n_steps < 1 {
            return Err("n_steps must be ≥ 1");
        }
        self.mode = Mode::SlightlyCompressible { dt, n_steps };
        Ok(self)
    }

    /// Enables or disables the printing of timestep information
    pub fn set_verbose(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.verbose = flag;
        Ok(self)
    }

    /// Checks the constants and the solution mode (e.g., after deserialization)
    pub fn validate(&self) -> Result<(), StrError> {
        self.constants.validate()?;
        if let Mode::SlightlyCompressible { dt, n_steps } = self.mode {
            if !dt.is_finite() || dt <= 0.0 {
                return Err("dt must be > 0.0");
            }
            if n_steps < 1 {
                return Err("n_steps must be ≥ 1");
            }
        }
        Ok(())
    }

    /// Returns the timestep length, if transient
    pub fn dt(&self) -> Option<f64> {
        match self.mode {
            Mode::Incompressible => None,
            Mode::SlightlyCompressible { dt, .. } => Some(dt),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n").unwrap();
        write!(f, "==================\n").unwrap();
        write!(f, "mode = {:?}\n", self.mode).unwrap();
        write!(f, "verbose = {:?}\n", self.verbose).unwrap();
        write!(f, "\nUnit constants\n").unwrap();
        write!(f, "==============\n").unwrap();
        write!(f, "beta_c = {:?}\n", self.constants.beta_c).unwrap();
        write!(f, "gamma_c = {:?}\n", self.constants.gamma_c).unwrap();
        write!(f, "alpha_c = {:?}\n", self.constants.alpha_c).unwrap();
        write!(f, "gravity = {:?}\n", self.constants.gravity).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
