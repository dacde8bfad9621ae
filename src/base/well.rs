use super::{WellCondition, WellConfig};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the data of a well
///
/// A well may be completed in several cells (e.g., all layers of the first
/// ring of a radial grid); the operating condition applies to the well as a whole.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Well {
    /// Well name
    pub name: String,

    /// Positions (1-based) of the completed cells
    pub completions: Vec<(usize, usize, usize)>,

    /// Wellbore radius
    pub rw: f64,

    /// Skin factor
    pub skin: f64,

    /// Position within the drainage block (radial grids accept only `Center`)
    pub config: WellConfig,

    /// Operating condition
    pub condition: WellCondition,
}

impl Well {
    /// Allocates a new well at the center of a block, without skin
    pub fn new(name: &str, location: (usize, usize, usize), rw: f64, condition: WellCondition) -> Self {
        Well {
            name: name.to_string(),
            completions: vec![location],
            rw,
            skin: 0.0,
            config: WellConfig::Center,
            condition,
        }
    }

    /// Sets the skin factor
    pub fn set_skin(&mut self, skin: f64) -> &mut Self {
        self.skin = skin;
        self
    }

    /// Sets the position of the well within its drainage block
    pub fn set_config(&mut self, config: WellConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Adds a completed cell
    pub fn add_completion(&mut self, location: (usize, usize, usize)) -> &mut Self {
        if !self.completions.contains(&location) {
            self.completions.push(location);
        }
        self
    }

    /// Sets the operating condition
    pub fn set_condition(&mut self, condition: WellCondition) -> &mut Self {
        self.condition = condition;
        self
    }

    /// Checks the values that do not depend on the grid
    pub fn validate(&self) -> Result<(), StrError> {
        if !self.rw.is_finite() || self.rw <= 0.0 {
            return Err("wellbore radius must be > 0.0");
        }
        if !self.skin.is_finite() {
            return Err("skin factor must be finite");
        }
        if self.completions.is_empty() {
            return Err("well must have at least one completion");
        }
        let value = match self.condition {
            WellCondition::ConstantBhp(v) => v,
            WellCondition::ConstantRate(v) => v,
            WellCondition::ConstantPressureGrad(v) => v,
            WellCondition::ShutIn => 0.0,
        };
        if !value.is_finite() {
            return Err("well operating value must be finite");
        }
        Ok(())
    }
}

impl fmt::Display for Well {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} rw = {:?} skin = {:?} config = {} : {}",
            self.name,
            self.completions,
            self.rw,
            self.skin,
            self.config.code(),
            self.condition
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
