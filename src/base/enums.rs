use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the faces of a grid block (and of the reservoir)
///
/// The numbering follows the engineering convention for boundary class codes.
/// In radial grids, `West` is the inner (wellbore) face and `East` the outer face.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Face {
    /// Minimum x (or inner radius)
    West = 1,

    /// Maximum x (or outer radius)
    East = 2,

    /// Minimum y
    South = 3,

    /// Maximum y
    North = 4,

    /// Minimum z (deepest layer)
    Bottom = 5,

    /// Maximum z (shallowest layer)
    Upper = 6,
}

impl Face {
    /// Holds all faces in code order
    pub const ALL: [Face; 6] = [Face::West, Face::East, Face::South, Face::North, Face::Bottom, Face::Upper];

    /// Returns the face on the minimum or maximum side of an axis
    pub fn new(axis: usize, min_side: bool) -> Self {
        match (axis, min_side) {
            (0, true) => Face::West,
            (0, false) => Face::East,
            (1, true) => Face::South,
            (1, false) => Face::North,
            (_, true) => Face::Bottom,
            (_, false) => Face::Upper,
        }
    }

    /// Returns the digit used in boundary class codes
    pub fn code(self) -> usize {
        self as usize
    }

    /// Returns the axis normal to this face (0, 1, or 2)
    pub fn axis(self) -> usize {
        (self.code() - 1) / 2
    }

    /// Tells whether the face is on the minimum side of its axis
    pub fn is_min(self) -> bool {
        self.code() % 2 == 1
    }
}

/// Defines boundary conditions on a reservoir face
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum Bc {
    /// Sealed face
    NoFlow,

    /// Prescribed pressure on the face
    ConstantPressure(f64),

    /// Prescribed pressure gradient normal to the face
    ConstantPressureGrad(f64),

    /// Prescribed flow rate through the whole face (positive means injection)
    ConstantRate(f64),
}

impl fmt::Display for Bc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bc::NoFlow => write!(f, "no-flow"),
            Bc::ConstantPressure(v) => write!(f, "pressure = {:?}", v),
            Bc::ConstantPressureGrad(v) => write!(f, "pressure gradient = {:?}", v),
            Bc::ConstantRate(v) => write!(f, "rate = {:?}", v),
        }
    }
}

/// Defines well operating conditions
///
/// Rates are positive for injection and negative for production.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum WellCondition {
    /// Constant bottomhole pressure
    ConstantBhp(f64),

    /// Constant flow rate
    ConstantRate(f64),

    /// Constant pressure gradient at the sandface
    ConstantPressureGrad(f64),

    /// Closed well
    ShutIn,
}

impl fmt::Display for WellCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WellCondition::ConstantBhp(v) => write!(f, "bhp = {:?}", v),
            WellCondition::ConstantRate(v) => write!(f, "rate = {:?}", v),
            WellCondition::ConstantPressureGrad(v) => write!(f, "pressure gradient = {:?}", v),
            WellCondition::ShutIn => write!(f, "shut-in"),
        }
    }
}

/// Defines where a well sits within its drainage block
///
/// A well on a reservoir edge (or corner) drains only part of the block; the
/// block sizes are doubled along the axes the well does not fully border.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum WellConfig {
    /// Code 0: well at the block center
    Center,

    /// Code 1: well on a face normal to y (drains half the block)
    EdgeY,

    /// Code 2: well on a face normal to x (drains half the block)
    EdgeX,

    /// Code 3: well on a reservoir corner (drains a quarter of the block)
    Corner,
}

impl WellConfig {
    /// Returns the configuration corresponding to a code in 0..=3
    pub fn from_code(code: usize) -> Result<Self, StrError> {
        match code {
            0 => Ok(WellConfig::Center),
            1 => Ok(WellConfig::EdgeY),
            2 => Ok(WellConfig::EdgeX),
            3 => Ok(WellConfig::Corner),
            _ => Err("well configuration code must be in 0..=3"),
        }
    }

    /// Returns the configuration code
    pub fn code(&self) -> usize {
        match self {
            WellConfig::Center => 0,
            WellConfig::EdgeY => 1,
            WellConfig::EdgeX => 2,
            WellConfig::Corner => 3,
        }
    }

    /// Returns the multipliers applied to (Δx, Δy)
    pub fn multipliers(&self) -> (f64, f64) {
        match self {
            WellConfig::Center => (1.0, 1.0),
            WellConfig::EdgeY => (1.0, 2.0),
            WellConfig::EdgeX => (2.0, 1.0),
            WellConfig::Corner => (2.0, 2.0),
        }
    }

    /// Returns the fraction of the full geometric factor
    pub fn fraction(&self) -> f64 {
        match self {
            WellConfig::Center => 1.0,
            WellConfig::EdgeY | WellConfig::EdgeX => 0.5,
            WellConfig::Corner => 0.25,
        }
    }
}

/// Defines the solution mode
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum Mode {
    /// Single steady-state solve
    Incompressible,

    /// Time-stepped solve with the accumulation term
    SlightlyCompressible {
        /// Timestep length
        dt: f64,

        /// Number of timesteps
        n_steps: usize,
    },
}

impl Mode {
    /// Returns the number of linear solves
    pub fn n_solves(&self) -> usize {
        match self {
            Mode::Incompressible => 1,
            Mode::SlightlyCompressible { n_steps, .. } => *n_steps,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Bc, Face, Mode, WellCondition, WellConfig};

    #[test]
    fn face_methods_work() {
        for face in Face::ALL {
            assert_eq!(Face::new(face.axis(), face.is_min()), face);
        }
        assert_eq!(Face::West.code(), 1);
        assert_eq!(Face::Upper.code(), 6);
        assert_eq!(Face::North.axis(), 1);
        assert!(Face::Bottom.is_min());
        assert!(!Face::East.is_min());
    }

    #[test]
    fn derive_and_display_work() {
        let bc = Bc::ConstantPressure(5000.0);
        let clone = bc.clone();
        assert_eq!(format!("{:?}", clone), "ConstantPressure(5000.0)");
        assert_eq!(format!("{}", bc), "pressure = 5000.0");
        assert_eq!(format!("{}", Bc::NoFlow), "no-flow");
        assert_eq!(format!("{}", WellCondition::ShutIn), "shut-in");
        assert_eq!(format!("{}", WellCondition::ConstantRate(-150.0)), "rate = -150.0");
        let json = serde_json::to_string(&WellCondition::ConstantBhp(1500.0)).unwrap();
        assert_eq!(json, r#"{"ConstantBhp":1500.0}"#);
    }

    #[test]
    fn well_config_works() {
        for code in 0..4 {
            let config = WellConfig::from_code(code).unwrap();
            assert_eq!(config.code(), code);
            let (mx, my) = config.multipliers();
            assert_eq!(config.fraction(), 1.0 / (mx * my));
        }
        assert_eq!(WellConfig::from_code(4).err(), Some("well configuration code must be in 0..=3"));
    }

    #[test]
    fn mode_works() {
        assert_eq!(Mode::Incompressible.n_solves(), 1);
        assert_eq!(Mode::SlightlyCompressible { dt: 1.0, n_steps: 5 }.n_solves(), 5);
    }
}
