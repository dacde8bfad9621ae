use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the directory where the simulation result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/resflow/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/resflow/test";

/// Holds the unit-conversion constants used by the discretization
///
/// The values are passed explicitly to every calculator that needs them.
/// [UnitConstants::field()] returns the oilfield-unit values (ft, psi, md, cp, STB/D).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitConstants {
    /// Transmissibility conversion factor (β_c)
    pub beta_c: f64,

    /// Gravity conversion factor (γ_c)
    pub gamma_c: f64,

    /// Volume conversion factor (α_c) used by the accumulation term
    pub alpha_c: f64,

    /// Gravitational acceleration
    pub gravity: f64,
}

impl UnitConstants {
    /// Returns the oilfield-unit constants
    pub fn field() -> Self {
        UnitConstants {
            beta_c: 0.001127,
            gamma_c: 0.21584e-3,
            alpha_c: 5.614583,
            gravity: 32.174,
        }
    }

    /// Returns constants equal to one (consistent units)
    pub fn unit() -> Self {
        UnitConstants {
            beta_c: 1.0,
            gamma_c: 1.0,
            alpha_c: 1.0,
            gravity: 1.0,
        }
    }

    /// Returns the fluid gravity γ = γ_c ρ g
    pub fn fluid_gravity(&self, density: f64) -> f64 {
        self.gamma_c * density * self.gravity
    }

    /// Checks that all constants are finite and positive
    pub fn validate(&self) -> Result<(), StrError> {
        let all = [self.beta_c, self.gamma_c, self.alpha_c, self.gravity];
        if all.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err("unit constants must be finite and > 0.0");
        }
        Ok(())
    }
}

impl Default for UnitConstants {
    fn default() -> Self {
        UnitConstants::field()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::UnitConstants;
    use russell_lab::approx_eq;

    #[test]
    fn fluid_gravity_works() {
        let c = UnitConstants::field();
        // water: 62.4 lbm/ft³ gives the classic 0.433 psi/ft
        approx_eq(c.fluid_gravity(62.4), 0.4333, 1e-4);
        assert_eq!(UnitConstants::unit().fluid_gravity(2.0), 2.0);
    }

    #[test]
    fn validate_captures_errors() {
        let mut c = UnitConstants::default();
        assert_eq!(c.validate(), Ok(()));
        c.beta_c = 0.0;
        assert_eq!(c.validate().err(), Some("unit constants must be finite and > 0.0"));
        c.beta_c = f64::NAN;
        assert_eq!(c.validate().err(), Some("unit constants must be finite and > 0.0"));
    }
}
