use super::FdmBase;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the rate and bottomhole pressure of a well after a solve
///
/// `None` means the value cannot be computed for the operating condition
/// (constant pressure-gradient wells).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WellSolution {
    /// Well name
    pub name: String,

    /// Flow rate (negative means production)
    pub rate: Option<f64>,

    /// Bottomhole pressure
    pub bhp: Option<f64>,
}

impl fmt::Display for WellSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: Option<f64>| match v {
            Some(x) => format!("{:.6}", x),
            None => "undefined".to_string(),
        };
        write!(f, "{}: rate = {}, bhp = {}", self.name, show(self.rate), show(self.bhp))
    }
}

/// Back-calculates well rates and bottomhole pressures from a pressure field
pub struct PostProc<'a> {
    base: &'a FdmBase<'a>,
}

impl<'a> PostProc<'a> {
    /// Allocates a new instance
    pub fn new(base: &'a FdmBase<'a>) -> Self {
        PostProc { base }
    }

    /// Returns the solution of every well given the pressures of all equations
    pub fn wells(&self, pressure: &Vector) -> Vec<WellSolution> {
        let equations = &self.base.topology.equations;
        let at = |index: usize| match equations[index] {
            Some(e) => pressure[e],
            None => f64::NAN,
        };
        self.base
            .wells
            .iter()
            .zip(&self.base.inflows)
            .map(|(well, inflow)| inflow.post_process(&well.condition, at))
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
