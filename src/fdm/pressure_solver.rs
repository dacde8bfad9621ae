use super::LinearSystem;
use crate::StrError;
use russell_lab::{solve_lin_sys, Matrix, Vector};

/// Solves the pressure equations with a dense direct method
///
/// The coefficient matrix of the linear system is never modified; the
/// factorization works on a private copy.
pub struct PressureSolver {
    /// Workspace receiving a copy of the coefficient matrix
    work: Matrix,
}

impl PressureSolver {
    /// Allocates a new instance
    pub fn new(n_equation: usize) -> Self {
        PressureSolver {
            work: Matrix::new(n_equation, n_equation),
        }
    }

    /// Solves the system with the current constant vector
    ///
    /// Returns an error if the matrix is singular (e.g., sealed reservoir without wells),
    /// including groups of blocks without any reference pressure.
    pub fn solve(&mut self, lin: &LinearSystem, pressure: &mut Vector) -> Result<(), StrError> {
        if pressure.dim() != lin.n_equation {
            return Err("the pressure vector must have dimension equal to n_equation");
        }
        if !lin.anchored {
            return Err("the coefficient matrix is singular");
        }
        self.work.clone_from(&lin.lhs);
        for e in 0..lin.n_equation {
            pressure[e] = lin.rhs[e];
        }
        solve_lin_sys(pressure, &mut self.work).map_err(|_| "the coefficient matrix is singular")?;
        if pressure.as_data().iter().any(|p| !p.is_finite()) {
            return Err("the coefficient matrix is singular");
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
