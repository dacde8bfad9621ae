use super::FdmBase;
use crate::base::Face;
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Holds the coefficient matrix and constant vector of the flow equations
///
/// Each row (one per active block) reads
///
/// ```text
/// Σ Tn pn - (Σ Tn + Σ Tb + Jw + Acc) pi = -(Σ qb + qw + Pot) - Acc pi_old
/// ```
///
/// The matrix is assembled once; only the constant vector changes between timesteps.
pub struct LinearSystem {
    /// Total number of equations (active blocks)
    pub n_equation: usize,

    /// Coefficient matrix (n_equation × n_equation)
    pub lhs: Matrix,

    /// Constant vector without the accumulation contribution
    pub rhs_base: Vector,

    /// Accumulation coefficient of each equation (zero if incompressible)
    ///
    /// `Vb φ ct / (αc B Δt)`
    pub accumulation: Vector,

    /// Constant vector of the current timestep
    pub rhs: Vector,

    /// Tells whether every connected group of blocks is tied to a reference pressure
    ///
    /// A group is anchored by a constant-pressure boundary, a constant-BHP
    /// completion, or accumulation. Otherwise the matrix is singular.
    pub anchored: bool,
}

impl LinearSystem {
    /// Assembles the linear system
    pub fn new(base: &FdmBase) -> Result<Self, StrError> {
        let grid = base.grid;
        let rock = base.rock;
        let topology = &base.topology;
        let trans = base.transmissibility();
        let potential = base.potential();
        let n_equation = base.n_equation();
        let mut lhs = Matrix::new(n_equation, n_equation);
        let mut rhs_base = Vector::new(n_equation);
        let mut accumulation = Vector::new(n_equation);
        let mut anchor = vec![0.0; n_equation];

        // flow terms
        for (e, &index) in topology.cells.iter().enumerate() {
            let class = topology.classes[index].ok_or("active cell without boundary class")?;
            let mut diagonal = 0.0;
            let mut flow = 0.0;
            let mut pot = 0.0;
            for &axis in &grid.axes {
                for min_side in [true, false] {
                    let face = Face::new(axis, min_side);
                    if class.exposes(face) {
                        let bf = base
                            .boundaries
                            .get(index)
                            .iter()
                            .find(|bf| bf.face == face)
                            .ok_or("exposed face without boundary condition")?;
                        diagonal -= bf.transmissibility;
                        anchor[e] += bf.transmissibility;
                        flow += bf.flow;
                        pot += potential.boundary(index, face, bf.transmissibility);
                    } else if let Some(other) = topology.neighbor(grid, index, face) {
                        let t = trans.between(index, other, axis);
                        let col = topology.equations[other].ok_or("active cell without equation")?;
                        lhs.set(e, col, t);
                        diagonal -= t;
                        pot += potential.between(index, other, t);
                    }
                }
            }
            lhs.set(e, e, diagonal);
            rhs_base[e] = -(flow + pot);
        }

        // well terms
        for (well, inflow) in base.wells.iter().zip(&base.inflows) {
            for term in inflow.terms(&well.condition) {
                let e = topology.equations[term.index].ok_or("well block without equation")?;
                lhs.set(e, e, lhs.get(e, e) - term.diagonal);
                anchor[e] += term.diagonal;
                rhs_base[e] -= term.flow;
            }
        }

        // accumulation terms
        if let Some(dt) = base.config.dt() {
            let alpha_c = base.constants.alpha_c;
            for (e, &index) in topology.cells.iter().enumerate() {
                let vb = grid.bulk_volume(index);
                let phi = rock.porosity.at(index);
                let ct = rock.total_compressibility(index);
                let acc = vb * phi * ct / (alpha_c * rock.fvf.at(index) * dt);
                accumulation[e] = acc;
                anchor[e] += acc;
                lhs.set(e, e, lhs.get(e, e) - acc);
            }
        }

        let anchored = all_groups_anchored(&lhs, &anchor);
        let rhs = rhs_base.clone();
        Ok(LinearSystem {
            n_equation,
            lhs,
            rhs_base,
            accumulation,
            rhs,
            anchored,
        })
    }

    /// Rebuilds the constant vector with the pressure of the previous timestep
    pub fn update_rhs(&mut self, pressure_old: &Vector) {
        for e in 0..self.n_equation {
            self.rhs[e] = self.rhs_base[e] - self.accumulation[e] * pressure_old[e];
        }
    }
}

/// Walks the groups of equations connected by non-zero off-diagonal entries
///
/// Returns false if any group has no positive anchoring coefficient.
fn all_groups_anchored(lhs: &Matrix, anchor: &[f64]) -> bool {
    let n = anchor.len();
    let mut visited = vec![false; n];
    let mut stack = Vec::new();
    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        stack.push(start);
        let mut anchored = false;
        while let Some(e) = stack.pop() {
            if anchor[e] > 0.0 {
                anchored = true;
            }
            for col in 0..n {
                if !visited[col] && lhs.get(e, col) != 0.0 {
                    visited[col] = true;
                    stack.push(col);
                }
            }
        }
        if !anchored {
            return false;
        }
    }
    true
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
