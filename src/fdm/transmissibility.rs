use crate::base::{Bc, Face, Grid, RockFluid, UnitConstants};
use std::f64::consts::PI;

/// Computes inter-block and boundary transmissibilities
///
/// Between two blocks along an axis, the half-block conductances are combined
/// in series:
///
/// ```text
///          β
/// T = ─────────── / (Δ₁/(2 k₁ A₁) + Δ₂/(2 k₂ A₂))
///      avg(μ B)
/// ```
///
/// which reduces to `β k A / (μ B Δ)` for identical blocks. The radial axis uses
/// the logarithmic geometric factors of the ring spacing instead.
pub struct Transmissibility<'a> {
    grid: &'a Grid,
    rock: &'a RockFluid,
    beta_c: f64,
}

impl<'a> Transmissibility<'a> {
    /// Allocates a new instance
    pub fn new(grid: &'a Grid, rock: &'a RockFluid, constants: &UnitConstants) -> Self {
        Transmissibility {
            grid,
            rock,
            beta_c: constants.beta_c,
        }
    }

    /// Returns the transmissibility between two adjacent blocks along an axis
    pub fn between(&self, a: usize, b: usize, axis: usize) -> f64 {
        let mu_b = 0.5 * (self.rock.mu_b(a) + self.rock.mu_b(b));
        if let (0, Some(spacing)) = (axis, self.grid.radial()) {
            let (inner, outer) = if a < b { (a, b) } else { (b, a) };
            let (f_outer, f_inner) = spacing.log_factors();
            let c_inner = self.grid.size(inner, 2) * self.rock.kx.at(inner);
            let c_outer = self.grid.size(outer, 2) * self.rock.kx.at(outer);
            return self.beta_c * 2.0 * PI / (f_outer / c_outer + f_inner / c_inner) / mu_b;
        }
        let resistance = self.half_block_resistance(a, axis) + self.half_block_resistance(b, axis);
        self.beta_c / resistance / mu_b
    }

    /// Returns the transmissibility between a block and a reservoir face
    ///
    /// Only constant-pressure faces conduct; the distance is half the block size.
    pub fn boundary(&self, index: usize, face: Face, bc: &Bc) -> f64 {
        match bc {
            Bc::ConstantPressure(_) => {
                if face == Face::West && self.grid.radial().is_some() {
                    return 0.0; // the well occupies the inner face
                }
                let axis = face.axis();
                self.face_conductance(index, axis) / (0.5 * self.grid.size(index, axis))
            }
            Bc::NoFlow | Bc::ConstantRate(_) | Bc::ConstantPressureGrad(_) => 0.0,
        }
    }

    /// Returns β k A / (μ B) for the block face normal to an axis
    pub fn face_conductance(&self, index: usize, axis: usize) -> f64 {
        let k = self.rock.permeability(index, axis);
        self.beta_c * k * self.grid.area(index, axis) / self.rock.mu_b(index)
    }

    /// Returns Δ / (2 k A)
    fn half_block_resistance(&self, index: usize, axis: usize) -> f64 {
        let k = self.rock.permeability(index, axis);
        let area = self.grid.area(index, axis);
        self.grid.size(index, axis) / (2.0 * k * area)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
