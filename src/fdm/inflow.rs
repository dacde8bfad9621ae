use super::WellSolution;
use crate::base::{Grid, RockFluid, UnitConstants, Well, WellCondition, WellConfig};
use crate::StrError;
use std::f64::consts::PI;

/// Returns the equivalent (Peaceman) radius of a well block
///
/// Isotropic blocks use `0.198 Δx` (square) or `0.14 √(Δx² + Δy²)`;
/// anisotropic blocks weight each axis by the permeability ratio.
pub fn equivalent_radius(dx: f64, dy: f64, kx: f64, ky: f64) -> f64 {
    if kx == ky {
        if dx == dy {
            0.198 * dx
        } else {
            0.14 * f64::sqrt(dx * dx + dy * dy)
        }
    } else {
        let num = f64::sqrt(f64::sqrt(ky / kx) * dx * dx + f64::sqrt(kx / ky) * dy * dy);
        let den = f64::powf(ky / kx, 0.25) + f64::powf(kx / ky, 0.25);
        0.28 * num / den
    }
}

/// Holds the inflow data of one completed block
#[derive(Clone, Debug)]
pub struct Completion {
    /// Cell index
    pub index: usize,

    /// Horizontal permeability
    pub kh: f64,

    /// Equivalent radius
    pub r_eq: f64,

    /// Geometric factor (well index)
    pub gw: f64,

    /// Productivity factor Gw / (μ B)
    pub factor: f64,

    /// Rate per unit sandface pressure gradient: 2π β kh rw h / (μ B)
    pub gradient_factor: f64,
}

/// Holds a term added to the row of a completed block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WellTerm {
    /// Cell index
    pub index: usize,

    /// Coefficient subtracted from the diagonal
    pub diagonal: f64,

    /// Flow rate entering the block (its negative goes to the constant vector)
    pub flow: f64,
}

/// Implements the well inflow model of a single well
#[derive(Clone, Debug)]
pub struct WellInflow {
    /// Well name
    pub name: String,

    /// Completed blocks
    pub completions: Vec<Completion>,
}

impl WellInflow {
    /// Computes the geometric factors of all completions of a well
    pub fn new(well: &Well, grid: &Grid, rock: &RockFluid, constants: &UnitConstants) -> Result<Self, StrError> {
        well.validate()?;
        let beta_c = constants.beta_c;
        let mut completions = Vec::with_capacity(well.completions.len());
        for location in &well.completions {
            let index = grid.index(*location).ok_or("well location is outside the grid")?;
            if !grid.is_active(index) {
                return Err("well location is an inactive cell");
            }
            let h = grid.size(index, 2);
            let (kh, r_eq, fraction) = match grid.radial() {
                Some(spacing) => {
                    if location.0 != 1 {
                        return Err("radial wells must be completed in the first ring");
                    }
                    if well.config != WellConfig::Center {
                        return Err("radial wells must use the center configuration");
                    }
                    (rock.kx.at(index), spacing.nodes[0], 1.0)
                }
                None => {
                    let (mx, my) = well.config.multipliers();
                    let dx = mx * grid.size(index, 0);
                    let dy = my * grid.size(index, 1);
                    let (kx, ky) = (rock.kx.at(index), rock.ky.at(index));
                    (
                        rock.horizontal_permeability(grid, index),
                        equivalent_radius(dx, dy, kx, ky),
                        well.config.fraction(),
                    )
                }
            };
            let den = f64::ln(r_eq / well.rw) + well.skin;
            if den <= 0.0 {
                return Err("ln(r_eq/rw) + skin must be > 0.0");
            }
            let gw = fraction * 2.0 * PI * beta_c * kh * h / den;
            let mu_b = rock.mu_b(index);
            completions.push(Completion {
                index,
                kh,
                r_eq,
                gw,
                factor: gw / mu_b,
                gradient_factor: 2.0 * PI * beta_c * kh * well.rw * h / mu_b,
            });
        }
        Ok(WellInflow {
            name: well.name.clone(),
            completions,
        })
    }

    /// Returns the sum of productivity factors Σ Gw/(μB)
    pub fn total_factor(&self) -> f64 {
        self.completions.iter().map(|c| c.factor).sum()
    }

    /// Converts the operating condition into terms of the linear system
    ///
    /// Constant-rate wells split the rate among completions in proportion to Gw/(μB).
    pub fn terms(&self, condition: &WellCondition) -> Vec<WellTerm> {
        let total = self.total_factor();
        self.completions
            .iter()
            .filter_map(|c| {
                let (diagonal, flow) = match *condition {
                    WellCondition::ConstantBhp(pwf) => (c.factor, c.factor * pwf),
                    WellCondition::ConstantRate(q) => (0.0, q * c.factor / total),
                    WellCondition::ConstantPressureGrad(g) => (0.0, -c.gradient_factor * g),
                    WellCondition::ShutIn => return None,
                };
                Some(WellTerm {
                    index: c.index,
                    diagonal,
                    flow,
                })
            })
            .collect()
    }

    /// Back-calculates the rate and bottomhole pressure from the block pressures
    ///
    /// `pressure(index)` returns the solved pressure of a cell.
    pub fn post_process<F>(&self, condition: &WellCondition, pressure: F) -> WellSolution
    where
        F: Fn(usize) -> f64,
    {
        let total = self.total_factor();
        let weighted: f64 = self.completions.iter().map(|c| c.factor * pressure(c.index)).sum();
        let (rate, bhp) = match *condition {
            WellCondition::ConstantRate(q) => (Some(q), Some((q + weighted) / total)),
            WellCondition::ConstantBhp(pwf) => (Some(-(weighted - total * pwf)), Some(pwf)),
            WellCondition::ShutIn => (Some(0.0), Some(weighted / total)),
            WellCondition::ConstantPressureGrad(_) => (None, None),
        };
        WellSolution {
            name: self.name.clone(),
            rate,
            bhp,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
