use crate::base::{Face, Grid, RockFluid, UnitConstants};

/// Computes the gravity (potential) terms of the flow equation
///
/// The flow between blocks i and n is driven by the potential difference
///
/// ```text
/// T (Φn - Φi) = T (pn - pi) + γ T (En - Ei)
/// ```
///
/// where E is the elevation (positive upward) and `γ = γc ρ g`. The second part
/// is the potential term moved to the constant vector. On grids without
/// elevation differences every term is exactly zero.
pub struct Potential<'a> {
    grid: &'a Grid,
    rock: &'a RockFluid,
    constants: UnitConstants,
    flat: bool,
}

impl<'a> Potential<'a> {
    /// Allocates a new instance
    pub fn new(grid: &'a Grid, rock: &'a RockFluid, constants: &UnitConstants) -> Self {
        Potential {
            grid,
            rock,
            constants: *constants,
            flat: grid.is_flat(),
        }
    }

    /// Tells whether the potential terms vanish identically
    pub fn is_flat(&self) -> bool {
        self.flat
    }

    /// Returns γ T (En - Ei) for the pair of blocks (i, n)
    pub fn between(&self, i: usize, n: usize, transmissibility: f64) -> f64 {
        if self.flat {
            return 0.0;
        }
        let density = 0.5 * (self.rock.density.at(i) + self.rock.density.at(n));
        let gamma = self.constants.fluid_gravity(density);
        gamma * transmissibility * (self.grid.elevation[n] - self.grid.elevation[i])
    }

    /// Returns γ T (Eb - Ei) for a constant-pressure face of block i
    ///
    /// Only the bottom and upper faces differ in elevation from the block center.
    pub fn boundary(&self, i: usize, face: Face, transmissibility: f64) -> f64 {
        if self.flat || transmissibility == 0.0 {
            return 0.0;
        }
        self.gamma(i) * transmissibility * self.face_offset(i, face)
    }

    /// Returns the fluid gravity γ acting across a face (zero for lateral faces)
    ///
    /// Pressure gradients prescribed on the bottom and upper faces become
    /// potential gradients by adding this value.
    pub fn gradient_shift(&self, i: usize, face: Face) -> f64 {
        if self.flat || face.axis() != 2 {
            return 0.0;
        }
        self.gamma(i)
    }

    /// Returns the fluid gravity γ of a block
    fn gamma(&self, i: usize) -> f64 {
        self.constants.fluid_gravity(self.rock.density.at(i))
    }

    /// Returns the elevation of the face relative to the block center
    fn face_offset(&self, i: usize, face: Face) -> f64 {
        match face {
            Face::Bottom => -0.5 * self.grid.size(i, 2),
            Face::Upper => 0.5 * self.grid.size(i, 2),
            _ => 0.0,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Potential;
    use crate::base::{Face, Grid, Property, RockFluid, UnitConstants};
    use crate::StrError;
    use russell_lab::approx_eq;

    #[test]
    fn flat_grids_give_zero() -> Result<(), StrError> {
        let grid = Grid::new_cartesian(2, &[100.0; 3], &[100.0; 2], &[30.0])?;
        let mut rock = RockFluid::new(10.0, 0.2, 1.0, 1.0);
        rock.set_density(Property::Uniform(62.4));
        let pot = Potential::new(&grid, &rock, &UnitConstants::field());
        assert!(pot.is_flat());
        assert_eq!(pot.between(0, 1, 5.0), 0.0);
        assert_eq!(pot.boundary(0, Face::Bottom, 5.0), 0.0);
        assert_eq!(pot.gradient_shift(0, Face::Upper), 0.0);
        Ok(())
    }

    #[test]
    fn layered_grids_work() -> Result<(), StrError> {
        let grid = Grid::new_cartesian(3, &[100.0], &[100.0], &[10.0, 20.0])?;
        let mut rock = RockFluid::new(10.0, 0.2, 1.0, 1.0);
        rock.set_density(Property::Uniform(62.4));
        let c = UnitConstants::field();
        let gamma = c.fluid_gravity(62.4);
        let pot = Potential::new(&grid, &rock, &c);
        assert!(!pot.is_flat());
        // centers at 5 and 20
        approx_eq(pot.between(0, 1, 2.0), gamma * 2.0 * 15.0, 1e-12);
        approx_eq(pot.between(1, 0, 2.0), -gamma * 2.0 * 15.0, 1e-12);
        approx_eq(pot.boundary(0, Face::Bottom, 3.0), -gamma * 3.0 * 5.0, 1e-12);
        approx_eq(pot.boundary(1, Face::Upper, 3.0), gamma * 3.0 * 10.0, 1e-12);
        assert_eq!(pot.boundary(1, Face::West, 3.0), 0.0);
        approx_eq(pot.gradient_shift(0, Face::Bottom), gamma, 1e-15);
        assert_eq!(pot.gradient_shift(0, Face::East), 0.0);
        Ok(())
    }
}
