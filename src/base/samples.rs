use super::{Bc, Boundaries, Face, Grid, Property, RadialSpacing, RockFluid, Well, WellCondition};
use crate::StrError;

/// Holds some sample reservoirs (oilfield units)
pub struct Samples;

impl Samples {
    /// Returns a 1D reservoir with five blocks, constant pressure at west, and a producer at block 4
    ///
    /// ```text
    ///   p = 5000 psi                                        no-flow
    ///      ┃ ┌────────┬────────┬────────┬────────┬────────┐ ┃
    ///      ┃ │   1    │   2    │   3    │ 4 (-150)│   5    │ ┃
    ///      ┃ └────────┴────────┴────────┴────────┴────────┘ ┃
    ///  Δx = 1000 ft, Δy = 1200 ft, Δz = 75 ft, kx = 15 md, μ = 10 cp, B = 1
    /// ```
    pub fn one_dim_five_blocks() -> Result<(Grid, RockFluid, Boundaries, Vec<Well>), StrError> {
        let grid = Grid::new_cartesian(1, &[1000.0; 5], &[1200.0], &[75.0])?;
        let rock = RockFluid::new(15.0, 0.18, 10.0, 1.0);
        let mut boundaries = Boundaries::new();
        boundaries
            .set(Face::West, Bc::ConstantPressure(5000.0))
            .set(Face::East, Bc::NoFlow);
        let wells = vec![Well::new("W1", (4, 1, 1), 0.25, WellCondition::ConstantRate(-150.0))];
        Ok((grid, rock, boundaries, wells))
    }

    /// Returns the five-block reservoir with compressibility and initial pressure of 5000 psi
    pub fn one_dim_five_blocks_compressible() -> Result<(Grid, RockFluid, Boundaries, Vec<Well>), StrError> {
        let (grid, mut rock, boundaries, wells) = Samples::one_dim_five_blocks()?;
        rock.set_compressibility(Property::Uniform(1e-6), Property::Uniform(3.5e-6))
            .set_initial_pressure(Property::Uniform(5000.0));
        Ok((grid, rock, boundaries, wells))
    }

    /// Returns a single-layer radial reservoir with a well at constant bottomhole pressure
    ///
    /// re = 744.73 ft, rw = 0.25 ft, 5 rings, h = 30 ft, k = 100 md, μ = 1.5 cp,
    /// B = 1.2; the outer boundary is kept at 4000 psi and the well at 2500 psi.
    pub fn radial_single_well() -> Result<(Grid, RockFluid, Boundaries, Vec<Well>), StrError> {
        let spacing = RadialSpacing::new(744.73, 0.25, 5)?;
        let grid = Grid::new_radial(spacing, &[30.0])?;
        let mut rock = RockFluid::new(100.0, 0.2, 1.5, 1.2);
        rock.set_compressibility(Property::Uniform(2e-6), Property::Uniform(1e-5))
            .set_initial_pressure(Property::Uniform(4000.0));
        let mut boundaries = Boundaries::new();
        boundaries.set(Face::East, Bc::ConstantPressure(4000.0));
        let wells = vec![Well::new("P1", (1, 1, 1), 0.25, WellCondition::ConstantBhp(2500.0))];
        Ok((grid, rock, boundaries, wells))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
