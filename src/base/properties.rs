use super::Grid;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds a rock or fluid property
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Property {
    /// Same value for all cells (homogeneous)
    Uniform(f64),

    /// One value per cell (heterogeneous); NaN marks inactive cells
    PerCell(Vec<f64>),
}

impl Property {
    /// Returns the value at a cell
    pub fn at(&self, index: usize) -> f64 {
        match self {
            Property::Uniform(value) => *value,
            Property::PerCell(values) => values[index],
        }
    }

    /// Checks the property against the grid
    ///
    /// Active cells must hold finite values ≥ 0 (or > 0 if `positive`).
    fn check(&self, grid: &Grid, positive: bool, message: StrError) -> Result<(), StrError> {
        if let Property::PerCell(values) = self {
            if values.len() != grid.n_cell() {
                return Err("the length of per-cell properties must equal the number of cells");
            }
        }
        for index in 0..grid.n_cell() {
            if grid.is_active(index) {
                let v = self.at(index);
                if !v.is_finite() || v < 0.0 || (positive && v == 0.0) {
                    return Err(message);
                }
            }
        }
        Ok(())
    }
}

/// Holds the rock and fluid properties
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RockFluid {
    /// Permeability along x (radial permeability in radial grids)
    pub kx: Property,

    /// Permeability along y
    pub ky: Property,

    /// Permeability along z (vertical)
    pub kz: Property,

    /// Porosity
    pub porosity: Property,

    /// Fluid viscosity μ
    pub viscosity: Property,

    /// Formation volume factor B
    pub fvf: Property,

    /// Fluid density ρ
    pub density: Property,

    /// Pore (rock) compressibility
    pub c_pore: Property,

    /// Fluid compressibility
    pub c_fluid: Property,

    /// Initial pressure used by the transient mode
    pub initial_pressure: Property,
}

impl RockFluid {
    /// Allocates a new instance with isotropic permeability `k` and no compressibility
    pub fn new(k: f64, porosity: f64, viscosity: f64, fvf: f64) -> Self {
        RockFluid {
            kx: Property::Uniform(k),
            ky: Property::Uniform(k),
            kz: Property::Uniform(k),
            porosity: Property::Uniform(porosity),
            viscosity: Property::Uniform(viscosity),
            fvf: Property::Uniform(fvf),
            density: Property::Uniform(0.0),
            c_pore: Property::Uniform(0.0),
            c_fluid: Property::Uniform(0.0),
            initial_pressure: Property::Uniform(0.0),
        }
    }

    /// Sets the permeabilities along x, y, and z
    pub fn set_permeability(&mut self, kx: Property, ky: Property, kz: Property) -> &mut Self {
        self.kx = kx;
        self.ky = ky;
        self.kz = kz;
        self
    }

    /// Sets the fluid density
    pub fn set_density(&mut self, density: Property) -> &mut Self {
        self.density = density;
        self
    }

    /// Sets the pore and fluid compressibilities
    pub fn set_compressibility(&mut self, c_pore: Property, c_fluid: Property) -> &mut Self {
        self.c_pore = c_pore;
        self.c_fluid = c_fluid;
        self
    }

    /// Sets the initial pressure
    pub fn set_initial_pressure(&mut self, pressure: Property) -> &mut Self {
        self.initial_pressure = pressure;
        self
    }

    /// Returns the permeability along an axis
    pub fn permeability(&self, index: usize, axis: usize) -> f64 {
        match axis {
            0 => self.kx.at(index),
            1 => self.ky.at(index),
            _ => self.kz.at(index),
        }
    }

    /// Returns the horizontal permeability (geometric mean of kx and ky in Cartesian grids)
    pub fn horizontal_permeability(&self, grid: &Grid, index: usize) -> f64 {
        match grid.radial() {
            Some(_) => self.kx.at(index),
            None => f64::sqrt(self.kx.at(index) * self.ky.at(index)),
        }
    }

    /// Returns the product μ·B
    pub fn mu_b(&self, index: usize) -> f64 {
        self.viscosity.at(index) * self.fvf.at(index)
    }

    /// Returns the total compressibility c_pore + c_fluid
    pub fn total_compressibility(&self, index: usize) -> f64 {
        self.c_pore.at(index) + self.c_fluid.at(index)
    }

    /// Checks all properties against the grid
    pub fn validate(&self, grid: &Grid) -> Result<(), StrError> {
        let k_msg = "permeability must be finite and > 0.0 at active cells";
        for axis in 0..3 {
            let k = match axis {
                0 => &self.kx,
                1 => &self.ky,
                _ => &self.kz,
            };
            // ky enters the Cartesian well index even in 1D
            let used = grid.axes.contains(&axis) || (axis == 1 && grid.radial().is_none());
            k.check(grid, used, k_msg)?;
        }
        self.porosity
            .check(grid, false, "porosity must be finite and ≥ 0.0 at active cells")?;
        self.viscosity
            .check(grid, true, "viscosity must be finite and > 0.0 at active cells")?;
        self.fvf.check(
            grid,
            true,
            "formation volume factor must be finite and > 0.0 at active cells",
        )?;
        self.density
            .check(grid, false, "density must be finite and ≥ 0.0 at active cells")?;
        self.c_pore
            .check(grid, false, "compressibility must be finite and ≥ 0.0 at active cells")?;
        self.c_fluid
            .check(grid, false, "compressibility must be finite and ≥ 0.0 at active cells")?;
        self.initial_pressure
            .check(grid, false, "initial pressure must be finite and ≥ 0.0 at active cells")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Property, RockFluid};
    use crate::base::Grid;
    use crate::StrError;

    #[test]
    fn property_works() {
        assert_eq!(Property::Uniform(2.0).at(7), 2.0);
        assert_eq!(Property::PerCell(vec![1.0, 3.0]).at(1), 3.0);
    }

    #[test]
    fn accessors_work() -> Result<(), StrError> {
        let grid = Grid::new_cartesian(2, &[1.0, 1.0], &[1.0], &[1.0])?;
        let mut rock = RockFluid::new(100.0, 0.2, 2.0, 1.5);
        rock.set_permeability(
            Property::Uniform(100.0),
            Property::Uniform(25.0),
            Property::Uniform(10.0),
        )
        .set_compressibility(Property::Uniform(1e-6), Property::Uniform(3e-6));
        assert_eq!(rock.permeability(0, 1), 25.0);
        assert_eq!(rock.permeability(0, 2), 10.0);
        assert_eq!(rock.horizontal_permeability(&grid, 0), 50.0);
        assert_eq!(rock.mu_b(1), 3.0);
        assert_eq!(rock.total_compressibility(0), 4e-6);
        Ok(())
    }

    #[test]
    fn validate_captures_errors() -> Result<(), StrError> {
        let mut grid = Grid::new_cartesian(1, &[1.0, 1.0, 1.0], &[1.0], &[1.0])?;
        let mut rock = RockFluid::new(10.0, 0.2, 1.0, 1.0);
        assert_eq!(rock.validate(&grid), Ok(()));

        rock.kx = Property::PerCell(vec![10.0, f64::NAN, 10.0]);
        assert_eq!(
            rock.validate(&grid).err(),
            Some("permeability must be finite and > 0.0 at active cells")
        );
        grid.set_inactive_from_map(&[10.0, f64::NAN, 10.0])?;
        assert_eq!(rock.validate(&grid), Ok(()));

        rock.kx = Property::PerCell(vec![10.0]);
        assert_eq!(
            rock.validate(&grid).err(),
            Some("the length of per-cell properties must equal the number of cells")
        );

        // kz is not used by a 1D grid
        rock.kx = Property::Uniform(10.0);
        rock.kz = Property::Uniform(0.0);
        assert_eq!(rock.validate(&grid), Ok(()));

        rock.viscosity = Property::Uniform(0.0);
        assert_eq!(
            rock.validate(&grid).err(),
            Some("viscosity must be finite and > 0.0 at active cells")
        );
        Ok(())
    }
}
