use super::{BoundaryResolver, Potential, Topology, Transmissibility, WellInflow};
use crate::base::{Boundaries, Config, Grid, RockFluid, UnitConstants, Well};
use crate::StrError;

/// Holds the validated input data and the derived discretization data
///
/// All configuration errors are captured here, before any assembly.
pub struct FdmBase<'a> {
    /// Holds the grid
    pub grid: &'a Grid,

    /// Holds the rock and fluid properties
    pub rock: &'a RockFluid,

    /// Holds the wells
    pub wells: &'a [Well],

    /// Holds the configuration (solution mode and unit constants)
    pub config: &'a Config,

    /// Holds the unit-conversion constants (copied from the configuration)
    pub constants: UnitConstants,

    /// Holds the cell classification and equation numbers
    pub topology: Topology,

    /// Holds the resolved boundary conditions
    pub boundaries: BoundaryResolver,

    /// Holds the inflow model of each well (same order as `wells`)
    pub inflows: Vec<WellInflow>,
}

impl<'a> FdmBase<'a> {
    /// Allocates a new instance
    pub fn new(
        grid: &'a Grid,
        rock: &'a RockFluid,
        boundaries: &Boundaries,
        wells: &'a [Well],
        config: &'a Config,
    ) -> Result<Self, StrError> {
        config.validate()?;
        grid.validate()?;
        rock.validate(grid)?;
        let constants = config.constants;
        let topology = Topology::new(grid);
        if topology.n_equation() == 0 {
            return Err("the grid has no active cells");
        }
        for (i, well) in wells.iter().enumerate() {
            if wells[..i].iter().any(|w| w.name == well.name) {
                return Err("well names must be unique");
            }
        }
        let inflows = wells
            .iter()
            .map(|well| WellInflow::new(well, grid, rock, &constants))
            .collect::<Result<Vec<_>, _>>()?;
        let trans = Transmissibility::new(grid, rock, &constants);
        let potential = Potential::new(grid, rock, &constants);
        let boundaries = BoundaryResolver::new(grid, &topology, boundaries, &trans, &potential)?;
        Ok(FdmBase {
            grid,
            rock,
            wells,
            config,
            constants,
            topology,
            boundaries,
            inflows,
        })
    }

    /// Returns the transmissibility calculator
    pub fn transmissibility(&self) -> Transmissibility<'a> {
        Transmissibility::new(self.grid, self.rock, &self.constants)
    }

    /// Returns the potential-term calculator
    pub fn potential(&self) -> Potential<'a> {
        Potential::new(self.grid, self.rock, &self.constants)
    }

    /// Returns the number of equations (active cells)
    pub fn n_equation(&self) -> usize {
        self.topology.n_equation()
    }

    /// Returns the equation number of a 1-based position
    pub fn equation(&self, position: (usize, usize, usize)) -> Option<usize> {
        let index = self.grid.index(position)?;
        self.topology.equations[index]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
