use super::{FdmBase, FdmOutput, FdmState, LinearSystem, PostProc, PressureSolver, WellSolution};
use crate::base::Mode;
use crate::StrError;
use russell_lab::Vector;

/// Runs the steady or transient pressure solution
///
/// The coefficient matrix is assembled once by [Simulation::new]; each timestep
/// only rebuilds the constant vector from the previous pressure.
pub struct Simulation<'a> {
    /// Holds the validated input and discretization data
    base: &'a FdmBase<'a>,

    /// Holds the linear system
    pub linear_system: LinearSystem,

    /// Holds the dense solver
    solver: PressureSolver,
}

impl<'a> Simulation<'a> {
    /// Allocates a new instance and assembles the linear system
    pub fn new(base: &'a FdmBase<'a>) -> Result<Self, StrError> {
        let linear_system = LinearSystem::new(base)?;
        let solver = PressureSolver::new(linear_system.n_equation);
        Ok(Simulation {
            base,
            linear_system,
            solver,
        })
    }

    /// Solves for the pressure at all timesteps
    pub fn run(&mut self) -> Result<FdmOutput, StrError> {
        let post = PostProc::new(self.base);
        let mut output = FdmOutput::new(self.base);
        let n_equation = self.linear_system.n_equation;
        self.print_header();
        match self.base.config.mode {
            Mode::Incompressible => {
                let mut pressure = Vector::new(n_equation);
                self.linear_system.update_rhs(&pressure);
                self.solver.solve(&self.linear_system, &mut pressure)?;
                let wells = post.wells(&pressure);
                self.print_timestep(0, 0.0, &pressure, &wells);
                output.states.push(FdmState {
                    step: 0,
                    t: 0.0,
                    pressure,
                    wells,
                });
            }
            Mode::SlightlyCompressible { dt, n_steps } => {
                let mut pressure_old = Vector::new(n_equation);
                for (e, &index) in self.base.topology.cells.iter().enumerate() {
                    pressure_old[e] = self.base.rock.initial_pressure.at(index);
                }
                output.states.push(FdmState {
                    step: 0,
                    t: 0.0,
                    pressure: pressure_old.clone(),
                    wells: Vec::new(),
                });
                let mut pressure = Vector::new(n_equation);
                for step in 1..=n_steps {
                    let t = (step as f64) * dt;
                    self.linear_system.update_rhs(&pressure_old);
                    self.solver.solve(&self.linear_system, &mut pressure)?;
                    let wells = post.wells(&pressure);
                    self.print_timestep(step, t, &pressure, &wells);
                    output.states.push(FdmState {
                        step,
                        t,
                        pressure: pressure.clone(),
                        wells,
                    });
                    std::mem::swap(&mut pressure, &mut pressure_old);
                }
            }
        }
        Ok(output)
    }

    /// Prints the header of the timestep table
    fn print_header(&self) {
        if self.base.config.verbose {
            println!("\nRESFLOW === PRESSURE SOLUTION =================================================");
            println!("{}", "─".repeat(79));
            println!("{:>8} {:>13} {:>13} {:>13}", "timestep", "t", "min(p)", "max(p)");
            println!("{}", "─".repeat(79));
        }
    }

    /// Prints the pressure range and the well results of a timestep
    fn print_timestep(&self, step: usize, t: f64, pressure: &Vector, wells: &[WellSolution]) {
        if self.base.config.verbose {
            let data = pressure.as_data();
            let min = data.iter().copied().fold(f64::INFINITY, f64::min);
            let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            println!("{:>8} {:>13.6e} {:>13.6e} {:>13.6e}", step, t, min, max);
            for well in wells {
                println!("{:>8} {}", "", well);
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Simulation;
    use crate::base::{Config, Samples};
    use crate::fdm::FdmBase;
    use crate::StrError;
    use russell_lab::approx_eq;

    #[test]
    fn run_works_in_steady_mode() -> Result<(), StrError> {
        let (grid, rock, boundaries, wells) = Samples::one_dim_five_blocks()?;
        let mut config = Config::new();
        config.set_verbose(true)?;
        let base = FdmBase::new(&grid, &rock, &boundaries, &wells, &config)?;
        let mut sim = Simulation::new(&base)?;
        let out = sim.run()?;
        assert_eq!(out.states.len(), 1);
        let state = &out.states[0];
        assert_eq!(state.wells[0].rate, Some(-150.0));
        let p = state.pressure.as_data();
        for i in 0..3 {
            assert!(p[i] > p[i + 1]);
        }
        approx_eq(p[3], p[4], 1e-9);
        Ok(())
    }

    #[test]
    fn run_works_in_transient_mode() -> Result<(), StrError> {
        let (grid, rock, boundaries, wells) = Samples::one_dim_five_blocks_compressible()?;
        let mut config = Config::new();
        config.set_slightly_compressible(1.0, 5)?;
        let base = FdmBase::new(&grid, &rock, &boundaries, &wells, &config)?;
        let mut sim = Simulation::new(&base)?;
        let out = sim.run()?;
        assert_eq!(out.states.len(), 6);
        assert_eq!(out.states[0].pressure.as_data(), &[5000.0; 5]);
        assert!(out.states[0].wells.is_empty());
        // the well block depletes monotonically
        for step in 1..6 {
            let now = out.pressure_at(step, (4, 1, 1)).unwrap();
            let before = out.pressure_at(step - 1, (4, 1, 1)).unwrap();
            assert!(now < before);
            assert_eq!(out.states[step].t, step as f64);
        }
        Ok(())
    }
}
