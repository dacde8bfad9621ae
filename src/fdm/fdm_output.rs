use super::{FdmBase, WellSolution};
use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the solution at one time station
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FdmState {
    /// Timestep number (0 is the initial state or the steady solution)
    pub step: usize,

    /// Time
    pub t: f64,

    /// Pressure of each equation (active block)
    ///
    /// (n_equation)
    pub pressure: Vector,

    /// Rate and bottomhole pressure of each well (empty for the initial state)
    pub wells: Vec<WellSolution>,
}

/// Holds the results of a simulation run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FdmOutput {
    /// Number of cells along each axis
    pub extent: [usize; 3],

    /// Cell index of each equation
    pub cells: Vec<usize>,

    /// States in chronological order
    pub states: Vec<FdmState>,
}

impl FdmOutput {
    /// Allocates an empty output
    pub fn new(base: &FdmBase) -> Self {
        FdmOutput {
            extent: base.grid.extent,
            cells: base.topology.cells.clone(),
            states: Vec::new(),
        }
    }

    /// Returns the last state
    pub fn last(&self) -> Option<&FdmState> {
        self.states.last()
    }

    /// Returns the pressure of a block given its 1-based position
    ///
    /// Returns None if the state or the (active) block does not exist.
    pub fn pressure_at(&self, step: usize, position: (usize, usize, usize)) -> Option<f64> {
        let state = self.states.get(step)?;
        let (i, j, k) = position;
        let [nx, ny, nz] = self.extent;
        if i < 1 || j < 1 || k < 1 || i > nx || j > ny || k > nz {
            return None;
        }
        let index = (i - 1) + (j - 1) * nx + (k - 1) * nx * ny;
        let e = self.cells.iter().position(|&c| c == index)?;
        Some(state.pressure[e])
    }

    /// Returns the pressure of all cells (NaN for inactive cells)
    pub fn pressure_map(&self, step: usize) -> Result<Vec<f64>, StrError> {
        let state = self.states.get(step).ok_or("step index is out of range")?;
        let [nx, ny, nz] = self.extent;
        let mut map = vec![f64::NAN; nx * ny * nz];
        for (e, &index) in self.cells.iter().enumerate() {
            map[index] = state.pressure[e];
        }
        Ok(map)
    }

    /// Reads a JSON file containing the output
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open output file")?;
        let buffered = BufReader::new(input);
        let output = serde_json::from_reader(buffered).map_err(|_| "cannot parse output file")?;
        Ok(output)
    }

    /// Writes a JSON file with the output
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create output file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write output file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{FdmOutput, FdmState};
    use crate::base::DEFAULT_TEST_DIR;
    use crate::fdm::WellSolution;
    use crate::StrError;
    use russell_lab::Vector;

    fn sample() -> FdmOutput {
        // 2 × 2 grid with the last cell inactive
        FdmOutput {
            extent: [2, 2, 1],
            cells: vec![0, 1, 2],
            states: vec![FdmState {
                step: 0,
                t: 0.0,
                pressure: Vector::from(&[10.0, 20.0, 30.0]),
                wells: vec![WellSolution {
                    name: "W".to_string(),
                    rate: Some(-5.0),
                    bhp: None,
                }],
            }],
        }
    }

    #[test]
    fn accessors_work() -> Result<(), StrError> {
        let out = sample();
        assert_eq!(out.pressure_at(0, (2, 1, 1)), Some(20.0));
        assert_eq!(out.pressure_at(0, (1, 2, 1)), Some(30.0));
        assert_eq!(out.pressure_at(0, (2, 2, 1)), None);
        assert_eq!(out.pressure_at(0, (3, 1, 1)), None);
        assert_eq!(out.pressure_at(1, (1, 1, 1)), None);
        let map = out.pressure_map(0)?;
        assert_eq!(&map[..3], &[10.0, 20.0, 30.0]);
        assert!(map[3].is_nan());
        assert_eq!(out.pressure_map(1).err(), Some("step index is out of range"));
        assert_eq!(out.last().unwrap().step, 0);
        Ok(())
    }

    #[test]
    fn read_write_json_work() -> Result<(), StrError> {
        let out = sample();
        let path = format!("{}/fdm_output.json", DEFAULT_TEST_DIR);
        out.write_json(&path)?;
        let read = FdmOutput::read_json(&path)?;
        assert_eq!(read.cells, out.cells);
        assert_eq!(read.states[0].pressure.as_data(), out.states[0].pressure.as_data());
        assert_eq!(read.states[0].wells, out.states[0].wells);
        assert_eq!(
            FdmOutput::read_json("/tmp/resflow/__not_found__.json").err(),
            Some("cannot open output file")
        );
        Ok(())
    }
}
