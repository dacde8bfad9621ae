use super::FdmOutput;
use crate::StrError;
use std::ffi::OsStr;
use std::fmt::Write;
use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::Path;

impl FdmOutput {
    /// Writes the pressure of every active block at one time station
    ///
    /// Each row holds the 1-based position (i, j, k) and the pressure.
    pub fn write_pressure_csv<P>(&self, step: usize, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let state = self.states.get(step).ok_or("step index is out of range")?;
        let [nx, ny, _] = self.extent;

        let mut buffer = String::new();
        write!(&mut buffer, "i,j,k,pressure\n").unwrap();
        for (e, &index) in self.cells.iter().enumerate() {
            let i = index % nx + 1;
            let j = (index / nx) % ny + 1;
            let k = index / (nx * ny) + 1;
            write!(&mut buffer, "{},{},{},{:?}\n", i, j, k, state.pressure[e]).unwrap();
        }
        write_buffer(&buffer, full_path)
    }

    /// Writes the rate and bottomhole pressure of all wells at all time stations
    ///
    /// Undefined values are written as empty fields.
    pub fn write_wells_csv<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let show = |v: Option<f64>| match v {
            Some(x) => format!("{:?}", x),
            None => String::new(),
        };
        let mut buffer = String::new();
        write!(&mut buffer, "step,t,well,rate,bhp\n").unwrap();
        for state in &self.states {
            for well in &state.wells {
                write!(
                    &mut buffer,
                    "{},{:?},{},{},{}\n",
                    state.step,
                    state.t,
                    well.name,
                    show(well.rate),
                    show(well.bhp)
                )
                .unwrap();
            }
        }
        write_buffer(&buffer, full_path)
    }
}

fn write_buffer<P>(buffer: &str, full_path: &P) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    let path = Path::new(full_path).to_path_buf();
    if let Some(p) = path.parent() {
        fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
    }
    let mut file = File::create(&path).map_err(|_| "cannot create CSV file")?;
    file.write_all(buffer.as_bytes()).map_err(|_| "cannot write CSV file")?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
