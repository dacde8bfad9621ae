use resflow::base::DEFAULT_OUT_DIR;
use resflow::fdm::FdmOutput;
use resflow::StrError;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "resflow_to_csv",
    about = "Converts a JSON results file into CSV files with the pressure maps and the well results"
)]
struct Options {
    /// Path to the JSON file written by FdmOutput::write_json
    json_path: String,

    /// Directory for the CSV files (default: /tmp/resflow/results)
    out_dir: Option<String>,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // load data
    let output = FdmOutput::read_json(&options.json_path)?;
    let out_dir = options.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR);

    // write pressure files
    for (index, state) in output.states.iter().enumerate() {
        let path = format!("{}/pressure_{:0>4}.csv", out_dir, state.step);
        output.write_pressure_csv(index, &path)?;
    }

    // write well results
    let path_wells = format!("{}/wells.csv", out_dir);
    output.write_wells_csv(&path_wells)?;

    // message
    let thin_line = format!("{:─^1$}", "", path_wells.len());
    println!("\n\n{}", thin_line);
    println!("CSV files generated; the well results are in:");
    println!("{}", path_wells);
    println!("{}\n\n", thin_line);
    Ok(())
}
