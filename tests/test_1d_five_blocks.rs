use resflow::base::Samples;
use resflow::prelude::*;
use resflow::StrError;
use russell_lab::{approx_eq, vec_approx_eq};

#[test]
fn test_1d_five_blocks() -> Result<(), StrError> {
    // input data
    let (grid, rock, boundaries, wells) = Samples::one_dim_five_blocks()?;
    let config = Config::new();

    // run simulation
    let base = FdmBase::new(&grid, &rock, &boundaries, &wells, &config)?;
    let mut sim = Simulation::new(&base)?;
    let output = sim.run()?;

    // check the coefficient matrix
    let t = 0.001127 * 15.0 * (1200.0 * 75.0) / (10.0 * 1.0 * 1000.0);
    approx_eq(t, 0.152145, 1e-15);
    let a = &sim.linear_system.lhs;
    approx_eq(a.get(0, 0), -3.0 * t, 1e-12);
    approx_eq(a.get(0, 1), t, 1e-12);
    approx_eq(a.get(3, 3), -2.0 * t, 1e-12);
    approx_eq(a.get(4, 4), -t, 1e-12);
    vec_approx_eq(
        &sim.linear_system.rhs_base,
        &[-2.0 * t * 5000.0, 0.0, 0.0, 150.0, 0.0],
        1e-9,
    );

    // check the pressures
    let p1 = 5000.0 - 150.0 / (2.0 * t);
    let p2 = p1 - 150.0 / t;
    let p3 = p2 - 150.0 / t;
    let p4 = p3 - 150.0 / t;
    let state = output.last().ok_or("missing state")?;
    vec_approx_eq(&state.pressure, &[p1, p2, p3, p4, p4], 1e-7);
    assert_eq!(output.pressure_at(0, (4, 1, 1)), Some(state.pressure[3]));

    // check the well
    let r_eq = 0.14 * f64::sqrt(1000.0 * 1000.0 + 1200.0 * 1200.0);
    let gw = 2.0 * std::f64::consts::PI * 0.001127 * 15.0 * 75.0 / f64::ln(r_eq / 0.25);
    let f = gw / (10.0 * 1.0);
    let well = &state.wells[0];
    assert_eq!(well.name, "W1");
    assert_eq!(well.rate, Some(-150.0));
    approx_eq(well.bhp.ok_or("missing bhp")?, p4 - 150.0 / f, 1e-7);

    // save and load the results
    let path = format!("{}/test_1d_five_blocks.json", DEFAULT_TEST_DIR);
    output.write_json(&path)?;
    let read = FdmOutput::read_json(&path)?;
    assert_eq!(read.states.len(), 1);
    vec_approx_eq(&read.states[0].pressure, state.pressure.as_data(), 1e-15);
    assert_eq!(read.states[0].wells, state.wells);
    Ok(())
}

#[test]
fn test_1d_five_blocks_transient() -> Result<(), StrError> {
    let (grid, rock, boundaries, wells) = Samples::one_dim_five_blocks_compressible()?;
    let mut config = Config::new();
    config.set_slightly_compressible(1000.0, 50)?;

    let base = FdmBase::new(&grid, &rock, &boundaries, &wells, &config)?;
    let mut sim = Simulation::new(&base)?;
    let output = sim.run()?;
    assert_eq!(output.states.len(), 51);
    assert_eq!(output.states[0].pressure.as_data(), &[5000.0; 5]);
    approx_eq(output.states[50].t, 50000.0, 1e-12);

    // every block depletes towards the steady profile
    let t = 0.152145;
    let p1 = 5000.0 - 150.0 / (2.0 * t);
    let p2 = p1 - 150.0 / t;
    let p3 = p2 - 150.0 / t;
    let p4 = p3 - 150.0 / t;
    let steady = [p1, p2, p3, p4, p4];
    for step in 1..51 {
        for i in 0..5 {
            let now = output.states[step].pressure[i];
            let before = output.states[step - 1].pressure[i];
            assert!(now <= before + 1e-8);
            assert!(now >= steady[i] - 1e-6);
        }
    }
    vec_approx_eq(&output.states[50].pressure, &steady, 1e-6);
    Ok(())
}
