use resflow::prelude::*;
use resflow::StrError;
use russell_lab::{approx_eq, vec_approx_eq};

#[test]
fn test_constant_rate_face_is_shared_among_blocks() -> Result<(), StrError> {
    let grid = Grid::new_cartesian(2, &[10.0; 3], &[10.0; 3], &[1.0])?;
    let rock = RockFluid::new(1.0, 0.2, 1.0, 1.0);
    let mut boundaries = Boundaries::new();
    boundaries
        .set(Face::West, Bc::ConstantPressure(100.0))
        .set(Face::East, Bc::ConstantRate(30.0))
        .set_at(Face::South, &[(2, 1, 1)], Bc::ConstantRate(-4.0));
    let mut config = Config::new();
    config.set_constants(UnitConstants::unit())?;

    let base = FdmBase::new(&grid, &rock, &boundaries, &[], &config)?;
    let flow = |position: (usize, usize, usize), face: Face| {
        let index = grid.index(position).unwrap();
        base.boundaries.get(index).iter().find(|bf| bf.face == face).unwrap().flow
    };
    for j in 1..4 {
        approx_eq(flow((3, j, 1), Face::East), 10.0, 1e-15);
    }
    approx_eq(flow((2, 1, 1), Face::South), -4.0, 1e-15);
    approx_eq(flow((1, 1, 1), Face::South), 0.0, 1e-15);
    approx_eq(flow((1, 2, 1), Face::West), 2.0 * 100.0, 1e-12);

    // the net injection leaves through the constant-pressure face
    let mut sim = Simulation::new(&base)?;
    let output = sim.run()?;
    let mut outflow = 0.0;
    for j in 1..4 {
        let p = output.pressure_at(0, (1, j, 1)).unwrap();
        outflow += 2.0 * (p - 100.0);
    }
    approx_eq(outflow, 26.0, 1e-9);
    Ok(())
}

#[test]
fn test_pressure_gradient_face() -> Result<(), StrError> {
    // a gradient at the west face equivalent to a unit inflow per block
    let grid = Grid::new_cartesian(1, &[10.0; 4], &[10.0], &[1.0])?;
    let rock = RockFluid::new(1.0, 0.2, 1.0, 1.0);
    let mut boundaries = Boundaries::new();
    boundaries
        .set(Face::West, Bc::ConstantPressureGrad(-0.1))
        .set(Face::East, Bc::ConstantPressure(50.0));
    let mut config = Config::new();
    config.set_constants(UnitConstants::unit())?;

    let base = FdmBase::new(&grid, &rock, &boundaries, &[], &config)?;
    let mut sim = Simulation::new(&base)?;
    let output = sim.run()?;

    // q = 1 through every interface with T = 1 (east face: T = 2)
    vec_approx_eq(&output.states[0].pressure, &[53.5, 52.5, 51.5, 50.5], 1e-9);
    Ok(())
}

#[test]
fn test_input_errors_are_captured() -> Result<(), StrError> {
    let grid = Grid::new_cartesian(1, &[10.0; 3], &[10.0], &[1.0])?;
    let rock = RockFluid::new(1.0, 0.2, 1.0, 1.0);
    let config = Config::new();

    let mut boundaries = Boundaries::new();
    boundaries.set(Face::North, Bc::ConstantPressure(10.0));
    assert_eq!(
        FdmBase::new(&grid, &rock, &boundaries, &[], &config).err(),
        Some("boundary condition is set on a face normal to a non-discretized axis")
    );

    let mut boundaries = Boundaries::new();
    boundaries.set_at(Face::West, &[(2, 1, 1)], Bc::ConstantRate(1.0));
    assert_eq!(
        FdmBase::new(&grid, &rock, &boundaries, &[], &config).err(),
        Some("boundary cell does not lie on the given face")
    );

    let mut boundaries = Boundaries::new();
    boundaries.set(Face::West, Bc::ConstantPressure(f64::NAN));
    assert_eq!(
        FdmBase::new(&grid, &rock, &boundaries, &[], &config).err(),
        Some("boundary condition value must be finite")
    );

    let wells = vec![Well::new("W", (5, 1, 1), 0.25, WellCondition::ShutIn)];
    assert_eq!(
        FdmBase::new(&grid, &rock, &Boundaries::new(), &wells, &config).err(),
        Some("well location is outside the grid")
    );

    let mut config = Config::new();
    assert_eq!(config.set_slightly_compressible(0.0, 1).err(), Some("dt must be > 0.0"));
    Ok(())
}

#[test]
fn test_sealed_reservoir_is_singular() -> Result<(), StrError> {
    let grid = Grid::new_cartesian(1, &[1.0; 3], &[1.0], &[1.0])?;
    let rock = RockFluid::new(1.0, 0.2, 1.0, 1.0);
    let wells = vec![Well::new("Q", (2, 1, 1), 0.1, WellCondition::ConstantRate(-1.0))];
    let mut config = Config::new();
    config.set_constants(UnitConstants::unit())?;

    let base = FdmBase::new(&grid, &rock, &Boundaries::new(), &wells, &config)?;
    let mut sim = Simulation::new(&base)?;
    assert_eq!(sim.run().err(), Some("the coefficient matrix is singular"));
    Ok(())
}

#[test]
fn test_sealed_reservoir_with_uneven_blocks_is_singular() -> Result<(), StrError> {
    let grid = Grid::new_cartesian(1, &[1000.0, 700.0, 1300.0, 900.0, 1100.0], &[1200.0], &[75.0])?;
    let rock = RockFluid::new(15.0, 0.18, 10.0, 1.0);
    let config = Config::new();

    let base = FdmBase::new(&grid, &rock, &Boundaries::new(), &[], &config)?;
    let mut sim = Simulation::new(&base)?;
    assert_eq!(sim.run().err(), Some("the coefficient matrix is singular"));

    let wells = vec![Well::new("Q", (4, 1, 1), 0.25, WellCondition::ConstantRate(-150.0))];
    let base = FdmBase::new(&grid, &rock, &Boundaries::new(), &wells, &config)?;
    let mut sim = Simulation::new(&base)?;
    assert_eq!(sim.run().err(), Some("the coefficient matrix is singular"));
    Ok(())
}

#[test]
fn test_isolated_island_is_singular() -> Result<(), StrError> {
    // the inactive block cuts the east pair off from the constant-pressure face
    let mut grid = Grid::new_cartesian(1, &[1000.0, 700.0, 1300.0, 900.0, 1100.0], &[1200.0], &[75.0])?;
    grid.set_inactive(&[(3, 1, 1)])?;
    let rock = RockFluid::new(15.0, 0.18, 10.0, 1.0);
    let mut boundaries = Boundaries::new();
    boundaries.set(Face::West, Bc::ConstantPressure(5000.0));
    let config = Config::new();

    let wells = vec![Well::new("Q", (4, 1, 1), 0.25, WellCondition::ConstantRate(-150.0))];
    let base = FdmBase::new(&grid, &rock, &boundaries, &wells, &config)?;
    let mut sim = Simulation::new(&base)?;
    assert_eq!(sim.run().err(), Some("the coefficient matrix is singular"));

    let wells = vec![Well::new("P", (5, 1, 1), 0.25, WellCondition::ConstantBhp(4000.0))];
    let base = FdmBase::new(&grid, &rock, &boundaries, &wells, &config)?;
    let mut sim = Simulation::new(&base)?;
    let output = sim.run()?;
    approx_eq(output.pressure_at(0, (1, 1, 1)).unwrap(), 5000.0, 1e-9);
    approx_eq(output.pressure_at(0, (4, 1, 1)).unwrap(), 4000.0, 1e-9);
    Ok(())
}
