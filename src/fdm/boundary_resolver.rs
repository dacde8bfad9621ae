use super::{Potential, Topology, Transmissibility};
use crate::base::{Bc, BcSource, Boundaries, Face, Grid};
use crate::StrError;
use std::collections::HashMap;

/// Holds the resolved condition of one exposed face of a block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryFace {
    /// Reservoir face
    pub face: Face,

    /// Boundary condition
    pub bc: Bc,

    /// Boundary transmissibility (non-zero for constant pressure only)
    pub transmissibility: f64,

    /// Flow entering the block through the face (T·pb for constant pressure)
    pub flow: f64,
}

/// Resolves the boundary conditions of all exposed faces
pub struct BoundaryResolver {
    /// Resolved faces of each cell (empty for interior and inactive cells)
    pub faces: Vec<Vec<BoundaryFace>>,
}

impl BoundaryResolver {
    /// Resolves the conditions on every exposed face of every active block
    pub fn new(
        grid: &Grid,
        topology: &Topology,
        boundaries: &Boundaries,
        trans: &Transmissibility,
        potential: &Potential,
    ) -> Result<Self, StrError> {
        BoundaryResolver::validate(grid, boundaries)?;

        // count the blocks sharing each condition
        let mut shared: HashMap<BcSource, usize> = HashMap::new();
        for &index in &topology.cells {
            if let Some(class) = topology.classes[index] {
                for face in class.faces() {
                    let (_, source) = boundaries.find(face, grid.position(index));
                    *shared.entry(source).or_insert(0) += 1;
                }
            }
        }

        // resolve
        let mut faces = vec![Vec::new(); grid.n_cell()];
        for &index in &topology.cells {
            if let Some(class) = topology.classes[index] {
                for face in class.faces() {
                    let (bc, source) = boundaries.find(face, grid.position(index));
                    let n_shared = shared.get(&source).copied().unwrap_or(1);
                    faces[index].push(BoundaryResolver::resolve(
                        index, face, bc, n_shared, trans, potential,
                    ));
                }
            }
        }
        Ok(BoundaryResolver { faces })
    }

    /// Returns the flow contribution of a single face
    ///
    /// * constant pressure: `T pb` with T also entering the diagonal
    /// * constant pressure gradient: `∓ (β k A / μB) g` (negative on minimum faces)
    /// * constant rate: the rate divided among the `n_shared` blocks on the boundary
    /// * no-flow: zero
    pub fn resolve(
        index: usize,
        face: Face,
        bc: Bc,
        n_shared: usize,
        trans: &Transmissibility,
        potential: &Potential,
    ) -> BoundaryFace {
        let transmissibility = trans.boundary(index, face, &bc);
        let flow = match bc {
            Bc::ConstantPressure(pb) => transmissibility * pb,
            Bc::ConstantPressureGrad(g) => {
                let sign = if face.is_min() { -1.0 } else { 1.0 };
                let gradient = g + potential.gradient_shift(index, face);
                sign * trans.face_conductance(index, face.axis()) * gradient
            }
            Bc::ConstantRate(q) => q / (n_shared as f64),
            Bc::NoFlow => 0.0,
        };
        BoundaryFace {
            face,
            bc,
            transmissibility,
            flow,
        }
    }

    /// Returns the resolved faces of a block
    pub fn get(&self, index: usize) -> &[BoundaryFace] {
        &self.faces[index]
    }

    /// Checks the boundary conditions against the grid
    fn validate(grid: &Grid, boundaries: &Boundaries) -> Result<(), StrError> {
        let faces = boundaries
            .faces
            .iter()
            .map(|(face, bc)| (*face, *bc))
            .chain(boundaries.segments.iter().map(|s| (s.face, s.bc)));
        for (face, bc) in faces {
            let value = match bc {
                Bc::NoFlow => continue,
                Bc::ConstantPressure(v) => v,
                Bc::ConstantPressureGrad(v) => v,
                Bc::ConstantRate(v) => v,
            };
            if !value.is_finite() {
                return Err("boundary condition value must be finite");
            }
            if !grid.axes.contains(&face.axis()) {
                return Err("boundary condition is set on a face normal to a non-discretized axis");
            }
            if let (Bc::ConstantPressure(_), Face::West, Some(_)) = (bc, face, grid.radial()) {
                return Err("constant pressure is not allowed on the wellbore face of a radial grid");
            }
        }
        for segment in &boundaries.segments {
            for position in &segment.cells {
                if grid.index(*position).is_none() {
                    return Err("boundary cell is outside the grid");
                }
                if !Topology::classify(grid, *position).exposes(segment.face) {
                    return Err("boundary cell does not lie on the given face");
                }
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
