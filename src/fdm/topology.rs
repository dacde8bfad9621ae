use crate::base::{Face, Grid};
use std::fmt;

/// Defines which faces of a block touch the reservoir boundary
///
/// The faces are stored in code order; e.g., `Corner(West, South)` has code 13.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoundaryClass {
    /// No exposed face
    Interior,

    /// One exposed face
    Edge(Face),

    /// Two exposed faces
    Corner(Face, Face),

    /// Three exposed faces (3D corner)
    Vertex(Face, Face, Face),
}

impl BoundaryClass {
    /// Builds the class from a list of exposed faces
    pub fn from_faces(faces: &[Face]) -> Self {
        let mut sorted = faces.to_vec();
        sorted.sort();
        sorted.dedup();
        match sorted.as_slice() {
            [] => BoundaryClass::Interior,
            [a] => BoundaryClass::Edge(*a),
            [a, b] => BoundaryClass::Corner(*a, *b),
            [a, b, c, ..] => BoundaryClass::Vertex(*a, *b, *c),
        }
    }

    /// Returns the exposed faces
    pub fn faces(&self) -> Vec<Face> {
        match *self {
            BoundaryClass::Interior => Vec::new(),
            BoundaryClass::Edge(a) => vec![a],
            BoundaryClass::Corner(a, b) => vec![a, b],
            BoundaryClass::Vertex(a, b, c) => vec![a, b, c],
        }
    }

    /// Tells whether a face is exposed
    pub fn exposes(&self, face: Face) -> bool {
        self.faces().contains(&face)
    }

    /// Returns the numeric code formed by the face digits (0 means interior)
    pub fn code(&self) -> usize {
        self.faces().iter().fold(0, |acc, face| acc * 10 + face.code())
    }
}

impl fmt::Display for BoundaryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Holds the cell classification and the equation numbers of a grid
#[derive(Clone, Debug)]
pub struct Topology {
    /// Boundary class of each cell (None for inactive cells)
    pub classes: Vec<Option<BoundaryClass>>,

    /// Equation number of each cell (None for inactive cells)
    pub equations: Vec<Option<usize>>,

    /// Cell index of each equation
    pub cells: Vec<usize>,
}

impl Topology {
    /// Classifies all cells and numbers the active ones
    pub fn new(grid: &Grid) -> Self {
        let n_cell = grid.n_cell();
        let mut classes = vec![None; n_cell];
        let mut equations = vec![None; n_cell];
        let mut cells = Vec::new();
        for index in 0..n_cell {
            if grid.is_active(index) {
                classes[index] = Some(Topology::classify(grid, grid.position(index)));
                equations[index] = Some(cells.len());
                cells.push(index);
            }
        }
        Topology {
            classes,
            equations,
            cells,
        }
    }

    /// Returns the boundary class of a position
    ///
    /// Only the discretized axes are considered. A block at the minimum of an
    /// axis exposes the minimum face; otherwise, a block at the maximum exposes
    /// the maximum face. Thus, an axis with a single block exposes only its
    /// minimum face.
    pub fn classify(grid: &Grid, position: (usize, usize, usize)) -> BoundaryClass {
        let p = [position.0, position.1, position.2];
        let mut faces = Vec::new();
        for &axis in &grid.axes {
            if p[axis] == 1 {
                faces.push(Face::new(axis, true));
            } else if p[axis] == grid.extent[axis] {
                faces.push(Face::new(axis, false));
            }
        }
        BoundaryClass::from_faces(&faces)
    }

    /// Returns the number of equations (active cells)
    pub fn n_equation(&self) -> usize {
        self.cells.len()
    }

    /// Returns the active neighbor across a face that is not exposed
    pub fn neighbor(&self, grid: &Grid, index: usize, face: Face) -> Option<usize> {
        let other = grid.step(index, face.axis(), !face.is_min())?;
        if grid.is_active(other) {
            Some(other)
        } else {
            None
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
