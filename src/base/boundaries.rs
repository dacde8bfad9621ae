use super::{Bc, Face};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Holds a boundary condition applied to an explicit list of cells on a face
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Segment {
    /// Reservoir face
    pub face: Face,

    /// Positions (1-based) of the cells receiving the condition
    pub cells: Vec<(usize, usize, usize)>,

    /// Boundary condition
    pub bc: Bc,
}

/// Identifies where a resolved boundary condition came from
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BcSource {
    /// From the segment with this index
    Segment(usize),

    /// From the condition covering the whole face
    Face(Face),

    /// Nothing was specified (no-flow)
    Default,
}

/// Holds the boundary conditions of the reservoir faces
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Boundaries {
    /// Conditions covering whole faces
    pub faces: HashMap<Face, Bc>,

    /// Conditions covering explicit cell lists (take precedence over whole faces)
    pub segments: Vec<Segment>,
}

impl Boundaries {
    /// Allocates a new instance (all faces sealed)
    pub fn new() -> Self {
        Boundaries {
            faces: HashMap::new(),
            segments: Vec::new(),
        }
    }

    /// Sets a boundary condition on all cells of a face
    pub fn set(&mut self, face: Face, bc: Bc) -> &mut Self {
        self.faces.insert(face, bc);
        self
    }

    /// Sets a boundary condition on some cells of a face
    pub fn set_at(&mut self, face: Face, cells: &[(usize, usize, usize)], bc: Bc) -> &mut Self {
        self.segments.push(Segment {
            face,
            cells: cells.to_vec(),
            bc,
        });
        self
    }

    /// Finds the condition for the face of a cell
    ///
    /// The last segment listing the cell wins; then the whole-face condition; then no-flow.
    pub fn find(&self, face: Face, position: (usize, usize, usize)) -> (Bc, BcSource) {
        for (id, segment) in self.segments.iter().enumerate().rev() {
            if segment.face == face && segment.cells.contains(&position) {
                return (segment.bc, BcSource::Segment(id));
            }
        }
        match self.faces.get(&face) {
            Some(bc) => (*bc, BcSource::Face(face)),
            None => (Bc::NoFlow, BcSource::Default),
        }
    }
}

impl fmt::Display for Boundaries {
    /// Prints a formatted summary of boundary conditions
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Boundary conditions\n").unwrap();
        write!(f, "===================\n").unwrap();
        let mut keys: Vec<_> = self.faces.keys().collect();
        keys.sort();
        for key in keys {
            write!(f, "{:?} : {}\n", key, self.faces[key]).unwrap();
        }
        for segment in &self.segments {
            write!(f, "{:?} {:?} : {}\n", segment.face, segment.cells, segment.bc).unwrap();
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
