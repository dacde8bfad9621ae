use super::RadialSpacing;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Defines the coordinate system of a grid
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Geometry {
    /// Rectangular blocks with spacing along x, y, and z
    Cartesian,

    /// Rings around a single well (axis 0 is the radius and axis 2 is the vertical)
    Radial(RadialSpacing),
}

/// Holds a block-centered structured grid
///
/// Cells are identified by 1-based positions `(i, j, k)` (engineering notation) and
/// stored with `i` running fastest, then `j`, then `k`; thus the linear index is
/// `(i-1) + (j-1)·nx + (k-1)·nx·ny`. Layer `k = 1` is the deepest one.
///
/// Radial grids use `(i, 1, k)` where `i` is the ring number counted from the well.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    /// Coordinate system
    pub geometry: Geometry,

    /// Number of cells along each axis (nx, ny, nz)
    pub extent: [usize; 3],

    /// Axes where the flow equation is discretized
    pub axes: Vec<usize>,

    /// Block sizes along x (ring thicknesses for radial grids)
    pub dx: Vec<f64>,

    /// Block sizes along y (a single 2π entry for radial grids)
    pub dy: Vec<f64>,

    /// Block sizes along z
    pub dz: Vec<f64>,

    /// Flags the cells removed from the domain
    pub inactive: Vec<bool>,

    /// Elevation of each block center (positive upward)
    pub elevation: Vec<f64>,
}

impl Grid {
    /// Allocates a Cartesian grid
    ///
    /// # Input
    ///
    /// * `ndim` -- 1, 2, or 3; only the first `ndim` axes carry flow terms
    /// * `dx`, `dy`, `dz` -- block sizes; the lengths define the extent
    ///
    /// A 1D grid requires `dy` and `dz` with a single entry (cross-section
    /// dimensions); a 2D grid requires `dz` with a single entry (thickness).
    pub fn new_cartesian(ndim: usize, dx: &[f64], dy: &[f64], dz: &[f64]) -> Result<Self, StrError> {
        if ndim < 1 || ndim > 3 {
            return Err("ndim must be 1, 2, or 3");
        }
        if dx.len() < 1 || dy.len() < 1 || dz.len() < 1 {
            return Err("block size arrays must not be empty");
        }
        if ndim < 2 && dy.len() != 1 {
            return Err("a 1D grid requires a single dy");
        }
        if ndim < 3 && dz.len() != 1 {
            return Err("a 1D or 2D grid requires a single dz");
        }
        if dx.iter().chain(dy).chain(dz).any(|v| !v.is_finite() || *v <= 0.0) {
            return Err("block sizes must be > 0.0");
        }
        let extent = [dx.len(), dy.len(), dz.len()];
        let n_cell = extent[0] * extent[1] * extent[2];
        let mut grid = Grid {
            geometry: Geometry::Cartesian,
            extent,
            axes: (0..ndim).collect(),
            dx: dx.to_vec(),
            dy: dy.to_vec(),
            dz: dz.to_vec(),
            inactive: vec![false; n_cell],
            elevation: Vec::new(),
        };
        grid.elevation = grid.layered_elevation();
        Ok(grid)
    }

    /// Allocates a radial grid around a well at the axis
    ///
    /// The number of layers is given by the length of `dz`; more than one layer
    /// yields a 2D (r-z) grid.
    pub fn new_radial(spacing: RadialSpacing, dz: &[f64]) -> Result<Self, StrError> {
        if dz.len() < 1 {
            return Err("block size arrays must not be empty");
        }
        if dz.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err("block sizes must be > 0.0");
        }
        let nr = spacing.nr();
        let dx = (0..nr).map(|i| spacing.thickness(i)).collect();
        let extent = [nr, 1, dz.len()];
        let axes = if dz.len() > 1 { vec![0, 2] } else { vec![0] };
        let mut grid = Grid {
            geometry: Geometry::Radial(spacing),
            extent,
            axes,
            dx,
            dy: vec![2.0 * PI],
            dz: dz.to_vec(),
            inactive: vec![false; nr * dz.len()],
            elevation: Vec::new(),
        };
        grid.elevation = grid.layered_elevation();
        Ok(grid)
    }

    /// Checks the internal consistency of the grid (e.g., after deserialization)
    pub fn validate(&self) -> Result<(), StrError> {
        if self.extent.iter().any(|&n| n < 1) {
            return Err("the grid extent must be ≥ 1 along every axis");
        }
        if self.axes.is_empty() || self.axes.iter().any(|&a| a > 2) {
            return Err("the grid axes must be a subset of 0, 1, 2");
        }
        if self.axes.windows(2).any(|w| w[0] >= w[1]) {
            return Err("the grid axes must be sorted and unique");
        }
        if self.dx.len() != self.extent[0] || self.dy.len() != self.extent[1] || self.dz.len() != self.extent[2] {
            return Err("the length of the block size arrays must match the grid extent");
        }
        if self.dx.iter().chain(&self.dy).chain(&self.dz).any(|v| !v.is_finite() || *v <= 0.0) {
            return Err("block sizes must be > 0.0");
        }
        let n_cell = self.n_cell();
        if self.inactive.len() != n_cell {
            return Err("the length of the inactive flags must equal the number of cells");
        }
        if self.elevation.len() != n_cell {
            return Err("the length of the elevation map must equal the number of cells");
        }
        if self.elevation.iter().any(|v| !v.is_finite()) {
            return Err("elevations must be finite");
        }
        if let Geometry::Radial(spacing) = &self.geometry {
            spacing.validate()?;
            if spacing.nr() != self.extent[0] || self.extent[1] != 1 || self.axes.contains(&1) {
                return Err("a radial grid requires nr rings along x and a single block along y");
            }
        }
        Ok(())
    }

    /// Returns the number of dimensions where flow is discretized
    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// Returns the total number of cells (including inactive ones)
    pub fn n_cell(&self) -> usize {
        self.extent[0] * self.extent[1] * self.extent[2]
    }

    /// Returns the radial spacing, if any
    pub fn radial(&self) -> Option<&RadialSpacing> {
        match &self.geometry {
            Geometry::Cartesian => None,
            Geometry::Radial(spacing) => Some(spacing),
        }
    }

    /// Returns the linear index of a 1-based position, if it lies within the grid
    pub fn index(&self, position: (usize, usize, usize)) -> Option<usize> {
        let (i, j, k) = position;
        let [nx, ny, nz] = self.extent;
        if i < 1 || j < 1 || k < 1 || i > nx || j > ny || k > nz {
            return None;
        }
        Some((i - 1) + (j - 1) * nx + (k - 1) * nx * ny)
    }

    /// Returns the 1-based position of a cell given its linear index
    pub fn position(&self, index: usize) -> (usize, usize, usize) {
        let [nx, ny, _] = self.extent;
        let i = index % nx;
        let j = (index / nx) % ny;
        let k = index / (nx * ny);
        (i + 1, j + 1, k + 1)
    }

    /// Returns the neighbor of a cell along an axis (+1 or -1 step), if within the grid
    pub fn step(&self, index: usize, axis: usize, forward: bool) -> Option<usize> {
        let (i, j, k) = self.position(index);
        let mut p = [i, j, k];
        if forward {
            p[axis] += 1;
        } else {
            p[axis] -= 1;
        }
        self.index((p[0], p[1], p[2]))
    }

    /// Tells whether a cell is part of the domain
    pub fn is_active(&self, index: usize) -> bool {
        !self.inactive[index]
    }

    /// Removes cells from the domain
    pub fn set_inactive(&mut self, positions: &[(usize, usize, usize)]) -> Result<&mut Self, StrError> {
        for position in positions {
            let index = self.index(*position).ok_or("inactive cell is outside the grid")?;
            self.inactive[index] = true;
        }
        Ok(self)
    }

    /// Removes the cells flagged with NaN in a per-cell map (e.g., a permeability map)
    pub fn set_inactive_from_map(&mut self, values: &[f64]) -> Result<&mut Self, StrError> {
        if values.len() != self.n_cell() {
            return Err("the length of the map must equal the number of cells");
        }
        for (index, value) in values.iter().enumerate() {
            if value.is_nan() {
                self.inactive[index] = true;
            }
        }
        Ok(self)
    }

    /// Sets the elevation of every block center (positive upward)
    pub fn set_elevation(&mut self, elevation: &[f64]) -> Result<&mut Self, StrError> {
        if elevation.len() != self.n_cell() {
            return Err("the length of the elevation map must equal the number of cells");
        }
        self.elevation = elevation.to_vec();
        Ok(self)
    }

    /// Tells whether all active blocks are at the same elevation
    pub fn is_flat(&self) -> bool {
        let mut active = (0..self.n_cell()).filter(|&n| self.is_active(n));
        match active.next() {
            Some(first) => active.all(|n| self.elevation[n] == self.elevation[first]),
            None => true,
        }
    }

    /// Returns the block size along an axis
    pub fn size(&self, index: usize, axis: usize) -> f64 {
        let (i, j, k) = self.position(index);
        match axis {
            0 => self.dx[i - 1],
            1 => self.dy[j - 1],
            _ => self.dz[k - 1],
        }
    }

    /// Returns the area of the block face normal to an axis
    ///
    /// For radial grids, axis 2 gives the ring area `Az = Vb/Δz` and axis 0 gives
    /// the lateral area `2π √(Az/π) Δz`.
    pub fn area(&self, index: usize, axis: usize) -> f64 {
        match &self.geometry {
            Geometry::Cartesian => {
                let (dx, dy, dz) = (self.size(index, 0), self.size(index, 1), self.size(index, 2));
                match axis {
                    0 => dy * dz,
                    1 => dx * dz,
                    _ => dx * dy,
                }
            }
            Geometry::Radial(_) => {
                let dz = self.size(index, 2);
                let az = self.bulk_volume(index) / dz;
                match axis {
                    2 => az,
                    _ => 2.0 * PI * f64::sqrt(az / PI) * dz,
                }
            }
        }
    }

    /// Returns the bulk volume of a block
    pub fn bulk_volume(&self, index: usize) -> f64 {
        match &self.geometry {
            Geometry::Cartesian => self.size(index, 0) * self.size(index, 1) * self.size(index, 2),
            Geometry::Radial(spacing) => {
                let (i, _, k) = self.position(index);
                spacing.volume(i - 1, self.dz[k - 1])
            }
        }
    }

    /// Computes the elevations of stacked layers with the first layer at the bottom
    fn layered_elevation(&self) -> Vec<f64> {
        let mut centers = Vec::with_capacity(self.dz.len());
        let mut base = 0.0;
        for dz in &self.dz {
            centers.push(base + dz / 2.0);
            base += dz;
        }
        (0..self.n_cell())
            .map(|index| {
                let (_, _, k) = self.position(index);
                centers[k - 1]
            })
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
