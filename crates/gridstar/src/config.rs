//! Construction-time sizing of a [`PathFinder`](crate::PathFinder).

use crate::error::GridError;

/// Number of cell slots a store gets when none is requested.
pub const DEFAULT_CAPACITY: usize = 16384;

/// Dimensions and capacity of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Number of columns (grid width).
    pub cols: usize,
    /// Number of rows (grid height).
    pub rows: usize,
    /// Cell slots allocated once, up front. `cols * rows` must fit.
    #[cfg_attr(feature = "serde", serde(default = "default_capacity"))]
    pub capacity: usize,
}

#[cfg(feature = "serde")]
fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: 64,
            rows: 64,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl GridConfig {
    /// A `cols` x `rows` grid with the default capacity.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Override the capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Number of cells the grid uses, or `None` on overflow.
    pub fn cells(&self) -> Option<usize> {
        self.cols.checked_mul(self.rows)
    }

    /// Check that the dimensions are non-empty and fit in the capacity.
    pub fn validate(&self) -> Result<(), GridError> {
        let Self {
            cols,
            rows,
            capacity,
        } = *self;
        if capacity == 0 {
            return Err(GridError::ZeroCapacity);
        }
        if cols == 0 || rows == 0 {
            return Err(GridError::EmptyGrid { cols, rows });
        }
        match self.cells() {
            Some(n) if n <= capacity => Ok(()),
            _ => Err(GridError::CapacityExceeded {
                cols,
                rows,
                capacity,
            }),
        }
    }
}

pub(crate) fn check_dimensions(cols: usize, rows: usize, capacity: usize) -> Result<(), GridError> {
    GridConfig {
        cols,
        rows,
        capacity,
    }
    .validate()
}
