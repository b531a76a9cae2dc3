use std::fmt;

/// Errors raised while sizing a [`PathFinder`](crate::PathFinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A store was requested with room for no cells at all.
    ZeroCapacity,
    /// One of the dimensions is zero.
    EmptyGrid { cols: usize, rows: usize },
    /// `cols * rows` does not fit in the store's capacity.
    CapacityExceeded {
        cols: usize,
        rows: usize,
        capacity: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "grid capacity must be at least one cell"),
            Self::EmptyGrid { cols, rows } => {
                write!(f, "grid {cols}x{rows} is empty: both dimensions must be >= 1")
            }
            Self::CapacityExceeded {
                cols,
                rows,
                capacity,
            } => write!(
                f,
                "grid {cols}x{rows} needs more cells than the capacity of {capacity}"
            ),
        }
    }
}

impl std::error::Error for GridError {}
