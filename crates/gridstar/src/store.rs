use std::fmt;

use log::debug;

use crate::config::{DEFAULT_CAPACITY, GridConfig, check_dimensions};
use crate::error::GridError;
use crate::geom::Point;
use crate::node::Node;

/// Fixed-capacity grid store plus the search context that runs over it.
///
/// The node buffer is allocated once at construction with room for
/// `capacity` cells and is never resized. Cells are addressed by
/// `row * cols + col`.
///
/// Typical use:
///
/// ```
/// use gridstar::{PathFinder, Point};
///
/// let mut pf = PathFinder::new(3, 3).unwrap();
/// pf.fill(|_, p| p != Point::new(1, 1));
/// pf.set_start(Point::new(0, 0));
/// pf.set_end(Point::new(2, 2));
/// let stats = pf.find();
/// assert!(stats.found);
/// assert_eq!(pf.g_score(Point::new(2, 2)), 4);
/// ```
pub struct PathFinder {
    pub(crate) nodes: Box<[Node]>,
    pub(crate) cols: usize,
    pub(crate) rows: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) has_path: bool,
}

impl PathFinder {
    /// Create a store with `capacity` cell slots and a 0x0 grid.
    ///
    /// Call [`set_dimensions`](Self::set_dimensions) before filling.
    pub fn with_capacity(capacity: usize) -> Result<Self, GridError> {
        if capacity == 0 {
            return Err(GridError::ZeroCapacity);
        }
        Ok(Self {
            nodes: vec![Node::default(); capacity].into_boxed_slice(),
            cols: 0,
            rows: 0,
            start: 0,
            end: 0,
            has_path: false,
        })
    }

    /// Create a `cols` x `rows` store with [`DEFAULT_CAPACITY`] slots.
    pub fn new(cols: usize, rows: usize) -> Result<Self, GridError> {
        Self::from_config(&GridConfig::new(cols, rows))
    }

    /// Create a store sized by `config`.
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        let mut pf = Self::with_capacity(config.capacity)?;
        pf.cols = config.cols;
        pf.rows = config.rows;
        Ok(pf)
    }

    /// Reset every capacity slot, including passability, and set the
    /// dimensions, start and end back to zero.
    pub fn init(&mut self) {
        self.nodes.fill(Node::default());
        self.cols = 0;
        self.rows = 0;
        self.start = 0;
        self.end = 0;
        self.has_path = false;
    }

    /// Re-initialize the store (see [`init`](Self::init)) and declare a
    /// `cols` x `rows` grid. The capacity does not change.
    pub fn set_dimensions(&mut self, cols: usize, rows: usize) -> Result<(), GridError> {
        check_dimensions(cols, rows, self.capacity())?;
        self.init();
        self.cols = cols;
        self.rows = rows;
        Ok(())
    }

    /// Query `fill_fn` once per cell, row by row, and store the answer as
    /// the cell's passability. Search bookkeeping is left alone.
    pub fn fill<F>(&mut self, mut fill_fn: F)
    where
        F: FnMut(&PathFinder, Point) -> bool,
    {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let p = Point::new(col as i32, row as i32);
                let passable = fill_fn(&*self, p);
                self.nodes[row * self.cols + col].passable = passable;
            }
        }
    }

    /// Set the passability of one cell. Out-of-grid positions are ignored.
    pub fn set_passable(&mut self, p: Point, passable: bool) {
        if let Some(i) = self.index(p) {
            self.nodes[i].passable = passable;
        }
    }

    /// Reset search bookkeeping on every capacity slot so that a new
    /// search can run. Passability and dimensions are kept.
    pub fn clear_path(&mut self) {
        for n in self.nodes.iter_mut() {
            n.clear_search();
        }
        self.has_path = false;
    }

    /// Set the start cell. Positions outside the grid are ignored and the
    /// previous start is kept.
    pub fn set_start(&mut self, p: Point) {
        match self.index(p) {
            Some(i) => self.start = i,
            None => debug!("set_start: {p} outside {}x{} grid, ignored", self.cols, self.rows),
        }
    }

    /// Set the end cell. Positions outside the grid are ignored and the
    /// previous end is kept.
    pub fn set_end(&mut self, p: Point) {
        match self.index(p) {
            Some(i) => self.end = i,
            None => debug!("set_end: {p} outside {}x{} grid, ignored", self.cols, self.rows),
        }
    }

    /// Set or clear the path mark of one cell. Out-of-grid positions are
    /// ignored.
    pub fn set_path(&mut self, p: Point, on_path: bool) {
        if let Some(i) = self.index(p) {
            self.nodes[i].on_path = on_path;
        }
    }

    // -----------------------------------------------------------------------
    // Shape
    // -----------------------------------------------------------------------

    /// Grid width.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cell slots allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Number of cells in use, `cols * rows`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    /// Whether no dimensions have been declared yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.cols && (p.y as usize) < self.rows
    }

    /// Start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.point(self.start)
    }

    /// End cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.point(self.end)
    }

    /// Outcome of the last search. `false` until a search finds a route.
    #[inline]
    pub fn has_path(&self) -> bool {
        self.has_path
    }

    // -----------------------------------------------------------------------
    // Per-cell queries
    //
    // Unless stated otherwise `p` must lie inside the grid. This is only
    // checked in debug builds.
    // -----------------------------------------------------------------------

    /// Whether the cell can be walked on.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.nodes[self.unchecked_index(p)].passable
    }

    /// Whether the cell is marked as part of the path. The search marks
    /// interior cells only, never start or end.
    #[inline]
    pub fn is_path(&self, p: Point) -> bool {
        self.nodes[self.unchecked_index(p)].on_path
    }

    /// Whether the cell is the start cell.
    #[inline]
    pub fn is_start(&self, p: Point) -> bool {
        self.unchecked_index(p) == self.start
    }

    /// Whether the cell is the end cell.
    #[inline]
    pub fn is_end(&self, p: Point) -> bool {
        self.unchecked_index(p) == self.end
    }

    /// Total estimated cost (`f` score) recorded for the cell.
    #[inline]
    pub fn heuristic_score(&self, p: Point) -> u32 {
        self.nodes[self.unchecked_index(p)].f
    }

    /// Accumulated cost from start (`g` score) recorded for the cell.
    #[inline]
    pub fn g_score(&self, p: Point) -> u32 {
        self.nodes[self.unchecked_index(p)].g
    }

    /// Whether the cell is in the open set.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.nodes[self.unchecked_index(p)].open
    }

    /// Whether the cell is in the closed set.
    #[inline]
    pub fn is_closed(&self, p: Point) -> bool {
        self.nodes[self.unchecked_index(p)].closed
    }

    /// Whether `p` could serve as a search target: inside the grid and
    /// passable. Any position may be given.
    pub fn is_possible_target(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.nodes[i].passable)
    }

    /// The found route from start to end, both included, by following
    /// parent links back from the end. Empty when there is no path.
    pub fn path(&self) -> Vec<Point> {
        if !self.has_path {
            return Vec::new();
        }
        let mut path = vec![self.point(self.end)];
        let mut i = self.end;
        while i != self.start {
            i = self.nodes[i].parent;
            path.push(self.point(i));
        }
        path.reverse();
        path
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a linear index. Returns `None` if out of the grid.
    #[inline]
    pub(crate) fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.cols + p.x as usize)
    }

    #[inline]
    fn unchecked_index(&self, p: Point) -> usize {
        debug_assert!(self.contains(p), "{p} outside {}x{} grid", self.cols, self.rows);
        p.y as usize * self.cols + p.x as usize
    }

    /// Convert a linear index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        if self.cols == 0 {
            return Point::ZERO;
        }
        Point::new((idx % self.cols) as i32, (idx / self.cols) as i32)
    }

    /// Whether a previous search left bookkeeping behind.
    pub(crate) fn is_dirty(&self) -> bool {
        self.has_path || self.nodes[..self.len()].iter().any(Node::is_dirty)
    }
}

impl Default for PathFinder {
    /// An empty store with [`DEFAULT_CAPACITY`] slots.
    fn default() -> Self {
        Self {
            nodes: vec![Node::default(); DEFAULT_CAPACITY].into_boxed_slice(),
            cols: 0,
            rows: 0,
            start: 0,
            end: 0,
            has_path: false,
        }
    }
}

impl fmt::Debug for PathFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathFinder")
            .field("cols", &self.cols)
            .field("rows", &self.rows)
            .field("capacity", &self.capacity())
            .field("start", &self.start())
            .field("end", &self.end())
            .field("has_path", &self.has_path)
            .finish_non_exhaustive()
    }
}
