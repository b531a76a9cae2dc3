/// Per-cell record: static passability plus search bookkeeping.
///
/// One `Node` per capacity slot, addressed by linear index
/// `row * cols + col`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Node {
    /// Frontier candidate awaiting expansion.
    pub(crate) open: bool,
    /// Finally resolved: expanded, or a wall met during expansion.
    pub(crate) closed: bool,
    /// Interior cell of the reconstructed path.
    pub(crate) on_path: bool,
    /// Written by `fill`, untouched by `clear_path`.
    pub(crate) passable: bool,
    /// Predecessor on the best known route. Meaningful once discovered.
    pub(crate) parent: usize,
    pub(crate) g: u32,
    pub(crate) f: u32,
}

impl Node {
    /// Reset search bookkeeping, keeping passability.
    #[inline]
    pub(crate) fn clear_search(&mut self) {
        *self = Self {
            passable: self.passable,
            ..Self::default()
        };
    }

    /// Whether any search bookkeeping differs from the cleared state.
    #[inline]
    pub(crate) fn is_dirty(&self) -> bool {
        self.open || self.closed || self.on_path || self.parent != 0 || self.g != 0 || self.f != 0
    }
}
