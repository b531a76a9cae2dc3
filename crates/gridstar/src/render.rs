//! ASCII rendering of a grid and its search result.
//!
//! Each cell takes two characters, a space and a glyph:
//!
//! | glyph | meaning |
//! |---|---|
//! | `S` / `s` | start, passable / impassable |
//! | `E` / `e` | end, passable / impassable |
//! | `*` | interior path cell |
//! | `O` | impassable cell |
//! | blank | passable cell |

use std::fmt;

use crate::geom::Point;
use crate::store::PathFinder;

/// Borrowed view that draws a [`PathFinder`] via `Display`.
pub struct Render<'a> {
    grid: &'a PathFinder,
}

impl PathFinder {
    /// Draw the grid framed by `=` rules and `|` sides.
    pub fn render(&self) -> Render<'_> {
        Render { grid: self }
    }
}

impl Render<'_> {
    fn glyph(&self, p: Point) -> char {
        let g = self.grid;
        let passable = g.is_passable(p);
        if g.is_start(p) {
            if passable { 'S' } else { 's' }
        } else if g.is_end(p) {
            if passable { 'E' } else { 'e' }
        } else if g.is_path(p) {
            '*'
        } else if !passable {
            'O'
        } else {
            ' '
        }
    }

    fn rule(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " ={} ", "==".repeat(self.grid.cols()))
    }
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.grid.is_empty() {
            return Ok(());
        }
        self.rule(f)?;
        for y in 0..self.grid.rows() as i32 {
            f.write_str("|")?;
            for x in 0..self.grid.cols() as i32 {
                write!(f, " {}", self.glyph(Point::new(x, y)))?;
            }
            f.write_str(" |\n")?;
        }
        self.rule(f)
    }
}
