//! Demo driver for `gridstar`: builds a random map from a seed, runs one
//! search and draws the result.

use std::fmt::{self, Write};

use clap::Parser;
use gridstar::{GridError, PathFinder, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest width or height the demo accepts.
pub const MAX_SIDE: i32 = 64;

/// Find a path across a randomly filled grid and print it.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gridstar")]
#[command(about = "Shortest path on a random grid")]
pub struct DemoArgs {
    /// Chance in percent that a cell is passable
    #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
    pub passable_chance: u8,
    /// Seed for the map generator
    pub seed: u64,
    /// Start column
    #[arg(allow_negative_numbers = true)]
    pub start_col: i32,
    /// Start row
    #[arg(allow_negative_numbers = true)]
    pub start_row: i32,
    /// End column
    #[arg(allow_negative_numbers = true)]
    pub end_col: i32,
    /// End row
    #[arg(allow_negative_numbers = true)]
    pub end_row: i32,
    /// Grid width (1 to 64)
    #[arg(allow_negative_numbers = true)]
    pub width: i32,
    /// Grid height (1 to 64)
    #[arg(allow_negative_numbers = true)]
    pub height: i32,
}

impl DemoArgs {
    pub fn start(&self) -> Point {
        Point::new(self.start_col, self.start_row)
    }

    pub fn end(&self) -> Point {
        Point::new(self.end_col, self.end_row)
    }

    /// Reject sizes and endpoints the demo cannot draw.
    pub fn validate(&self) -> Result<(), DemoError> {
        let side = 1..=MAX_SIDE;
        if !side.contains(&self.width) || !side.contains(&self.height) {
            return Err(DemoError::InvalidSize);
        }
        let inside = |p: Point| (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y);
        if !inside(self.start()) || !inside(self.end()) {
            return Err(DemoError::InvalidCoordinates);
        }
        Ok(())
    }
}

/// Why the demo refused to run.
#[derive(Debug)]
pub enum DemoError {
    InvalidSize,
    InvalidCoordinates,
    Grid(GridError),
    Format(fmt::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize => write!(f, "Invalid width or height."),
            Self::InvalidCoordinates => write!(f, "Invalid coordinates of start or end."),
            Self::Grid(e) => write!(f, "{e}"),
            Self::Format(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {}

impl From<GridError> for DemoError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<fmt::Error> for DemoError {
    fn from(e: fmt::Error) -> Self {
        Self::Format(e)
    }
}

/// Fill `grid` so that each cell is passable with probability
/// `chance` (0.0 to 1.0), drawing from `rng` in row-major order.
pub fn random_fill<R: Rng>(grid: &mut PathFinder, chance: f64, rng: &mut R) {
    grid.fill(|_, _| rng.random::<f64>() <= chance);
}

/// Build the map, search, and return the printable report.
pub fn run(args: &DemoArgs) -> Result<String, DemoError> {
    args.validate()?;

    let mut grid = PathFinder::new(args.width as usize, args.height as usize)?;
    let chance = f64::from(args.passable_chance) / 100.0;
    let mut rng = StdRng::seed_from_u64(args.seed);
    random_fill(&mut grid, chance, &mut rng);
    grid.set_start(args.start());
    grid.set_end(args.end());

    let stats = grid.find();
    log::info!(
        "{} expansions, {} relaxations",
        stats.expansions,
        stats.relaxations
    );

    let mut out = String::new();
    writeln!(out, "passable chance: {:.1}", chance * 100.0)?;
    writeln!(out, "            Start: S (or s if fall in a wall)")?;
    writeln!(out, "              End: E (or e if fall in a wall)")?;
    writeln!(out, "             Path: *")?;
    writeln!(out, "       unpassable: O")?;
    writeln!(out, "Map:")?;
    write!(out, "{}", grid.render())?;
    if grid.has_path() {
        writeln!(out, "A path was found!\n")?;
    } else {
        writeln!(out, "No path was found!\n")?;
    }
    Ok(out)
}
