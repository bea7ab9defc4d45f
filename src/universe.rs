use std::collections::HashSet;

use metrohash::MetroBuildHasher;
use rand::Rng;
use thiserror::Error;

use crate::{pos, Pos};

/// Living cells, keyed by position.
pub type CellSet = HashSet<Pos, MetroBuildHasher>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UniverseError {
    #[error("invalid universe dimensions {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },
}

/// A game of life universe on an unbounded grid. Only living cells are
/// stored; everything else is dead.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Universe {
    cells: CellSet,
}

impl Universe {
    pub fn from_cells(cells: impl IntoIterator<Item = Pos>) -> Self {
        let cells = cells.into_iter().collect();
        Self { cells }
    }

    /// Seeds a `width` x `height` region, each cell living with probability
    /// one half.
    pub fn randomized(width: i32, height: i32) -> Result<Self, UniverseError> {
        Self::randomized_with(width, height, &mut rand::rng())
    }

    /// Same as [`Universe::randomized`], drawing from the passed generator.
    pub fn randomized_with(
        width: i32,
        height: i32,
        rng: &mut impl Rng,
    ) -> Result<Self, UniverseError> {
        if width < 0 || height < 0 {
            return Err(UniverseError::InvalidDimension { width, height });
        }
        let cells = (0..width)
            .flat_map(|x| (0..height).map(move |y| pos!(x, y)))
            .filter(|_| rng.random())
            .collect();
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    pub fn is_alive(&self, cell: Pos) -> bool {
        self.cells.contains(&cell)
    }

    pub fn living_neighbours(&self, cell: Pos) -> usize {
        cell.neighbours().filter(|n| self.is_alive(*n)).count()
    }

    /// The state `cell` will have in the next generation.
    pub fn outcome(&self, cell: Pos) -> bool {
        rules(self.is_alive(cell), self.living_neighbours(cell))
    }

    /// Evolves the universe one generation.
    ///
    /// Returns `false` when the next generation is identical to the current
    /// one; the universe is then a fixed point and is left untouched.
    pub fn step(&mut self) -> bool {
        // Only living cells and their neighbours can live next generation.
        let mut interesting = CellSet::default();
        for cell in &self.cells {
            interesting.insert(*cell);
            interesting.extend(cell.neighbours());
        }

        let next_generation: CellSet = interesting
            .into_iter()
            .filter(|cell| self.outcome(*cell))
            .collect();

        if next_generation == self.cells {
            false
        } else {
            self.cells = next_generation;
            true
        }
    }
}

/// A living cell survives with 2 or 3 living neighbours, a dead cell comes
/// alive with exactly 3.
pub fn rules(is_alive: bool, living_neighbours: usize) -> bool {
    matches!((is_alive, living_neighbours), (true, 2 | 3) | (false, 3))
}
