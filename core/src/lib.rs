//! Board simulation engine for a grid mine-puzzle game.
//!
//! A [`BoardEngine`] owns a [`Grid`] of cells and a [`ClusterIndex`] of safe regions. The
//! presentation layer calls into it with discrete `(col, row)` coordinates and renders the
//! resulting [`CellView`]s.

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use cluster::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod cluster;
mod engine;
mod error;
mod generator;
mod grid;
mod snapshot;
mod types;

pub const DEFAULT_WIDTH: Coord = 20;
pub const DEFAULT_HEIGHT: Coord = 10;
pub const DEFAULT_MINES: CellCount = 15;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(width, height, mines).validate()
    }

    /// A board needs at least one cell and at least one cell without a mine.
    pub fn validate(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            log::warn!("Rejected empty board {}x{}", self.width, self.height);
            return Err(GameError::InvalidConfiguration(ConfigProblem::EmptyBoard));
        }
        if self.mines >= self.total_cells() {
            log::warn!(
                "Rejected {} mines, board only has {} cells",
                self.mines,
                self.total_cells()
            );
            return Err(GameError::InvalidConfiguration(ConfigProblem::TooManyMines));
        }
        Ok(self)
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_MINES)
    }
}

/// Mine positions of a board before any cell kinds are derived.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn empty(size: Coord2) -> Self {
        Self {
            mine_mask: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    /// Fails on coordinates outside `size` and on repeated coordinates.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut layout = Self::empty(size);

        for &coords in mine_coords {
            let coords = layout.validate_coords(coords)?;
            if !layout.place(coords) {
                return Err(GameError::InvalidConfiguration(
                    ConfigProblem::DuplicateMine(coords),
                ));
            }
        }

        Ok(layout)
    }

    /// Marks a mine, returns `false` when one was already there.
    pub(crate) fn place(&mut self, coords: Coord2) -> bool {
        let slot = &mut self.mine_mask[coords.to_nd_index()];
        if *slot {
            return false;
        }
        *slot = true;
        self.mine_count += 1;
        true
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.mine_mask.dim();
        // dimensions always come from a `Coord2`
        (x as Coord, y as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbors
        NeighborIter::new(coords, self.size())
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}
