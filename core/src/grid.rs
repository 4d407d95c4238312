use core::fmt;
use core::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Dense board of cells indexed by `(col, row)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Grid {
    /// Places mines with `generator` and derives every cell kind from them.
    pub fn new(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        let config = config.validate()?;
        let layout = generator.generate(config)?;
        if layout.size() != config.size() || layout.mine_count() != config.mines {
            log::warn!(
                "Generator returned {} mines on {:?}, requested {} on {:?}",
                layout.mine_count(),
                layout.size(),
                config.mines,
                config.size()
            );
            return Err(GameError::InvalidConfiguration(
                ConfigProblem::MineCountMismatch,
            ));
        }
        Ok(Self::from_layout(&layout))
    }

    pub fn from_layout(layout: &MineLayout) -> Self {
        let cells = Array2::from_shape_fn(layout.size().to_nd_index(), |(col, row)| {
            let coords = (col as Coord, row as Coord);
            let kind = if layout.contains_mine(coords) {
                CellKind::Mine
            } else {
                CellKind::from_count(layout.adjacent_mine_count(coords))
            };
            Cell::new(kind)
        });

        Self {
            cells,
            mine_count: layout.mine_count(),
        }
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.cells.dim();
        (x as Coord, y as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.width(), self.height())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (width, height) = self.size();
        if coords.0 < width && coords.1 < height {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn query(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    /// Up to eight in-bounds neighbors, in the fixed offset order.
    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Up to four in-bounds neighbors: up, left, down, right.
    pub fn orthogonal_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::orthogonal(coords, self.size())
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size();
        (0..height).flat_map(move |row| (0..width).map(move |col| (col, row)))
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.coords().map(move |coords| (coords, &self[coords]))
    }

    pub fn count_kind(&self, pred: impl Fn(CellKind) -> bool) -> CellCount {
        self.cells.iter().filter(|cell| pred(cell.kind())).count() as CellCount
    }

    pub fn count_status(&self, status: CellStatus) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.status() == status)
            .count() as CellCount
    }

    pub fn any_status(&self, status: CellStatus) -> bool {
        self.cells.iter().any(|cell| cell.status() == status)
    }

    /// Grid-sized boolean map, used as the visited set of traversals.
    pub(crate) fn make_map(&self) -> Array2<bool> {
        Array2::default(self.size().to_nd_index())
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// One line per row, cells as `|<kind><status>|`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.size();
        for row in 0..height {
            f.write_str("|")?;
            for col in 0..width {
                if col > 0 {
                    f.write_str("|")?;
                }
                write!(f, "{}", self[(col, row)])?;
            }
            f.write_str("|\n")?;
        }
        Ok(())
    }
}
