use core::fmt;

use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InPlay -> Won
/// - InPlay -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InPlay,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InPlay
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One game session: the grid, its safe clusters and the authoritative game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardEngine {
    grid: Grid,
    clusters: ClusterIndex,
    state: GameState,
}

impl BoardEngine {
    /// Random board; `seed` makes mine placement reproducible.
    pub fn new_game(
        width: Coord,
        height: Coord,
        mines: CellCount,
        seed: Option<u64>,
    ) -> Result<Self> {
        let config = GameConfig::new(width, height, mines)?;
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }

    pub fn with_generator(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        Ok(Self::from_grid(Grid::new(config, generator)?))
    }

    /// Takes over a freshly built grid and opens its largest safe cluster.
    pub fn from_grid(grid: Grid) -> Self {
        let clusters = ClusterIndex::partition(&grid);
        let mut engine = Self {
            grid,
            clusters,
            state: Default::default(),
        };
        engine.initialize();
        engine
    }

    fn initialize(&mut self) {
        if !self.reveal_next_cluster() {
            log::debug!("No safe cluster to open, board starts fully hidden");
        }
        self.derive_terminal_state();
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.grid.mine_count()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn clusters(&self) -> &ClusterIndex {
        &self.clusters
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        Ok(self.grid.query(coords)?.view())
    }

    pub fn flag_count(&self) -> CellCount {
        self.grid.count_status(CellStatus::Flagged)
    }

    /// Mines minus flags, negative when over-flagged.
    pub fn mines_remaining_estimate(&self) -> i64 {
        i64::from(self.total_mines()) - i64::from(self.flag_count())
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_engine(self)
    }

    /// Opens a hidden cell. Flagged, questioned or open cells and finished games are left
    /// untouched.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        let cell = self.grid[coords];
        let changed = if self.state.is_finished() || cell.status() != CellStatus::Hidden {
            false
        } else {
            match cell.kind() {
                CellKind::Mine => {
                    log::debug!("Mine hit at {:?}", coords);
                    self.grid.cell_mut(coords).set_status(CellStatus::Exploded);
                }
                CellKind::Numbered(count) => {
                    log::debug!("Open cell at {:?}, mine count: {}", coords, count);
                    self.grid.cell_mut(coords).set_status(CellStatus::Revealed);
                }
                CellKind::Empty => {
                    let opened = flood_reveal(&mut self.grid, coords);
                    log::debug!("Flood-fill from {:?} opened {} cells", coords, opened);
                }
            }
            true
        };

        Ok(match (changed, self.derive_terminal_state()) {
            (false, _) => RevealOutcome::NoChange,
            (true, GameState::Lost) => RevealOutcome::HitMine,
            (true, GameState::Won) => RevealOutcome::Won,
            (true, GameState::InPlay) => RevealOutcome::Revealed,
        })
    }

    /// Hidden -> Flagged -> Questioned -> Hidden.
    pub fn cycle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        let next = match self.state {
            GameState::InPlay => self.grid[coords].status().next_mark(),
            GameState::Won | GameState::Lost => None,
        };

        let outcome = match next {
            Some(status) => {
                log::trace!("Mark at {:?} is now {:?}", coords, status);
                self.grid.cell_mut(coords).set_status(status);
                MarkOutcome::Changed
            }
            None => MarkOutcome::NoChange,
        };
        self.derive_terminal_state();
        Ok(outcome)
    }

    /// Opens the next safe cluster that was not force-opened yet, e.g. as a hint.
    pub fn reveal_hint(&mut self) -> bool {
        if self.state.is_finished() {
            return false;
        }
        let opened = self.reveal_next_cluster();
        self.derive_terminal_state();
        opened
    }

    /// Opens the next cluster that still has unopened cells.
    fn reveal_next_cluster(&mut self) -> bool {
        while let Some(cluster) = self.clusters.next_unrevealed_mut() {
            cluster.mark_revealed();
            if cluster.is_open(&self.grid) {
                log::trace!("Skipping open cluster at {:?}", cluster.core_positions().first());
                continue;
            }

            for pos in cluster.positions() {
                // borders never include mines
                self.grid.cell_mut(pos).set_status(CellStatus::Revealed);
            }

            log::debug!(
                "Opened safe cluster of {} empty and {} border cells",
                cluster.core_positions().len(),
                cluster.border_positions().len()
            );
            return true;
        }
        false
    }

    /// Recomputes the game state from the cells. Won and lost are final.
    pub fn derive_terminal_state(&mut self) -> GameState {
        if self.state.is_finished() {
            return self.state;
        }

        if self.grid.any_status(CellStatus::Exploded) {
            self.state = GameState::Lost;
        } else if self
            .grid
            .cells()
            .all(|(_, cell)| cell.is_mine() || cell.status() == CellStatus::Revealed)
        {
            self.state = GameState::Won;
        }

        if self.state.is_finished() {
            log::debug!("Game ended: {:?}", self.state);
        }
        self.state
    }

    /// Opens every remaining cell for the final board. Mines explode when
    /// `exploded_context` is set. The game state is left as is.
    pub fn reveal_all(&mut self, exploded_context: bool) {
        let mut opened: CellCount = 0;
        for coords in self.grid.coords() {
            if self.grid.cell_mut(coords).open(exploded_context) {
                opened += 1;
            }
        }
        log::debug!("Disclosed {} remaining cells", opened);
    }
}

impl fmt::Display for BoardEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

/// Opens the empty region containing `start` together with one layer of numbered cells
/// around it. Returns how many cells changed.
fn flood_reveal(grid: &mut Grid, start: Coord2) -> CellCount {
    let mut visited = grid.make_map();
    let mut stack = vec![start];
    visited[start.to_nd_index()] = true;
    let mut opened: CellCount = 0;

    while let Some(coords) = stack.pop() {
        if grid.cell_mut(coords).open(true) {
            opened += 1;
        }

        for next in grid.neighbors(coords) {
            let cell = grid[next];
            if !visited[next.to_nd_index()] && cell.kind().is_empty() {
                visited[next.to_nd_index()] = true;
                if grid.cell_mut(next).open(true) {
                    opened += 1;
                }
                stack.push(next);
            } else if cell.status() == CellStatus::Hidden && !cell.is_mine() {
                grid.cell_mut(next).set_status(CellStatus::Revealed);
                opened += 1;
                log::trace!("Opened border cell at {:?}", next);
            }
        }
    }

    opened
}
