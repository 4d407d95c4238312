use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer may know about one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCell {
    /// `None` while the cell is unopened and the game is still running.
    pub kind: Option<CellKind>,
    pub status: CellStatus,
    pub appearance: Appearance,
}

/// Read-only copy of a board for the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord2,
    pub total_mines: CellCount,
    pub mines_left: i64,
    pub state: GameState,
    /// Row-major.
    pub cells: Vec<SnapshotCell>,
}

impl BoardSnapshot {
    pub fn from_engine(engine: &BoardEngine) -> Self {
        let finished = engine.is_finished();
        let cells = engine
            .grid()
            .cells()
            .map(|(_, cell)| {
                let view = cell.view();
                SnapshotCell {
                    kind: (finished || view.status.is_open()).then_some(view.kind),
                    status: view.status,
                    appearance: view.appearance(),
                }
            })
            .collect();

        Self {
            size: engine.size(),
            total_mines: engine.total_mines(),
            mines_left: engine.mines_remaining_estimate(),
            state: engine.state(),
            cells,
        }
    }

    pub fn cell(&self, (col, row): Coord2) -> Option<&SnapshotCell> {
        let (width, height) = self.size;
        if col >= width || row >= height {
            return None;
        }
        self.cells
            .get(usize::from(row) * usize::from(width) + usize::from(col))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(size: Coord2, mines: &[Coord2]) -> BoardEngine {
        let config = GameConfig::new(size.0, size.1, mines.len() as CellCount).unwrap();
        BoardEngine::with_generator(config, FixedMineGenerator::new(mines.iter().copied()))
            .unwrap()
    }

    #[test]
    fn hides_unopened_kinds_during_play() {
        let mut engine = engine((3, 3), &[(1, 1)]);
        engine.reveal((0, 0)).unwrap();
        engine.cycle_flag((1, 1)).unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.mines_left, 0);

        let opened = snapshot.cell((0, 0)).unwrap();
        assert_eq!(opened.kind, Some(CellKind::Numbered(1)));
        assert_eq!(opened.appearance, Appearance::Open(1));

        let flagged = snapshot.cell((1, 1)).unwrap();
        assert_eq!(flagged.kind, None);
        assert_eq!(flagged.appearance, Appearance::Flag);

        assert_eq!(snapshot.cell((2, 2)).unwrap().kind, None);
        assert_eq!(snapshot.cell((3, 0)), None);
    }

    #[test]
    fn finished_game_shows_kinds() {
        let mut engine = engine((3, 3), &[(1, 1)]);
        engine.reveal((1, 1)).unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.state, GameState::Lost);
        assert_eq!(snapshot.cell((1, 1)).unwrap().appearance, Appearance::Exploded);
        assert_eq!(snapshot.cell((2, 2)).unwrap().kind, Some(CellKind::Numbered(1)));
        assert_eq!(snapshot.cell((2, 2)).unwrap().appearance, Appearance::Unopened);
    }

    #[test]
    fn json_round_trip_keeps_snapshot() {
        let engine = BoardEngine::new_game(6, 4, 5, Some(7)).unwrap();
        let snapshot = engine.snapshot();

        let json = snapshot.to_json().unwrap();
        assert_eq!(BoardSnapshot::from_json(&json).unwrap(), snapshot);
    }
}
