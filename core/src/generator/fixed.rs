use super::*;

/// Explicit mine positions, used for reproducible boards and puzzles.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let config = config.validate()?;
        if self.mines.len() != config.mines as usize {
            return Err(GameError::InvalidConfiguration(
                ConfigProblem::MineCountMismatch,
            ));
        }
        MineLayout::from_mine_coords(config.size(), &self.mines)
    }
}
