use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of mine positions for a new board.
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}
