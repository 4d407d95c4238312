use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Uniform placement: draws a column and a row, retrying whenever the draw lands on a mine
/// that is already placed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RandomMineGenerator {
    seed: Option<u64>,
}

impl RandomMineGenerator {
    /// Without a seed the RNG is seeded from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let config = config.validate()?;
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let mut layout = MineLayout::empty(config.size());
        let mut mines_left = config.mines;
        let mut draws: u64 = 0;
        while mines_left > 0 {
            let coords = (
                rng.random_range(0..config.width),
                rng.random_range(0..config.height),
            );
            draws += 1;
            if layout.place(coords) {
                mines_left -= 1;
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} in {} draws (seed: {:?})",
            config.mines,
            config.width,
            config.height,
            draws,
            self.seed
        );
        Ok(layout)
    }
}
