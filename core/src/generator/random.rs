use ndarray::Array2;

use super::*;

/// Uniform placement by rejection sampling: a random cell is drawn until the
/// requested number of distinct cells hold a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generator seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        use rand::Rng;

        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let total_cells = config.total_cells();
        let size = config.size();

        // optimize for full boards
        if config.mines >= total_cells {
            if config.mines > total_cells {
                log::warn!(
                    "Board already full, generated anyway, requested {} but only fits {}",
                    config.mines,
                    total_cells
                );
            }
            return Board::from_mine_mask(&Array2::from_elem(size.to_nd_index(), true));
        }

        let mut mines: Array2<bool> = Array2::default(size.to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed: CellCount = 0;
        let mut draws: u32 = 0;

        while mines_placed < config.mines {
            let coords: Coord2 = (
                rng.random_range(0..config.height),
                rng.random_range(0..config.width),
            );
            draws += 1;

            let tile = &mut mines[coords.to_nd_index()];
            if !*tile {
                *tile = true;
                mines_placed += 1;
            }
        }

        log::trace!(
            "Placed {} mines in {} draws with seed {}",
            mines_placed,
            draws,
            self.seed
        );
        Board::from_mine_mask(&mines)
    }
}
