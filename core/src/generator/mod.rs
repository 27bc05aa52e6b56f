use crate::*;
pub use random::*;

mod random;

/// Produces a fully initialized board for an already validated configuration.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Board;
}
