use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
///
/// `Revealed` is terminal. The other three form a cycle driven by
/// [`Cell::cycle_flag`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    FlaggedMine,
    FlaggedMaybe,
    Revealed,
}

impl CellState {
    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::FlaggedMine | Self::FlaggedMaybe)
    }

    const fn next_flag(self) -> Self {
        match self {
            Self::Hidden => Self::FlaggedMine,
            Self::FlaggedMine => Self::FlaggedMaybe,
            Self::FlaggedMaybe => Self::Hidden,
            Self::Revealed => Self::Revealed,
        }
    }
}

/// Renderer hint set on mine cells once the game ends. Has no effect on
/// the rules.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Highlight {
    #[default]
    None,
    /// The game was lost.
    Detonated,
    /// The game was won by revealing every safe cell.
    Cleared,
}

/// Outcome of revealing a single cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    AlreadyRevealed,
    HitMine,
    SafeWithNeighbors(u8),
}

impl RevealOutcome {
    /// Whether the reveal changed the cell
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::AlreadyRevealed)
    }

    /// Whether the reveal should start a cascade
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::SafeWithNeighbors(0))
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    is_mine: bool,
    state: CellState,
    neighbor_mine_count: u8,
    highlight: Highlight,
}

impl Cell {
    pub const fn new(is_mine: bool, neighbor_mine_count: u8) -> Self {
        Self {
            is_mine,
            state: CellState::Hidden,
            neighbor_mine_count,
            highlight: Highlight::None,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn state(&self) -> CellState {
        self.state
    }

    /// Meaningless for mine cells.
    pub const fn neighbor_mine_count(&self) -> u8 {
        self.neighbor_mine_count
    }

    pub const fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub const fn is_revealed(&self) -> bool {
        matches!(self.state, CellState::Revealed)
    }

    pub const fn is_flagged_mine(&self) -> bool {
        matches!(self.state, CellState::FlaggedMine)
    }

    /// Reveals the cell, dropping any flag it carried.
    pub fn reveal(&mut self) -> RevealOutcome {
        if self.is_revealed() {
            return RevealOutcome::AlreadyRevealed;
        }

        self.state = CellState::Revealed;
        if self.is_mine {
            RevealOutcome::HitMine
        } else {
            RevealOutcome::SafeWithNeighbors(self.neighbor_mine_count)
        }
    }

    /// Advances Hidden -> FlaggedMine -> FlaggedMaybe -> Hidden. No-op once revealed.
    pub fn cycle_flag(&mut self) {
        self.state = self.state.next_flag();
    }

    pub(crate) fn clear_flag(&mut self) {
        if self.state.is_flagged() {
            self.state = CellState::Hidden;
        }
    }

    pub(crate) fn set_highlight(&mut self, highlight: Highlight) {
        self.highlight = highlight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_flag_three_times_returns_to_hidden() {
        let mut cell = Cell::new(false, 1);

        cell.cycle_flag();
        assert_eq!(cell.state(), CellState::FlaggedMine);
        cell.cycle_flag();
        assert_eq!(cell.state(), CellState::FlaggedMaybe);
        cell.cycle_flag();
        assert_eq!(cell.state(), CellState::Hidden);
    }

    #[test]
    fn cycle_flag_ignores_mine_ground_truth() {
        let mut mine = Cell::new(true, 0);
        let mut safe = Cell::new(false, 0);

        mine.cycle_flag();
        safe.cycle_flag();

        assert_eq!(mine.state(), safe.state());
    }

    #[test]
    fn cycle_flag_on_revealed_cell_is_noop() {
        let mut cell = Cell::new(false, 3);
        cell.reveal();

        cell.cycle_flag();

        assert_eq!(cell.state(), CellState::Revealed);
    }

    #[test]
    fn reveal_reports_neighbors_and_is_idempotent() {
        let mut cell = Cell::new(false, 2);

        assert_eq!(cell.reveal(), RevealOutcome::SafeWithNeighbors(2));
        assert_eq!(cell.reveal(), RevealOutcome::AlreadyRevealed);
    }

    #[test]
    fn reveal_clears_flag_and_reports_mine() {
        let mut cell = Cell::new(true, 0);
        cell.cycle_flag();
        cell.cycle_flag();

        assert_eq!(cell.reveal(), RevealOutcome::HitMine);
        assert_eq!(cell.state(), CellState::Revealed);
    }

    #[test]
    fn clear_flag_leaves_revealed_alone() {
        let mut flagged = Cell::new(true, 0);
        flagged.cycle_flag();
        flagged.clear_flag();
        assert_eq!(flagged.state(), CellState::Hidden);

        let mut revealed = Cell::new(false, 0);
        revealed.reveal();
        revealed.clear_flag();
        assert_eq!(revealed.state(), CellState::Revealed);
    }
}
