use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer should draw for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    FlaggedMine,
    FlaggedMaybe,
    Revealed(u8),
    /// A mine exposed by a reveal or by the end of the game.
    Mine(Highlight),
}

impl CellView {
    pub fn from_cell(cell: &Cell) -> Self {
        if cell.is_mine() && (cell.is_revealed() || cell.highlight() != Highlight::None) {
            return Self::Mine(cell.highlight());
        }

        match cell.state() {
            CellState::Hidden => Self::Hidden,
            CellState::FlaggedMine => Self::FlaggedMine,
            CellState::FlaggedMaybe => Self::FlaggedMaybe,
            CellState::Revealed => Self::Revealed(cell.neighbor_mine_count()),
        }
    }
}

/// Read-only picture of a session, everything a renderer needs for a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub status: SessionStatus,
    pub win_reason: Option<WinReason>,
    pub configuration_message: Option<ConfigurationMessage>,
    pub flag_counts: FlagCounts,
    pub cells: Array2<CellView>,
}

impl SessionSnapshot {
    pub fn from_session(session: &GameSession) -> Self {
        let board = session.board();
        Self {
            size: board.size(),
            mine_count: board.mine_count(),
            status: session.status(),
            win_reason: session.win_reason(),
            configuration_message: session.configuration_message(),
            flag_counts: session.flag_counts(),
            cells: board.grid().map(CellView::from_cell),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }
}

impl From<&GameSession> for SessionSnapshot {
    fn from(session: &GameSession) -> Self {
        Self::from_session(session)
    }
}
