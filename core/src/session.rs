use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    #[default]
    InProgress,
    Lost,
    Won,
}

impl SessionStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

/// Set when the requested configuration was rejected and the default board
/// was used instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigurationMessage {
    InvalidSize,
    InvalidMineCount,
}

impl From<ConfigError> for ConfigurationMessage {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidSize { .. } => Self::InvalidSize,
            ConfigError::InvalidMineCount { .. } => Self::InvalidMineCount,
        }
    }
}

/// Which of the two win conditions ended the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// Every safe cell is revealed.
    AllSafeRevealed,
    /// Every mine, and nothing else, carries a mine flag.
    AllMinesFlagged,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagCounts {
    pub mine: CellCount,
    pub maybe: CellCount,
}

/// Player action on a single cell
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal,
    CycleFlag,
}

/// One game from the first move to a win or loss.
///
/// A new game always means a new session; a finished session ignores every
/// further action.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    board: Board,
    status: SessionStatus,
    configuration_message: Option<ConfigurationMessage>,
    win_reason: Option<WinReason>,
    seed: Option<u64>,
}

impl GameSession {
    /// Starts a game on a randomly generated board, falling back to
    /// [`GameConfig::DEFAULT`] when the request is invalid.
    pub fn new(width: u32, height: u32, mines: u32) -> Self {
        Self::with_seed(width, height, mines, RandomBoardGenerator::from_entropy().seed())
    }

    /// Same as [`GameSession::new`] but with a reproducible mine layout.
    pub fn with_seed(width: u32, height: u32, mines: u32, seed: u64) -> Self {
        let mut session =
            Self::with_generator(width, height, mines, RandomBoardGenerator::new(seed));
        session.seed = Some(seed);
        session
    }

    pub fn with_generator<G: BoardGenerator>(
        width: u32,
        height: u32,
        mines: u32,
        generator: G,
    ) -> Self {
        let (config, configuration_message) = Self::resolve_config(width, height, mines);
        let mut session = Self::from_board(generator.generate(config));
        session.configuration_message = configuration_message;
        session
    }

    pub fn from_config(config: GameConfig) -> Self {
        Self::new(
            config.width.into(),
            config.height.into(),
            config.mines.into(),
        )
    }

    /// Starts a game on a prepared board.
    pub fn from_board(board: Board) -> Self {
        log::debug!(
            "New game {}x{} with {} mines",
            board.width(),
            board.height(),
            board.mine_count()
        );
        Self {
            board,
            status: SessionStatus::InProgress,
            configuration_message: None,
            win_reason: None,
            seed: None,
        }
    }

    fn resolve_config(
        width: u32,
        height: u32,
        mines: u32,
    ) -> (GameConfig, Option<ConfigurationMessage>) {
        match GameConfig::validate(width, height, mines) {
            Ok(config) => (config, None),
            Err(err) => {
                log::warn!("{}, using the default board", err);
                (GameConfig::DEFAULT, Some(err.into()))
            }
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn configuration_message(&self) -> Option<ConfigurationMessage> {
        self.configuration_message
    }

    pub fn win_reason(&self) -> Option<WinReason> {
        self.win_reason
    }

    /// Seed of the generated layout, `None` for prepared boards.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn cell_at(&self, row: Coord, col: Coord) -> &Cell {
        self.board.cell(self.checked_coords(row, col))
    }

    /// Number of mine flags and maybe flags currently placed.
    pub fn flag_counts(&self) -> FlagCounts {
        self.board
            .iter_cells()
            .fold(FlagCounts::default(), |mut counts, (_, cell)| {
                match cell.state() {
                    CellState::FlaggedMine => counts.mine += 1,
                    CellState::FlaggedMaybe => counts.maybe += 1,
                    CellState::Hidden | CellState::Revealed => {}
                }
                counts
            })
    }

    /// Dispatches an action, returning whether anything changed.
    pub fn apply(&mut self, action: Action, row: Coord, col: Coord) -> bool {
        match action {
            Action::Reveal => self
                .reveal_at(row, col)
                .is_some_and(RevealOutcome::has_update),
            Action::CycleFlag => self.flag_at(row, col),
        }
    }

    /// Reveals a cell, cascading through zero regions.
    ///
    /// Returns `None` once the game is over. Panics on coordinates outside
    /// of the board.
    pub fn reveal_at(&mut self, row: Coord, col: Coord) -> Option<RevealOutcome> {
        let coords = self.checked_coords(row, col);
        if self.is_finished() {
            return None;
        }

        let outcome = self.board.cell_mut(coords).reveal();
        log::debug!("Reveal at {:?}: {:?}", coords, outcome);
        match outcome {
            RevealOutcome::HitMine => self.evaluate_lose(),
            RevealOutcome::SafeWithNeighbors(0) => {
                let revealed = cascade(&mut self.board, coords);
                log::debug!("Cascade from {:?} revealed {} cells", coords, revealed);
            }
            RevealOutcome::SafeWithNeighbors(_) | RevealOutcome::AlreadyRevealed => {}
        }
        self.evaluate_win();

        Some(outcome)
    }

    /// Cycles the flag on a cell, returning whether it changed.
    ///
    /// Panics on coordinates outside of the board.
    pub fn flag_at(&mut self, row: Coord, col: Coord) -> bool {
        let coords = self.checked_coords(row, col);
        if self.is_finished() {
            return false;
        }

        let cell = self.board.cell_mut(coords);
        let before = cell.state();
        cell.cycle_flag();
        let after = cell.state();
        log::trace!("Flag at {:?}: {:?} -> {:?}", coords, before, after);

        self.evaluate_win();
        before != after
    }

    fn checked_coords(&self, row: Coord, col: Coord) -> Coord2 {
        let coords = (row, col);
        assert!(
            self.board.contains(coords),
            "coordinates {:?} outside of a {}x{} board",
            coords,
            self.board.width(),
            self.board.height()
        );
        coords
    }

    fn evaluate_lose(&mut self) {
        let detonated = self
            .board
            .iter_cells()
            .any(|(_, cell)| cell.is_mine() && cell.is_revealed());
        if !detonated {
            return;
        }

        for mine in self.board.iter_mines_mut() {
            mine.clear_flag();
            mine.set_highlight(Highlight::Detonated);
        }
        self.end_game(SessionStatus::Lost);
    }

    fn evaluate_win(&mut self) {
        if self.is_finished() {
            return;
        }

        let mut revealed_safe: CellCount = 0;
        let mut flagged_mines: CellCount = 0;
        let mut flagged_safe = false;
        for (_, cell) in self.board.iter_cells() {
            match (cell.is_mine(), cell.state()) {
                (false, CellState::Revealed) => revealed_safe += 1,
                (false, CellState::FlaggedMine) => flagged_safe = true,
                (true, CellState::FlaggedMine) => flagged_mines += 1,
                _ => {}
            }
        }

        if revealed_safe == self.board.safe_cell_count() {
            for mine in self.board.iter_mines_mut() {
                mine.clear_flag();
                mine.set_highlight(Highlight::Cleared);
            }
            self.win_reason = Some(WinReason::AllSafeRevealed);
            self.end_game(SessionStatus::Won);
        } else if !flagged_safe && flagged_mines == self.board.mine_count() {
            self.win_reason = Some(WinReason::AllMinesFlagged);
            self.end_game(SessionStatus::Won);
        }
    }

    fn end_game(&mut self, status: SessionStatus) {
        log::debug!("Game ended: {:?} ({:?})", status, self.win_reason);
        self.status = status;
    }
}
