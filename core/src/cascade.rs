use std::collections::VecDeque;

use ndarray::Array2;

use crate::*;

/// Reveals the zero-count region around `origin`.
///
/// Expected to run right after `origin` was revealed with no neighboring
/// mines. Every safe, unrevealed neighbor is revealed, flagged ones included,
/// and neighbors that turn out to be zero spread the reveal further. Mines are
/// never touched. Returns how many cells were revealed, `origin` excluded.
pub fn cascade(board: &mut Board, origin: Coord2) -> CellCount {
    let mut visited: Array2<bool> = Array2::default(board.size().to_nd_index());
    visited[origin.to_nd_index()] = true;

    let mut to_visit: VecDeque<Coord2> = board.iter_neighbors(origin).collect();
    let mut revealed: CellCount = 0;
    log::trace!(
        "Starting cascade from {:?}, initial neighbors: {:?}",
        origin,
        to_visit
    );

    while let Some(visit_coords) = to_visit.pop_front() {
        let seen = &mut visited[visit_coords.to_nd_index()];
        if *seen {
            continue;
        }
        *seen = true;

        let cell = board.cell_mut(visit_coords);
        if cell.is_mine() || cell.is_revealed() {
            continue;
        }

        let outcome = cell.reveal();
        revealed += 1;
        log::trace!("Cascade revealed {:?}: {:?}", visit_coords, outcome);

        // if this is also zero we visit the neighbors
        if outcome.is_zero() {
            to_visit.extend(
                board
                    .iter_neighbors(visit_coords)
                    .filter(|pos| !visited[pos.to_nd_index()]),
            );
        }
    }

    revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 8x8 board whose mines all sit on the outer ring, leaving (4, 4) in a
    /// zero region that stops at the ring's numbered cells.
    fn ringed_board() -> Board {
        let mines = [
            (0, 0),
            (0, 3),
            (0, 7),
            (3, 0),
            (7, 0),
            (7, 4),
            (7, 7),
            (4, 7),
        ];
        Board::from_mine_coords((8, 8), &mines).unwrap()
    }

    fn reveal_then_cascade(board: &mut Board, origin: Coord2) -> CellCount {
        let outcome = board.cell_mut(origin).reveal();
        assert_eq!(outcome, RevealOutcome::SafeWithNeighbors(0));
        cascade(board, origin)
    }

    #[test]
    fn reveals_all_neighbors_of_zero_cell() {
        let mut board = ringed_board();

        reveal_then_cascade(&mut board, (4, 4));

        for pos in board.iter_neighbors((4, 4)) {
            assert!(board[pos].is_revealed(), "{pos:?} should be revealed");
        }
    }

    #[test]
    fn spreads_through_zero_region_but_never_reveals_mines() {
        let mut board = ringed_board();

        let revealed = reveal_then_cascade(&mut board, (4, 4));

        for (coords, cell) in board.iter_cells() {
            if cell.is_mine() {
                assert!(!cell.is_revealed(), "mine at {coords:?} revealed");
            }
        }
        // the interior 6x6 block is zero and opens entirely, as does its border
        for row in 1..7 {
            for col in 1..7 {
                assert!(board[(row, col)].is_revealed(), "({row}, {col}) hidden");
            }
        }
        let total_revealed = board.iter_cells().filter(|(_, c)| c.is_revealed()).count();
        assert_eq!(usize::from(revealed) + 1, total_revealed);
    }

    #[test]
    fn cells_next_to_mines_stop_the_spread() {
        let mut board = Board::from_mine_coords((3, 5), &[(0, 2), (1, 2), (2, 2)]).unwrap();

        reveal_then_cascade(&mut board, (1, 0));

        assert!(board[(0, 1)].is_revealed());
        assert_eq!(board[(1, 1)].neighbor_mine_count(), 3);
        assert!(!board[(1, 3)].is_revealed());
        assert!(!board[(1, 4)].is_revealed());
    }

    #[test]
    fn second_cascade_is_a_noop() {
        let mut board = ringed_board();
        reveal_then_cascade(&mut board, (4, 4));
        let before = board.clone();

        assert_eq!(cascade(&mut board, (4, 4)), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn flagged_safe_cells_are_revealed() {
        let mut board = ringed_board();
        board.cell_mut((3, 3)).cycle_flag();

        reveal_then_cascade(&mut board, (4, 4));

        assert_eq!(board[(3, 3)].state(), CellState::Revealed);
    }

    #[test]
    fn empty_largest_board_opens_every_cell() {
        let mut board = Board::from_mine_coords((15, 15), &[]).unwrap();

        let revealed = reveal_then_cascade(&mut board, (0, 0));

        assert_eq!(revealed, 224);
        assert!(board.iter_cells().all(|(_, cell)| cell.is_revealed()));
    }
}
