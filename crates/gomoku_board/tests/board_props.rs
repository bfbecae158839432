//! Property tests for board invariants.

use gomoku_board::{Board, BoardError, Coord, Mark, MAX_SIZE, MIN_SIZE};
use proptest::prelude::*;

fn dims() -> impl Strategy<Value = (usize, usize)> {
    (MIN_SIZE..=MAX_SIZE).prop_flat_map(|rows| (Just(rows), MIN_SIZE..=rows))
}

proptest! {
    #[test]
    fn construction_matches_dimension_rule(rows in 0usize..40, cols in 0usize..40) {
        let valid = (MIN_SIZE..=MAX_SIZE).contains(&rows)
            && (MIN_SIZE..=MAX_SIZE).contains(&cols)
            && cols <= rows;
        match Board::new(rows, cols) {
            Ok(board) => {
                prop_assert!(valid);
                prop_assert!(board.cells().iter().all(|c| c.is_empty()));
                prop_assert!(!board.is_full());
            }
            Err(e) => {
                prop_assert!(!valid);
                prop_assert_eq!(e, BoardError::InvalidDimensions { rows, cols });
            }
        }
    }

    #[test]
    fn enumerated_moves_are_exactly_the_legal_ones(
        (rows, cols) in dims(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..40),
    ) {
        let mut board = Board::new(rows, cols).unwrap();
        let mut mark = Mark::X;
        for pick in picks {
            let moves = board.valid_moves();
            if moves.is_empty() {
                break;
            }
            let coord = moves[pick.index(moves.len())];
            prop_assert!(board.place(mark, coord.row, coord.col));
            mark = mark.opponent();
        }

        let moves = board.valid_moves();
        let empty = board.cells().iter().filter(|c| c.is_empty()).count();
        prop_assert!(moves.len() <= empty);
        prop_assert_eq!(moves.is_empty(), board.is_full());

        for coord in board.coords() {
            let mut probe = board.clone();
            let legal = probe.try_place(mark, coord).is_ok();
            prop_assert_eq!(legal, moves.contains(&coord), "{}", coord);
        }
    }

    #[test]
    fn rejected_placement_never_mutates(
        (rows, cols) in dims(),
        row in 0usize..30,
        col in 0usize..30,
    ) {
        let mut board = Board::new(rows, cols).unwrap();
        let first = board.center_cells()[0];
        prop_assert!(board.place(Mark::X, first.row, first.col));

        let before = board.clone();
        if !board.place(Mark::O, row, col) {
            prop_assert_eq!(&board, &before);
        } else {
            prop_assert_eq!(board.stone_count(), 2);
            prop_assert!(!board.is_empty(row, col).unwrap());
        }
    }

    #[test]
    fn check_win_agrees_with_winner_at(
        (rows, cols) in dims(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..60),
    ) {
        let mut board = Board::new(rows, cols).unwrap();
        let mut mark = Mark::X;
        for pick in picks {
            let moves = board.valid_moves();
            if moves.is_empty() {
                break;
            }
            let coord: Coord = moves[pick.index(moves.len())];
            board.try_place(mark, coord).unwrap();
            let won = board.check_win(mark, coord.row, coord.col).unwrap();
            prop_assert_eq!(board.winner_at(coord), won.then_some(mark));
            mark = mark.opponent();
        }
    }
}
