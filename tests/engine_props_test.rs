//! Property tests for the board, the rules and turn order.

use noughts::{Board, BoardState, Cell, Marker, Match, Outcome, rules};
use proptest::prelude::*;

fn marker() -> impl Strategy<Value = Marker> {
    prop_oneof![Just(Marker::X), Just(Marker::O)]
}

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Empty), marker().prop_map(Cell::Marked)]
}

fn board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(cell()).prop_map(Board::from_cells)
}

fn state_from(board: &Board) -> BoardState {
    let mut state = BoardState::new();
    for (i, c) in board.cells().iter().enumerate() {
        if let Cell::Marked(m) = c {
            state.place(i, *m);
        }
    }
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn out_of_range_place_is_refused(board in board(), index in 9usize.., m in marker()) {
        let mut state = state_from(&board);
        let before = state.snapshot();
        prop_assert!(!state.place(index, m));
        prop_assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn occupied_place_keeps_marker(board in board(), index in 0usize..9, m in marker()) {
        let mut state = state_from(&board);
        if let Some(Cell::Marked(existing)) = state.snapshot().get(index) {
            prop_assert!(!state.place(index, m));
            prop_assert_eq!(state.snapshot().get(index), Some(Cell::Marked(existing)));
        } else {
            prop_assert!(state.place(index, m));
        }
    }

    #[test]
    fn reset_always_empties(board in board()) {
        let mut state = state_from(&board);
        state.reset();
        prop_assert_eq!(state.snapshot(), Board::new());
    }

    #[test]
    fn evaluate_is_pure(board in board()) {
        let copy = board;
        prop_assert_eq!(rules::evaluate(&board), rules::evaluate(&board));
        prop_assert_eq!(board, copy);
    }

    #[test]
    fn draw_only_on_full_board_without_line(board in board()) {
        match rules::evaluate(&board) {
            Outcome::Draw => {
                prop_assert!(rules::is_full(&board));
                prop_assert_eq!(rules::check_winner(&board), None);
            }
            Outcome::Ongoing => {
                prop_assert!(!rules::is_full(&board));
                prop_assert_eq!(rules::check_winner(&board), None);
            }
            Outcome::Win(m) => {
                let (winner, line) = rules::winning_line(&board).expect("a complete line");
                prop_assert_eq!(winner, m);
                for i in line {
                    prop_assert_eq!(board.get(i), Some(Cell::Marked(m)));
                }
            }
        }
    }

    #[test]
    fn turns_alternate_while_ongoing(cells in proptest::collection::vec(0usize..12, 0..30)) {
        let mut game = Match::default();
        let mut expected = 0usize;
        for cell in cells {
            if game.is_finished() {
                break;
            }
            prop_assert_eq!(game.current_player(), Some(&game.players()[expected]));
            let report = game.request_move(cell);
            if report.accepted() && report.outcome == Outcome::Ongoing {
                expected = 1 - expected;
            }
            if !report.accepted() {
                prop_assert_eq!(game.current_player(), Some(&game.players()[expected]));
            }
        }
        let history = game.history();
        for (i, m) in history.iter().enumerate() {
            prop_assert_eq!(m.player_index, i % 2);
        }
    }
}
