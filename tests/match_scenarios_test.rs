//! End-to-end match scenarios through the public API.

use noughts::{Board, Cell, Marker, Match, MoveRejection, Outcome, Phase, Player};

fn play(game: &mut Match, cells: &[usize]) {
    for &cell in cells {
        assert!(game.request_move(cell).accepted(), "move {} rejected", cell);
    }
}

#[test]
fn test_column_win() {
    let mut game =
        Match::start_new_match("X player", Marker::X, "O player", Marker::O).expect("valid");
    play(&mut game, &[0, 1, 3, 4, 6]);
    assert_eq!(game.outcome(), Outcome::Win(Marker::X));
    assert_eq!(noughts::rules::evaluate(&game.snapshot_board()), Outcome::Win(Marker::X));
    assert_eq!(game.winning_line(), Some([0, 3, 6]));
    assert_eq!(game.winner().map(|p| p.name().as_str()), Some("X player"));
}

#[test]
fn test_full_board_draw() {
    let mut game = Match::default();
    // X: 0,1,5,6,8  O: 2,3,4,7
    play(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.phase(), Phase::Finished(Outcome::Draw));
    assert_eq!(game.winner(), None);
    assert_eq!(game.current_player(), None);
}

#[test]
fn test_moves_after_finish_are_rejected() {
    let mut game = Match::default();
    play(&mut game, &[0, 1, 3, 4, 6]);
    let before = game.snapshot_board();

    for cell in [2, 5, 7, 8] {
        let report = game.request_move(cell);
        assert!(!report.accepted());
        assert_eq!(report.result, Err(MoveRejection::GameAlreadyFinished));
        assert_eq!(report.outcome, Outcome::Win(Marker::X));
        assert_eq!(report.current_player, None);
    }
    assert_eq!(game.snapshot_board(), before);
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_same_cell_twice_does_not_advance_turn() {
    let mut game = Match::default();
    assert!(game.request_move(4).accepted());
    let next = game.current_player().cloned();

    let report = game.request_move(4);
    assert!(!report.accepted());
    assert_eq!(report.result, Err(MoveRejection::CellOccupied(4)));
    assert_eq!(report.current_player, next);
    assert_eq!(game.current_player().cloned(), next);
    assert_eq!(game.snapshot_board().get(4), Some(Cell::Marked(Marker::X)));
}

#[test]
fn test_out_of_range_reported() {
    let mut game = Match::default();
    let report = game.request_move(9);
    assert_eq!(report.result, Err(MoveRejection::IllegalIndex(9)));
    assert_eq!(report.outcome, Outcome::Ongoing);
    assert_eq!(game.snapshot_board(), Board::new());
}

#[test]
fn test_first_player_may_hold_o() {
    let mut game = Match::start_new_match("Olive", Marker::O, "Xavier", Marker::X).expect("valid");
    let report = game.request_move(0);
    assert_eq!(report.applied().map(|m| m.marker), Some(Marker::O));
    assert_eq!(game.snapshot_board().get(0), Some(Cell::Marked(Marker::O)));
}

#[test]
fn test_reset_after_win_allows_play() {
    let mut game = Match::default();
    play(&mut game, &[0, 1, 3, 4, 6]);
    game.reset_match();
    assert_eq!(game.phase(), Phase::AwaitingMove(0));
    assert_eq!(game.snapshot_board(), Board::new());
    assert!(game.request_move(6).accepted());
}

#[test]
fn test_matches_are_independent() {
    let mut first = Match::default();
    let mut second = Match::default();
    first.request_move(0);
    second.request_move(8);
    assert!(first.snapshot_board().is_empty(8));
    assert!(second.snapshot_board().is_empty(0));
}

#[test]
fn test_snapshot_does_not_alias() {
    let mut game = Match::default();
    let snapshot = game.snapshot_board();
    game.request_move(3);
    assert_eq!(snapshot, Board::new());
}

#[test]
fn test_restart_with_after_finish() {
    let mut game = Match::default();
    play(&mut game, &[0, 1, 3, 4, 6]);
    assert!(game.is_finished());

    let players = [Player::new("Ann", Marker::O), Player::new("Bob", Marker::X)];
    game.restart_with(players).expect("valid players");
    assert_eq!(game.phase(), Phase::AwaitingMove(0));
    assert_eq!(game.snapshot_board(), Board::new());
    assert!(game.history().is_empty());

    let report = game.request_move(4);
    assert!(report.accepted());
    assert_eq!(report.applied().map(|m| m.marker), Some(Marker::O));
    assert_eq!(game.current_player().map(|p| p.name().as_str()), Some("Bob"));
}
