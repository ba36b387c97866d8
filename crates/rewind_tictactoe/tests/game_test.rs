//! Tests for game state, time travel, and win detection.

use rewind_tictactoe::{
    Board, BoardSize, Game, InvariantSet, MoveEntry, MoveError, Player, ReplayError, Square,
    Status, TimelineInvariants, check_winner,
};

fn size(n: usize) -> BoardSize {
    BoardSize::new(n).expect("valid size")
}

#[test]
fn test_top_row_win_on_three() {
    // X plays 0, O plays 4, X plays 1, O plays 5, X plays 2.
    let game = Game::replay(size(3), &[0, 4, 1, 5, 2]).expect("legal moves");

    assert_eq!(game.len(), 6);
    let last = game.timeline().get(5).expect("sixth snapshot");
    assert_eq!(check_winner(last.board()), Some(Player::X));
    assert_eq!(game.current_view().status().to_string(), "Winner: X");
}

#[test]
fn test_no_winner_until_line_completes() {
    let moves = [0, 4, 1, 5, 2];
    let game = Game::replay(size(3), &moves).expect("legal moves");

    for (i, snapshot) in game.timeline().snapshots().iter().enumerate() {
        let expected = (i == moves.len()).then_some(Player::X);
        assert_eq!(check_winner(snapshot.board()), expected, "snapshot {}", i);
        assert_eq!(*snapshot.winner(), expected, "cached winner {}", i);
    }
}

#[test]
fn test_four_by_four_partial_row_is_not_a_win() {
    let four = size(4);
    assert_eq!(check_winner(&Board::new(four)), None);

    for player in [Player::X, Player::O] {
        let mut squares = vec![Square::Empty; 16];
        squares[..3].fill(Square::Occupied(player));
        let board = Board::from_squares(four, squares).expect("sixteen squares");
        assert_eq!(check_winner(&board), None);
    }

    let mut mixed = vec![Square::Empty; 16];
    mixed[4] = Square::Occupied(Player::X);
    mixed[5] = Square::Occupied(Player::O);
    mixed[6] = Square::Occupied(Player::X);
    let board = Board::from_squares(four, mixed).expect("sixteen squares");
    assert_eq!(check_winner(&board), None);
}

#[test]
fn test_four_by_four_needs_all_four() {
    // X: 0 1 2 3 across the top; O answers on the second row.
    let game = Game::replay(size(4), &[0, 4, 1, 5, 2, 6]).expect("legal moves");
    assert_eq!(game.current_view().status(), Status::NextPlayer(Player::X));

    let mut game = game;
    game.apply_move(3).expect("legal move");
    assert_eq!(game.current_view().status(), Status::Winner(Player::X));
}

#[test]
fn test_occupied_square_rejection_is_idempotent() {
    let mut game = Game::replay(size(3), &[4, 0]).expect("legal moves");
    let before = game.clone();

    for _ in 0..3 {
        assert_eq!(game.apply_move(4), Err(MoveError::SquareOccupied(4)));
        assert_eq!(game.apply_move(0), Err(MoveError::SquareOccupied(0)));
    }
    assert_eq!(game, before);
}

#[test]
fn test_moves_after_win_rejected() {
    let mut game = Game::replay(size(3), &[0, 4, 1, 5, 2]).expect("legal moves");
    let before = game.clone();

    for index in [3, 6, 7, 8] {
        assert_eq!(game.apply_move(index), Err(MoveError::GameOver(Player::X)));
    }
    assert_eq!(game, before);
}

#[test]
fn test_jump_then_move_truncates_future() {
    let mut game = Game::replay(size(3), &[0, 4, 8]).expect("legal moves");
    assert_eq!(game.len(), 4);
    assert_eq!(game.pointer(), 3);
    let s1 = game.timeline().get(1).cloned().expect("s1");

    game.jump_to(1).expect("existing snapshot");
    assert_eq!(game.len(), 4, "jumping alone keeps the future");

    let action = game.apply_move(2).expect("legal move");
    assert_eq!(action.player, Player::O);
    assert_eq!(game.len(), 3);
    assert_eq!(game.pointer(), 2);

    let s2 = game.timeline().get(2).expect("s2'");
    assert_eq!(game.timeline().get(1), Some(&s1));
    let expected = s1.board().with_mark(2, Player::O).expect("empty square");
    assert_eq!(s2.board(), &expected);
}

#[test]
fn test_jump_to_every_index_keeps_history() {
    let mut game = Game::replay(size(3), &[0, 4, 8, 2]).expect("legal moves");
    let timeline = game.timeline().clone();

    for index in (0..game.len()).rev() {
        game.jump_to(index).expect("existing snapshot");
        assert_eq!(game.pointer(), index);
        assert_eq!(game.to_move(), Player::for_ply(index));
        assert_eq!(game.timeline(), &timeline);
    }
}

#[test]
fn test_jump_to_start_then_move_keeps_only_start() {
    let mut game = Game::replay(size(4), &[0, 1, 2]).expect("legal moves");
    game.jump_to(0).expect("start");
    game.apply_move(15).expect("legal move");
    assert_eq!(game.len(), 2);
    assert_eq!(game.current().board().occupied(), 1);
}

#[test]
fn test_move_list_labels() {
    let game = Game::replay(size(3), &[0, 4]).expect("legal moves");
    let labels: Vec<String> = game
        .timeline()
        .entries()
        .map(|entry| entry.to_string())
        .collect();
    assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);
    assert_eq!(MoveEntry::label_for(7), "Go to move #7");
}

#[test]
fn test_full_board_without_line_reports_next_player() {
    // X O X / X O O / O X X
    let game = Game::replay(size(3), &[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("legal moves");
    assert_eq!(game.current().board().occupied(), 9);
    assert_eq!(game.current_view().status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_invariants_hold_through_branching_play() {
    let mut game = Game::new(size(4));
    for index in [0, 5, 10, 15, 1] {
        game.apply_move(index).expect("legal move");
    }
    game.jump_to(2).expect("existing snapshot");
    for index in [3, 12, 6] {
        game.apply_move(index).expect("legal move");
    }
    assert!(TimelineInvariants::check_all(game.timeline()).is_ok());
}

#[test]
fn test_replay_error_numbers_the_rejected_move() {
    let err = Game::replay(size(3), &[0, 4, 1, 1]).unwrap_err();
    assert_eq!(
        err,
        ReplayError {
            number: 4,
            index: 1,
            source: MoveError::SquareOccupied(1),
        }
    );
    assert_eq!(err.to_string(), "Move #4 (square 1) rejected");
}

/// Every full line on an `n`×`n` board, in the order `check_winner` scans.
fn lines(n: usize) -> Vec<Vec<usize>> {
    let rows = (0..n).map(|r| (0..n).map(|c| r * n + c).collect::<Vec<_>>());
    let cols = (0..n).map(|c| (0..n).map(|r| r * n + c).collect::<Vec<_>>());
    let diagonals: [Vec<usize>; 2] = [
        (0..n).map(|i| i * n + i).collect(),
        (0..n).map(|i| i * n + (n - 1 - i)).collect(),
    ];
    rows.chain(cols).chain(diagonals).collect()
}

#[test]
fn test_every_line_wins_on_sizes_three_to_eight() {
    for n in 3..=8 {
        for line in lines(n) {
            // X takes the line; O fills the first squares off it. O never
            // holds `n` marks, and X's only full line is this one.
            let mut off_line = (0..n * n).filter(|i| !line.contains(i));
            let mut moves = Vec::with_capacity(2 * n - 1);
            for (k, &square) in line.iter().enumerate() {
                moves.push(square);
                if k + 1 < n {
                    moves.push(off_line.next().expect("enough free squares"));
                }
            }

            let game = Game::replay(size(n), &moves).expect("legal moves");
            let snapshots = game.timeline().snapshots();
            let (last, earlier) = snapshots.split_last().expect("non-empty history");

            for (i, snapshot) in earlier.iter().enumerate() {
                assert_eq!(
                    check_winner(snapshot.board()),
                    None,
                    "size {} line {:?} snapshot {}",
                    n,
                    line,
                    i
                );
            }
            assert_eq!(
                check_winner(last.board()),
                Some(Player::X),
                "size {} line {:?}",
                n,
                line
            );
            assert_eq!(game.current_view().status(), Status::Winner(Player::X));
        }
    }
}

#[test]
fn test_anti_diagonal_on_three() {
    // X: 2 4 6, O: 0 1
    let game = Game::replay(size(3), &[2, 0, 4, 1, 6]).expect("legal moves");
    assert_eq!(game.current_view().status(), Status::Winner(Player::X));

    let before_last = game.timeline().get(4).expect("fifth snapshot");
    assert_eq!(check_winner(before_last.board()), None);
}
