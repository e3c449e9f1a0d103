//! Tests for the computer strategies against whole game trees.

use strictly_tictactoe::{
    Board, GameState, MinimaxStrategy, Move, Outcome, Position, Side, Strategy, Tier,
};

/// Plays every possible human line against `computer` and returns the
/// number of finished games, panicking on any computer loss.
fn explore(state: GameState, computer: Side, strategy: &mut MinimaxStrategy) -> usize {
    match state.outcome() {
        Outcome::Win(winner) => {
            assert_eq!(winner, computer, "computer lost:\n{}", state.board().display());
            return 1;
        }
        Outcome::Tie => return 1,
        Outcome::InProgress => {}
    }

    if state.to_move() == computer {
        let pos = strategy
            .select_move(state.board(), computer)
            .expect("board is not full");
        let mut next = state.clone();
        next.apply_move(Move::new(computer, pos)).unwrap();
        explore(next, computer, strategy)
    } else {
        state
            .board()
            .empty_positions()
            .into_iter()
            .map(|pos| {
                let mut next = state.clone();
                next.apply_move(Move::new(state.to_move(), pos)).unwrap();
                explore(next, computer, strategy)
            })
            .sum()
    }
}

#[test]
fn test_exhaustive_search_never_loses_moving_second() {
    let games = explore(GameState::new(), Side::O, &mut MinimaxStrategy);
    assert!(games > 0);
}

#[test]
fn test_exhaustive_search_never_loses_moving_first() {
    let games = explore(GameState::new(), Side::X, &mut MinimaxStrategy);
    assert!(games > 0);
}

fn self_play(mut state: GameState) -> Outcome {
    let mut strategy = Tier::ExhaustiveSearch.strategy(None);
    while state.is_active() {
        let side = state.to_move();
        let pos = strategy.select_move(state.board(), side).unwrap();
        state.apply_move(Move::new(side, pos)).unwrap();
    }
    state.outcome()
}

#[test]
fn test_optimal_play_from_empty_board_ties() {
    assert_eq!(self_play(GameState::new()), Outcome::Tie);
}

#[test]
fn test_optimal_reply_to_corner_opening_ties() {
    let mut state = GameState::new();
    state
        .apply_move(Move::new(Side::X, Position::TopLeft))
        .unwrap();
    assert_eq!(self_play(state), Outcome::Tie);
}

#[test]
fn test_exhaustive_search_is_deterministic() {
    let board = Board::new()
        .with(Position::TopLeft, Side::X)
        .with(Position::Center, Side::O)
        .with(Position::BottomRight, Side::X);
    let first = MinimaxStrategy.select_move(&board, Side::O);
    for _ in 0..5 {
        assert_eq!(MinimaxStrategy.select_move(&board, Side::O), first);
    }
    // Against opposite corners O must take an edge; the first one wins the tie.
    assert_eq!(first, Some(Position::TopCenter));
}

#[test]
fn test_heuristic_blocks_two_in_a_row() {
    let board = Board::new()
        .with(Position::TopLeft, Side::X)
        .with(Position::TopCenter, Side::X);
    let mut strategy = Tier::Heuristic.strategy(Some(0));
    assert_eq!(strategy.select_move(&board, Side::O), Some(Position::TopRight));
}

#[test]
fn test_heuristic_prefers_own_win() {
    // X X _ / O O _ / X _ _
    let board = Board::new()
        .with(Position::TopLeft, Side::X)
        .with(Position::TopCenter, Side::X)
        .with(Position::MiddleLeft, Side::O)
        .with(Position::Center, Side::O)
        .with(Position::BottomLeft, Side::X);
    let mut strategy = Tier::Heuristic.strategy(Some(0));
    assert_eq!(strategy.select_move(&board, Side::O), Some(Position::MiddleRight));
}

#[test]
fn test_random_tier_only_picks_empty_cells() {
    let board = Board::new()
        .with(Position::TopLeft, Side::X)
        .with(Position::Center, Side::O);
    let mut strategy = Tier::Random.strategy(None);
    for _ in 0..50 {
        let pos = strategy.select_move(&board, Side::X).unwrap();
        assert!(board.is_empty(pos));
    }
}

#[test]
fn test_random_tier_finishes_games() {
    let mut strategy = Tier::Random.strategy(Some(99));
    for _ in 0..20 {
        let mut state = GameState::new();
        while state.is_active() {
            let side = state.to_move();
            let pos = strategy.select_move(state.board(), side).unwrap();
            state.apply_move(Move::new(side, pos)).unwrap();
        }
        assert!(state.outcome().is_terminal());
    }
}
