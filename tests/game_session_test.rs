//! Tests for the text game loop.

use gomoku::{
    Board, Coord, DbError, FirstAvailable, GameConfig, GameOutcome, GameResult,
    LeaderboardEntry, Mark, MemoryScores, Orchestrator, ScoreRecord, ScoreSink,
};

fn config(name: &str) -> GameConfig {
    GameConfig::default().with_player_name(name)
}

/// Runs a game with scripted input, returning the result and everything printed.
fn play<S: gomoku::MoveStrategy>(
    config: &GameConfig,
    strategy: S,
    input: impl AsRef<[u8]>,
    scores: &mut impl ScoreSink,
) -> (GameResult, String) {
    let mut output = Vec::new();
    let mut game =
        Orchestrator::new(config, strategy, input.as_ref(), &mut output).expect("valid config");
    let result = game.run(scores).expect("game runs");
    drop(game);
    (result, String::from_utf8(output).expect("utf8 output"))
}

#[test]
fn test_human_wins_horizontal_line() {
    let mut scores = MemoryScores::new();
    // x opens on e5; the first-available opponent drifts up-left (d4, c3, b2).
    let (result, output) = play(&config("Alice"), FirstAvailable, "f5\ng5\nh5\n", &mut scores);

    assert_eq!(
        result,
        GameResult::Won {
            winner: "Alice".to_string(),
            mark: Mark::X,
            moves: 7,
        }
    );
    assert!(output.contains("Opening stone for Alice placed on the center cell e5"));
    assert!(output.contains("Computer plays d4"));
    assert!(output.contains("Computer plays c3"));
    assert!(output.contains("Alice (x) wins!"));
    assert!(output.contains("High scores:\nAlice: 1\n"));

    let outcomes: Vec<(String, GameOutcome)> = scores
        .records()
        .iter()
        .map(|r| (r.player_name().clone(), r.parse_outcome().unwrap()))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            ("Alice".to_string(), GameOutcome::Win),
            ("Computer".to_string(), GameOutcome::Loss),
        ]
    );
}

#[test]
fn test_bad_input_reprompts() {
    let mut scores = MemoryScores::new();
    let input = "zz\nk3\na1\ne5\nf5\ng5\nh5\n";
    let (result, output) = play(&config("Bob"), FirstAvailable, input, &mut scores);

    assert!(matches!(result, GameResult::Won { ref winner, .. } if winner == "Bob"));
    assert!(output.contains("Invalid input: row must be a number starting at 1, got 'z'"));
    assert!(output.contains("Invalid input: k3 is outside the 10x10 board"));
    assert!(output.contains("Illegal move: a1 does not touch any stone. Try again."));
    assert!(output.contains("Illegal move: e5 is already occupied. Try again."));
    assert_eq!(output.matches("Bob (x) move (e.g. e5): ").count(), 7);
}

#[test]
fn test_non_utf8_line_reprompts() {
    let mut scores = MemoryScores::new();
    let input: &[u8] = b"\xff\xfe\nf5\ng5\nh5\n";
    let (result, output) = play(&config("Cleo"), FirstAvailable, input, &mut scores);

    assert!(matches!(result, GameResult::Won { ref winner, moves: 7, .. } if winner == "Cleo"));
    assert_eq!(output.matches("Invalid input: ").count(), 1);
    assert_eq!(output.matches("Cleo (x) move (e.g. e5): ").count(), 4);
    assert_eq!(scores.records().len(), 2);
}

#[test]
fn test_quit_records_nothing() {
    let mut scores = MemoryScores::new();
    let (result, output) = play(&config("Carol"), FirstAvailable, "f5\nQUIT\n", &mut scores);

    assert_eq!(result, GameResult::Abandoned);
    assert!(output.ends_with("Leaving game.\n"));
    assert!(scores.records().is_empty());
}

#[test]
fn test_end_of_input_abandons() {
    let mut scores = MemoryScores::new();
    let (result, _) = play(&config("Dave"), FirstAvailable, "", &mut scores);
    assert_eq!(result, GameResult::Abandoned);
}

#[test]
fn test_manual_start_requires_center() {
    let mut scores = MemoryScores::new();
    let config = config("Erin").with_auto_first_move(false);
    let (result, output) = play(&config, FirstAvailable, "a1\nf6\nquit\n", &mut scores);

    assert_eq!(result, GameResult::Abandoned);
    assert!(output.contains(
        "Illegal move: the first stone must go on one of the center cells, not a1. Try again."
    ));
    assert!(output.contains("Computer plays e5"));
}

#[test]
fn test_opponent_without_moves_draws() {
    let mut scores = MemoryScores::new();
    let stuck = |_: &Board| -> Option<Coord> { None };
    let (result, output) = play(&config("Frank"), stuck, "", &mut scores);

    assert_eq!(result, GameResult::Draw { moves: 1 });
    assert!(output.contains("No legal moves left. Draw."));
    let outcomes: Vec<GameOutcome> = scores
        .records()
        .iter()
        .map(|r| r.parse_outcome().unwrap())
        .collect();
    assert_eq!(outcomes, vec![GameOutcome::Draw, GameOutcome::Draw]);
}

#[test]
fn test_computer_can_win() {
    let mut scores = MemoryScores::new();
    // Opponent walks down the f column from f4; the human builds only three on e.
    let mut column = (3..10).map(|row| Coord::new(row, 5));
    let opponent = move |board: &Board| column.find(|&c| board.valid_moves().contains(&c));
    let config = config("Gina").with_opponent_name("Robot");
    let (result, output) = play(&config, opponent, "e6\ne7\nd6\n", &mut scores);

    assert_eq!(
        result,
        GameResult::Won {
            winner: "Robot".to_string(),
            mark: Mark::O,
            moves: 8,
        }
    );
    assert!(output.contains("Robot (o) wins!"));
    assert_eq!(
        scores.leaderboard(5).unwrap(),
        vec![LeaderboardEntry::new("Robot".to_string(), 1)]
    );
}

struct BrokenSink;

impl ScoreSink for BrokenSink {
    fn record(&mut self, _: &str, _: GameOutcome) -> Result<(), DbError> {
        Err(DbError::new("disk full"))
    }

    fn leaderboard(&self, _: usize) -> Result<Vec<LeaderboardEntry>, DbError> {
        Err(DbError::new("disk full"))
    }

    fn recent(&self, _: usize) -> Result<Vec<ScoreRecord>, DbError> {
        Ok(Vec::new())
    }
}

#[test]
fn test_storage_failure_does_not_lose_result() {
    let (result, output) = play(&config("Hana"), FirstAvailable, "f5\ng5\nh5\n", &mut BrokenSink);
    assert!(matches!(result, GameResult::Won { mark: Mark::X, .. }));
    assert!(output.contains("Could not save score for Hana: disk full"));
    assert!(!output.contains("High scores:"));
}

#[test]
fn test_invalid_dimensions_rejected() {
    let config = GameConfig::default().with_rows(6).with_cols(8);
    let result = Orchestrator::new(&config, FirstAvailable, "".as_bytes(), Vec::new());
    assert!(result.is_err());
}
