//! Tests for game configuration loading.

use std::io::Write;

use gomoku::{BoardError, GameConfig};
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(*config.rows(), 10);
    assert_eq!(*config.cols(), 10);
    assert_eq!(config.player_name(), "Player");
    assert_eq!(config.opponent_name(), "Computer");
    assert_eq!(config.db_path(), "data/gomoku.db");
    assert!(*config.auto_first_move());
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
}

#[test]
fn test_partial_toml_overrides() {
    let config = GameConfig::from_toml(
        r#"
        rows = 15
        cols = 12
        player_name = "  Alice  "
        seed = 99
        "#,
    )
    .expect("valid config");
    assert_eq!(*config.rows(), 15);
    assert_eq!(*config.cols(), 12);
    assert_eq!(config.player_name(), "Alice");
    assert_eq!(*config.seed(), Some(99));
    assert_eq!(config.opponent_name(), "Computer");
}

#[test]
fn test_blank_name_falls_back() {
    let config = GameConfig::from_toml("player_name = \"   \"").unwrap();
    assert_eq!(config.player_name(), "Player");
}

#[test]
fn test_bad_toml_is_an_error() {
    let err = GameConfig::from_toml("rows = \"many\"").unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_from_file_and_missing_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "opponent_name = \"Robot\"\nauto_first_move = false").unwrap();

    let config = GameConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.opponent_name(), "Robot");
    assert!(!*config.auto_first_move());

    let missing = GameConfig::load_or_default("/definitely/not/here.toml").unwrap();
    assert_eq!(missing, GameConfig::default());
}

#[test]
fn test_board_from_config() {
    let board = GameConfig::default().with_rows(7).with_cols(5).board().unwrap();
    assert_eq!((board.rows(), board.cols()), (7, 5));

    let err = GameConfig::default().with_rows(5).with_cols(7).board().unwrap_err();
    assert_eq!(err, BoardError::InvalidDimensions { rows: 5, cols: 7 });
}
