//! Tests for loading configuration from disk.

use std::io::Write;
use tictactoe_engine::Player;
use tictactoe_shell::{GameConfig, MAX_BOARD_SIZE};

#[test]
fn test_load_from_file_and_build_engine() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
board_size = 4

[[players]]
label = "A"
color = "red"

[[players]]
label = "B"
color = "blue"

[[players]]
label = "C"
color = "green"
"#
    )
    .unwrap();

    let config = GameConfig::load(Some(file.path())).unwrap();
    let engine = config.build_engine().unwrap();
    assert_eq!(engine.board_size(), 4);
    assert_eq!(engine.players().len(), 3);
    assert_eq!(engine.winning_combos().len(), 10);
}

#[test]
fn test_cli_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = 5").unwrap();

    let config = GameConfig::load(Some(file.path()))
        .unwrap()
        .with_overrides(Some(3), vec![Player::new("Q", "red"), Player::new("R", "blue")]);
    let engine = config.build_engine().unwrap();
    assert_eq!(engine.board_size(), 3);
    assert_eq!(engine.current_player().label(), "Q");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_duplicate_labels_fail_at_build() {
    let config = GameConfig::from_toml_str(
        r#"
[[players]]
label = "X"
color = "red"

[[players]]
label = "X"
color = "blue"
"#,
    )
    .unwrap();
    let err = config.build_engine().unwrap_err();
    assert!(err.message.contains("duplicate player label"));
}

#[test]
fn test_oversized_board_in_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = {}", MAX_BOARD_SIZE + 1).unwrap();

    let config = GameConfig::load(Some(file.path())).unwrap();
    let err = config.build_engine().unwrap_err();
    assert!(err.message.contains("exceeds the maximum"));
}
