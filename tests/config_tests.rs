//! Configuration loading and validation

use blockfall::core::{ConfigError, Game};
use blockfall::types::{GameConfig, SpawnPolicy};

#[test]
fn test_partial_json_uses_defaults() {
    let config: GameConfig = serde_json::from_str(r#"{ "rows": 12, "seed": 42 }"#).unwrap();

    assert_eq!(config.rows, 12);
    assert_eq!(config.cols, 10);
    assert_eq!(config.tick_interval_ms, 500);
    assert_eq!(config.spawn_policy, SpawnPolicy::Centered);
    assert_eq!(config.seed, Some(42));
}

#[test]
fn test_full_json_config() {
    let config: GameConfig = serde_json::from_str(
        r#"{
            "rows": 16,
            "cols": 8,
            "tickIntervalMs": 250,
            "spawnPolicy": "random",
            "seed": null
        }"#,
    )
    .unwrap();

    assert_eq!(
        config,
        GameConfig {
            rows: 16,
            cols: 8,
            tick_interval_ms: 250,
            spawn_policy: SpawnPolicy::Random,
            seed: None,
        }
    );

    let game = Game::new(config).unwrap();
    assert_eq!(game.board().rows(), 16);
    assert_eq!(game.tick_interval().as_millis(), 250);
}

#[test]
fn test_unseeded_game_records_its_seed() {
    let game = Game::new(GameConfig::default()).unwrap();
    let replay = Game::new(GameConfig::default().seeded(game.seed())).unwrap();

    assert_eq!(replay.active_piece().kind, game.active_piece().kind);
    assert_eq!(replay.next_piece(), game.next_piece());
}

#[test]
fn test_config_errors_fail_fast() {
    let err = Game::new(GameConfig::with_size(0, 0)).unwrap_err();
    assert_eq!(err, ConfigError::EmptyBoard { rows: 0, cols: 0 });
    assert_eq!(
        err.to_string(),
        "board must have at least one row and one column (got 0x0)"
    );

    let config: GameConfig = serde_json::from_str(r#"{ "tickIntervalMs": 0 }"#).unwrap();
    assert_eq!(Game::new(config).unwrap_err(), ConfigError::ZeroTickInterval);
}

#[test]
fn test_oversized_board_is_a_config_error() {
    let config: GameConfig =
        serde_json::from_str(r#"{ "rows": 4000000000000, "cols": 4000000000 }"#).unwrap();
    let err = Game::new(config).unwrap_err();
    assert_eq!(
        err,
        ConfigError::BoardTooLarge {
            rows: 4_000_000_000_000,
            cols: 4_000_000_000
        }
    );
    assert_eq!(
        err.to_string(),
        "board of 4000000000000x4000000000 cells is too large"
    );

    let config = GameConfig::with_size(usize::MAX, 2);
    assert!(matches!(
        Game::new(config),
        Err(ConfigError::BoardTooLarge { .. })
    ));
}
