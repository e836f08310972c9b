use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::test_utils::{flow_world, run_system_once};
use crate::plugins::game_manager::{GameManager, GameSession};

fn world_with(state: GameState, key: KeyCode) -> World {
    let mut world = flow_world();
    world.insert_resource(GameManager::new(state));
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(key);
    world.insert_resource(keys);
    world
}

#[test]
fn space_starts_from_prepare() {
    let mut world = world_with(GameState::Prepare, KeyCode::Space);
    run_system_once(&mut world, super::handle_input);
    assert!(world.resource::<GameManager>().is_starting());
}

#[test]
fn r_restarts_after_game_over() {
    let mut world = world_with(GameState::GameOver, KeyCode::KeyR);
    run_system_once(&mut world, super::handle_input);
    assert!(world.resource::<GameSession>().is_restart());
    assert!(world.resource::<GameManager>().is_restart_pending());
}

#[test]
fn keys_do_nothing_while_playing() {
    let mut world = world_with(GameState::Playing, KeyCode::Space);
    run_system_once(&mut world, super::handle_input);
    assert!(!world.resource::<GameManager>().is_starting());
    assert!(!world.resource::<GameSession>().is_restart());
}
