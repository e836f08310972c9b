//! Controls plugin: keyboard shortcuts for the start and restart operations.

use bevy::prelude::*;

use crate::common::{config::GameConfig, state::GameState};
use crate::plugins::game_manager::GameFlow;

pub fn plugin(app: &mut App) {
    app.add_systems(Update, handle_input);
}

fn handle_input(keys: Res<ButtonInput<KeyCode>>, config: Res<GameConfig>, mut flow: GameFlow) {
    match flow.state() {
        Some(GameState::Prepare) if keys.any_just_pressed([KeyCode::Space, KeyCode::Enter]) => {
            flow.start_game();
        }
        Some(GameState::GameOver) if keys.any_just_pressed([KeyCode::Space, KeyCode::KeyR]) => {
            flow.restart_game(config.restart_delay());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests;
