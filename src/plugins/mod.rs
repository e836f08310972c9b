//! Feature plugins.

use bevy::prelude::*;

pub mod controls;
pub mod core;
pub mod game_manager;
pub mod physics;
pub mod player;
pub mod scene;
pub mod score;
pub mod sound;
pub mod world;

// Render-only
pub mod camera;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    scene::plugin(app);
    sound::plugin(app);
    score::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    player::plugin(app);
    game_manager::plugin(app);
    controls::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render + audio infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
    sound::playback::plugin(app);
}
