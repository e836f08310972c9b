//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - time advances by a fixed step per `app.update()` so delays are deterministic.
//! - we then call `color_path::game::configure_headless` to install gameplay plugins.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::ecs::system::RunSystemOnce;
use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use color_path::common::config::GameConfig;
use color_path::common::state::{GameState, GameStateChanged};
use color_path::plugins::game_manager::{GameFlow, GameManager, GameSession};
use color_path::plugins::sound::{AudioRequest, SoundClip, SoundLibrary};

pub const FRAME: Duration = Duration::from_millis(100);

/// Everything the coordinator broadcast, in order.
#[derive(Resource, Default)]
pub struct Recorded {
    pub audio: Vec<AudioRequest>,
    pub changes: Vec<GameStateChanged>,
}

fn record(
    mut recorded: ResMut<Recorded>,
    mut audio: MessageReader<AudioRequest>,
    mut changes: MessageReader<GameStateChanged>,
) {
    recorded.audio.extend(audio.read().cloned());
    recorded.changes.extend(changes.read().copied());
}

pub fn app_headless() -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists for physics.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        InputPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(GameConfig { target_frame_rate: -1, ..default() })
        .insert_resource(SoundLibrary {
            background: Some(SoundClip::new("sounds/background.ogg")),
            game_over: Some(SoundClip::new("sounds/game_over.ogg")),
        });

    color_path::game::configure_headless(&mut app);

    app.init_resource::<Recorded>().add_systems(PostUpdate, record);
    // `App::run` does this before the first frame; plugins such as avian
    // initialise resources in `Plugin::finish`.
    app.finish();
    app.cleanup();
    app
}

/// A headless app that already ran its startup frame.
pub fn booted() -> App {
    let mut app = app_headless();
    app.update();
    app
}

pub fn state(app: &App) -> GameState {
    app.world().resource::<GameManager>().state()
}

pub fn session(app: &App) -> &GameSession {
    app.world().resource::<GameSession>()
}

pub fn start_game(app: &mut App) {
    app.world_mut()
        .run_system_once(|mut flow: GameFlow| flow.start_game())
        .expect("start_game");
}

pub fn restart_game(app: &mut App, delay: Duration) {
    app.world_mut()
        .run_system_once(move |mut flow: GameFlow| flow.restart_game(delay))
        .expect("restart_game");
}

pub fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    app.world_mut().query_filtered::<(), F>().iter(app.world()).count()
}
