//! Game manager plugin: the game-state coordinator.
//!
//! # Lifecycle
//! ```text
//!   SceneSetup:    awake  -> insert GameManager, spawn PlayerDied listener (SceneScoped)
//!                  start  -> frame rate, score reset, prepare_game
//!   Update:        tick_restart_sequence -> LoadScene once the delay elapsed
//!   Last:          advance_start_sequence (one step per end of frame)
//!   SceneTeardown: destroy -> remove GameManager (drops pending sequences)
//! ```
//!
//! The `PlayerDied` subscription is an observer entity tagged `SceneScoped`, so it
//! lives exactly as long as the scene that owns this coordinator.
//!
//! Only one coordinator can be live. Constructing a second one while the first
//! exists is rejected and the first one is kept.

use bevy::diagnostic::FrameCount;
use bevy::prelude::*;

use crate::common::config::GameConfig;
use crate::common::state::{GameState, GameStateChanged};
use crate::plugins::core::FrameRateLimit;
use crate::plugins::player::PlayerDied;
use crate::plugins::scene::{ActiveScene, LoadScene, SceneScoped, SceneSetup, SceneTeardown};
use crate::plugins::score::ScoreManager;

mod flow;
mod manager;

pub use flow::GameFlow;
pub use manager::{GameManager, GameSession};

/// Marks the observer entity that forwards `PlayerDied` to `game_over`.
#[derive(Component)]
pub struct PlayerDiedListener;

pub fn plugin(app: &mut App) {
    app.init_resource::<GameSession>()
        .add_message::<GameStateChanged>()
        .add_systems(
            SceneSetup,
            (awake, start.run_if(resource_added::<GameManager>)).chain(),
        )
        .add_systems(SceneTeardown, destroy)
        .add_systems(Update, tick_restart_sequence)
        .add_systems(Last, advance_start_sequence)
        .add_systems(PostUpdate, log_state_changes);
}

/// Run condition: the live coordinator is in `state`.
///
/// Unlike `in_state`, this sees a transition in the frame it happens, before the
/// `State<GameState>` mirror catches up at the next `StateTransition`.
pub fn coordinator_in(state: GameState) -> impl FnMut(Option<Res<GameManager>>) -> bool + Clone {
    move |manager: Option<Res<GameManager>>| manager.is_some_and(|manager| manager.state() == state)
}

fn awake(
    mut commands: Commands,
    existing: Option<Res<GameManager>>,
    config: Res<GameConfig>,
    current: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if let Some(existing) = existing {
        warn!(
            "GameManager already active (state {:?}); ignoring duplicate construction",
            existing.state()
        );
        return;
    }

    commands.insert_resource(GameManager::new(config.initial_state));
    if *current.get() != config.initial_state {
        next_state.set(config.initial_state);
    }

    commands.spawn((
        Name::new("PlayerDiedListener"),
        PlayerDiedListener,
        SceneScoped,
        Observer::new(on_player_died),
    ));
}

fn start(
    config: Res<GameConfig>,
    mut frame_limit: ResMut<FrameRateLimit>,
    mut score: ResMut<ScoreManager>,
    mut flow: GameFlow,
) {
    frame_limit.0 = config.frame_rate();
    score.reset();
    flow.prepare_game();
}

fn destroy(mut commands: Commands, manager: Option<Res<GameManager>>) {
    let Some(manager) = manager else {
        return;
    };
    if manager.is_starting() || manager.is_restart_pending() {
        debug!("GameManager torn down with pending sequences; cancelling them");
    }
    commands.remove_resource::<GameManager>();
}

fn on_player_died(_died: On<PlayerDied>, mut flow: GameFlow) {
    info!("Player died");
    flow.game_over();
}

fn advance_start_sequence(mut flow: GameFlow) {
    flow.advance_start_sequence();
}

fn tick_restart_sequence(
    time: Res<Time>,
    frame: Res<FrameCount>,
    manager: Option<ResMut<GameManager>>,
    active: Res<ActiveScene>,
    mut loads: MessageWriter<LoadScene>,
) {
    let Some(mut manager) = manager else {
        return;
    };
    let Some(pending) = manager.restart.as_mut() else {
        return;
    };
    if frame.0 == pending.armed_on {
        return;
    }

    pending.delay.tick(time.delta());
    if !pending.delay.is_finished() {
        return;
    }

    manager.restart = None;
    info!("Restarting scene '{}'", active.name());
    loads.write(LoadScene::new(active.name()));
}

fn log_state_changes(mut changes: MessageReader<GameStateChanged>) {
    for change in changes.read() {
        info!("GameState {:?} -> {:?}", change.old, change.new);
    }
}
