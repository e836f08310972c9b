//! Test helpers.
//!
//! `World::run_system_once` (via the `RunSystemOnce` trait) executes a system without
//! building a full schedule. Systems that use `Commands` enqueue structural changes,
//! so we call `world.flush()` after running to apply them before assertions.

use bevy::diagnostic::FrameCount;
use bevy::ecs::message::Messages;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::config::GameConfig;
use crate::common::state::{GameState, GameStateChanged};
use crate::plugins::game_manager::GameSession;
use crate::plugins::sound::{AudioRequest, MusicState, SoundLibrary};

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// A world holding every resource `GameFlow` reads, without a `GameManager`.
pub fn flow_world() -> World {
    let mut world = World::new();
    world.init_resource::<GameConfig>();
    world.init_resource::<GameSession>();
    world.init_resource::<SoundLibrary>();
    world.init_resource::<MusicState>();
    world.init_resource::<FrameCount>();
    world.init_resource::<Messages<AudioRequest>>();
    world.init_resource::<Messages<GameStateChanged>>();
    world.insert_resource(State::new(GameState::Prepare));
    world.init_resource::<NextState<GameState>>();
    world
}

/// Drain every message of type `M` currently stored in the world.
pub fn drain_messages<M: Message>(world: &mut World) -> Vec<M> {
    world.resource_mut::<Messages<M>>().drain().collect()
}
