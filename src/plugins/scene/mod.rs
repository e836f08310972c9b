//! Scene plugin: owns the lifetime of everything that belongs to "the level".
//!
//! Feature plugins register their per-scene work in two schedules:
//!
//! ```text
//!   SceneSetup:    construct resources, spawn SceneScoped entities
//!   SceneTeardown: drop per-scene resources
//! ```
//!
//! A reload is just teardown + despawn + setup, driven by a `LoadScene` message
//! that is consumed at a single point in `PostUpdate`.

use bevy::ecs::message::Messages;
use bevy::ecs::schedule::ScheduleLabel;
use bevy::prelude::*;

/// Runs once every time a scene is loaded (including reloads).
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneSetup;

/// Runs before the entities of the outgoing scene are despawned.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneTeardown;

/// Entities despawned when the active scene unloads.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneScoped;

#[derive(Resource, Debug, Clone)]
pub struct ActiveScene {
    name: String,
    loaded: bool,
}

impl ActiveScene {
    pub const DEFAULT_NAME: &'static str = "ColorPath";

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), loaded: false }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

impl Default for ActiveScene {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

/// Request to (re)load a scene by name. Handled in `PostUpdate`.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct LoadScene {
    pub name: String,
}

impl LoadScene {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<ActiveScene>()
        .add_message::<LoadScene>()
        .init_schedule(SceneSetup)
        .init_schedule(SceneTeardown)
        .add_systems(Startup, load_initial_scene)
        .add_systems(PostUpdate, process_scene_loads);
}

fn load_initial_scene(world: &mut World) {
    let name = world.resource::<ActiveScene>().name().to_owned();
    load_scene(world, name);
}

/// Only the last request of a frame is honoured; loading twice in a row is pointless.
fn process_scene_loads(world: &mut World) {
    let Some(request) = world.resource_mut::<Messages<LoadScene>>().drain().last() else {
        return;
    };
    load_scene(world, request.name);
}

/// Unload the active scene (if any) and load `name` in its place.
pub fn load_scene(world: &mut World, name: impl Into<String>) {
    let name = name.into();

    if world.resource::<ActiveScene>().loaded {
        world.run_schedule(SceneTeardown);

        let scoped: Vec<Entity> = world
            .query_filtered::<Entity, With<SceneScoped>>()
            .iter(world)
            .collect();
        let despawned = scoped.len();
        for entity in scoped {
            world.despawn(entity);
        }
        debug!("Unloaded scene '{}' ({despawned} entities)", world.resource::<ActiveScene>().name);
    }

    {
        let mut active = world.resource_mut::<ActiveScene>();
        active.name = name;
        active.loaded = true;
    }

    world.run_schedule(SceneSetup);
    info!("Loaded scene '{}'", world.resource::<ActiveScene>().name);
}
