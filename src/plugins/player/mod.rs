//! Player plugin.
//!
//! Pipeline:
//! - SceneSetup: spawn the player (scene-scoped, once per scene)
//! - Update (coordinator Playing): sample input, write PlayerInput resource
//! - FixedUpdate (coordinator Playing): apply velocity to the rigid body
//! - OnExit(Playing): stop moving
//! - FixedPostUpdate: first hazard contact marks the player `Dead` and triggers `PlayerDied`
//!
//! `PlayerDied` is an observer event. Whoever cares (the game manager) registers an
//! observer for it; the player does not know who is listening.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::game_manager::coordinator_in;
use crate::plugins::scene::{SceneScoped, SceneSetup};

#[derive(Component)]
pub struct Player;

/// Set once the player has died; stops movement and further death events.
#[derive(Component)]
pub struct Dead;

#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDied;

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    move_axis: Vec2,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(SceneSetup, spawn)
        .add_systems(Update, gather_input.run_if(coordinator_in(GameState::Playing)))
        .add_systems(
            FixedUpdate,
            apply_movement.run_if(coordinator_in(GameState::Playing)),
        )
        .add_systems(OnExit(GameState::Playing), halt)
        .add_systems(
            FixedPostUpdate,
            detect_hazard_contact.after(CollisionEventSystems),
        );
}

fn spawn(mut commands: Commands, q_existing: Query<(), With<Player>>) {
    if !q_existing.is_empty() {
        return;
    }

    let layers = CollisionLayers::new(Layer::Player, [Layer::Hazard]);

    commands.spawn((
        Name::new("Player"),
        Player,
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(Vec2::splat(26.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        RigidBody::Dynamic,
        Collider::circle(13.0),
        LockedAxes::ROTATION_LOCKED,
        layers,
        LinearVelocity::ZERO,
        // Avian only writes CollisionStart if one of the colliders opts in.
        CollisionEventsEnabled,
        SceneScoped,
    ));
}

fn gather_input(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = axis.normalize_or_zero();
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut LinearVelocity, (With<Player>, Without<Dead>)>,
) {
    let Ok(mut vel) = q_player.single_mut() else {
        return;
    };
    vel.0 = input.move_axis * tunables.player_speed;
}

fn halt(mut input: ResMut<PlayerInput>, mut q_player: Query<&mut LinearVelocity, With<Player>>) {
    input.move_axis = Vec2::ZERO;
    for mut vel in &mut q_player {
        vel.0 = Vec2::ZERO;
    }
}

pub fn detect_hazard_contact(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    q_alive: Query<(), (With<Player>, Without<Dead>)>,
    q_layers: Query<&CollisionLayers>,
) {
    for ev in started.read() {
        let (player, other) = if q_alive.contains(ev.collider1) {
            (ev.collider1, ev.collider2)
        } else if q_alive.contains(ev.collider2) {
            (ev.collider2, ev.collider1)
        } else {
            continue;
        };

        let Ok(layers) = q_layers.get(other) else {
            continue;
        };
        if !layers.memberships.has_all(Layer::Hazard) {
            continue;
        }

        commands.entity(player).insert(Dead);
        commands.trigger(PlayerDied);
        // One death per frame; the rest of the contacts belong to a dead player.
        break;
    }
}

#[cfg(test)]
mod tests;
