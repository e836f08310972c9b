//! World plugin: the arena. Leaving the safe area means touching a hazard.
//!
//! Spawners skip when the scene already has their entities.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{layers::Layer, tunables::Tunables};
use crate::plugins::scene::{SceneScoped, SceneSetup};

const TILE: f32 = 64.0;
const HAZARD_THICKNESS: f32 = 30.0;

#[derive(Component)]
pub struct Hazard;

#[derive(Component)]
pub struct Floor;

pub fn plugin(app: &mut App) {
    app.add_systems(SceneSetup, (spawn_hazards, spawn_floor));
}

fn spawn_hazards(
    mut commands: Commands,
    tunables: Res<Tunables>,
    q_existing: Query<(), With<Hazard>>,
) {
    if !q_existing.is_empty() {
        return;
    }

    let half = tunables.arena_half_size;
    let t = HAZARD_THICKNESS;
    let hazard_layers = CollisionLayers::new(Layer::Hazard, [Layer::Player]);

    let mut spawn_hazard = |name: &str, pos: Vec2, size: Vec2| {
        commands.spawn((
            Name::new(name.to_owned()),
            Hazard,
            Sprite {
                color: Color::srgb(0.85, 0.2, 0.25),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(pos.extend(0.5)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            hazard_layers,
            SceneScoped,
        ));
    };

    let width = half.x * 2.0 + t * 2.0;
    spawn_hazard("HazardTop", Vec2::new(0.0, half.y + t * 0.5), Vec2::new(width, t));
    spawn_hazard("HazardBottom", Vec2::new(0.0, -half.y - t * 0.5), Vec2::new(width, t));
    spawn_hazard("HazardLeft", Vec2::new(-half.x - t * 0.5, 0.0), Vec2::new(t, half.y * 2.0));
    spawn_hazard("HazardRight", Vec2::new(half.x + t * 0.5, 0.0), Vec2::new(t, half.y * 2.0));
}

/// Checkerboard floor covering the safe area.
fn spawn_floor(mut commands: Commands, tunables: Res<Tunables>, q_existing: Query<(), With<Floor>>) {
    if !q_existing.is_empty() {
        return;
    }

    let cols = (tunables.arena_half_size.x / TILE) as i32;
    let rows = (tunables.arena_half_size.y / TILE) as i32;

    (-rows..=rows)
        .flat_map(|y| (-cols..=cols).map(move |x| (x, y)))
        .for_each(|(x, y)| {
            let color = if (x + y) % 2 == 0 {
                Color::srgb(0.14, 0.14, 0.16)
            } else {
                Color::srgb(0.12, 0.12, 0.14)
            };

            commands.spawn((
                Floor,
                Sprite::from_color(color, Vec2::splat(TILE)),
                Transform::from_xyz(x as f32 * TILE, y as f32 * TILE, 0.0),
                SceneScoped,
            ));
        });
}
