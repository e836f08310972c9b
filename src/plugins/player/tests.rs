use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::scene::SceneScoped;

#[derive(Resource, Default)]
struct Deaths(u32);

fn contact_world() -> World {
    let mut world = World::new();
    world.init_resource::<Messages<CollisionStart>>();
    world.init_resource::<Deaths>();
    world.add_observer(|_: On<super::PlayerDied>, mut deaths: ResMut<Deaths>| deaths.0 += 1);
    world
}

fn contact(a: Entity, b: Entity) -> CollisionStart {
    CollisionStart { collider1: a, collider2: b, body1: None, body2: None }
}

#[test]
fn spawn_creates_scene_scoped_player() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn);
    let scoped = world
        .query_filtered::<(), (With<super::Player>, With<SceneScoped>)>()
        .iter(&world)
        .count();
    assert_eq!(scoped, 1);
}

#[test]
fn spawn_skips_when_player_exists() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn);
    run_system_once(&mut world, super::spawn);
    assert_eq!(world.query::<&super::Player>().iter(&world).count(), 1);
}

#[test]
fn apply_movement_sets_velocity() {
    let mut world = World::new();
    world.insert_resource(Tunables { player_speed: 100.0, ..Default::default() });
    world.insert_resource(super::PlayerInput { move_axis: Vec2::new(1.0, 0.0) });
    world.spawn((super::Player, LinearVelocity::ZERO));

    run_system_once(&mut world, super::apply_movement);

    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert_eq!(v.0, Vec2::new(100.0, 0.0));
}

#[test]
fn halt_zeroes_velocity() {
    let mut world = World::new();
    world.insert_resource(super::PlayerInput { move_axis: Vec2::Y });
    world.spawn((super::Player, LinearVelocity(Vec2::new(5.0, 5.0))));

    run_system_once(&mut world, super::halt);

    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert_eq!(v.0, Vec2::ZERO);
    assert_eq!(world.resource::<super::PlayerInput>().move_axis, Vec2::ZERO);
}

#[test]
fn hazard_contact_kills_once() {
    let mut world = contact_world();
    let player = world
        .spawn((super::Player, CollisionLayers::new(Layer::Player, [Layer::Hazard])))
        .id();
    let hazard = world
        .spawn(CollisionLayers::new(Layer::Hazard, [Layer::Player]))
        .id();

    world.write_message(contact(hazard, player));
    world.write_message(contact(player, hazard));
    run_system_once(&mut world, super::detect_hazard_contact);

    assert_eq!(world.resource::<Deaths>().0, 1);
    assert!(world.get::<super::Dead>(player).is_some());

    world.write_message(contact(player, hazard));
    run_system_once(&mut world, super::detect_hazard_contact);
    assert_eq!(world.resource::<Deaths>().0, 1);
}

#[test]
fn other_contacts_are_harmless() {
    let mut world = contact_world();
    let player = world
        .spawn((super::Player, CollisionLayers::new(Layer::Player, [Layer::Hazard])))
        .id();
    let prop = world.spawn(CollisionLayers::new(Layer::Default, [Layer::Player])).id();

    world.write_message(contact(player, prop));
    run_system_once(&mut world, super::detect_hazard_contact);

    assert_eq!(world.resource::<Deaths>().0, 0);
    assert!(world.get::<super::Dead>(player).is_none());
}
