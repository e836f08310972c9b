//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    /// Half extents of the safe area; the hazards sit just outside it.
    pub arena_half_size: Vec2,
    pub score_interval_secs: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 300.0,
            arena_half_size: Vec2::new(480.0, 270.0),
            score_interval_secs: 1.0,
        }
    }
}
