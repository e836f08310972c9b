//! Game configuration.

use std::time::Duration;

use bevy::prelude::*;

use crate::common::state::GameState;

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Frames per second. `-1` (or any value <= 0) keeps the platform default.
    pub target_frame_rate: i32,
    /// State a freshly constructed coordinator starts in.
    pub initial_state: GameState,
    /// Delay used by the restart control.
    pub restart_delay_secs: f32,
}

impl GameConfig {
    pub fn frame_rate(&self) -> Option<u32> {
        u32::try_from(self.target_frame_rate).ok().filter(|fps| *fps > 0)
    }

    pub fn restart_delay(&self) -> Duration {
        Duration::from_secs_f32(self.restart_delay_secs.max(0.0))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_frame_rate: 30,
            initial_state: GameState::Prepare,
            restart_delay_secs: 0.0,
        }
    }
}
