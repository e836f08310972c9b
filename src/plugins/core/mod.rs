//! Core plugin: shared resources and global settings.
//!
//! Also owns the frame limiter. The coordinator sets `FrameRateLimit` once when
//! the scene starts; `limit_frame_rate` then sleeps out the rest of each frame.

use std::time::Duration;

use bevy::platform::time::Instant;
use bevy::prelude::*;

use crate::common::{config::GameConfig, tunables::Tunables};

/// Target frames per second. `None` keeps the platform default pacing.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameRateLimit(pub Option<u32>);

impl FrameRateLimit {
    pub fn frame_budget(self) -> Option<Duration> {
        self.0.filter(|fps| *fps > 0).map(|fps| Duration::from_secs(1) / fps)
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>()
        .init_resource::<GameConfig>()
        .init_resource::<FrameRateLimit>()
        .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)))
        .add_systems(Last, limit_frame_rate);
}

fn limit_frame_rate(limit: Res<FrameRateLimit>, mut frame_start: Local<Option<Instant>>) {
    if let (Some(budget), Some(start)) = (limit.frame_budget(), *frame_start) {
        let spent = start.elapsed();
        if spent < budget {
            std::thread::sleep(budget - spent);
        }
    }
    *frame_start = Some(Instant::now());
}
