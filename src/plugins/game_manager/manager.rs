//! Coordinator data: the current state, the pending deferred sequences, and the
//! session counters that outlive any single scene.

use std::time::Duration;

use bevy::prelude::*;

use crate::common::state::{GameState, GameStateChanged};

/// Process-wide counters. Survives scene reloads.
#[derive(Resource, Debug, Default, Clone)]
pub struct GameSession {
    pub(super) game_count: u32,
    pub(super) is_restart: bool,
}

impl GameSession {
    /// Completed games since the process started.
    pub fn game_count(&self) -> u32 {
        self.game_count
    }

    /// `true` between a restart request and the end of the start sequence that follows it.
    pub fn is_restart(&self) -> bool {
        self.is_restart
    }
}

/// Steps of the start sequence, one per end-of-frame boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum StartStep {
    EnterPlaying,
    ClearRestartFlag,
}

#[derive(Debug, Clone)]
pub(super) struct PendingRestart {
    pub(super) delay: Timer,
    /// Frame the restart was requested on. Ticking starts on the frame after.
    pub(super) armed_on: u32,
}

impl PendingRestart {
    pub(super) fn new(delay: Duration, armed_on: u32) -> Self {
        Self { delay: Timer::new(delay, TimerMode::Once), armed_on }
    }
}

/// The per-scene coordinator. Constructed in `SceneSetup`, removed in `SceneTeardown`.
#[derive(Resource, Debug)]
pub struct GameManager {
    state: GameState,
    pub(super) start: Option<StartStep>,
    pub(super) restart: Option<PendingRestart>,
}

impl GameManager {
    pub fn new(initial: GameState) -> Self {
        Self { state: initial, start: None, restart: None }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_starting(&self) -> bool {
        self.start.is_some()
    }

    pub fn is_restart_pending(&self) -> bool {
        self.restart.is_some()
    }

    /// Move to `next`. Returns the change to broadcast, or `None` if the value is unchanged.
    pub fn transition(&mut self, next: GameState) -> Option<GameStateChanged> {
        if next == self.state {
            return None;
        }
        let old = std::mem::replace(&mut self.state, next);
        Some(GameStateChanged { new: next, old })
    }
}
