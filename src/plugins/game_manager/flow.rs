//! `GameFlow`: the only way to drive the coordinator.
//!
//! Bundles every resource the four operations touch so that callers (controls,
//! observers, UI) just ask for one system parameter. Each operation tolerates a
//! missing `GameManager` (no scene loaded) by logging and doing nothing.
//!
//! Every real state change is written as a `GameStateChanged` message and
//! triggered as an observer event.

use std::time::Duration;

use bevy::diagnostic::FrameCount;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::manager::{GameManager, GameSession, PendingRestart, StartStep};
use crate::common::state::{GameState, GameStateChanged};
use crate::plugins::sound::SoundManager;

#[derive(SystemParam)]
pub struct GameFlow<'w, 's> {
    commands: Commands<'w, 's>,
    manager: Option<ResMut<'w, GameManager>>,
    session: ResMut<'w, GameSession>,
    sound: SoundManager<'w>,
    next_state: ResMut<'w, NextState<GameState>>,
    changes: MessageWriter<'w, GameStateChanged>,
    frame: Res<'w, FrameCount>,
}

impl GameFlow<'_, '_> {
    pub fn state(&self) -> Option<GameState> {
        self.manager.as_ref().map(|manager| manager.state())
    }

    /// Enter `Prepare`. After a restart, chains straight into `start_game`.
    pub fn prepare_game(&mut self) {
        if self.manager.is_none() {
            warn!("prepare_game: no active GameManager");
            return;
        }

        self.set_state(GameState::Prepare);

        if self.session.is_restart {
            self.start_game();
        }
    }

    /// Schedule the start sequence:
    ///
    /// ```text
    ///   end of this frame: Prepare -> Playing, background music
    ///   end of next frame: clear the restart flag
    /// ```
    pub fn start_game(&mut self) {
        let Some(manager) = self.manager.as_mut() else {
            warn!("start_game: no active GameManager");
            return;
        };
        if manager.start.is_some() {
            debug!("start_game ignored: start sequence already pending");
            return;
        }
        manager.start = Some(StartStep::EnterPlaying);
    }

    /// Stop the music, play the game-over sound, enter `GameOver`, count the game.
    ///
    /// A start sequence still pending is cancelled on purpose, so a death during
    /// the two-frame wait can never end in `Playing`.
    pub fn game_over(&mut self) {
        let Some(manager) = self.manager.as_mut() else {
            warn!("game_over: no active GameManager");
            return;
        };
        if manager.start.take().is_some() {
            debug!("game_over cancelled a pending start sequence");
            if manager.restart.is_none() {
                self.session.is_restart = false;
            }
        }

        if self.sound.background().is_some() {
            self.sound.stop_music();
        }
        if let Some(clip) = self.sound.game_over_clip() {
            self.sound.play_sound(clip);
        }

        self.set_state(GameState::GameOver);
        self.session.game_count += 1;
        info!("Game over (games played: {})", self.session.game_count);
    }

    /// Flag the restart now; reload the active scene once `delay` has elapsed.
    ///
    /// A zero delay still waits for the next frame.
    pub fn restart_game(&mut self, delay: Duration) {
        self.session.is_restart = true;

        let armed_on = self.frame.0;
        let Some(manager) = self.manager.as_mut() else {
            warn!("restart_game: no active GameManager, reload not scheduled");
            return;
        };
        if manager.restart.is_some() {
            debug!("restart_game ignored: restart already pending");
            return;
        }
        manager.restart = Some(PendingRestart::new(delay, armed_on));
        debug!("Restart scheduled in {delay:?}");
    }

    /// Run one step of the start sequence. Called once per frame from `Last`.
    pub(super) fn advance_start_sequence(&mut self) {
        let Some(step) = self.manager.as_ref().and_then(|manager| manager.start) else {
            return;
        };

        let next = match step {
            StartStep::EnterPlaying => {
                self.set_state(GameState::Playing);
                if let Some(track) = self.sound.background() {
                    self.sound.play_music(track);
                }
                Some(StartStep::ClearRestartFlag)
            }
            StartStep::ClearRestartFlag => {
                // A restart requested meanwhile owns the flag now.
                let restart_pending = self
                    .manager
                    .as_ref()
                    .is_some_and(|manager| manager.restart.is_some());
                if !restart_pending {
                    self.session.is_restart = false;
                }
                None
            }
        };

        if let Some(manager) = self.manager.as_mut() {
            manager.start = next;
        }
    }

    fn set_state(&mut self, next: GameState) {
        let Some(manager) = self.manager.as_mut() else {
            return;
        };
        let Some(change) = manager.transition(next) else {
            return;
        };
        self.next_state.set(change.new);
        self.changes.write(change);
        self.commands.trigger(change);
    }
}
