//! Global state machine.
//!
//! The coordinator in `plugins::game_manager` owns the authoritative value.
//! `State<GameState>` mirrors it so other plugins can use `in_state`, `OnEnter`
//! and `OnExit`; the mirror catches up at the next `StateTransition` run.
//! Systems that must stop in the very frame of a transition use
//! `game_manager::coordinator_in` instead.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Prepare,
    Playing,
    // Declared for collaborators; the coordinator never enters these.
    Paused,
    PreGameOver,
    GameOver,
}

/// Sent once per real state change, both as a message (for `MessageReader`
/// systems) and as an observer event (for `On<GameStateChanged>` observers).
/// Same-value transitions are silent.
#[derive(Message, Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStateChanged {
    pub new: GameState,
    pub old: GameState,
}
