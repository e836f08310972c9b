//! Score plugin: current score, best score, and survival points.

use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::game_manager::coordinator_in;

#[derive(Resource, Debug, Default, Clone)]
pub struct ScoreManager {
    score: u32,
    high_score: u32,
    has_new_high_score: bool,
}

impl ScoreManager {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn has_new_high_score(&self) -> bool {
        self.has_new_high_score
    }

    /// Clear the current run. The best score is kept.
    pub fn reset(&mut self) {
        self.score = 0;
        self.has_new_high_score = false;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        if self.score > self.high_score {
            self.high_score = self.score;
            self.has_new_high_score = true;
        }
    }
}

#[derive(Resource, Debug)]
struct SurvivalTimer(Timer);

pub fn plugin(app: &mut App) {
    let interval = app.world().resource::<Tunables>().score_interval_secs;
    app.init_resource::<ScoreManager>()
        .insert_resource(SurvivalTimer(Timer::from_seconds(interval, TimerMode::Repeating)))
        .add_systems(OnEnter(GameState::Playing), reset_survival_timer)
        .add_systems(
            Update,
            award_survival_points.run_if(coordinator_in(GameState::Playing)),
        );
}

fn reset_survival_timer(mut timer: ResMut<SurvivalTimer>) {
    timer.0.reset();
}

fn award_survival_points(
    time: Res<Time>,
    mut timer: ResMut<SurvivalTimer>,
    mut score: ResMut<ScoreManager>,
) {
    timer.0.tick(time.delta());
    let points = timer.0.times_finished_this_tick();
    if points > 0 {
        score.add_score(points);
    }
}
