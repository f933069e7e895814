//! Fixed timestep simulation tick
//!
//! Tick order while Running: body → obstacles (advance, retire) → ground →
//! score → collision. A crash ends the tick at the point it is detected.

use rand::Rng;

use super::body::BodyStep;
use super::collision::first_hit;
use super::machine::Trigger;
use super::state::{CrashCause, Game, GameEvent, GamePhase};
use crate::highscores::HighScoreStore;

impl<S: HighScoreStore, R: Rng> Game<S, R> {
    /// Advance the simulation by one tick. No-op unless Running.
    pub fn step(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.time_ticks += 1;

        let floor_y = self.tuning.floor_y();
        if self.player.integrate(self.tuning.gravity, floor_y) == BodyStep::FloorContact {
            self.crash(CrashCause::Floor);
            return;
        }

        let speed = self.tuning.scroll_speed;
        for id in self.obstacles.advance(speed) {
            log::debug!("Obstacle {} retired", id);
            self.events.push(GameEvent::ObstacleRetired { id });
        }
        self.ground.scroll(speed);

        for (id, score) in self.score.scan(&mut self.obstacles, self.player.left()) {
            self.events.push(GameEvent::Scored { id, score });
        }

        if let Some(id) = first_hit(&self.player.bounds(), self.obstacles.iter()) {
            self.crash(CrashCause::Obstacle { id });
        }
    }

    /// Spawn one obstacle pair and re-arm the spawn timer. No-op unless Running.
    pub fn try_spawn(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        let id = self.obstacles.spawn(&self.tuning, &mut self.rng);
        log::debug!("Obstacle {} spawned", id);
        self.events.push(GameEvent::ObstacleSpawned { id });
        self.arm_spawn_timer();
    }

    /// Move the timer clock forward, running any spawn that came due
    pub fn advance_timers(&mut self, elapsed_ms: u64) {
        for id in self.timers.advance(elapsed_ms) {
            // Anything but the live spawn handle is stale
            if self.spawn_timer == Some(id) {
                self.spawn_timer = None;
                self.try_spawn();
            }
        }
    }

    fn crash(&mut self, cause: CrashCause) {
        if self.phase == GamePhase::Running {
            log::info!("Crashed: {:?} (score {})", cause, self.score.score());
            self.events.push(GameEvent::Crashed { cause });
        }
        self.fire(Trigger::Crash);
    }
}
