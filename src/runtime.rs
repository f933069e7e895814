//! Fixed-step frame driver
//!
//! Hosts call `frame` with the real time since the previous frame. Time is
//! banked in an accumulator and spent one tick at a time; each tick first
//! advances the spawn timers by one tick period, then steps the simulation.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS};
use crate::highscores::HighScoreStore;
use crate::sim::Game;

pub struct Runner<S, R = Pcg32> {
    game: Game<S, R>,
    accumulator_ms: u64,
}

impl<S: HighScoreStore, R: Rng> Runner<S, R> {
    pub fn new(game: Game<S, R>) -> Self {
        Self {
            game,
            accumulator_ms: 0,
        }
    }

    /// Bank `elapsed_ms` and run as many whole ticks as it pays for.
    /// Returns the number of ticks run.
    pub fn frame(&mut self, elapsed_ms: u64) -> u32 {
        let tick_ms = self.game.tuning().tick_ms.max(1);
        self.accumulator_ms += elapsed_ms.min(MAX_FRAME_MS);

        let mut substeps = 0;
        while self.accumulator_ms >= tick_ms && substeps < MAX_SUBSTEPS {
            self.game.advance_timers(tick_ms);
            self.game.step();
            self.accumulator_ms -= tick_ms;
            substeps += 1;
        }

        // Too far behind: drop whole ticks rather than spiral
        if self.accumulator_ms >= tick_ms {
            log::debug!("Dropping {}ms of backlog", self.accumulator_ms - self.accumulator_ms % tick_ms);
            self.accumulator_ms %= tick_ms;
        }

        substeps
    }

    pub fn game(&self) -> &Game<S, R> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<S, R> {
        &mut self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryStore;
    use crate::sim::{GamePhase, should_flap};
    use crate::tuning::Tuning;

    fn runner() -> Runner<MemoryStore> {
        Runner::new(Game::new(Tuning::default(), MemoryStore::new(0), 77).expect("valid tuning"))
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut runner = runner();
        runner.game_mut().begin();
        assert_eq!(runner.frame(10), 0);
        assert_eq!(runner.frame(10), 1);
        assert_eq!(runner.game().time_ticks(), 1);
        assert_eq!(runner.frame(12), 1);
        assert_eq!(runner.frame(0), 0);
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut runner = runner();
        runner.game_mut().begin();
        // 240ms would be 15 ticks; only MAX_SUBSTEPS run and the rest is dropped
        assert_eq!(runner.frame(240), MAX_SUBSTEPS);
        assert_eq!(runner.frame(0), 0);
    }

    #[test]
    fn test_huge_frame_is_clamped() {
        let mut runner = runner();
        runner.game_mut().begin();
        runner.frame(60_000);
        // Clamped to MAX_FRAME_MS, then capped at MAX_SUBSTEPS
        assert_eq!(runner.game().time_ticks(), MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_spawns_on_wall_clock() {
        let mut runner = runner();
        runner.game_mut().begin();
        // Hover so the round outlives the first spawn period
        for _ in 0..88 {
            let game = runner.game_mut();
            if game.player().vel >= 0.0 && game.player().y > 300.0 {
                game.primary_action();
            }
            runner.frame(16);
        }
        // 88 ticks * 16ms = 1408ms: exactly one spawn at 1400ms
        assert_eq!(runner.game().phase(), GamePhase::Running);
        assert_eq!(runner.game().obstacles().count(), 1);
    }

    #[test]
    fn test_round_ends_once_inputs_stop_and_settles() {
        let mut runner = runner();
        for _ in 0..600 {
            if should_flap(runner.game()) {
                runner.game_mut().primary_action();
            }
            runner.frame(16);
            if runner.game().phase() == GamePhase::GameOver {
                break;
            }
        }

        // Without flaps the body reaches the floor or a pipe well within this
        for _ in 0..300 {
            if runner.game().phase() == GamePhase::GameOver {
                break;
            }
            runner.frame(16);
        }

        let game = runner.game();
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.high_score(), game.score());
        assert_eq!(game.store().best(), game.score());
        assert_eq!(game.pending_timers(), 0);
    }
}
