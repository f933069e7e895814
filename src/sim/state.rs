//! Game state and the input entry points
//!
//! `Game` owns everything the simulation touches: the body, the obstacle
//! field, the score, the ground strip, the spawn timer and the best-score
//! store. Hosts drive it through `step`, `advance_timers` and the input
//! handlers, and read it back through the query methods and `drain_events`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::PlayerBody;
use super::geometry::Aabb;
use super::ground::GroundStrip;
use super::machine::{Transition, Trigger, transition};
use super::obstacles::{ObstacleField, ObstacleId, ObstaclePair};
use super::score::ScoreTracker;
use super::timer::{TimerId, TimerQueue};
use crate::highscores::HighScoreStore;
use crate::tuning::{Tuning, TuningError};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first input
    Idle,
    /// Simulation active
    Running,
    /// Simulation and spawn timer frozen
    Paused,
    /// Round ended, waiting for reset
    GameOver,
}

/// Prompt a host should show over the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    /// Press to play
    Start,
    /// Press to resume
    Paused,
    /// Press to restart
    GameOver,
}

impl GamePhase {
    pub fn banner(self) -> Option<Banner> {
        match self {
            GamePhase::Idle => Some(Banner::Start),
            GamePhase::Running => None,
            GamePhase::Paused => Some(Banner::Paused),
            GamePhase::GameOver => Some(Banner::GameOver),
        }
    }
}

/// What ended the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Obstacle { id: ObstacleId },
    Floor,
}

/// Render/audio-relevant things that happened since the last drain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    Flapped,
    ObstacleSpawned { id: ObstacleId },
    ObstacleRetired { id: ObstacleId },
    Scored { id: ObstacleId, score: u64 },
    Crashed { cause: CrashCause },
    NewHighScore { score: u64 },
}

/// The whole game
pub struct Game<S, R = Pcg32> {
    pub(super) tuning: Tuning,
    pub(super) phase: GamePhase,
    pub(super) player: PlayerBody,
    pub(super) obstacles: ObstacleField,
    pub(super) score: ScoreTracker,
    pub(super) ground: GroundStrip,
    pub(super) timers: TimerQueue,
    /// The one pending spawn timer, if any
    pub(super) spawn_timer: Option<TimerId>,
    pub(super) store: S,
    pub(super) rng: R,
    pub(super) events: Vec<GameEvent>,
    /// Ticks simulated while Running
    pub(super) time_ticks: u64,
}

impl<S: HighScoreStore> Game<S, Pcg32> {
    /// Create a game whose gap placement is seeded for reproducibility
    pub fn new(tuning: Tuning, store: S, seed: u64) -> Result<Self, TuningError> {
        Self::with_rng(tuning, store, Pcg32::seed_from_u64(seed))
    }
}

impl<S: HighScoreStore, R: Rng> Game<S, R> {
    /// Create a game drawing gap centers from `rng`. Rejects a tuning that
    /// fails `Tuning::validate`.
    pub fn with_rng(tuning: Tuning, store: S, rng: R) -> Result<Self, TuningError> {
        tuning.validate()?;
        let high_score = store.load();
        log::info!("Loaded high score: {}", high_score);

        Ok(Self {
            player: PlayerBody::new(&tuning),
            ground: GroundStrip::new(tuning.field_width),
            tuning,
            phase: GamePhase::Idle,
            obstacles: ObstacleField::new(),
            score: ScoreTracker::new(high_score),
            timers: TimerQueue::new(),
            spawn_timer: None,
            store,
            rng,
            events: Vec::new(),
            time_ticks: 0,
        })
    }

    // --- Inputs ---

    /// Jump/start key
    pub fn primary_action(&mut self) {
        self.fire(Trigger::PrimaryAction);
    }

    /// Start from Idle without flapping
    pub fn begin(&mut self) {
        self.fire(Trigger::Begin);
    }

    pub fn toggle_pause(&mut self) {
        self.fire(Trigger::TogglePause);
    }

    /// Full reset back to Idle
    pub fn reset(&mut self) {
        self.fire(Trigger::Reset);
    }

    /// Run one trigger through the transition table and apply its effects
    pub(super) fn fire(&mut self, trigger: Trigger) {
        let Transition { next, effects } = transition(self.phase, trigger);

        if effects.cancel_spawn {
            self.cancel_spawn_timer();
        }
        if effects.reset_world {
            self.reset_world();
        }
        self.set_phase(next);
        if effects.arm_spawn {
            self.arm_spawn_timer();
        }
        if effects.flap {
            self.player.flap(self.tuning.flap_velocity);
            self.events.push(GameEvent::Flapped);
        }
        if effects.settle_score {
            self.settle_high_score();
        }
    }

    fn set_phase(&mut self, next: GamePhase) {
        if next == self.phase {
            return;
        }
        log::info!("Phase {:?} -> {:?}", self.phase, next);
        self.events.push(GameEvent::PhaseChanged {
            from: self.phase,
            to: next,
        });
        self.phase = next;
    }

    /// The only place a spawn timer is armed. Cancels any pending one first.
    pub(super) fn arm_spawn_timer(&mut self) {
        self.cancel_spawn_timer();
        self.spawn_timer = Some(self.timers.arm(self.tuning.spawn_interval_ms));
    }

    fn cancel_spawn_timer(&mut self) {
        if let Some(id) = self.spawn_timer.take() {
            self.timers.cancel(id);
        }
    }

    fn reset_world(&mut self) {
        self.player = PlayerBody::new(&self.tuning);
        self.obstacles.clear();
        self.score.reset_round();
    }

    fn settle_high_score(&mut self) {
        let Some(best) = self.score.settle() else {
            return;
        };
        log::info!("New high score: {}", best);
        self.events.push(GameEvent::NewHighScore { score: best });

        // Best effort: keep the in-memory value even if the write fails
        if let Err(e) = self.store.save(best) {
            log::warn!("Failed to save high score {}: {}", best, e);
        }
    }

    // --- Queries ---

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn banner(&self) -> Option<Banner> {
        self.phase.banner()
    }

    pub fn score(&self) -> u64 {
        self.score.score()
    }

    pub fn high_score(&self) -> u64 {
        self.score.high_score()
    }

    pub fn player(&self) -> &PlayerBody {
        &self.player
    }

    pub fn player_box(&self) -> Aabb {
        self.player.bounds()
    }

    /// Active pairs, left to right
    pub fn obstacles(&self) -> impl Iterator<Item = &ObstaclePair> {
        self.obstacles.iter()
    }

    /// [top, bottom] segment boxes of each active pair, left to right
    pub fn obstacle_boxes(&self) -> Vec<[Aabb; 2]> {
        self.obstacles.iter().map(ObstaclePair::segments).collect()
    }

    pub fn ground_offsets(&self) -> [f32; 2] {
        self.ground.offsets()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn spawn_timer_pending(&self) -> bool {
        self.spawn_timer
            .is_some_and(|id| self.timers.is_pending(id))
    }

    /// All armed timers; never more than one
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Take the events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
