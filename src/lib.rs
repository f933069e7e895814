//! Flappy Square - a single-screen gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (body physics, obstacles, scoring, state machine)
//! - `runtime`: Fixed-step frame driver
//! - `highscores`: Best-score persistence
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod runtime;
pub mod sim;
pub mod tuning;

pub use highscores::{HighScoreStore, MemoryStore, StoreError};
pub use runtime::Runner;
pub use sim::{Game, GameEvent, GamePhase};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick period in milliseconds (~60 Hz)
    pub const TICK_MS: u64 = 16;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame deltas above this are clamped (tab switches, debugger pauses)
    pub const MAX_FRAME_MS: u64 = 250;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 640.0;
    /// Height of the ground strip; its top edge is the floor line
    pub const GROUND_HEIGHT: f32 = 64.0;

    /// Player body (square)
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_START_Y: f32 = FIELD_HEIGHT / 2.0;
    pub const PLAYER_SIZE: f32 = 26.0;

    /// Downward acceleration (px/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a flap (px/tick, negative = upward)
    pub const FLAP_VELOCITY: f32 = -8.5;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 70.0;
    pub const GAP_HEIGHT: f32 = 150.0;
    /// Gap centers stay this far from the top edge and the floor line
    pub const GAP_MARGIN: f32 = 120.0;
    /// Horizontal scroll for obstacles and ground (px/tick)
    pub const SCROLL_SPEED: f32 = 3.5;
    /// Obstacle spawn period in milliseconds
    pub const SPAWN_INTERVAL_MS: u64 = 1400;
}
