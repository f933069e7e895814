//! Data-driven game balance
//!
//! Every gameplay number lives here so a run is fully described by
//! (seed, tuning). Defaults match `consts`; a JSON file may override any
//! subset of fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning file is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("flap velocity must point upward (got {0})")]
    FlapNotUpward(f32),
    #[error("{0} period must be non-zero")]
    ZeroPeriod(&'static str),
    #[error("player starts at y={start} but the floor line is at y={floor}")]
    PlayerBelowFloor { start: f32, floor: f32 },
    #[error("gap of {gap}px with {margin}px margins does not fit above the floor at y={floor}")]
    GapDoesNotFit { gap: f32, margin: f32, floor: f32 },
}

/// Gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: f32,
    pub field_height: f32,
    pub ground_height: f32,

    pub player_x: f32,
    /// Top edge of the player at round start
    pub player_start_y: f32,
    pub player_size: f32,

    /// px/tick²
    pub gravity: f32,
    /// px/tick, negative = upward
    pub flap_velocity: f32,

    pub obstacle_width: f32,
    pub gap_height: f32,
    pub gap_margin: f32,
    /// px/tick, shared by obstacles and ground
    pub scroll_speed: f32,

    pub tick_ms: u64,
    pub spawn_interval_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            player_x: PLAYER_X,
            player_start_y: PLAYER_START_Y,
            player_size: PLAYER_SIZE,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            gap_margin: GAP_MARGIN,
            scroll_speed: SCROLL_SPEED,
            tick_ms: TICK_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Y coordinate of the floor line (top of the ground strip)
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.field_height - self.ground_height
    }

    /// Inclusive range of whole-pixel gap centers a spawn may pick
    pub fn gap_center_range(&self) -> (i32, i32) {
        let lo = self.gap_margin.ceil() as i32;
        let hi = (self.floor_y() - self.gap_margin).floor() as i32;
        (lo, hi)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ground_height", self.ground_height),
            ("player_size", self.player_size),
            ("gravity", self.gravity),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("scroll_speed", self.scroll_speed),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        if self.flap_velocity.is_nan() || self.flap_velocity >= 0.0 {
            return Err(TuningError::FlapNotUpward(self.flap_velocity));
        }
        if self.tick_ms == 0 {
            return Err(TuningError::ZeroPeriod("tick"));
        }
        if self.spawn_interval_ms == 0 {
            return Err(TuningError::ZeroPeriod("spawn"));
        }

        let floor = self.floor_y();
        if self.player_start_y + self.player_size >= floor {
            return Err(TuningError::PlayerBelowFloor {
                start: self.player_start_y,
                floor,
            });
        }

        // Both segments must keep a non-negative height for every center in range
        let (lo, hi) = self.gap_center_range();
        let half_gap = self.gap_height / 2.0;
        if lo > hi || (lo as f32) - half_gap < 0.0 || (hi as f32) + half_gap > floor {
            return Err(TuningError::GapDoesNotFit {
                gap: self.gap_height,
                margin: self.gap_margin,
                floor,
            });
        }

        Ok(())
    }
}
