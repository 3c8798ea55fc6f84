//! Wave Survivor - A top-down survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state machine)
//! - `render`: Frame snapshot handed to a renderer
//! - `platform`: Input state and frame pacing
//! - `persistence`: Settings/progress files on disk
//! - `app`: Screen flow (main menu, settings, shop, game)

pub mod app;
pub mod audio;
pub mod persistence;
pub mod platform;
pub mod progress;
pub mod render;
pub mod settings;
pub mod sim;
pub mod ui;

pub use app::App;
pub use progress::PlayerProgress;
pub use settings::{Ruleset, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 30;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_STEP: f32 = 5.0;
    pub const PLAYER_START_HEALTH: i32 = 100;
    pub const PLAYER_START_DAMAGE: i32 = 10;
    pub const PLAYER_START_XP_THRESHOLD: u32 = 100;
    pub const ATTACK_COOLDOWN_TICKS: u32 = 30;

    /// Level-up rewards
    pub const LEVEL_UP_MAX_HEALTH: i32 = 20;
    pub const LEVEL_UP_DAMAGE: i32 = 5;
    /// Threshold growth per level (numerator / denominator, floored)
    pub const XP_GROWTH_NUM: u32 = 3;
    pub const XP_GROWTH_DEN: u32 = 2;

    /// Sword upgrade bonus
    pub const SWORD_UPGRADE_DAMAGE: i32 = 5;

    /// Enemy defaults (scaled by difficulty)
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_HEALTH_PER_DIFFICULTY: i32 = 20;
    pub const ENEMY_DAMAGE_PER_DIFFICULTY: i32 = 5;
    pub const ENEMY_BASE_SPEED: f32 = 2.0;
    pub const ENEMY_WANDER_STEP: i32 = 2;

    /// Artifact defaults
    pub const ARTIFACT_SIZE: f32 = 20.0;
    pub const ARTIFACT_HEAL: i32 = 20;
    pub const ARTIFACT_XP: u32 = 20;
    /// Cosmetic spin (radians per tick)
    pub const ARTIFACT_SPIN: f32 = 0.05;
    pub const ARTIFACT_TARGET_COUNT: usize = 3;
    /// Idle ticks before a missing artifact respawns (6 s at 30 Hz)
    pub const ARTIFACT_RESPAWN_TICKS: u32 = 180;

    /// Waves
    pub const INITIAL_ENEMIES: u32 = 5;
    pub const WAVE_BASE_ENEMIES: u32 = 5;

    /// Notices replace blocking dialogs (2 s at 30 Hz)
    pub const NOTICE_TICKS: u32 = 60;

    /// Experience per kill under the classic rules
    pub const CLASSIC_KILL_XP: u32 = 10;

    /// Scrolling world size for the pursuit rules
    pub const PURSUIT_WORLD_WIDTH: f32 = 2400.0;
    pub const PURSUIT_WORLD_HEIGHT: f32 = 1800.0;
}

/// Wrap a coordinate into `[0, extent)`
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to exactly `extent` for tiny negatives
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Half of a size, used for centre/edge conversions
#[inline]
pub fn half(size: Vec2) -> Vec2 {
    size * 0.5
}
