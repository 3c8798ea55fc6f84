//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick rate only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod artifact;
pub mod camera;
pub mod enemy;
pub mod entity;
pub mod player;
pub mod rules;
pub mod state;
pub mod tick;

pub use artifact::Artifact;
pub use camera::Camera;
pub use enemy::{Enemy, EnemyMotion};
pub use entity::{Body, BoundsPolicy};
pub use player::{AttackReport, MoveInput, Player};
pub use rules::{ContactDamage, Rules, WorldSize};
pub use state::{
    GameEvent, GameOverChoice, GamePhase, GameState, Notice, NoticeKind, Particle, PauseChoice,
    SessionConfig, SessionExit,
};
pub use tick::{TickInput, enemies_for_wave, tick};
