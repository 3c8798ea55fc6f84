//! Rule sets that differ between game versions
//!
//! The classic rules clamp everything to a screen-sized world, let enemies
//! wander and pay experience per kill. The pursuit rules use a larger
//! wrapping world with enemies that chase the player and no kill reward.

use glam::Vec2;

use super::enemy::EnemyMotion;
use super::entity::BoundsPolicy;
use crate::consts::*;

/// How touching enemies hurt the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactDamage {
    /// Fixed damage per tick while any enemy overlaps
    Flat(i32),
    /// Every overlapping enemy applies its own damage stat each tick
    EnemyStat,
}

/// Size of the playable world
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldSize {
    /// Same as the viewport (non-scrolling)
    Viewport,
    /// Fixed size, independent of resolution
    Fixed(Vec2),
}

/// Gameplay rules selected when a session starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    pub bounds: BoundsPolicy,
    pub enemy_motion: EnemyMotion,
    /// Experience per enemy killed by an attack (0 disables)
    pub kill_experience: u32,
    pub contact_damage: ContactDamage,
    pub world: WorldSize,
}

impl Rules {
    /// First version: clamped screen, wandering enemies, XP per kill
    pub fn classic() -> Self {
        Self {
            bounds: BoundsPolicy::Clamp,
            enemy_motion: EnemyMotion::RandomWalk,
            kill_experience: CLASSIC_KILL_XP,
            contact_damage: ContactDamage::Flat(1),
            world: WorldSize::Viewport,
        }
    }

    /// Later versions: scrolling wrap-around world, seeking enemies
    pub fn pursuit() -> Self {
        Self {
            bounds: BoundsPolicy::Wrap,
            enemy_motion: EnemyMotion::Seek,
            kill_experience: 0,
            contact_damage: ContactDamage::Flat(1),
            world: WorldSize::Fixed(Vec2::new(PURSUIT_WORLD_WIDTH, PURSUIT_WORLD_HEIGHT)),
        }
    }

    /// Resolve the world size for a viewport
    pub fn world_size(&self, viewport: Vec2) -> Vec2 {
        match self.world {
            WorldSize::Viewport => viewport,
            WorldSize::Fixed(size) => size,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::pursuit()
    }
}
