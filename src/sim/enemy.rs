//! Enemies and their movement strategies

use glam::Vec2;
use rand::Rng;

use super::entity::{BoundsPolicy, Body};
use crate::consts::*;

/// How enemies move each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyMotion {
    /// Uniform random step in [-2, 2] per axis
    RandomWalk,
    /// Straight-line pursuit of the player at constant speed
    ///
    /// The line is taken in plain world coordinates: in a wrapping world an
    /// enemy does not cut across the seam, even when that way is shorter.
    #[default]
    Seek,
}

/// A hostile entity
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub body: Body,
    pub health: i32,
    /// Damage stat; only applied under `ContactDamage::EnemyStat`
    pub damage: i32,
    /// Pursuit speed in units per tick
    pub speed: f32,
}

impl Enemy {
    /// Create an enemy scaled by `difficulty` (1-3)
    pub fn new(pos: Vec2, difficulty: u8) -> Self {
        let difficulty = difficulty.max(1);
        Self {
            id: 0,
            body: Body::square(pos, ENEMY_SIZE),
            health: ENEMY_HEALTH_PER_DIFFICULTY * difficulty as i32,
            damage: ENEMY_DAMAGE_PER_DIFFICULTY * difficulty as i32,
            speed: ENEMY_BASE_SPEED + difficulty as f32,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Displacement for this tick under `motion`
    pub fn step<R: Rng>(&self, motion: EnemyMotion, target: Vec2, rng: &mut R) -> Vec2 {
        match motion {
            EnemyMotion::RandomWalk => {
                let dx = rng.random_range(-ENEMY_WANDER_STEP..=ENEMY_WANDER_STEP);
                let dy = rng.random_range(-ENEMY_WANDER_STEP..=ENEMY_WANDER_STEP);
                Vec2::new(dx as f32, dy as f32)
            }
            EnemyMotion::Seek => (target - self.body.pos).normalize_or_zero() * self.speed,
        }
    }

    /// Move one tick and confine to the world
    pub fn update<R: Rng>(
        &mut self,
        motion: EnemyMotion,
        target: Vec2,
        world: Vec2,
        policy: BoundsPolicy,
        rng: &mut R,
    ) {
        let delta = self.step(motion, target, rng);
        self.body.translate(delta, world, policy);
    }
}
