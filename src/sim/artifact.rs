//! Artifact pickups

use glam::Vec2;

use super::entity::Body;
use crate::consts::{ARTIFACT_SIZE, ARTIFACT_SPIN};

/// A pickup that heals and grants experience on contact
#[derive(Debug, Clone)]
pub struct Artifact {
    pub id: u32,
    pub body: Body,
    /// Cosmetic rotation (radians)
    pub rotation: f32,
}

impl Artifact {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            body: Body::square(pos, ARTIFACT_SIZE),
            rotation: 0.0,
        }
    }

    /// Advance the spin animation
    pub fn animate(&mut self) {
        self.rotation = (self.rotation + ARTIFACT_SPIN) % std::f32::consts::TAU;
    }
}
