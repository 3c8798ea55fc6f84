//! Camera that keeps a target centred on screen

use glam::Vec2;

use crate::half;

/// World-to-screen offset tracking a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Viewport size in pixels
    pub viewport: Vec2,
    /// Last computed offset (added to world positions)
    pub offset: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            offset: Vec2::ZERO,
        }
    }

    /// Recentre instantly on `target` (no smoothing)
    pub fn update(&mut self, target: Vec2) {
        self.offset = half(self.viewport) - target;
    }

    /// World position to screen position
    #[inline]
    pub fn apply(&self, world_pos: Vec2) -> Vec2 {
        world_pos + self.offset
    }

    /// True if a box centred at `world_pos` overlaps the viewport
    pub fn is_visible(&self, world_pos: Vec2, size: Vec2) -> bool {
        let screen = self.apply(world_pos);
        let h = half(size);
        screen.x + h.x > 0.0
            && screen.y + h.y > 0.0
            && screen.x - h.x < self.viewport.x
            && screen.y - h.y < self.viewport.y
    }
}
