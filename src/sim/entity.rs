//! Shared entity geometry
//!
//! Every entity is an axis-aligned box described by its centre and size.
//! The same box is used for render placement and for collision.

use glam::Vec2;

use crate::{half, wrap_coord};

/// How an entity is kept inside the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Box edges are pushed back inside the world
    Clamp,
    /// Centre wraps around to the opposite edge
    #[default]
    Wrap,
}

/// Position and bounding box shared by all entities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Centre of the box (world units)
    pub pos: Vec2,
    /// Width/height of the box
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Square body of the given edge length
    pub fn square(pos: Vec2, edge: f32) -> Self {
        Self::new(pos, Vec2::splat(edge))
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos - half(self.size)
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + half(self.size)
    }

    /// Strict overlap test (touching edges do not count)
    ///
    /// Boxes are compared in world coordinates only, so two boxes on
    /// opposite sides of a wrapping seam never overlap.
    pub fn intersects(&self, other: &Body) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }

    /// Move by `delta`, then keep inside `world` under `policy`
    pub fn translate(&mut self, delta: Vec2, world: Vec2, policy: BoundsPolicy) {
        self.pos += delta;
        self.confine(world, policy);
    }

    /// Apply the bounds policy without moving
    pub fn confine(&mut self, world: Vec2, policy: BoundsPolicy) {
        match policy {
            BoundsPolicy::Clamp => {
                let h = half(self.size);
                // A box wider than the world sits at its left/top edge
                let max = (world - h).max(h);
                self.pos = self.pos.clamp(h, max);
            }
            BoundsPolicy::Wrap => {
                self.pos.x = wrap_coord(self.pos.x, world.x);
                self.pos.y = wrap_coord(self.pos.y, world.y);
            }
        }
    }

    /// True if the box lies inside the world under `policy`
    pub fn is_confined(&self, world: Vec2, policy: BoundsPolicy) -> bool {
        match policy {
            BoundsPolicy::Clamp => {
                let (min, max) = (self.min(), self.max());
                min.x >= 0.0 && min.y >= 0.0 && max.x <= world.x && max.y <= world.y
            }
            BoundsPolicy::Wrap => {
                (0.0..world.x).contains(&self.pos.x) && (0.0..world.y).contains(&self.pos.y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_intersects_overlap_and_touching() {
        let a = Body::square(Vec2::new(100.0, 100.0), 50.0);
        let b = Body::square(Vec2::new(130.0, 110.0), 30.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));

        // Edges touch exactly at x = 125
        let c = Body::square(Vec2::new(140.0, 100.0), 30.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_clamp_keeps_box_inside() {
        let mut body = Body::square(Vec2::new(10.0, 590.0), 50.0);
        body.translate(Vec2::new(-5.0, 5.0), WORLD, BoundsPolicy::Clamp);
        assert_eq!(body.pos, Vec2::new(25.0, 575.0));
        assert!(body.is_confined(WORLD, BoundsPolicy::Clamp));
    }

    #[test]
    fn test_wrap_crosses_edges() {
        let mut body = Body::square(Vec2::new(798.0, 2.0), 50.0);
        body.translate(Vec2::new(5.0, -5.0), WORLD, BoundsPolicy::Wrap);
        assert_eq!(body.pos, Vec2::new(3.0, 597.0));
        assert!(body.is_confined(WORLD, BoundsPolicy::Wrap));
    }

    #[test]
    fn test_wrap_tiny_negative_stays_in_range() {
        let mut body = Body::square(Vec2::new(0.0, 0.0), 20.0);
        body.translate(Vec2::new(-1e-8, -1e-8), WORLD, BoundsPolicy::Wrap);
        assert!(body.is_confined(WORLD, BoundsPolicy::Wrap));
    }

    #[test]
    fn test_no_overlap_across_wrap_seam() {
        let left = Body::square(Vec2::new(5.0, 300.0), 30.0);
        let right = Body::square(Vec2::new(795.0, 300.0), 30.0);
        assert!(!left.intersects(&right));
    }
}
