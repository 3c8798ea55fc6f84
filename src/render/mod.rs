//! Frame snapshots for the rendering collaborator
//!
//! The simulation never draws. Each frame the app builds a `RenderSnapshot`
//! (sprites already in screen space, HUD values, menu overlay) and hands it
//! to whatever implements `Renderer`.

pub mod snapshot;

pub use snapshot::{Hud, MenuView, Overlay, RenderSnapshot, Sprite, SpriteDraw, colors};

/// Receives one snapshot per frame
pub trait Renderer {
    fn present(&mut self, frame: &RenderSnapshot);
}

/// Renderer for headless runs: logs HUD values once per second
///
/// No images are loaded, so every sprite is reported with its fallback fill
/// (trace level).
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn present(&mut self, frame: &RenderSnapshot) {
        self.frames += 1;
        if let Some(Overlay::Notice(text)) = &frame.overlay {
            log::debug!("[notice] {}", text);
        }
        if self.frames % crate::consts::TICK_RATE as u64 != 0 {
            return;
        }
        match (&frame.hud, &frame.overlay) {
            (Some(hud), _) => log::info!(
                "HP {:>3.0}% | Lv {} | XP {:>3.0}% | wave {} | {} sprites",
                hud.health_fraction * 100.0,
                hud.level,
                hud.experience_fraction * 100.0,
                hud.wave,
                frame.sprites.len()
            ),
            (None, Some(Overlay::Menu(menu))) => log::info!(
                "[{}] > {}",
                menu.title,
                menu.options.get(menu.selected).map(String::as_str).unwrap_or("")
            ),
            _ => {}
        }
        if log::log_enabled!(log::Level::Trace) {
            for draw in &frame.sprites {
                log::trace!(
                    "{} at ({:.0}, {:.0}) fill {:?}",
                    draw.sprite.image(),
                    draw.screen_pos.x,
                    draw.screen_pos.y,
                    draw.sprite.fallback_color()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_renderer_counts_frames() {
        let mut renderer = LogRenderer::default();
        let frame = RenderSnapshot::default();
        for _ in 0..45 {
            renderer.present(&frame);
        }
        assert_eq!(renderer.frames(), 45);
    }
}
