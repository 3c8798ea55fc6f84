//! Per-frame draw data

use glam::Vec2;

use crate::half;
use crate::sim::{Camera, GameOverChoice, GamePhase, GameState, PauseChoice};

/// Fallback colors when a sprite image is missing
pub mod colors {
    pub const PLAYER: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const ENEMY: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const ARTIFACT: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const PARTICLE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
}

/// Particle draw size
const PARTICLE_SIZE: f32 = 4.0;

/// What to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Player,
    Enemy,
    Artifact,
    Particle,
}

impl Sprite {
    /// Image asset name
    pub fn image(&self) -> &'static str {
        match self {
            Sprite::Player => "player.png",
            Sprite::Enemy => "enemy.png",
            Sprite::Artifact => "artifact.png",
            Sprite::Particle => "particle.png",
        }
    }

    pub fn fallback_color(&self) -> [f32; 4] {
        match self {
            Sprite::Player => colors::PLAYER,
            Sprite::Enemy => colors::ENEMY,
            Sprite::Artifact => colors::ARTIFACT,
            Sprite::Particle => colors::PARTICLE,
        }
    }
}

/// One sprite placed in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub sprite: Sprite,
    /// Top-left corner on screen
    pub screen_pos: Vec2,
    pub size: Vec2,
    /// Radians
    pub rotation: f32,
}

/// HUD values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub health_fraction: f32,
    pub level: u32,
    pub experience_fraction: f32,
    /// Only present while the attack is cooling down
    pub cooldown_fraction: Option<f32>,
    pub wave: u32,
}

/// A menu to draw on top of (or instead of) the world
#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    pub title: String,
    pub options: Vec<String>,
    pub selected: usize,
    pub footer: Option<String>,
}

impl MenuView {
    pub fn new(title: impl Into<String>, options: Vec<String>, selected: usize) -> Self {
        Self {
            title: title.into(),
            options,
            selected,
            footer: None,
        }
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// Timed message box
    Notice(String),
    Menu(MenuView),
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderSnapshot {
    /// Back-to-front draw order
    pub sprites: Vec<SpriteDraw>,
    pub hud: Option<Hud>,
    pub overlay: Option<Overlay>,
}

impl RenderSnapshot {
    /// A menu screen with no world behind it
    pub fn menu(view: MenuView) -> Self {
        Self {
            sprites: Vec::new(),
            hud: None,
            overlay: Some(Overlay::Menu(view)),
        }
    }

    /// Snapshot of a running session through its camera
    pub fn from_state(state: &GameState) -> Self {
        let camera = &state.camera;
        let mut sprites = Vec::with_capacity(
            state.artifacts.len() + state.enemies.len() + state.particles.len() + 1,
        );

        for artifact in &state.artifacts {
            push_sprite(
                &mut sprites,
                camera,
                Sprite::Artifact,
                artifact.body.pos,
                artifact.body.size,
                artifact.rotation,
            );
        }
        for enemy in &state.enemies {
            let body = &enemy.body;
            push_sprite(&mut sprites, camera, Sprite::Enemy, body.pos, body.size, 0.0);
        }
        let particle_size = Vec2::splat(PARTICLE_SIZE);
        for particle in &state.particles {
            push_sprite(&mut sprites, camera, Sprite::Particle, particle.pos, particle_size, 0.0);
        }
        let player = &state.player;
        let body = &player.body;
        push_sprite(&mut sprites, camera, Sprite::Player, body.pos, body.size, 0.0);

        let hud = Hud {
            health_fraction: player.health_fraction(),
            level: player.level,
            experience_fraction: player.experience_fraction(),
            cooldown_fraction: player.cooldown_fraction(),
            wave: state.wave,
        };

        let overlay = match state.phase {
            GamePhase::Paused { cursor } => Some(Overlay::Menu(MenuView::new(
                "Paused",
                PauseChoice::ALL.iter().map(|c| c.label().to_string()).collect(),
                cursor.selected,
            ))),
            GamePhase::GameOver { cursor } => Some(Overlay::Menu(MenuView::new(
                "You died!",
                GameOverChoice::ALL.iter().map(|c| c.label().to_string()).collect(),
                cursor.selected,
            ))),
            GamePhase::Playing => state.active_notice().map(|n| Overlay::Notice(n.text())),
            GamePhase::Ended(_) => None,
        };

        Self {
            sprites,
            hud: Some(hud),
            overlay,
        }
    }
}

fn push_sprite(
    sprites: &mut Vec<SpriteDraw>,
    camera: &Camera,
    sprite: Sprite,
    world_pos: Vec2,
    size: Vec2,
    rotation: f32,
) {
    if !camera.is_visible(world_pos, size) {
        return;
    }
    sprites.push(SpriteDraw {
        sprite,
        screen_pos: camera.apply(world_pos) - half(size),
        size,
        rotation,
    });
}
