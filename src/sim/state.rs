//! Session state and the play/pause/game-over state machine
//!
//! Everything a running session owns lives here. Menus and notices are
//! phases of the session, never nested loops.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::artifact::Artifact;
use super::camera::Camera;
use super::enemy::Enemy;
use super::player::Player;
use super::rules::Rules;
use crate::consts::*;
use crate::ui::MenuCursor;

/// How a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    /// "Play again" from the game-over menu
    Restart,
    /// Back to the main menu
    MenuExit,
    /// Close the application
    QuitApp,
}

/// Pause menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseChoice {
    Continue,
    ExitToMenu,
    QuitGame,
}

impl PauseChoice {
    pub const ALL: [PauseChoice; 3] = [Self::Continue, Self::ExitToMenu, Self::QuitGame];

    pub fn label(&self) -> &'static str {
        match self {
            PauseChoice::Continue => "Continue",
            PauseChoice::ExitToMenu => "Exit to menu",
            PauseChoice::QuitGame => "Quit game",
        }
    }
}

/// Game-over menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverChoice {
    PlayAgain,
    ExitToMenu,
    QuitGame,
}

impl GameOverChoice {
    pub const ALL: [GameOverChoice; 3] = [Self::PlayAgain, Self::ExitToMenu, Self::QuitGame];

    pub fn label(&self) -> &'static str {
        match self {
            GameOverChoice::PlayAgain => "Play again",
            GameOverChoice::ExitToMenu => "Exit to menu",
            GameOverChoice::QuitGame => "Quit game",
        }
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Pause menu is open
    Paused { cursor: MenuCursor },
    /// Player died; game-over menu is open
    GameOver { cursor: MenuCursor },
    /// Session finished; the owner decides what comes next
    Ended(SessionExit),
}

/// Things that happened during a tick, drained by the app for audio/persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    AttackSwing { hits: u32, kills: u32 },
    PlayerHurt { damage: i32 },
    ArtifactCollected,
    ArtifactSpawned,
    LevelUp { level: u32 },
    WaveCleared { wave: u32 },
    Paused,
    Resumed,
    MenuMoved,
    GameOver,
    QuitRequested,
    SessionEnded(SessionExit),
}

/// What a notice announces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    LevelUp(u32),
    WaveCleared(u32),
}

/// Timed message that freezes gameplay while it is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub ticks_left: u32,
}

impl Notice {
    pub fn new(kind: NoticeKind) -> Self {
        Self {
            kind,
            ticks_left: NOTICE_TICKS,
        }
    }

    pub fn text(&self) -> String {
        match self.kind {
            NoticeKind::LevelUp(level) => format!("You reached level {}!", level),
            // Numbered by the wave just cleared, not the one starting
            NoticeKind::WaveCleared(wave) => format!("Wave {} cleared!", wave),
        }
    }
}

/// A decorative particle (not gameplay-affecting)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life in ticks
    pub life: u32,
}

/// Maximum particles
pub const MAX_PARTICLES: usize = 256;
/// Particle lifetime in ticks
pub const PARTICLE_LIFE: u32 = 20;

/// Parameters fixed for the length of a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub seed: u64,
    pub rules: Rules,
    /// Enemy difficulty (1-3)
    pub difficulty: u8,
    /// Screen size in pixels
    pub viewport: Vec2,
}

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SessionConfig,
    /// Resolved world size
    pub world: Vec2,
    pub phase: GamePhase,
    pub player: Player,
    /// Live enemies (spawn order)
    pub enemies: Vec<Enemy>,
    /// Live artifacts (spawn order)
    pub artifacts: Vec<Artifact>,
    /// Decorative particles
    pub particles: Vec<Particle>,
    pub camera: Camera,
    /// Current wave (1-based)
    pub wave: u32,
    /// Ticks spent below the artifact target count
    pub artifact_respawn_ticks: u32,
    /// Pending notices; the front one is showing
    pub notices: VecDeque<Notice>,
    /// Simulation tick counter
    pub time_ticks: u64,
    events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Start a session: place the player at the world centre and spawn the
    /// opening enemies and artifacts
    pub fn new(config: SessionConfig, mut player: Player) -> Self {
        let world = config.rules.world_size(config.viewport);
        player.body.pos = world * 0.5;
        player.attack_cooldown = 0;

        let mut camera = Camera::new(config.viewport);
        camera.update(player.body.pos);

        let mut state = Self {
            config,
            world,
            phase: GamePhase::Playing,
            player,
            enemies: Vec::new(),
            artifacts: Vec::new(),
            particles: Vec::new(),
            camera,
            wave: 1,
            artifact_respawn_ticks: 0,
            notices: VecDeque::new(),
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(config.seed),
            next_id: 1,
        };

        state.spawn_enemies(INITIAL_ENEMIES);
        for _ in 0..ARTIFACT_TARGET_COUNT {
            state.spawn_artifact();
        }

        log::info!(
            "Session started: seed {}, difficulty {}, world {}x{}",
            config.seed,
            config.difficulty,
            world.x,
            world.y
        );
        state
    }

    pub fn rules(&self) -> &Rules {
        &self.config.rules
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Uniform random point inside the world
    fn random_world_point(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(0.0..self.world.x),
            self.rng.random_range(0.0..self.world.y),
        )
    }

    pub fn spawn_enemies(&mut self, count: u32) {
        for _ in 0..count {
            let pos = self.random_world_point();
            let id = self.next_entity_id();
            let mut enemy = Enemy::new(pos, self.config.difficulty).with_id(id);
            enemy.body.confine(self.world, self.config.rules.bounds);
            debug_assert!(enemy.body.is_confined(self.world, self.config.rules.bounds));
            self.enemies.push(enemy);
        }
    }

    pub fn spawn_artifact(&mut self) {
        let pos = self.random_world_point();
        let id = self.next_entity_id();
        let mut artifact = Artifact::new(id, pos);
        artifact.body.confine(self.world, self.config.rules.bounds);
        self.artifacts.push(artifact);
    }

    /// Move every enemy one tick under the session's motion rule
    pub fn update_enemies(&mut self, target: Vec2) {
        let rules = self.config.rules;
        for enemy in self.enemies.iter_mut() {
            enemy.update(rules.enemy_motion, target, self.world, rules.bounds, &mut self.rng);
        }
    }

    /// Emit a small burst of decor particles
    pub fn burst(&mut self, pos: Vec2, count: usize) {
        for _ in 0..count {
            if self.particles.len() >= MAX_PARTICLES {
                break;
            }
            let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
            let speed = self.rng.random_range(1.0..4.0);
            self.particles.push(Particle {
                pos,
                vel: Vec2::from_angle(angle) * speed,
                life: PARTICLE_LIFE,
            });
        }
    }

    pub fn update_particles(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.pos += particle.vel;
            particle.vel *= 0.9;
            particle.life = particle.life.saturating_sub(1);
        }
        self.particles.retain(|p| p.life > 0);
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn push_notice(&mut self, kind: NoticeKind) {
        self.notices.push_back(Notice::new(kind));
    }

    /// Notice currently on screen
    pub fn active_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Finish the session
    pub fn end(&mut self, exit: SessionExit) {
        self.phase = GamePhase::Ended(exit);
        self.push_event(GameEvent::SessionEnded(exit));
        log::info!("Session ended: {:?} (wave {}, level {})", exit, self.wave, self.player.level);
    }

    pub fn exit_reason(&self) -> Option<SessionExit> {
        match self.phase {
            GamePhase::Ended(exit) => Some(exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rules::Rules;

    fn config(rules: Rules) -> SessionConfig {
        SessionConfig {
            seed: 42,
            rules,
            difficulty: 1,
            viewport: Vec2::new(800.0, 600.0),
        }
    }

    #[test]
    fn test_new_session_spawns_opening_set() {
        let state = GameState::new(config(Rules::classic()), Player::default());
        assert_eq!(state.enemies.len(), INITIAL_ENEMIES as usize);
        assert_eq!(state.artifacts.len(), ARTIFACT_TARGET_COUNT);
        assert_eq!(state.wave, 1);
        assert_eq!(state.player.pos(), Vec2::new(400.0, 300.0));
        assert_eq!(state.phase, GamePhase::Playing);

        let world = state.world;
        for enemy in &state.enemies {
            assert!(enemy.body.is_confined(world, state.rules().bounds));
        }
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let state = GameState::new(config(Rules::pursuit()), Player::default());
        let mut ids: Vec<u32> = state
            .enemies
            .iter()
            .map(|e| e.id)
            .chain(state.artifacts.iter().map(|a| a.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), INITIAL_ENEMIES as usize + ARTIFACT_TARGET_COUNT);
    }

    #[test]
    fn test_particles_fade_out() {
        let mut state = GameState::new(config(Rules::classic()), Player::default());
        state.burst(Vec2::new(100.0, 100.0), 8);
        assert_eq!(state.particles.len(), 8);
        for _ in 0..PARTICLE_LIFE {
            state.update_particles();
        }
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(Notice::new(NoticeKind::WaveCleared(2)).text(), "Wave 2 cleared!");
        assert_eq!(Notice::new(NoticeKind::LevelUp(3)).text(), "You reached level 3!");
    }
}
