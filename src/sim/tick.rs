//! Fixed-rate simulation tick
//!
//! Core game loop that advances a session by one step in a fixed order:
//! input, player, enemies/artifacts/decor, camera, collisions, artifact
//! respawn, waves.

use glam::Vec2;

use super::player::MoveInput;
use super::rules::ContactDamage;
use super::state::{
    GameEvent, GameOverChoice, GamePhase, GameState, NoticeKind, PauseChoice, SessionExit,
};
use crate::consts::*;
use crate::ui::MenuCursor;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys
    pub movement: MoveInput,
    /// Attack key pressed this tick
    pub attack: bool,
    /// Pause toggle
    pub pause: bool,
    /// Menu navigation
    pub menu_up: bool,
    pub menu_down: bool,
    /// Menu confirm
    pub confirm: bool,
    /// Window closed / quit requested
    pub quit: bool,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.exit_reason().is_some() {
        return;
    }

    if input.quit {
        state.push_event(GameEvent::QuitRequested);
        state.end(SessionExit::QuitApp);
        return;
    }

    match state.phase {
        GamePhase::Paused { cursor } => {
            tick_pause_menu(state, input, cursor);
            return;
        }
        GamePhase::GameOver { cursor } => {
            tick_game_over_menu(state, input, cursor);
            return;
        }
        GamePhase::Ended(_) => return,
        GamePhase::Playing => {}
    }

    // A showing notice freezes gameplay until it runs out
    if let Some(notice) = state.notices.front_mut() {
        notice.ticks_left = notice.ticks_left.saturating_sub(1);
        if notice.ticks_left == 0 {
            state.notices.pop_front();
        }
        return;
    }

    if input.pause {
        state.phase = GamePhase::Paused {
            cursor: MenuCursor::new(PauseChoice::ALL.len()),
        };
        state.push_event(GameEvent::Paused);
        log::debug!("Paused at tick {}", state.time_ticks);
        return;
    }

    let input = if input.idle_mode {
        autopilot_input(state)
    } else {
        input.clone()
    };

    state.time_ticks += 1;
    let rules = *state.rules();
    let world = state.world;

    // Attack resolves before movement, like the key-down it came from
    if input.attack {
        let player_pos = state.player.pos();
        if let Some(report) = state.player.attack(&mut state.enemies, rules.kill_experience) {
            state.push_event(GameEvent::AttackSwing {
                hits: report.hits,
                kills: report.kills,
            });
            if report.kills > 0 {
                state.burst(player_pos, 6 * report.kills as usize);
            }
            if let Some(level) = report.level_up {
                announce_level_up(state, level);
            }
        }
    }

    // Player
    state.player.move_by(input.movement, world, rules.bounds);
    state.player.tick_cooldown();

    // Enemies, artifacts, decor
    let target = state.player.pos();
    state.update_enemies(target);
    for artifact in state.artifacts.iter_mut() {
        artifact.animate();
    }
    state.update_particles();

    // Camera
    state.camera.update(state.player.pos());

    // Player vs enemies
    let damage = contact_damage(state, rules.contact_damage);
    if damage > 0 {
        state.player.take_damage(damage);
        state.push_event(GameEvent::PlayerHurt { damage });
        if state.player.is_dead() {
            state.phase = GamePhase::GameOver {
                cursor: MenuCursor::new(GameOverChoice::ALL.len()),
            };
            state.push_event(GameEvent::GameOver);
            log::info!(
                "Game over at wave {} (level {}, tick {})",
                state.wave,
                state.player.level,
                state.time_ticks
            );
            return;
        }
    }

    // Player vs artifacts
    collect_artifacts(state);

    // Artifact respawn
    if state.artifacts.len() < ARTIFACT_TARGET_COUNT {
        state.artifact_respawn_ticks += 1;
        if state.artifact_respawn_ticks >= ARTIFACT_RESPAWN_TICKS {
            state.spawn_artifact();
            state.artifact_respawn_ticks = 0;
            state.push_event(GameEvent::ArtifactSpawned);
        }
    } else {
        state.artifact_respawn_ticks = 0;
    }

    // Waves
    if state.enemies.is_empty() {
        let cleared = state.wave;
        state.wave += 1;
        state.push_event(GameEvent::WaveCleared { wave: cleared });
        state.push_notice(NoticeKind::WaveCleared(cleared));
        state.spawn_enemies(enemies_for_wave(state.wave));
        log::info!(
            "Wave {} cleared, spawned {} enemies",
            cleared,
            state.enemies.len()
        );
    }
}

/// Enemies spawned when a wave starts
pub fn enemies_for_wave(wave: u32) -> u32 {
    WAVE_BASE_ENEMIES + wave
}

fn announce_level_up(state: &mut GameState, level: u32) {
    state.push_event(GameEvent::LevelUp { level });
    state.push_notice(NoticeKind::LevelUp(level));
    log::info!("Level up: {}", level);
}

/// Damage the player takes this tick from overlapping enemies
fn contact_damage(state: &GameState, rule: ContactDamage) -> i32 {
    let player = &state.player.body;
    let mut touching = state.enemies.iter().filter(|e| e.body.intersects(player));
    match rule {
        ContactDamage::Flat(amount) => {
            if touching.next().is_some() {
                amount
            } else {
                0
            }
        }
        ContactDamage::EnemyStat => touching.map(|e| e.damage).sum(),
    }
}

/// Consume every artifact touching the player
fn collect_artifacts(state: &mut GameState) {
    let player_body = state.player.body;
    let mut picked = Vec::new();
    state.artifacts.retain(|a| {
        let hit = a.body.intersects(&player_body);
        if hit {
            picked.push(a.body.pos);
        }
        !hit
    });

    for pos in picked {
        state.player.heal(ARTIFACT_HEAL);
        state.push_event(GameEvent::ArtifactCollected);
        state.burst(pos, 4);
        if let Some(level) = state.player.gain_experience(ARTIFACT_XP) {
            announce_level_up(state, level);
        }
    }
}

fn tick_pause_menu(state: &mut GameState, input: &TickInput, mut cursor: MenuCursor) {
    if input.pause {
        state.phase = GamePhase::Playing;
        state.push_event(GameEvent::Resumed);
        return;
    }
    if cursor.navigate(input.menu_up, input.menu_down) {
        state.push_event(GameEvent::MenuMoved);
    }
    state.phase = GamePhase::Paused { cursor };

    if input.confirm {
        match PauseChoice::ALL[cursor.selected] {
            PauseChoice::Continue => {
                state.phase = GamePhase::Playing;
                state.push_event(GameEvent::Resumed);
            }
            PauseChoice::ExitToMenu => state.end(SessionExit::MenuExit),
            PauseChoice::QuitGame => state.end(SessionExit::QuitApp),
        }
    }
}

fn tick_game_over_menu(state: &mut GameState, input: &TickInput, mut cursor: MenuCursor) {
    if cursor.navigate(input.menu_up, input.menu_down) {
        state.push_event(GameEvent::MenuMoved);
    }
    state.phase = GamePhase::GameOver { cursor };

    if input.confirm {
        let exit = match GameOverChoice::ALL[cursor.selected] {
            GameOverChoice::PlayAgain => SessionExit::Restart,
            GameOverChoice::ExitToMenu => SessionExit::MenuExit,
            GameOverChoice::QuitGame => SessionExit::QuitApp,
        };
        state.end(exit);
    }
}

/// Demo-mode input: heal up when hurt, otherwise hunt the nearest enemy
fn autopilot_input(state: &GameState) -> TickInput {
    let player = &state.player;
    let pos = player.pos();
    let closest = |points: &mut dyn Iterator<Item = Vec2>| {
        points.min_by(|a, b| a.distance_squared(pos).total_cmp(&b.distance_squared(pos)))
    };
    let nearest_enemy = closest(&mut state.enemies.iter().map(|e| e.pos()));
    let nearest_artifact = closest(&mut state.artifacts.iter().map(|a| a.body.pos));

    let target = if player.health_fraction() < 0.5 {
        nearest_artifact.or(nearest_enemy)
    } else {
        nearest_enemy.or(nearest_artifact)
    };

    let mut movement = MoveInput::default();
    if let Some(target) = target {
        let delta = target - pos;
        movement.left = delta.x < -PLAYER_STEP;
        movement.right = delta.x > PLAYER_STEP;
        movement.up = delta.y < -PLAYER_STEP;
        movement.down = delta.y > PLAYER_STEP;
    }

    let attack = player.can_attack()
        && state.enemies.iter().any(|e| e.body.intersects(&player.body));

    TickInput {
        movement,
        attack,
        idle_mode: true,
        ..Default::default()
    }
}
