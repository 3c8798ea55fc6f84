//! The player character: movement, attack cooldown, experience and levels

use glam::Vec2;

use super::enemy::Enemy;
use super::entity::{BoundsPolicy, Body};
use crate::consts::*;

/// Held movement keys for one tick (level-triggered)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveInput {
    /// Per-axis direction in {-1, 0, 1}; opposite keys cancel
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Result of a triggered attack
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackReport {
    /// Enemies that overlapped the player and took damage
    pub hits: u32,
    /// Enemies removed because their health dropped to zero
    pub kills: u32,
    /// Level reached if kill experience caused a level-up
    pub level_up: Option<u32>,
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub health: i32,
    pub max_health: i32,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next_level: u32,
    pub damage: i32,
    pub sword_level: u32,
    /// Ticks until the next attack is allowed
    pub attack_cooldown: u32,
    pub max_cooldown: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::square(pos, PLAYER_SIZE),
            health: PLAYER_START_HEALTH,
            max_health: PLAYER_START_HEALTH,
            level: 1,
            experience: 0,
            experience_to_next_level: PLAYER_START_XP_THRESHOLD,
            damage: PLAYER_START_DAMAGE,
            sword_level: 1,
            attack_cooldown: 0,
            max_cooldown: ATTACK_COOLDOWN_TICKS,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Step `PLAYER_STEP` units along each pressed axis, then confine
    pub fn move_by(&mut self, input: MoveInput, world: Vec2, policy: BoundsPolicy) {
        let delta = input.direction() * PLAYER_STEP;
        self.body.translate(delta, world, policy);
    }

    pub fn tick_cooldown(&mut self) {
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
    }

    pub fn can_attack(&self) -> bool {
        self.attack_cooldown == 0
    }

    /// Swing at every overlapping enemy
    ///
    /// Returns `None` while the cooldown is running. Dead enemies are removed
    /// from `enemies`; each kill grants `kill_experience` (zero disables it).
    pub fn attack(
        &mut self,
        enemies: &mut Vec<Enemy>,
        kill_experience: u32,
    ) -> Option<AttackReport> {
        if !self.can_attack() {
            return None;
        }
        self.attack_cooldown = self.max_cooldown;

        let mut report = AttackReport::default();
        for enemy in enemies.iter_mut() {
            if self.body.intersects(&enemy.body) {
                enemy.take_damage(self.damage);
                report.hits += 1;
            }
        }

        let before = enemies.len();
        enemies.retain(|e| !e.is_dead());
        report.kills = (before - enemies.len()) as u32;

        if kill_experience > 0 {
            for _ in 0..report.kills {
                if let Some(level) = self.gain_experience(kill_experience) {
                    report.level_up = Some(level);
                }
            }
        }

        Some(report)
    }

    /// Add experience; returns the new level if this gain crossed the threshold
    ///
    /// Only one level-up is checked per call and overflow experience is
    /// discarded by `level_up`.
    pub fn gain_experience(&mut self, amount: u32) -> Option<u32> {
        self.experience = self.experience.saturating_add(amount);
        if self.experience >= self.experience_to_next_level {
            self.level_up();
            Some(self.level)
        } else {
            None
        }
    }

    /// Stats come from save files, so every step saturates instead of
    /// overflowing
    pub fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
        self.experience = 0;
        self.experience_to_next_level = next_threshold(self.experience_to_next_level);
        self.max_health = self.max_health.saturating_add(LEVEL_UP_MAX_HEALTH);
        self.health = self.max_health;
        self.damage = self.damage.saturating_add(LEVEL_UP_DAMAGE);
    }

    /// Restore health, never above `max_health`
    pub fn heal(&mut self, amount: i32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn upgrade_sword(&mut self) {
        self.sword_level = self.sword_level.saturating_add(1);
        self.damage = self.damage.saturating_add(SWORD_UPGRADE_DAMAGE);
    }

    /// Health bar fill in [0, 1]
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health as f32 / self.max_health as f32).clamp(0.0, 1.0)
    }

    /// Experience bar fill in [0, 1]
    pub fn experience_fraction(&self) -> f32 {
        if self.experience_to_next_level == 0 {
            return 0.0;
        }
        (self.experience as f32 / self.experience_to_next_level as f32).clamp(0.0, 1.0)
    }

    /// Cooldown bar fill, only while cooling down
    pub fn cooldown_fraction(&self) -> Option<f32> {
        if self.attack_cooldown == 0 || self.max_cooldown == 0 {
            return None;
        }
        let elapsed = self.max_cooldown - self.attack_cooldown.min(self.max_cooldown);
        Some(elapsed as f32 / self.max_cooldown as f32)
    }
}

/// Threshold after a level-up: x1.5, floored, capped at `u32::MAX`
fn next_threshold(current: u32) -> u32 {
    let grown = current as u64 * XP_GROWTH_NUM as u64 / XP_GROWTH_DEN as u64;
    u32::try_from(grown).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WORLD: Vec2 = Vec2::new(800.0, 600.0);

    fn enemy_at(pos: Vec2, difficulty: u8) -> Enemy {
        Enemy::new(pos, difficulty)
    }

    #[test]
    fn test_move_steps_five_per_axis() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        let input = MoveInput {
            right: true,
            up: true,
            ..Default::default()
        };
        player.move_by(input, WORLD, BoundsPolicy::Clamp);
        assert_eq!(player.pos(), Vec2::new(405.0, 295.0));

        // Opposite keys cancel
        let input = MoveInput {
            left: true,
            right: true,
            ..Default::default()
        };
        player.move_by(input, WORLD, BoundsPolicy::Clamp);
        assert_eq!(player.pos(), Vec2::new(405.0, 295.0));
    }

    #[test]
    fn test_move_clamps_at_edge() {
        let mut player = Player::new(Vec2::new(27.0, 300.0));
        let input = MoveInput {
            left: true,
            ..Default::default()
        };
        player.move_by(input, WORLD, BoundsPolicy::Clamp);
        assert_eq!(player.pos().x, PLAYER_SIZE / 2.0);
    }

    #[test]
    fn test_attack_respects_cooldown() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        let mut enemies = vec![enemy_at(Vec2::new(110.0, 100.0), 1)];

        let report = player.attack(&mut enemies, 0).unwrap();
        assert_eq!(report.hits, 1);
        assert_eq!(player.attack_cooldown, ATTACK_COOLDOWN_TICKS);
        assert!(player.attack(&mut enemies, 0).is_none());
        assert_eq!(enemies[0].health, 10);
    }

    #[test]
    fn test_enemy_dies_on_second_hit_classic_xp() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        let mut enemies = vec![enemy_at(Vec2::new(110.0, 100.0), 1)];

        player.attack(&mut enemies, CLASSIC_KILL_XP).unwrap();
        assert_eq!(enemies.len(), 1);
        for _ in 0..ATTACK_COOLDOWN_TICKS {
            player.tick_cooldown();
        }
        let report = player.attack(&mut enemies, CLASSIC_KILL_XP).unwrap();
        assert_eq!(report.kills, 1);
        assert!(enemies.is_empty());
        assert_eq!(player.experience, CLASSIC_KILL_XP);
    }

    #[test]
    fn test_enemy_kill_without_xp_rule() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.damage = 20;
        let mut enemies = vec![enemy_at(Vec2::new(110.0, 100.0), 1)];
        let report = player.attack(&mut enemies, 0).unwrap();
        assert_eq!(report.kills, 1);
        assert_eq!(player.experience, 0);
    }

    #[test]
    fn test_attack_misses_distant_enemy() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        let mut enemies = vec![enemy_at(Vec2::new(300.0, 300.0), 1)];
        let report = player.attack(&mut enemies, 0).unwrap();
        assert_eq!(report.hits, 0);
        assert_eq!(enemies[0].health, 20);
    }

    #[test]
    fn test_single_level_up_discards_overflow() {
        let mut player = Player::default();
        let level = player.gain_experience(1000);
        assert_eq!(level, Some(2));
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 0);
        assert_eq!(player.experience_to_next_level, 150);
        assert_eq!(player.max_health, 120);
        assert_eq!(player.health, 120);
        assert_eq!(player.damage, 15);
    }

    #[test]
    fn test_threshold_floors() {
        let mut player = Player::default();
        player.experience_to_next_level = 151;
        player.level_up();
        assert_eq!(player.experience_to_next_level, 226);
    }

    #[test]
    fn test_huge_threshold_saturates() {
        let mut player = Player::default();
        player.level = 40;
        player.experience_to_next_level = 2_000_000_000;
        assert_eq!(player.gain_experience(2_000_000_000), Some(41));
        assert_eq!(player.experience_to_next_level, u32::MAX);

        player.level = u32::MAX;
        player.max_health = i32::MAX;
        player.damage = i32::MAX;
        player.level_up();
        assert_eq!(player.level, u32::MAX);
        assert_eq!(player.health, i32::MAX);
        assert_eq!(player.damage, i32::MAX);

        player.heal(i32::MAX);
        assert_eq!(player.health, i32::MAX);
        player.take_damage(i32::MAX);
        player.take_damage(i32::MAX);
        assert!(player.is_dead());
    }

    #[test]
    fn test_upgrade_sword() {
        let mut player = Player::default();
        player.upgrade_sword();
        assert_eq!(player.sword_level, 2);
        assert_eq!(player.damage, 15);
    }

    #[test]
    fn test_cooldown_fraction_only_while_cooling() {
        let mut player = Player::default();
        assert_eq!(player.cooldown_fraction(), None);
        player.attack_cooldown = 15;
        assert_eq!(player.cooldown_fraction(), Some(0.5));
    }

    proptest! {
        #[test]
        fn prop_cooldown_after_n_ticks(n in 0u32..200) {
            let mut player = Player::default();
            let mut enemies = Vec::new();
            player.attack(&mut enemies, 0);
            for _ in 0..n {
                player.tick_cooldown();
            }
            prop_assert_eq!(player.attack_cooldown, ATTACK_COOLDOWN_TICKS.saturating_sub(n));
        }

        #[test]
        fn prop_exactly_one_level_up(extra in 0u32..10_000) {
            let mut player = Player::default();
            let threshold = player.experience_to_next_level;
            player.gain_experience(threshold + extra);
            prop_assert_eq!(player.level, 2);
            prop_assert_eq!(player.experience, 0);
        }

        #[test]
        fn prop_health_never_exceeds_max(
            start in 1i32..=100,
            heals in proptest::collection::vec(0i32..50, 0..20),
        ) {
            let mut player = Player::default();
            player.health = start;
            for amount in heals {
                player.heal(amount);
                prop_assert!(player.health <= player.max_health);
            }
            player.level_up();
            prop_assert!(player.health <= player.max_health);
        }
    }
}
