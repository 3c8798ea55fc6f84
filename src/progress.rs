//! Player progress carried between sessions
//!
//! Persisted to `progress.json` when the player quits or leaves to the menu.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{LEVEL_UP_MAX_HEALTH, PLAYER_START_HEALTH};
use crate::sim::Player;

/// Saved player stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgress {
    pub level: u32,
    pub health: i32,
    pub damage: i32,
    pub sword_level: u32,
    pub experience: u32,
    pub experience_to_next_level: u32,
    /// Absent in files written before it was tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_health: Option<i32>,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self::from_player(&Player::default())
    }
}

impl PlayerProgress {
    /// Snapshot the persistent stats of a player
    pub fn from_player(player: &Player) -> Self {
        Self {
            level: player.level,
            health: player.health,
            damage: player.damage,
            sword_level: player.sword_level,
            experience: player.experience,
            experience_to_next_level: player.experience_to_next_level,
            max_health: Some(player.max_health),
        }
    }

    /// Max health implied by the level when the file does not store it
    pub fn derived_max_health(level: u32) -> i32 {
        let level_ups = i32::try_from(level.saturating_sub(1)).unwrap_or(i32::MAX);
        PLAYER_START_HEALTH.saturating_add(LEVEL_UP_MAX_HEALTH.saturating_mul(level_ups))
    }

    /// Build a player from saved stats
    ///
    /// Health is clamped to `max_health`; a saved dead player starts at full
    /// health.
    pub fn to_player(&self) -> Player {
        let mut player = Player::new(Vec2::ZERO);
        player.level = self.level.max(1);
        player.damage = self.damage;
        player.sword_level = self.sword_level.max(1);
        player.experience = self.experience;
        player.experience_to_next_level = self.experience_to_next_level.max(1);
        player.max_health = self
            .max_health
            .unwrap_or_else(|| Self::derived_max_health(player.level))
            .max(1);
        player.health = if self.health <= 0 {
            player.max_health
        } else {
            self.health.min(player.max_health)
        };
        player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_round_trip_keeps_stats() {
        let mut player = Player::default();
        player.level_up();
        player.upgrade_sword();
        player.health = 77;
        player.experience = 12;

        let restored = PlayerProgress::from_player(&player).to_player();
        assert_eq!(restored.level, 2);
        assert_eq!(restored.max_health, 120);
        assert_eq!(restored.health, 77);
        assert_eq!(restored.damage, 20);
        assert_eq!(restored.sword_level, 2);
        assert_eq!(restored.experience, 12);
        assert_eq!(restored.experience_to_next_level, 150);
    }

    #[test]
    fn test_legacy_file_derives_max_health() {
        let json = r#"{"level": 3, "health": 500, "damage": 20, "sword_level": 1,
                       "experience": 5, "experience_to_next_level": 225}"#;
        let progress: PlayerProgress = serde_json::from_str(json).unwrap();
        assert_eq!(progress.max_health, None);

        let player = progress.to_player();
        assert_eq!(player.max_health, 140);
        assert_eq!(player.health, 140);
    }

    #[test]
    fn test_dead_save_restores_full_health() {
        let progress = PlayerProgress {
            health: 0,
            ..Default::default()
        };
        assert_eq!(progress.to_player().health, 100);
    }

    #[test]
    fn test_huge_legacy_level_saturates_max_health() {
        let json = r#"{"level": 3000000000, "health": 50, "damage": 10, "sword_level": 1,
                       "experience": 0, "experience_to_next_level": 100}"#;
        let progress: PlayerProgress = serde_json::from_str(json).unwrap();
        let player = progress.to_player();
        assert_eq!(player.level, 3_000_000_000);
        assert_eq!(player.max_health, i32::MAX);
        assert_eq!(player.health, 50);
    }
}
