//! Game settings and preferences
//!
//! Persisted separately from player progress in `settings.json`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rules;

/// Resolutions offered by the settings menu
pub const RESOLUTIONS: [(u32, u32); 3] = [(800, 600), (1024, 768), (1280, 720)];

/// Lowest/highest difficulty
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 3;

/// Volume step used by the settings menu
pub const VOLUME_STEP: u8 = 10;

/// Which set of gameplay rules a new session uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    /// Fixed screen, wandering enemies, experience per kill
    Classic,
    /// Scrolling wrap-around world, enemies chase the player
    #[default]
    Pursuit,
}

impl Ruleset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ruleset::Classic => "Classic",
            Ruleset::Pursuit => "Pursuit",
        }
    }

    /// Gameplay rules for this set
    pub fn rules(&self) -> Rules {
        match self {
            Ruleset::Classic => Rules::classic(),
            Ruleset::Pursuit => Rules::pursuit(),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Ruleset::Classic => Ruleset::Pursuit,
            Ruleset::Pursuit => Ruleset::Classic,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master volume (0 - 100)
    pub volume: u8,
    /// Enemy difficulty (1 - 3)
    pub difficulty: u8,
    /// Window size in pixels
    pub resolution: (u32, u32),
    pub fullscreen: bool,
    /// Rules for new sessions
    pub ruleset: Ruleset,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: 50,
            difficulty: 1,
            resolution: RESOLUTIONS[0],
            fullscreen: false,
            ruleset: Ruleset::default(),
        }
    }
}

impl Settings {
    /// Viewport size as a vector
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.resolution.0 as f32, self.resolution.1 as f32)
    }

    /// Volume as a fraction (0.0 - 1.0)
    pub fn volume_fraction(&self) -> f32 {
        self.volume.min(100) as f32 / 100.0
    }

    /// Step volume up by 10, wrapping from 100 back to 0
    pub fn cycle_volume(&mut self) {
        self.volume = (self.volume.min(100) + VOLUME_STEP) % (100 + VOLUME_STEP);
    }

    /// 1 -> 2 -> 3 -> 1
    pub fn cycle_difficulty(&mut self) {
        self.difficulty = if self.difficulty >= MAX_DIFFICULTY {
            MIN_DIFFICULTY
        } else {
            self.difficulty.max(MIN_DIFFICULTY - 1) + 1
        };
    }

    /// Next entry of `RESOLUTIONS`; an unknown resolution goes to the first
    pub fn cycle_resolution(&mut self) {
        let next = RESOLUTIONS
            .iter()
            .position(|r| *r == self.resolution)
            .map(|i| (i + 1) % RESOLUTIONS.len())
            .unwrap_or(0);
        self.resolution = RESOLUTIONS[next];
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    pub fn cycle_ruleset(&mut self) {
        self.ruleset = self.ruleset.next();
    }

    /// Clamp out-of-range values; returns true if anything changed
    pub fn sanitize(&mut self) -> bool {
        let before = self.clone();
        self.volume = self.volume.min(100);
        self.difficulty = self.difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
        if self.resolution.0 == 0 || self.resolution.1 == 0 {
            self.resolution = RESOLUTIONS[0];
        }
        if *self != before {
            log::warn!("Settings out of range, clamped: {:?} -> {:?}", before, self);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_wraps_after_hundred() {
        let mut settings = Settings {
            volume: 90,
            ..Default::default()
        };
        settings.cycle_volume();
        assert_eq!(settings.volume, 100);
        settings.cycle_volume();
        assert_eq!(settings.volume, 0);
    }

    #[test]
    fn test_difficulty_cycles() {
        let mut settings = Settings::default();
        let seen: Vec<u8> = (0..4)
            .map(|_| {
                settings.cycle_difficulty();
                settings.difficulty
            })
            .collect();
        assert_eq!(seen, vec![2, 3, 1, 2]);
    }

    #[test]
    fn test_resolution_cycles_fixed_list() {
        let mut settings = Settings::default();
        settings.cycle_resolution();
        assert_eq!(settings.resolution, (1024, 768));
        settings.cycle_resolution();
        settings.cycle_resolution();
        assert_eq!(settings.resolution, (800, 600));

        settings.resolution = (1920, 1080);
        settings.cycle_resolution();
        assert_eq!(settings.resolution, RESOLUTIONS[0]);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let json = r#"{"volume": 70, "difficulty": 2}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.volume, 70);
        assert_eq!(settings.difficulty, 2);
        assert_eq!(settings.resolution, (800, 600));
        assert!(!settings.fullscreen);
        assert_eq!(settings.ruleset, Ruleset::Pursuit);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["resolution"], serde_json::json!([800, 600]));
        assert_eq!(json["ruleset"], "pursuit");
    }

    #[test]
    fn test_sanitize_clamps() {
        let mut settings = Settings {
            volume: 250,
            difficulty: 9,
            ..Default::default()
        };
        assert!(settings.sanitize());
        assert_eq!(settings.volume, 100);
        assert_eq!(settings.difficulty, 3);
        assert!(!settings.sanitize());
    }

    #[test]
    fn test_ruleset_stored_lowercase() {
        let settings = Settings {
            ruleset: Ruleset::Classic,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains(r#""ruleset":"classic""#));
        assert!(serde_json::from_str::<Settings>(r#"{"ruleset": "arcade"}"#).is_err());
    }
}
