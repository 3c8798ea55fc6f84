//! Sound cue playback
//!
//! Fire-and-forget: the game asks for a cue and moves on. With no backend,
//! or with a cue whose asset file is missing, playback is silently skipped.

use std::collections::HashSet;
use std::path::Path;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Sword swing
    Attack,
    /// Enemy killed by a swing
    EnemyDown,
    /// Artifact collected
    Pickup,
    /// Level reached
    LevelUp,
    /// Wave cleared
    WaveClear,
    /// Player died
    GameOver,
    /// Menu selection moved
    MenuMove,
    /// Menu entry chosen
    MenuConfirm,
}

impl Cue {
    pub const ALL: [Cue; 8] = [
        Cue::Attack,
        Cue::EnemyDown,
        Cue::Pickup,
        Cue::LevelUp,
        Cue::WaveClear,
        Cue::GameOver,
        Cue::MenuMove,
        Cue::MenuConfirm,
    ];

    /// Asset file name under the sound directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Cue::Attack => "attack.wav",
            Cue::EnemyDown => "enemy_down.wav",
            Cue::Pickup => "pickup.wav",
            Cue::LevelUp => "level_up.wav",
            Cue::WaveClear => "wave_clear.wav",
            Cue::GameOver => "game_over.wav",
            Cue::MenuMove => "menu_move.wav",
            Cue::MenuConfirm => "menu_confirm.wav",
        }
    }

    /// Cues for a simulation event
    pub fn for_event(event: &GameEvent) -> Vec<Cue> {
        match event {
            GameEvent::AttackSwing { kills, .. } if *kills > 0 => vec![Cue::Attack, Cue::EnemyDown],
            GameEvent::AttackSwing { .. } => vec![Cue::Attack],
            GameEvent::ArtifactCollected => vec![Cue::Pickup],
            GameEvent::LevelUp { .. } => vec![Cue::LevelUp],
            GameEvent::WaveCleared { .. } => vec![Cue::WaveClear],
            GameEvent::GameOver => vec![Cue::GameOver],
            GameEvent::MenuMoved => vec![Cue::MenuMove],
            GameEvent::Resumed | GameEvent::SessionEnded(_) => vec![Cue::MenuConfirm],
            _ => Vec::new(),
        }
    }
}

/// Something that can actually make noise
pub trait AudioBackend {
    /// Start a cue at `volume` (0.0 - 1.0)
    fn play(&mut self, cue: Cue, volume: f32);
    fn stop_all(&mut self);
}

/// Backend that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, cue: Cue, volume: f32) {
        log::debug!("♪ {:?} @ {:.2}", cue, volume);
    }

    fn stop_all(&mut self) {
        log::debug!("♪ stop all");
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    /// Cues whose asset is missing
    disabled: HashSet<Cue>,
    /// Master volume (0.0 - 1.0)
    volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::disabled()
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend: Some(backend),
            disabled: HashSet::new(),
            volume: 0.5,
        }
    }

    /// No backend: every call is a no-op
    pub fn disabled() -> Self {
        log::warn!("No audio backend - audio disabled");
        Self {
            backend: None,
            disabled: HashSet::new(),
            volume: 0.5,
        }
    }

    /// Disable every cue whose asset is missing from `dir`
    pub fn check_assets(&mut self, dir: &Path) {
        for cue in Cue::ALL {
            if !dir.join(cue.file_name()).is_file() {
                self.disabled.insert(cue);
            }
        }
        if !self.disabled.is_empty() {
            log::warn!(
                "{} sound(s) missing in {}, those cues are disabled",
                self.disabled.len(),
                dir.display()
            );
        }
    }

    pub fn is_cue_enabled(&self, cue: Cue) -> bool {
        self.backend.is_some() && !self.disabled.contains(&cue)
    }

    /// Set master volume (0 - 100)
    pub fn set_volume(&mut self, level: u8) {
        self.volume = level.min(100) as f32 / 100.0;
    }

    /// Play a sound effect; volume 0 mutes
    pub fn play(&mut self, cue: Cue) {
        let vol = self.volume;
        if vol <= 0.0 || !self.is_cue_enabled(cue) {
            return;
        }
        if let Some(backend) = self.backend.as_mut() {
            backend.play(cue, vol);
        }
    }

    pub fn stop_all(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            backend.stop_all();
        }
    }

    /// Play the cues for a batch of simulation events
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if matches!(event, GameEvent::GameOver) {
                self.stop_all();
            }
            for cue in Cue::for_event(event) {
                self.play(cue);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<(Cue, f32)>>>);

    impl AudioBackend for Recorder {
        fn play(&mut self, cue: Cue, volume: f32) {
            self.0.borrow_mut().push((cue, volume));
        }

        fn stop_all(&mut self) {
            self.0.borrow_mut().clear();
        }
    }

    #[test]
    fn test_disabled_manager_is_silent() {
        let mut audio = AudioManager::disabled();
        audio.play(Cue::Attack);
        audio.stop_all();
        assert!(!audio.is_cue_enabled(Cue::Attack));
    }

    #[test]
    fn test_play_uses_volume_and_zero_mutes() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()));
        audio.set_volume(80);
        audio.play(Cue::Pickup);
        audio.set_volume(0);
        audio.play(Cue::Pickup);
        assert_eq!(*recorder.0.borrow(), vec![(Cue::Pickup, 0.8)]);
    }

    #[test]
    fn test_missing_assets_disable_cues() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(Cue::Attack.file_name()), b"RIFF").unwrap();

        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()));
        audio.check_assets(dir.path());
        assert!(audio.is_cue_enabled(Cue::Attack));
        assert!(!audio.is_cue_enabled(Cue::LevelUp));

        audio.play(Cue::LevelUp);
        audio.play(Cue::Attack);
        assert_eq!(recorder.0.borrow().len(), 1);
    }

    #[test]
    fn test_event_mapping() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()));
        audio.play_events(&[
            GameEvent::AttackSwing { hits: 1, kills: 1 },
            GameEvent::PlayerHurt { damage: 1 },
            GameEvent::WaveCleared { wave: 1 },
        ]);
        let cues: Vec<Cue> = recorder.0.borrow().iter().map(|(c, _)| *c).collect();
        assert_eq!(cues, vec![Cue::Attack, Cue::EnemyDown, Cue::WaveClear]);
    }
}
