//! Main and settings menus

use super::MenuCursor;
use crate::render::MenuView;
use crate::settings::Settings;

/// Main menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    StartGame,
    Settings,
    Shop,
    Quit,
}

impl MainMenuChoice {
    pub const ALL: [MainMenuChoice; 4] = [Self::StartGame, Self::Settings, Self::Shop, Self::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            MainMenuChoice::StartGame => "Start game",
            MainMenuChoice::Settings => "Settings",
            MainMenuChoice::Shop => "Shop",
            MainMenuChoice::Quit => "Quit",
        }
    }

    pub fn view(cursor: MenuCursor) -> MenuView {
        MenuView::new(
            "Wave Survivor",
            Self::ALL.iter().map(|c| c.label().to_string()).collect(),
            cursor.selected,
        )
    }
}

/// Settings menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChoice {
    Volume,
    Difficulty,
    Resolution,
    Fullscreen,
    Rules,
    Back,
}

impl SettingsChoice {
    pub const ALL: [SettingsChoice; 6] = [
        Self::Volume,
        Self::Difficulty,
        Self::Resolution,
        Self::Fullscreen,
        Self::Rules,
        Self::Back,
    ];

    /// Entry text showing the current value
    pub fn label(&self, settings: &Settings) -> String {
        match self {
            SettingsChoice::Volume => format!("Volume: {}", settings.volume),
            SettingsChoice::Difficulty => format!("Difficulty: {}", settings.difficulty),
            SettingsChoice::Resolution => {
                format!("Resolution: {}x{}", settings.resolution.0, settings.resolution.1)
            }
            SettingsChoice::Fullscreen => {
                format!("Fullscreen: {}", if settings.fullscreen { "On" } else { "Off" })
            }
            SettingsChoice::Rules => format!("Rules: {}", settings.ruleset.as_str()),
            SettingsChoice::Back => "Back".to_string(),
        }
    }

    /// Change the setting for this entry; returns true for Back
    pub fn apply(&self, settings: &mut Settings) -> bool {
        match self {
            SettingsChoice::Volume => settings.cycle_volume(),
            SettingsChoice::Difficulty => settings.cycle_difficulty(),
            SettingsChoice::Resolution => settings.cycle_resolution(),
            SettingsChoice::Fullscreen => settings.toggle_fullscreen(),
            SettingsChoice::Rules => settings.cycle_ruleset(),
            SettingsChoice::Back => return true,
        }
        false
    }

    pub fn view(settings: &Settings, cursor: MenuCursor) -> MenuView {
        MenuView::new(
            "Settings",
            Self::ALL.iter().map(|c| c.label(settings)).collect(),
            cursor.selected,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_labels_track_values() {
        let mut settings = Settings::default();
        assert!(!SettingsChoice::Volume.apply(&mut settings));
        assert_eq!(SettingsChoice::Volume.label(&settings), "Volume: 60");
        SettingsChoice::Fullscreen.apply(&mut settings);
        assert_eq!(SettingsChoice::Fullscreen.label(&settings), "Fullscreen: On");
        assert_eq!(
            SettingsChoice::Resolution.label(&settings),
            "Resolution: 800x600"
        );
    }

    #[test]
    fn test_back_leaves_settings_untouched() {
        let mut settings = Settings::default();
        assert!(SettingsChoice::Back.apply(&mut settings));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_main_menu_view() {
        let mut cursor = MenuCursor::new(MainMenuChoice::ALL.len());
        cursor.down();
        let view = MainMenuChoice::view(cursor);
        assert_eq!(view.options[view.selected], "Settings");
    }
}
