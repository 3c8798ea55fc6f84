//! Screen flow
//!
//! The app owns settings, the save directory and audio, and moves between
//! the main menu, settings, shop and a running session. Every screen reads
//! input once per frame; nothing blocks.

use crate::audio::{AudioManager, Cue};
use crate::consts::NOTICE_TICKS;
use crate::persistence::SaveDir;
use crate::platform::InputState;
use crate::progress::PlayerProgress;
use crate::render::{Overlay, RenderSnapshot};
use crate::settings::Settings;
use crate::sim::{GameState, Player, SessionConfig, SessionExit, tick};
use crate::ui::{MainMenuChoice, MenuCursor, SettingsChoice, Shop};

/// Current screen
#[derive(Debug)]
pub enum Screen {
    MainMenu { cursor: MenuCursor },
    Settings { cursor: MenuCursor },
    /// Shop works on a copy of the saved player
    Shop { cursor: MenuCursor, player: Player },
    /// Timed message, then back to the main menu
    Message { text: String, ticks_left: u32 },
    InGame(Box<GameState>),
    Quit,
}

impl Screen {
    fn main_menu() -> Self {
        Screen::MainMenu {
            cursor: MenuCursor::new(MainMenuChoice::ALL.len()),
        }
    }
}

/// Seed increment between sessions
const SEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

pub struct App {
    screen: Screen,
    settings: Settings,
    store: SaveDir,
    audio: AudioManager,
    shop: Shop,
    /// Sessions play themselves (demo/headless)
    idle_mode: bool,
    next_seed: u64,
    sessions_started: u32,
}

impl App {
    /// Load settings and open the main menu
    ///
    /// A malformed settings file is logged and left on disk; defaults are used
    /// for this run.
    pub fn new(store: SaveDir, mut audio: AudioManager, seed: u64) -> Self {
        let settings = match store.load_settings() {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{} - using default settings", e);
                Settings::default()
            }
        };
        audio.set_volume(settings.volume);

        Self {
            screen: Screen::main_menu(),
            settings,
            store,
            audio,
            shop: Shop::default(),
            idle_mode: false,
            next_seed: seed,
            sessions_started: 0,
        }
    }

    pub fn with_idle_mode(mut self, idle_mode: bool) -> Self {
        self.idle_mode = idle_mode;
        self
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.screen, Screen::Quit)
    }

    /// Advance one frame and return what to draw
    pub fn frame(&mut self, input: &mut InputState) -> RenderSnapshot {
        if let Screen::InGame(state) = &mut self.screen {
            // The session handles quit itself so progress gets saved
            let tick_input = input.take_tick_input(self.idle_mode);
            tick(state, &tick_input);
            let events = state.drain_events();
            self.audio.play_events(&events);

            if let Some(exit) = state.exit_reason() {
                let state = std::mem::replace(&mut self.screen, Screen::Quit);
                if let Screen::InGame(state) = state {
                    self.finish_session(&state, exit);
                }
                return self.snapshot();
            }
            return RenderSnapshot::from_state(state);
        }

        if input.quit_requested() {
            log::info!("Quit requested");
            self.screen = Screen::Quit;
            return RenderSnapshot::default();
        }

        let pressed = input.drain_pressed();
        let mut moved = false;
        let mut next = None;

        match &mut self.screen {
            Screen::MainMenu { cursor } => {
                moved = cursor.navigate(pressed.up, pressed.down);
                if pressed.confirm {
                    next = Some(match MainMenuChoice::ALL[cursor.selected] {
                        MainMenuChoice::StartGame => self.new_session(),
                        MainMenuChoice::Settings => Screen::Settings {
                            cursor: MenuCursor::new(SettingsChoice::ALL.len()),
                        },
                        MainMenuChoice::Shop => Screen::Shop {
                            cursor: MenuCursor::new(self.shop.items.len()),
                            player: self.load_player(),
                        },
                        MainMenuChoice::Quit => Screen::Quit,
                    });
                }
            }
            Screen::Settings { cursor } => {
                moved = cursor.navigate(pressed.up, pressed.down);
                let back = pressed.pause
                    || (pressed.confirm
                        && SettingsChoice::ALL[cursor.selected].apply(&mut self.settings));
                if back {
                    if let Err(e) = self.store.save_settings(&self.settings) {
                        log::error!("{}", e);
                    }
                    self.audio.set_volume(self.settings.volume);
                    next = Some(Screen::main_menu());
                }
            }
            Screen::Shop { cursor, player } => {
                moved = cursor.navigate(pressed.up, pressed.down);
                if pressed.pause {
                    next = Some(Screen::main_menu());
                } else if pressed.confirm {
                    let outcome = self.shop.purchase(cursor.selected, player);
                    if let Err(e) = self.store.save_progress(&PlayerProgress::from_player(player)) {
                        log::error!("{}", e);
                    }
                    next = Some(Screen::Message {
                        text: outcome.message().to_string(),
                        ticks_left: NOTICE_TICKS,
                    });
                }
            }
            Screen::Message { ticks_left, .. } => {
                *ticks_left = ticks_left.saturating_sub(1);
                if *ticks_left == 0 {
                    next = Some(Screen::main_menu());
                }
            }
            Screen::InGame(_) | Screen::Quit => {}
        }

        if moved {
            self.audio.play(Cue::MenuMove);
        }
        if pressed.confirm || pressed.pause {
            self.audio.play(Cue::MenuConfirm);
        }
        if let Some(next) = next {
            self.screen = next;
        }
        self.snapshot()
    }

    /// Snapshot for the current screen
    pub fn snapshot(&self) -> RenderSnapshot {
        match &self.screen {
            Screen::MainMenu { cursor } => RenderSnapshot::menu(MainMenuChoice::view(*cursor)),
            Screen::Settings { cursor } => {
                RenderSnapshot::menu(SettingsChoice::view(&self.settings, *cursor))
            }
            Screen::Shop { cursor, player } => {
                RenderSnapshot::menu(self.shop.view(player, *cursor))
            }
            Screen::Message { text, .. } => RenderSnapshot {
                overlay: Some(Overlay::Notice(text.clone())),
                ..Default::default()
            },
            Screen::InGame(state) => RenderSnapshot::from_state(state),
            Screen::Quit => RenderSnapshot::default(),
        }
    }

    /// Saved player, or a fresh one if there is none (or it cannot be read)
    fn load_player(&self) -> Player {
        match self.store.load_progress() {
            Ok(Some(progress)) => progress.to_player(),
            Ok(None) => Player::default(),
            Err(e) => {
                log::error!("{} - starting with a fresh player", e);
                Player::default()
            }
        }
    }

    fn new_session(&mut self) -> Screen {
        let config = SessionConfig {
            seed: self.next_seed,
            rules: self.settings.ruleset.rules(),
            difficulty: self.settings.difficulty,
            viewport: self.settings.viewport(),
        };
        self.next_seed = self.next_seed.wrapping_add(SEED_STEP);
        self.sessions_started += 1;
        Screen::InGame(Box::new(GameState::new(config, self.load_player())))
    }

    /// Save progress (unless the player died) and pick the next screen
    fn finish_session(&mut self, state: &GameState, exit: SessionExit) {
        if !state.player.is_dead() {
            let progress = PlayerProgress::from_player(&state.player);
            if let Err(e) = self.store.save_progress(&progress) {
                log::error!("{}", e);
            }
        }
        self.audio.stop_all();
        self.screen = match exit {
            SessionExit::Restart => self.new_session(),
            SessionExit::MenuExit => Screen::main_menu(),
            SessionExit::QuitApp => Screen::Quit,
        };
    }
}
