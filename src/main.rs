//! Wave Survivor entry point
//!
//! Native headless runner: the game plays itself from the main menu, logs
//! the HUD once per second and quits after a fixed number of frames.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use wave_survivor::App;
use wave_survivor::app::Screen;
use wave_survivor::audio::{AudioManager, LogBackend};
use wave_survivor::consts::TICK_RATE;
use wave_survivor::persistence::SaveDir;
use wave_survivor::platform::{FrameLimiter, InputState, Key};
use wave_survivor::render::{LogRenderer, Renderer};
use wave_survivor::sim::GamePhase;

const DEFAULT_FRAMES: u64 = TICK_RATE as u64 * 60;

#[derive(Parser, Debug)]
#[command(name = "wave-survivor")]
#[command(about = "Top-down survival game, played headless by the autopilot")]
struct Args {
    /// Frames to run before quitting (30 per second)
    #[arg(default_value_t = DEFAULT_FRAMES)]
    frames: u64,

    /// Directory holding settings.json and progress.json
    #[arg(long, env = "WAVE_SURVIVOR_DIR", default_value = ".")]
    save_dir: PathBuf,

    /// Directory holding the sound cue files
    #[arg(long, default_value = "assets/sounds")]
    sound_dir: PathBuf,

    /// Seed for the first session (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,
}

/// Key taps standing in for a person at the keyboard
#[derive(Default)]
struct Driver {
    /// Key pressed last frame, released this frame
    held: Option<Key>,
    /// Game-over menu: move to "Exit to menu" before confirming
    moved_to_exit: bool,
}

impl Driver {
    fn drive(&mut self, app: &App, input: &mut InputState) {
        if let Some(key) = self.held.take() {
            input.key_up(key);
            return;
        }
        let key = match app.screen() {
            Screen::MainMenu { .. } if app.sessions_started() == 0 => Key::Confirm,
            Screen::MainMenu { .. } => {
                log::info!("Session over, quitting");
                input.request_quit();
                return;
            }
            Screen::InGame(state) => match state.phase {
                GamePhase::GameOver { .. } if !self.moved_to_exit => {
                    self.moved_to_exit = true;
                    Key::Down
                }
                GamePhase::GameOver { .. } => Key::Confirm,
                _ => return,
            },
            _ => return,
        };
        input.key_down(key);
        self.held = Some(key);
    }
}

fn main() {
    env_logger::init();
    log::info!("Wave Survivor (native) starting...");

    let args = Args::parse();
    let frames = args.frames;

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let store = SaveDir::new(args.save_dir);
    log::info!("Save directory: {}", store.root().display());

    let mut audio = AudioManager::new(Box::new(LogBackend));
    audio.check_assets(&args.sound_dir);

    let mut app = App::new(store, audio, seed).with_idle_mode(true);
    let mut input = InputState::new();
    let mut renderer = LogRenderer::default();
    let mut limiter = FrameLimiter::new(TICK_RATE);
    let mut driver = Driver::default();

    log::info!(
        "Running {} frames, {:?} each (seed {})",
        frames,
        limiter.frame_duration(),
        seed
    );
    let mut frame = 0;
    while app.is_running() {
        if frame == frames {
            log::info!("Frame limit reached");
            input.request_quit();
        }
        driver.drive(&app, &mut input);
        let snapshot = app.frame(&mut input);
        renderer.present(&snapshot);
        limiter.wait();
        frame += 1;
    }

    log::info!("Exited after {} frames", renderer.frames());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_default_to_one_minute() {
        let args = Args::try_parse_from(["wave-survivor", "--save-dir", "saves"]).unwrap();
        assert_eq!(args.frames, DEFAULT_FRAMES);
        assert_eq!(args.save_dir, PathBuf::from("saves"));
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_bad_frame_count_is_rejected() {
        assert!(Args::try_parse_from(["wave-survivor", "abc"]).is_err());
        assert!(Args::try_parse_from(["wave-survivor", "-5"]).is_err());
    }

    #[test]
    fn test_explicit_arguments() {
        let args =
            Args::try_parse_from(["wave-survivor", "90", "--seed", "7", "--sound-dir", "sfx"])
                .unwrap();
        assert_eq!(args.frames, 90);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.sound_dir, PathBuf::from("sfx"));
    }
}
