//! Keyboard state
//!
//! Movement is level-triggered (read from the held set every tick); attack,
//! pause, menu navigation, confirm and back are edge-triggered (key-down
//! events, consumed once).

use std::collections::{HashSet, VecDeque};

use crate::sim::{MoveInput, TickInput};

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Space
    Attack,
    /// Escape
    Pause,
    /// Enter
    Confirm,
}

/// Edge-triggered keys collected for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pressed {
    pub up: bool,
    pub down: bool,
    pub attack: bool,
    pub pause: bool,
    pub confirm: bool,
}

/// Current keyboard state fed by the host
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    events: VecDeque<Key>,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        // OS key repeat sends repeated downs; only the first is an edge
        if self.held.insert(key) {
            self.events.push_back(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Window closed
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Held arrow keys as movement
    pub fn movement(&self) -> MoveInput {
        MoveInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            up: self.is_held(Key::Up),
            down: self.is_held(Key::Down),
        }
    }

    /// Consume queued key-down events
    pub fn drain_pressed(&mut self) -> Pressed {
        let mut pressed = Pressed::default();
        for key in self.events.drain(..) {
            match key {
                Key::Up => pressed.up = true,
                Key::Down => pressed.down = true,
                Key::Attack => pressed.attack = true,
                Key::Pause => pressed.pause = true,
                Key::Confirm => pressed.confirm = true,
                Key::Left | Key::Right => {}
            }
        }
        pressed
    }

    /// Build the simulation input for this tick, consuming key-down events
    pub fn take_tick_input(&mut self, idle_mode: bool) -> TickInput {
        let pressed = self.drain_pressed();
        TickInput {
            movement: self.movement(),
            attack: pressed.attack,
            pause: pressed.pause,
            menu_up: pressed.up,
            menu_down: pressed.down,
            confirm: pressed.confirm,
            quit: self.quit,
            idle_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_is_level_triggered() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        for _ in 0..3 {
            let tick = input.take_tick_input(false);
            assert!(tick.movement.left);
        }
        input.key_up(Key::Left);
        assert!(!input.take_tick_input(false).movement.left);
    }

    #[test]
    fn test_attack_is_edge_triggered() {
        let mut input = InputState::new();
        input.key_down(Key::Attack);
        assert!(input.take_tick_input(false).attack);
        // Still held, but no new edge
        assert!(!input.take_tick_input(false).attack);

        // Key repeat while held is ignored
        input.key_down(Key::Attack);
        assert!(!input.take_tick_input(false).attack);

        input.key_up(Key::Attack);
        input.key_down(Key::Attack);
        assert!(input.take_tick_input(false).attack);
    }

    #[test]
    fn test_arrow_keys_double_as_menu_navigation() {
        let mut input = InputState::new();
        input.key_down(Key::Down);
        let tick = input.take_tick_input(false);
        assert!(tick.menu_down);
        assert!(tick.movement.down);
    }

    #[test]
    fn test_quit_is_sticky() {
        let mut input = InputState::new();
        input.request_quit();
        assert!(input.take_tick_input(false).quit);
        assert!(input.take_tick_input(false).quit);
    }
}
