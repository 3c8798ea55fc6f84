//! Menu models
//!
//! Layout and drawing belong to the renderer; these types only track which
//! entry is selected and what choosing it means.

pub mod menus;
pub mod shop;

pub use menus::{MainMenuChoice, SettingsChoice};
pub use shop::{LevelWallet, PurchaseOutcome, Shop, ShopEffect, ShopItem};

/// Selection within a fixed-length list; moving past either end wraps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCursor {
    pub selected: usize,
    pub len: usize,
}

impl MenuCursor {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn up(&mut self) {
        if self.len > 0 {
            self.selected = (self.selected + self.len - 1) % self.len;
        }
    }

    pub fn down(&mut self) {
        if self.len > 0 {
            self.selected = (self.selected + 1) % self.len;
        }
    }

    /// Apply navigation keys; returns true if the selection moved
    pub fn navigate(&mut self, up: bool, down: bool) -> bool {
        let before = self.selected;
        if up {
            self.up();
        }
        if down {
            self.down();
        }
        self.selected != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut cursor = MenuCursor::new(3);
        cursor.up();
        assert_eq!(cursor.selected, 2);
        cursor.down();
        assert_eq!(cursor.selected, 0);
        cursor.down();
        cursor.down();
        cursor.down();
        assert_eq!(cursor.selected, 0);
    }

    #[test]
    fn test_navigate_reports_movement() {
        let mut cursor = MenuCursor::new(4);
        assert!(cursor.navigate(false, true));
        assert!(!cursor.navigate(true, true));
        assert!(!cursor.navigate(false, false));
        assert_eq!(cursor.selected, 1);
    }

    #[test]
    fn test_empty_cursor_is_inert() {
        let mut cursor = MenuCursor::new(0);
        cursor.up();
        cursor.down();
        assert_eq!(cursor.selected, 0);
    }
}
