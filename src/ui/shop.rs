//! Level shop
//!
//! Items are paid for with player levels. Cost handling goes through
//! `LevelWallet` so nothing else needs to know levels double as currency.

use super::MenuCursor;
use crate::consts::ARTIFACT_HEAL;
use crate::render::MenuView;
use crate::sim::Player;

/// Something that can pay in levels
pub trait LevelWallet {
    fn levels(&self) -> u32;

    /// Deduct `cost` levels; false (and no change) if there are not enough
    fn spend_levels(&mut self, cost: u32) -> bool;
}

/// Level the player can never be spent below
pub const MIN_LEVEL: u32 = 1;

impl LevelWallet for Player {
    fn levels(&self) -> u32 {
        self.level
    }

    fn spend_levels(&mut self, cost: u32) -> bool {
        if self.level < cost + MIN_LEVEL {
            return false;
        }
        self.level -= cost;
        true
    }
}

/// What an item does once bought
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopEffect {
    /// +1 sword level, +5 damage
    UpgradeSword,
    /// Heal, capped at max health
    Heal(i32),
    /// +1 level
    BonusLevel,
}

impl ShopEffect {
    pub fn apply(&self, player: &mut Player) {
        match self {
            ShopEffect::UpgradeSword => player.upgrade_sword(),
            ShopEffect::Heal(amount) => player.heal(*amount),
            ShopEffect::BonusLevel => player.level = player.level.saturating_add(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopItem {
    pub name: &'static str,
    /// Price in levels
    pub cost: u32,
    pub effect: ShopEffect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased,
    NotEnoughLevels,
}

impl PurchaseOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            PurchaseOutcome::Purchased => "Purchase complete!",
            PurchaseOutcome::NotEnoughLevels => "Not enough levels!",
        }
    }
}

/// The shop's stock
#[derive(Debug, Clone)]
pub struct Shop {
    pub items: Vec<ShopItem>,
}

impl Default for Shop {
    fn default() -> Self {
        Self {
            items: vec![
                ShopItem {
                    name: "Sword upgrade (+5 damage)",
                    cost: 5,
                    effect: ShopEffect::UpgradeSword,
                },
                ShopItem {
                    name: "Health potion (+20 HP)",
                    cost: 3,
                    effect: ShopEffect::Heal(ARTIFACT_HEAL),
                },
                ShopItem {
                    name: "Level boost (+1)",
                    cost: 10,
                    effect: ShopEffect::BonusLevel,
                },
            ],
        }
    }
}

impl Shop {
    /// Buy item `index` for `player`
    ///
    /// The cost is taken before the effect, so a level boost bought with
    /// levels still nets the buyer a loss. Out-of-range indices cannot be
    /// afforded.
    pub fn purchase(&self, index: usize, player: &mut Player) -> PurchaseOutcome {
        let Some(item) = self.items.get(index) else {
            return PurchaseOutcome::NotEnoughLevels;
        };
        if !player.spend_levels(item.cost) {
            log::debug!("Cannot afford {} ({} < {})", item.name, player.levels(), item.cost);
            return PurchaseOutcome::NotEnoughLevels;
        }
        item.effect.apply(player);
        log::info!("Bought {} for {} levels", item.name, item.cost);
        PurchaseOutcome::Purchased
    }

    pub fn view(&self, player: &Player, cursor: MenuCursor) -> MenuView {
        MenuView::new(
            "Shop",
            self.items
                .iter()
                .map(|item| format!("{} - {} levels", item.name, item.cost))
                .collect(),
            cursor.selected,
        )
        .with_footer(format!("Your levels: {}", player.levels()))
    }
}
