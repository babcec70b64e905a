//! What an entity did during the last tick.

use serde::{Deserialize, Serialize};

use super::ItemRecord;

/// Attack issued during the tick.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRecord {
    /// Entity id of the target.
    pub target: i64,
    /// Combat style name (`"Melee"`, `"Range"`, `"Mage"`).
    pub style: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseAction {
    pub item: ItemRecord,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyAction {
    pub item: ItemRecord,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellAction {
    pub item: ItemRecord,
    pub price: Option<u32>,
}

/// Sub-actions performed during the tick. Each one is cleared independently.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionsRecord {
    /// Movement direction name, when the entity moved.
    pub movement: Option<String>,
    pub use_item: Option<UseAction>,
    pub buy: Option<BuyAction>,
    pub sell: Option<SellAction>,
}

impl ActionsRecord {
    pub fn is_empty(&self) -> bool {
        self.movement.is_none() && self.use_item.is_none() && self.buy.is_none() && self.sell.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Damage dealt this tick. Overwritten by every merge, even with nothing.
    pub damage: Option<f64>,
    /// Overwritten by every merge, even with nothing.
    pub time_alive: Option<u32>,
    pub attack: Option<AttackRecord>,
    pub actions: Option<ActionsRecord>,
}
