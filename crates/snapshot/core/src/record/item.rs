//! Single item carried, worn, or traded by an entity.

use serde::{Deserialize, Serialize};

/// One inventory or equipment item.
///
/// Every field stays `None` until an update first populates it. Merges only
/// ever overwrite fields; an item field is never cleared by an update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub color: Option<String>,
    /// Item name, e.g. `"Sword"` or `"Ration"`.
    pub item: Option<String>,
    pub level: Option<u32>,
    pub capacity: Option<u32>,
    pub quantity: Option<u32>,
    pub melee_attack: Option<u32>,
    pub range_attack: Option<u32>,
    pub mage_attack: Option<u32>,
    pub melee_defense: Option<u32>,
    pub range_defense: Option<u32>,
    pub mage_defense: Option<u32>,
    pub health_restore: Option<u32>,
    /// Food/water restored on use.
    pub resource_restore: Option<u32>,
    pub price: Option<u32>,
}

impl ItemRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item name, or an empty string when the server never sent one.
    pub fn name(&self) -> &str {
        self.item.as_deref().unwrap_or_default()
    }

    /// Sum of the three attack modifiers.
    pub fn total_attack(&self) -> u64 {
        [self.melee_attack, self.range_attack, self.mage_attack]
            .into_iter()
            .flatten()
            .map(u64::from)
            .sum()
    }

    /// Sum of the three defense modifiers.
    pub fn total_defense(&self) -> u64 {
        [self.melee_defense, self.range_defense, self.mage_defense]
            .into_iter()
            .flatten()
            .map(u64::from)
            .sum()
    }
}
