use serde::{Deserialize, Serialize};

use crate::patch::Patch;

/// Partial [`ItemRecord`](crate::record::ItemRecord) as sent on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub color: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub item: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub level: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub capacity: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub quantity: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub melee_attack: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub range_attack: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub mage_attack: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub melee_defense: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub range_defense: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub mage_defense: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub health_restore: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub resource_restore: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub price: Patch<u32>,
}

impl ItemUpdate {
    /// Update carrying only a name, handy for building fixtures.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            item: Patch::Value(name.into()),
            ..Self::default()
        }
    }
}
