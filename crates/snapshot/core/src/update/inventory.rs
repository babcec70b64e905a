use serde::{Deserialize, Serialize};

use super::ItemUpdate;
use crate::patch::Patch;
use crate::record::EquipmentSlot;

/// Partial equipment block.
///
/// The server only includes a slot key while something is equipped there.
/// The aggregate keys keep the server's `meleee_` spelling on the wire and
/// accept the corrected spelling too.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentUpdate {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub held: Patch<ItemUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub hat: Patch<ItemUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub top: Patch<ItemUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub bottom: Patch<ItemUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub ammunition: Patch<ItemUpdate>,

    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub item_level: Patch<u32>,
    #[serde(
        rename = "meleee_attack",
        alias = "melee_attack",
        skip_serializing_if = "Patch::is_absent"
    )]
    pub melee_attack: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub range_attack: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub mage_attack: Patch<u32>,
    #[serde(
        rename = "meleee_defense",
        alias = "melee_defense",
        skip_serializing_if = "Patch::is_absent"
    )]
    pub melee_defense: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub range_defense: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub mage_defense: Patch<u32>,
}

impl EquipmentUpdate {
    pub fn slot(&self, slot: EquipmentSlot) -> &Patch<ItemUpdate> {
        match slot {
            EquipmentSlot::Held => &self.held,
            EquipmentSlot::Hat => &self.hat,
            EquipmentSlot::Top => &self.top,
            EquipmentSlot::Bottom => &self.bottom,
            EquipmentSlot::Ammunition => &self.ammunition,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryUpdate {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub items: Patch<Vec<ItemUpdate>>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub equipment: Patch<EquipmentUpdate>,
}
