use serde::{Deserialize, Serialize};

use super::{HistoryUpdate, InventoryUpdate};
use crate::patch::Patch;
use crate::record::{ResourceKind, SkillKind};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseUpdate {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub r: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub c: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub color: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub population: Patch<i32>,
    #[serde(rename = "self", skip_serializing_if = "Patch::is_absent")]
    pub is_self: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub level: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub item_level: Patch<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsUpdate {
    #[serde(rename = "PlayerDefeats", skip_serializing_if = "Patch::is_absent")]
    pub player_defeats: Patch<u32>,
    #[serde(rename = "TimeAlive", skip_serializing_if = "Patch::is_absent")]
    pub time_alive: Patch<u32>,
    #[serde(rename = "Gold", skip_serializing_if = "Patch::is_absent")]
    pub gold: Patch<u32>,
    #[serde(rename = "DamageTaken", skip_serializing_if = "Patch::is_absent")]
    pub damage_taken: Patch<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusUpdate {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub freeze: Patch<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmorPieceUpdate {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub level: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub color: Patch<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadoutUpdate {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub chestplate: Patch<ArmorPieceUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub platelegs: Patch<ArmorPieceUpdate>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillUpdate {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub exp: Patch<u64>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub level: Patch<u32>,
}

impl SkillUpdate {
    pub fn new(exp: u64, level: u32) -> Self {
        Self {
            exp: Patch::Value(exp),
            level: Patch::Value(level),
        }
    }
}

/// Skills block. One named key per [`SkillKind`], plus the aggregate level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroupUpdate {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub melee: Patch<SkillUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub range: Patch<SkillUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub mage: Patch<SkillUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub defense: Patch<SkillUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub fishing: Patch<SkillUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub hunting: Patch<SkillUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub food: Patch<SkillUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub carving: Patch<SkillUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub alchemy: Patch<SkillUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub herbalism: Patch<SkillUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub water: Patch<SkillUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub prospecting: Patch<SkillUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub level: Patch<u32>,
}

impl SkillGroupUpdate {
    pub fn get(&self, kind: SkillKind) -> &Patch<SkillUpdate> {
        match kind {
            SkillKind::Melee => &self.melee,
            SkillKind::Range => &self.range,
            SkillKind::Mage => &self.mage,
            SkillKind::Defense => &self.defense,
            SkillKind::Fishing => &self.fishing,
            SkillKind::Hunting => &self.hunting,
            SkillKind::Food => &self.food,
            SkillKind::Carving => &self.carving,
            SkillKind::Alchemy => &self.alchemy,
            SkillKind::Herbalism => &self.herbalism,
            SkillKind::Water => &self.water,
            SkillKind::Prospecting => &self.prospecting,
        }
    }

    pub fn get_mut(&mut self, kind: SkillKind) -> &mut Patch<SkillUpdate> {
        match kind {
            SkillKind::Melee => &mut self.melee,
            SkillKind::Range => &mut self.range,
            SkillKind::Mage => &mut self.mage,
            SkillKind::Defense => &mut self.defense,
            SkillKind::Fishing => &mut self.fishing,
            SkillKind::Hunting => &mut self.hunting,
            SkillKind::Food => &mut self.food,
            SkillKind::Carving => &mut self.carving,
            SkillKind::Alchemy => &mut self.alchemy,
            SkillKind::Herbalism => &mut self.herbalism,
            SkillKind::Water => &mut self.water,
            SkillKind::Prospecting => &mut self.prospecting,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceUpdate {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub val: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub max: Patch<u32>,
}

impl ResourceUpdate {
    pub fn new(val: u32, max: u32) -> Self {
        Self {
            val: Patch::Value(val),
            max: Patch::Value(max),
        }
    }
}

/// Resource block. Keys outside [`ResourceKind`] are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceGroupUpdate {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub health: Patch<ResourceUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub food: Patch<ResourceUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub water: Patch<ResourceUpdate>,
}

impl ResourceGroupUpdate {
    pub fn get(&self, kind: ResourceKind) -> &Patch<ResourceUpdate> {
        match kind {
            ResourceKind::Health => &self.health,
            ResourceKind::Food => &self.food,
            ResourceKind::Water => &self.water,
        }
    }

    pub fn get_mut(&mut self, kind: ResourceKind) -> &mut Patch<ResourceUpdate> {
        match kind {
            ResourceKind::Health => &mut self.health,
            ResourceKind::Food => &mut self.food,
            ResourceKind::Water => &mut self.water,
        }
    }
}

/// Per-entity entry of a snapshot frame (players and NPCs share the shape).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityUpdate {
    #[serde(rename = "entID", skip_serializing_if = "Patch::is_absent")]
    pub ent_id: Patch<i64>,
    #[serde(rename = "annID", skip_serializing_if = "Patch::is_absent")]
    pub ann_id: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub alive: Patch<bool>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub base: Patch<BaseUpdate>,
    #[serde(rename = "resource", skip_serializing_if = "Patch::is_absent")]
    pub resources: Patch<ResourceGroupUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub skills: Patch<SkillGroupUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub metrics: Patch<MetricsUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub inventory: Patch<InventoryUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub history: Patch<HistoryUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub status: Patch<StatusUpdate>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub loadout: Patch<LoadoutUpdate>,
}
