//! Top-level player/NPC record.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{
    HistoryRecord, InventoryRecord, Profession, ResourceGroupRecord, SkillGroupRecord,
};

/// Server-assigned entity id (`entID`).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(pub i64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which snapshot collection an entity comes from.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Player,
    Npc,
}

/// Placement and presentation info.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRecord {
    /// Row on the map.
    pub r: Option<i32>,
    /// Column on the map.
    pub c: Option<i32>,
    pub name: Option<String>,
    pub color: Option<String>,
    pub population: Option<i32>,
    /// Non-zero when this entity is the locally controlled one.
    pub is_self: Option<i32>,
    pub level: Option<u32>,
    /// Sum of equipped item levels.
    pub item_level: Option<u32>,
}

impl BaseRecord {
    pub fn position(&self) -> Option<(i32, i32)> {
        Some((self.r?, self.c?))
    }
}

/// Leaderboard counters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub player_defeats: u32,
    pub time_alive: u32,
    pub gold: u32,
    pub damage_taken: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Remaining ticks the entity is frozen for.
    pub freeze: u32,
}

/// A worn armour piece as reported in an NPC loadout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorPiece {
    pub level: Option<u32>,
    pub color: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutRecord {
    pub chestplate: Option<ArmorPiece>,
    pub platelegs: Option<ArmorPiece>,
}

/// Persistent client-side state of one player or NPC.
///
/// Created once when the entity first appears and merged into on every
/// subsequent snapshot. Nested composites keep their identity across merges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub kind: EntityKind,
    pub ent_id: Option<EntityId>,
    /// Population ("ann") the entity belongs to.
    pub ann_id: Option<i32>,
    pub alive: bool,
    pub base: BaseRecord,
    pub resources: ResourceGroupRecord,
    pub skills: SkillGroupRecord,
    pub metrics: MetricsRecord,
    pub inventory: Option<InventoryRecord>,
    pub history: Option<HistoryRecord>,
    pub status: StatusRecord,
    pub loadout: LoadoutRecord,
}

impl EntityRecord {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            ent_id: None,
            ann_id: None,
            alive: false,
            base: BaseRecord::default(),
            resources: ResourceGroupRecord::empty(),
            skills: SkillGroupRecord::empty(),
            metrics: MetricsRecord::default(),
            inventory: None,
            history: None,
            status: StatusRecord::default(),
            loadout: LoadoutRecord::default(),
        }
    }

    pub fn player() -> Self {
        Self::new(EntityKind::Player)
    }

    pub fn npc() -> Self {
        Self::new(EntityKind::Npc)
    }

    /// Population used for team grouping: `base.population`, falling back to `annID`.
    pub fn population(&self) -> Option<i32> {
        self.base.population.or(self.ann_id)
    }

    pub fn name(&self) -> &str {
        self.base.name.as_deref().unwrap_or_default()
    }

    pub fn profession(&self) -> Profession {
        self.skills.dominant_profession()
    }

    pub fn is_frozen(&self) -> bool {
        self.status.freeze > 0
    }
}
