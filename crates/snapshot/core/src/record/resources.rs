//! Resource meters (health, food, water).

use serde::{Deserialize, Serialize};
use strum::EnumCount;

/// The closed set of resource meters an entity carries.
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
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResourceKind {
    Health,
    Food,
    Water,
}

/// Current and maximum value of one meter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub val: u32,
    pub max: u32,
}

impl ResourceRecord {
    pub const fn new(val: u32, max: u32) -> Self {
        Self { val, max }
    }

    /// Fill ratio in `[0, 1]`; an unset maximum reads as empty.
    pub fn ratio(&self) -> f32 {
        if self.max == 0 {
            0.0
        } else {
            (self.val.min(self.max) as f32) / (self.max as f32)
        }
    }

    pub const fn is_depleted(&self) -> bool {
        self.val == 0
    }
}

/// Fixed table of meters, one optional slot per [`ResourceKind`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroupRecord {
    meters: [Option<ResourceRecord>; ResourceKind::COUNT],
}

impl ResourceGroupRecord {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ResourceKind) -> Option<&ResourceRecord> {
        self.meters[kind as usize].as_ref()
    }

    pub fn get_or_insert(&mut self, kind: ResourceKind) -> &mut ResourceRecord {
        self.meters[kind as usize].get_or_insert_with(ResourceRecord::default)
    }

    pub fn insert(&mut self, kind: ResourceKind, record: ResourceRecord) -> Option<ResourceRecord> {
        self.meters[kind as usize].replace(record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, &ResourceRecord)> + '_ {
        use strum::IntoEnumIterator;

        ResourceKind::iter().filter_map(move |kind| self.get(kind).map(|record| (kind, record)))
    }
}
