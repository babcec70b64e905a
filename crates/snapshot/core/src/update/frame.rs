use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::EntityUpdate;
use crate::patch::Patch;
use crate::record::MarketListing;

/// Config block of a frame, keyed by the server's constant names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigUpdate {
    #[serde(rename = "PLAYER_DEATH_FOG", skip_serializing_if = "Patch::is_absent")]
    pub death_fog_start: Patch<u64>,
    #[serde(
        rename = "PLAYER_DEATH_FOG_FINAL_SIZE",
        skip_serializing_if = "Patch::is_absent"
    )]
    pub death_fog_final_size: Patch<u32>,
    #[serde(rename = "PLAYER_DEATH_FOG_SPEED", skip_serializing_if = "Patch::is_absent")]
    pub death_fog_speed: Patch<f64>,
}

/// One simulation tick as pushed by the server.
///
/// Entity maps are keyed by the entity id rendered as a string. An entity
/// missing from its map is gone from the world as of this frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotFrame {
    /// Width of the lava border, in tiles.
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub border: Patch<u32>,
    /// Side length of the square map, in tiles.
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub size: Patch<u32>,
    /// Per-tile resource values, row-major.
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub resource: Patch<Vec<Vec<f64>>>,
    pub player: BTreeMap<String, EntityUpdate>,
    pub npc: BTreeMap<String, EntityUpdate>,
    /// Centre of the view, `[r, c]`.
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub pos: Patch<Vec<i64>>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub wilderness: Patch<i64>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub market: Patch<BTreeMap<String, MarketListing>>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub config: Patch<ConfigUpdate>,
}
