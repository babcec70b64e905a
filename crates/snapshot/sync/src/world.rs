//! The followed world: entities plus the map, market and config blocks.

use std::collections::BTreeMap;

use snapshot_core::{MarketListing, Merge, Patch, SnapshotFrame, WorldConfig};

use crate::config::SyncConfig;
use crate::decode::{DecodedFrame, decode_frame};
use crate::error::{Result, SyncError};
use crate::events::SyncEvent;
use crate::fog::DeathFog;
use crate::registry::EntityRegistry;
use crate::teams::{TeamStanding, standings};

/// Map block of the snapshot. Each field keeps its last reported value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapInfo {
    pub size: Option<u32>,
    pub border: Option<u32>,
    /// Per-tile resource values, row-major.
    pub resources: Option<Vec<Vec<f64>>>,
    /// Centre of the view as `(r, c)`.
    pub view_centre: Option<(i64, i64)>,
    pub wilderness: Option<i64>,
}

impl MapInfo {
    fn merge_frame(&mut self, frame: &SnapshotFrame) {
        frame.size.assign_some(&mut self.size);
        frame.border.assign_some(&mut self.border);
        frame.resource.assign_some(&mut self.resources);
        frame.wilderness.assign_some(&mut self.wilderness);

        if let Some(pos) = frame.pos.as_value() {
            match pos.as_slice() {
                &[r, c] => self.view_centre = Some((r, c)),
                _ => tracing::warn!("ignoring view position with {} coordinates", pos.len()),
            }
        }
    }

    pub fn resource_at(&self, r: usize, c: usize) -> Option<f64> {
        self.resources.as_ref()?.get(r)?.get(c).copied()
    }
}

/// Outcome of applying one frame.
#[derive(Debug, Default)]
pub struct FrameReport {
    /// Tick of the applied frame, counted from 1.
    pub tick: u64,
    pub events: Vec<SyncEvent>,
    /// Entity entries skipped by lenient decoding.
    pub rejected: Vec<SyncError>,
    pub market_updated: bool,
    pub config_updated: bool,
}

impl FrameReport {
    pub fn spawned(&self) -> usize {
        self.count(|event| matches!(event, SyncEvent::Spawned { .. }))
    }

    pub fn updated(&self) -> usize {
        self.count(|event| matches!(event, SyncEvent::Updated { .. }))
    }

    pub fn removed(&self) -> usize {
        self.count(|event| matches!(event, SyncEvent::Removed { .. }))
    }

    fn count(&self, predicate: impl Fn(&SyncEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}

/// Client-side state rebuilt from the snapshot stream.
#[derive(Debug, Default)]
pub struct World {
    config: SyncConfig,
    tick: u64,
    registry: EntityRegistry,
    map: MapInfo,
    market: BTreeMap<String, MarketListing>,
    settings: WorldConfig,
}

impl World {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Number of frames applied so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn map(&self) -> &MapInfo {
        &self.map
    }

    pub fn market(&self) -> &BTreeMap<String, MarketListing> {
        &self.market
    }

    /// Server tunables as pushed so far.
    pub fn settings(&self) -> &WorldConfig {
        &self.settings
    }

    /// Decodes and applies one frame of JSON.
    ///
    /// A frame rejected by decoding leaves the world untouched, tick included.
    pub fn apply_json(&mut self, text: &str) -> Result<FrameReport> {
        let decoded = decode_frame(text, self.config.strict)?;
        Ok(self.apply_frame(decoded))
    }

    pub fn apply_frame(&mut self, decoded: DecodedFrame) -> FrameReport {
        self.tick += 1;
        let frame = &decoded.frame;

        self.map.merge_frame(frame);

        let market_updated = match &frame.market {
            Patch::Absent => false,
            Patch::Null => {
                self.market.clear();
                true
            }
            Patch::Value(listings) => {
                self.market.clone_from(listings);
                true
            }
        };

        let config_updated = match frame.config.as_value() {
            Some(update) => {
                self.settings.merge(update);
                true
            }
            None => false,
        };

        let events = self.registry.apply(&decoded, self.config.retain_removed);

        let report = FrameReport {
            tick: self.tick,
            events,
            rejected: decoded.rejected,
            market_updated,
            config_updated,
        };
        tracing::debug!(
            "tick {}: {} spawned, {} updated, {} removed, {} rejected",
            report.tick,
            report.spawned(),
            report.updated(),
            report.removed(),
            report.rejected.len()
        );
        report
    }

    /// Fog geometry, once the map size and border are known.
    pub fn fog(&self) -> Option<DeathFog> {
        Some(DeathFog::new(self.map.size?, self.map.border?, &self.settings))
    }

    pub fn standings(&self) -> Vec<TeamStanding> {
        standings(self.registry.players())
    }

    /// Drops everything and starts over from tick 0.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_fields_keep_last_reported_values() {
        let mut world = World::default();
        world
            .apply_json(r#"{"size": 64, "border": 8, "pos": [10, 12], "resource": [[0.0, 1.0], [2.0, 3.0]]}"#)
            .unwrap();
        world.apply_json(r#"{"pos": [11, 12], "size": null}"#).unwrap();

        let map = world.map();
        assert_eq!(map.size, Some(64));
        assert_eq!(map.border, Some(8));
        assert_eq!(map.view_centre, Some((11, 12)));
        assert_eq!(map.resource_at(1, 0), Some(2.0));
        assert_eq!(map.resource_at(5, 0), None);
        assert_eq!(world.tick(), 2);
    }

    #[test]
    fn market_is_replaced_wholesale() {
        let mut world = World::default();
        world
            .apply_json(r#"{"market": {"Ration": {"price": 2.0, "supply": 5}, "Arrow": {"price": 1.0, "supply": 50}}}"#)
            .unwrap();

        let report = world.apply_json(r#"{"market": {"Ration": {"price": 3.0, "supply": 4}}}"#).unwrap();
        assert!(report.market_updated);
        assert_eq!(world.market().len(), 1);
        assert_eq!(world.market()["Ration"].price, 3.0);

        let report = world.apply_json("{}").unwrap();
        assert!(!report.market_updated);
        assert_eq!(world.market().len(), 1);
    }

    #[test]
    fn config_drives_the_fog() {
        let mut world = World::default();
        assert!(world.fog().is_none());

        let report = world
            .apply_json(
                r#"{
                    "size": 20, "border": 2,
                    "config": {"PLAYER_DEATH_FOG": 1, "PLAYER_DEATH_FOG_FINAL_SIZE": 2, "PLAYER_DEATH_FOG_SPEED": 1.0}
                }"#,
            )
            .unwrap();
        assert!(report.config_updated);

        let fog = world.fog().unwrap();
        assert_eq!(fog.step_at(world.tick()), 1);
        assert_eq!(fog.max_step(), 6);

        world.apply_json(r#"{"config": {"PLAYER_DEATH_FOG_SPEED": 0.5}}"#).unwrap();
        assert_eq!(world.settings().fog_final_size(), 2);
        assert_eq!(world.settings().fog_speed(), 0.5);
    }

    #[test]
    fn rejected_frame_leaves_the_world_untouched() {
        let mut world = World::new(SyncConfig::default());
        world.apply_json(r#"{"player": {"1": {"entID": 1}}}"#).unwrap();

        let error = world
            .apply_json(r#"{"size": 10, "player": {"1": {"entID": "one"}}}"#)
            .unwrap_err();

        assert!(matches!(error, SyncError::MalformedEntity { .. }));
        assert_eq!(world.tick(), 1);
        assert_eq!(world.map().size, None);
        assert!(world.registry().players().contains("1"));
    }

    #[test]
    fn reset_keeps_the_configuration() {
        let mut world = World::new(SyncConfig::default().with_retain_removed(true));
        world.apply_json(r#"{"player": {"1": {}}}"#).unwrap();

        world.reset();

        assert_eq!(world.tick(), 0);
        assert!(world.registry().is_empty());
        assert!(world.config().retain_removed);
    }
}
