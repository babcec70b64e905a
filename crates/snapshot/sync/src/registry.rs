//! Per-kind entity collections driven by frames.
//!
//! Records are boxed so that a record keeps its address for as long as it is
//! tracked, no matter how the surrounding map reorganises itself.

use std::collections::{BTreeMap, BTreeSet};

use snapshot_core::{EntityChanges, EntityId, EntityKind, EntityRecord, EntityUpdate, Merge};

use crate::decode::DecodedFrame;
use crate::events::SyncEvent;

#[derive(Debug)]
struct Tracked {
    record: Box<EntityRecord>,
    removed: bool,
}

/// All entities of one kind, keyed by the frame's entity key.
#[derive(Debug)]
pub struct EntityCollection {
    kind: EntityKind,
    entries: BTreeMap<String, Tracked>,
}

impl EntityCollection {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            entries: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Number of entities present in the latest frame.
    pub fn len(&self) -> usize {
        self.entries.values().filter(|tracked| !tracked.removed).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of tracked records, removed ones included.
    pub fn tracked_len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Record of an entity present in the latest frame.
    pub fn get(&self, key: &str) -> Option<&EntityRecord> {
        self.entries
            .get(key)
            .filter(|tracked| !tracked.removed)
            .map(|tracked| tracked.record.as_ref())
    }

    /// Record of an entity, whether or not it is still present.
    pub fn get_retained(&self, key: &str) -> Option<&EntityRecord> {
        self.entries.get(key).map(|tracked| tracked.record.as_ref())
    }

    pub fn is_removed(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|tracked| tracked.removed)
    }

    /// Entities present in the latest frame, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntityRecord)> + '_ {
        self.entries
            .iter()
            .filter(|(_, tracked)| !tracked.removed)
            .map(|(key, tracked)| (key.as_str(), tracked.record.as_ref()))
    }

    /// Every tracked record, with its removed flag.
    pub fn iter_retained(&self) -> impl Iterator<Item = (&str, &EntityRecord, bool)> + '_ {
        self.entries
            .iter()
            .map(|(key, tracked)| (key.as_str(), tracked.record.as_ref(), tracked.removed))
    }

    /// Applies one frame's entries for this kind.
    ///
    /// Entries in `updates` are spawned or merged. Tracked entities that are
    /// neither updated nor listed in `keep` are removed.
    pub fn apply(
        &mut self,
        updates: &BTreeMap<String, EntityUpdate>,
        keep: &BTreeSet<&str>,
        retain_removed: bool,
        events: &mut Vec<SyncEvent>,
    ) {
        let kind = self.kind;

        for (key, update) in updates {
            match self.entries.get_mut(key) {
                None => {
                    let mut record = Box::new(EntityRecord::new(kind));
                    record.merge(update);
                    tracing::debug!("spawned {kind} {key} ({:?})", record.base.name);
                    self.entries.insert(
                        key.clone(),
                        Tracked {
                            record,
                            removed: false,
                        },
                    );
                    events.push(SyncEvent::Spawned {
                        kind,
                        key: key.clone(),
                    });
                }
                Some(tracked) => {
                    let changes = EntityChanges::merge_tracked(&mut tracked.record, update);

                    if tracked.removed {
                        tracked.removed = false;
                        tracing::debug!("revived {kind} {key}");
                        events.push(SyncEvent::Revived {
                            kind,
                            key: key.clone(),
                        });
                    } else if let Some(changes) = changes {
                        tracing::trace!("{kind} {key} changed: {:?}", changes.fields);
                        events.push(SyncEvent::Updated {
                            kind,
                            key: key.clone(),
                            fields: changes.fields,
                        });
                    }
                }
            }
        }

        let departed: Vec<String> = self
            .entries
            .iter()
            .filter(|(key, tracked)| {
                !tracked.removed && !updates.contains_key(key.as_str()) && !keep.contains(key.as_str())
            })
            .map(|(key, _)| key.clone())
            .collect();

        for key in departed {
            if retain_removed {
                if let Some(tracked) = self.entries.get_mut(&key) {
                    tracked.removed = true;
                }
            } else {
                self.entries.remove(&key);
            }
            tracing::debug!("removed {kind} {key}");
            events.push(SyncEvent::Removed { kind, key });
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Players and NPCs of the followed world.
#[derive(Debug)]
pub struct EntityRegistry {
    players: EntityCollection,
    npcs: EntityCollection,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            players: EntityCollection::new(EntityKind::Player),
            npcs: EntityCollection::new(EntityKind::Npc),
        }
    }

    pub fn players(&self) -> &EntityCollection {
        &self.players
    }

    pub fn npcs(&self) -> &EntityCollection {
        &self.npcs
    }

    pub fn collection(&self, kind: EntityKind) -> &EntityCollection {
        match kind {
            EntityKind::Player => &self.players,
            EntityKind::Npc => &self.npcs,
        }
    }

    pub fn collection_mut(&mut self, kind: EntityKind) -> &mut EntityCollection {
        match kind {
            EntityKind::Player => &mut self.players,
            EntityKind::Npc => &mut self.npcs,
        }
    }

    /// Applies the entity part of a decoded frame, players first.
    pub fn apply(&mut self, decoded: &DecodedFrame, retain_removed: bool) -> Vec<SyncEvent> {
        let mut events = Vec::new();

        for kind in [EntityKind::Player, EntityKind::Npc] {
            let keep: BTreeSet<&str> = decoded.rejected_keys(kind).collect();
            self.collection_mut(kind)
                .apply(decoded.updates(kind), &keep, retain_removed, &mut events);
        }

        events
    }

    /// Looks up a present entity by server id.
    pub fn find(&self, id: EntityId) -> Option<(EntityKind, &EntityRecord)> {
        [&self.players, &self.npcs].into_iter().find_map(|collection| {
            collection
                .iter()
                .find(|(_, record)| record.ent_id == Some(id))
                .map(|(_, record)| (collection.kind(), record))
        })
    }

    /// The player flagged as the local agent, if any.
    pub fn self_player(&self) -> Option<&EntityRecord> {
        self.players
            .iter()
            .map(|(_, record)| record)
            .find(|record| record.base.is_self.is_some_and(|flag| flag != 0))
    }

    pub fn len(&self) -> usize {
        self.players.len() + self.npcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
