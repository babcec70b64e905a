use super::EntityFields;
use crate::merge::Merge;
use crate::patch::Patch;
use crate::record::{EntityId, EntityRecord};
use crate::update::EntityUpdate;

/// Which parts of one entity changed across a merge.
///
/// Only the mask is kept; values are read from the record itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityChanges {
    pub id: Option<EntityId>,
    pub fields: EntityFields,
}

impl EntityChanges {
    /// Compares two versions of the same entity.
    ///
    /// Returns `None` if nothing changed.
    pub fn from_records(before: &EntityRecord, after: &EntityRecord) -> Option<Self> {
        let mut fields = EntityFields::empty();

        if before.alive != after.alive {
            fields |= EntityFields::ALIVE;
        }
        if before.ent_id != after.ent_id || before.ann_id != after.ann_id || before.base != after.base {
            fields |= EntityFields::BASE;
        }
        if before.resources != after.resources {
            fields |= EntityFields::RESOURCES;
        }
        if before.skills != after.skills {
            fields |= EntityFields::SKILLS;
        }
        if before.metrics != after.metrics {
            fields |= EntityFields::METRICS;
        }
        if before.inventory != after.inventory {
            fields |= EntityFields::INVENTORY;
        }
        if before.history != after.history {
            fields |= EntityFields::HISTORY;
        }
        if before.status != after.status {
            fields |= EntityFields::STATUS;
        }
        if before.loadout != after.loadout {
            fields |= EntityFields::LOADOUT;
        }

        if fields.is_empty() {
            None
        } else {
            Some(Self {
                id: after.ent_id,
                fields,
            })
        }
    }

    /// Merges `update` into `record` and reports what changed.
    ///
    /// Same result as comparing a full copy taken before the merge, but only
    /// the parts the update can reach are copied.
    pub fn merge_tracked(record: &mut EntityRecord, update: &EntityUpdate) -> Option<Self> {
        fn reached<T: Clone, U>(patch: &Patch<U>, part: &T) -> Option<T> {
            patch.is_value().then(|| part.clone())
        }
        fn reached_composite<T: Clone, U>(patch: &Patch<U>, part: &Option<T>) -> Option<Option<T>> {
            (!patch.is_absent()).then(|| part.clone())
        }

        let alive = record.alive;
        let identity = (record.ent_id, record.ann_id);
        let base = reached(&update.base, &record.base);
        let resources = reached(&update.resources, &record.resources);
        let skills = reached(&update.skills, &record.skills);
        let metrics = reached(&update.metrics, &record.metrics);
        let inventory = reached_composite(&update.inventory, &record.inventory);
        let history = reached_composite(&update.history, &record.history);
        let status = reached(&update.status, &record.status);
        let loadout = reached(&update.loadout, &record.loadout);

        record.merge(update);

        let mut fields = EntityFields::empty();
        if alive != record.alive {
            fields |= EntityFields::ALIVE;
        }
        if identity != (record.ent_id, record.ann_id) || base.is_some_and(|base| base != record.base) {
            fields |= EntityFields::BASE;
        }
        if resources.is_some_and(|resources| resources != record.resources) {
            fields |= EntityFields::RESOURCES;
        }
        if skills.is_some_and(|skills| skills != record.skills) {
            fields |= EntityFields::SKILLS;
        }
        if metrics.is_some_and(|metrics| metrics != record.metrics) {
            fields |= EntityFields::METRICS;
        }
        if inventory.is_some_and(|inventory| inventory != record.inventory) {
            fields |= EntityFields::INVENTORY;
        }
        if history.is_some_and(|history| history != record.history) {
            fields |= EntityFields::HISTORY;
        }
        if status.is_some_and(|status| status != record.status) {
            fields |= EntityFields::STATUS;
        }
        if loadout.is_some_and(|loadout| loadout != record.loadout) {
            fields |= EntityFields::LOADOUT;
        }

        (!fields.is_empty()).then_some(Self {
            id: record.ent_id,
            fields,
        })
    }

    #[inline]
    pub fn touches(&self, fields: EntityFields) -> bool {
        self.fields.intersects(fields)
    }
}
