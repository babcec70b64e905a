use super::{Merge, merge_composite};
use crate::record::{ArmorPiece, BaseRecord, EntityId, EntityRecord, LoadoutRecord, MetricsRecord, StatusRecord};
use crate::update::{ArmorPieceUpdate, BaseUpdate, EntityUpdate, LoadoutUpdate, MetricsUpdate, StatusUpdate};

impl Merge for BaseRecord {
    type Update = BaseUpdate;

    fn merge(&mut self, update: &BaseUpdate) {
        update.r.assign_some(&mut self.r);
        update.c.assign_some(&mut self.c);
        update.name.assign_some(&mut self.name);
        update.color.assign_some(&mut self.color);
        update.population.assign_some(&mut self.population);
        update.is_self.assign_some(&mut self.is_self);
        update.level.assign_some(&mut self.level);
        update.item_level.assign_some(&mut self.item_level);
    }
}

impl Merge for MetricsRecord {
    type Update = MetricsUpdate;

    fn merge(&mut self, update: &MetricsUpdate) {
        update.player_defeats.assign(&mut self.player_defeats);
        update.time_alive.assign(&mut self.time_alive);
        update.gold.assign(&mut self.gold);
        update.damage_taken.assign(&mut self.damage_taken);
    }
}

impl Merge for StatusRecord {
    type Update = StatusUpdate;

    fn merge(&mut self, update: &StatusUpdate) {
        update.freeze.assign(&mut self.freeze);
    }
}

impl Merge for ArmorPiece {
    type Update = ArmorPieceUpdate;

    fn merge(&mut self, update: &ArmorPieceUpdate) {
        update.level.assign_some(&mut self.level);
        update.color.assign_some(&mut self.color);
    }
}

impl Merge for LoadoutRecord {
    type Update = LoadoutUpdate;

    fn merge(&mut self, update: &LoadoutUpdate) {
        merge_composite(&mut self.chestplate, &update.chestplate);
        merge_composite(&mut self.platelegs, &update.platelegs);
    }
}

impl Merge for EntityRecord {
    type Update = EntityUpdate;

    fn merge(&mut self, update: &EntityUpdate) {
        if let Some(&id) = update.ent_id.as_value() {
            self.ent_id = Some(EntityId(id));
        }
        update.ann_id.assign_some(&mut self.ann_id);
        update.alive.assign(&mut self.alive);

        if let Some(base) = update.base.as_value() {
            self.base.merge(base);
        }
        if let Some(resources) = update.resources.as_value() {
            self.resources.merge(resources);
        }
        if let Some(skills) = update.skills.as_value() {
            self.skills.merge(skills);
        }
        if let Some(metrics) = update.metrics.as_value() {
            self.metrics.merge(metrics);
        }

        merge_composite(&mut self.inventory, &update.inventory);
        merge_composite(&mut self.history, &update.history);

        if let Some(status) = update.status.as_value() {
            self.status.merge(status);
        }
        if let Some(loadout) = update.loadout.as_value() {
            self.loadout.merge(loadout);
        }
    }
}
