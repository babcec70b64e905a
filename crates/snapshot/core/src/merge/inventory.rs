use strum::IntoEnumIterator;

use super::{Merge, merge_composite, rebuild_from};
use crate::record::{EquipmentRecord, EquipmentSlot, EquipmentTotals, InventoryRecord, ItemRecord};
use crate::update::{EquipmentUpdate, InventoryUpdate};

impl Merge for EquipmentRecord {
    type Update = EquipmentUpdate;

    fn merge(&mut self, update: &EquipmentUpdate) {
        for slot in EquipmentSlot::iter() {
            rebuild_from::<ItemRecord>(self.slot_mut(slot), update.slot(slot));
        }
        self.totals.merge(update);
    }
}

impl Merge for EquipmentTotals {
    type Update = EquipmentUpdate;

    fn merge(&mut self, update: &EquipmentUpdate) {
        update.item_level.assign_some(&mut self.item_level);
        update.melee_attack.assign_some(&mut self.melee_attack);
        update.range_attack.assign_some(&mut self.range_attack);
        update.mage_attack.assign_some(&mut self.mage_attack);
        update.melee_defense.assign_some(&mut self.melee_defense);
        update.range_defense.assign_some(&mut self.range_defense);
        update.mage_defense.assign_some(&mut self.mage_defense);
    }
}

impl Merge for InventoryRecord {
    type Update = InventoryUpdate;

    fn merge(&mut self, update: &InventoryUpdate) {
        self.items.clear();
        merge_composite(&mut self.equipment, &update.equipment);

        if let Some(items) = update.items.as_value() {
            self.items.extend(items.iter().map(|item| {
                let mut record = ItemRecord::new();
                record.merge(item);
                record
            }));
        }
    }
}
