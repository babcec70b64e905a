use super::Merge;
use crate::record::ItemRecord;
use crate::update::ItemUpdate;

impl Merge for ItemRecord {
    type Update = ItemUpdate;

    fn merge(&mut self, update: &ItemUpdate) {
        update.color.assign_some(&mut self.color);
        update.item.assign_some(&mut self.item);
        update.level.assign_some(&mut self.level);
        update.capacity.assign_some(&mut self.capacity);
        update.quantity.assign_some(&mut self.quantity);
        update.melee_attack.assign_some(&mut self.melee_attack);
        update.range_attack.assign_some(&mut self.range_attack);
        update.mage_attack.assign_some(&mut self.mage_attack);
        update.melee_defense.assign_some(&mut self.melee_defense);
        update.range_defense.assign_some(&mut self.range_defense);
        update.mage_defense.assign_some(&mut self.mage_defense);
        update.health_restore.assign_some(&mut self.health_restore);
        update.resource_restore.assign_some(&mut self.resource_restore);
        update.price.assign_some(&mut self.price);
    }
}
