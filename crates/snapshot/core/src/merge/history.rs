use super::{Merge, merge_composite};
use crate::patch::Patch;
use crate::record::{ActionsRecord, BuyAction, HistoryRecord, SellAction, UseAction};
use crate::update::{ActionsUpdate, HistoryUpdate, ItemActionUpdate, SellUpdate};

impl Merge for UseAction {
    type Update = ItemActionUpdate;

    fn merge(&mut self, update: &ItemActionUpdate) {
        if let Some(item) = update.item.as_value() {
            self.item.merge(item);
        }
    }
}

impl Merge for BuyAction {
    type Update = ItemActionUpdate;

    fn merge(&mut self, update: &ItemActionUpdate) {
        if let Some(item) = update.item.as_value() {
            self.item.merge(item);
        }
    }
}

impl Merge for SellAction {
    type Update = SellUpdate;

    fn merge(&mut self, update: &SellUpdate) {
        if let Some(item) = update.item.as_value() {
            self.item.merge(item);
        }
        if let Some(price) = update.price.as_value() {
            self.price = Some(price.0);
        }
    }
}

impl Merge for ActionsRecord {
    type Update = ActionsUpdate;

    fn merge(&mut self, update: &ActionsUpdate) {
        match &update.movement {
            Patch::Absent => {}
            Patch::Null => self.movement = None,
            Patch::Value(step) => step.direction.assign_some(&mut self.movement),
        }
        merge_composite(&mut self.use_item, &update.use_item);
        merge_composite(&mut self.buy, &update.buy);
        merge_composite(&mut self.sell, &update.sell);
    }
}

impl Merge for HistoryRecord {
    type Update = HistoryUpdate;

    fn merge(&mut self, update: &HistoryUpdate) {
        self.damage = update.damage.as_value().copied();
        self.time_alive = update.time_alive.as_value().copied();
        self.attack = update.attack.as_value().cloned();
        merge_composite(&mut self.actions, &update.actions);
    }
}
