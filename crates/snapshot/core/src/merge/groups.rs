use strum::IntoEnumIterator;

use super::Merge;
use crate::record::{ResourceGroupRecord, ResourceKind, ResourceRecord, SkillGroupRecord, SkillKind, SkillRecord};
use crate::update::{ResourceGroupUpdate, ResourceUpdate, SkillGroupUpdate, SkillUpdate};

impl Merge for SkillRecord {
    type Update = SkillUpdate;

    fn merge(&mut self, update: &SkillUpdate) {
        update.exp.assign(&mut self.exp);
        update.level.assign(&mut self.level);
    }
}

impl Merge for SkillGroupRecord {
    type Update = SkillGroupUpdate;

    fn merge(&mut self, update: &SkillGroupUpdate) {
        for kind in SkillKind::iter() {
            if let Some(skill) = update.get(kind).as_value() {
                self.get_or_insert(kind).merge(skill);
            }
        }
        update.level.assign_some(&mut self.level);
    }
}

impl Merge for ResourceRecord {
    type Update = ResourceUpdate;

    fn merge(&mut self, update: &ResourceUpdate) {
        update.val.assign(&mut self.val);
        update.max.assign(&mut self.max);
    }
}

impl Merge for ResourceGroupRecord {
    type Update = ResourceGroupUpdate;

    fn merge(&mut self, update: &ResourceGroupUpdate) {
        for kind in ResourceKind::iter() {
            if let Some(meter) = update.get(kind).as_value() {
                self.get_or_insert(kind).merge(meter);
            }
        }
    }
}
