use super::Merge;
use crate::record::WorldConfig;
use crate::update::ConfigUpdate;

impl Merge for WorldConfig {
    type Update = ConfigUpdate;

    fn merge(&mut self, update: &ConfigUpdate) {
        update.death_fog_start.assign_some(&mut self.death_fog_start);
        update.death_fog_final_size.assign_some(&mut self.death_fog_final_size);
        update.death_fog_speed.assign_some(&mut self.death_fog_speed);
    }
}
