//! Carried bag and worn equipment.

use serde::{Deserialize, Serialize};

use super::ItemRecord;

/// Equipment slots an entity can fill.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipmentSlot {
    /// Weapon or tool in hand.
    Held,
    Hat,
    Top,
    Bottom,
    Ammunition,
}

/// Server-side aggregates over everything currently worn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentTotals {
    /// Sum of the levels of all equipped items.
    pub item_level: Option<u32>,
    pub melee_attack: Option<u32>,
    pub range_attack: Option<u32>,
    pub mage_attack: Option<u32>,
    pub melee_defense: Option<u32>,
    pub range_defense: Option<u32>,
    pub mage_defense: Option<u32>,
}

/// Worn/held item set.
///
/// A slot is `None` when nothing is equipped there. Slot items are
/// reallocated on every merge; the `EquipmentRecord` itself is reused.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub held: Option<ItemRecord>,
    pub hat: Option<ItemRecord>,
    pub top: Option<ItemRecord>,
    pub bottom: Option<ItemRecord>,
    pub ammunition: Option<ItemRecord>,
    pub totals: EquipmentTotals,
}

impl EquipmentRecord {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: EquipmentSlot) -> Option<&ItemRecord> {
        match slot {
            EquipmentSlot::Held => self.held.as_ref(),
            EquipmentSlot::Hat => self.hat.as_ref(),
            EquipmentSlot::Top => self.top.as_ref(),
            EquipmentSlot::Bottom => self.bottom.as_ref(),
            EquipmentSlot::Ammunition => self.ammunition.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<ItemRecord> {
        match slot {
            EquipmentSlot::Held => &mut self.held,
            EquipmentSlot::Hat => &mut self.hat,
            EquipmentSlot::Top => &mut self.top,
            EquipmentSlot::Bottom => &mut self.bottom,
            EquipmentSlot::Ammunition => &mut self.ammunition,
        }
    }

    /// Puts an item into a slot, returning whatever was there before.
    pub fn equip(&mut self, slot: EquipmentSlot, item: ItemRecord) -> Option<ItemRecord> {
        self.slot_mut(slot).replace(item)
    }

    /// Empties a slot, returning the item that was equipped.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<ItemRecord> {
        self.slot_mut(slot).take()
    }

    /// Iterates the filled slots in declaration order.
    pub fn equipped(&self) -> impl Iterator<Item = (EquipmentSlot, &ItemRecord)> + '_ {
        use strum::IntoEnumIterator;

        EquipmentSlot::iter().filter_map(move |slot| self.slot(slot).map(|item| (slot, item)))
    }
}

/// Carried items plus equipment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// The bag, in server order. Rebuilt wholesale on every merge.
    pub items: Vec<ItemRecord>,
    pub equipment: Option<EquipmentRecord>,
}

impl InventoryRecord {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Total quantity of items with the given name across the bag.
    pub fn count_of(&self, name: &str) -> u64 {
        self.items
            .iter()
            .filter(|item| item.name() == name)
            .map(|item| u64::from(item.quantity.unwrap_or(1)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ItemRecord {
        ItemRecord {
            item: Some(name.to_owned()),
            ..ItemRecord::default()
        }
    }

    #[test]
    fn equip_returns_previous_item() {
        let mut equipment = EquipmentRecord::empty();
        assert!(equipment.equip(EquipmentSlot::Hat, named("Hat")).is_none());

        let previous = equipment.equip(EquipmentSlot::Hat, named("Helm"));
        assert_eq!(previous.unwrap().name(), "Hat");
        assert_eq!(equipment.slot(EquipmentSlot::Hat).unwrap().name(), "Helm");
    }

    #[test]
    fn equipped_skips_empty_slots() {
        let mut equipment = EquipmentRecord::empty();
        equipment.equip(EquipmentSlot::Held, named("Sword"));
        equipment.equip(EquipmentSlot::Ammunition, named("Arrow"));

        let slots: Vec<_> = equipment.equipped().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![EquipmentSlot::Held, EquipmentSlot::Ammunition]);
    }

    #[test]
    fn slot_names_parse_case_insensitively() {
        assert_eq!("Ammunition".parse::<EquipmentSlot>().unwrap(), EquipmentSlot::Ammunition);
        assert_eq!(EquipmentSlot::Held.as_ref(), "held");
    }

    #[test]
    fn count_of_defaults_missing_quantity_to_one() {
        let mut ration = named("Ration");
        ration.quantity = Some(3);
        let inventory = InventoryRecord {
            items: vec![ration, named("Ration"), named("Poultice")],
            equipment: None,
        };

        assert_eq!(inventory.count_of("Ration"), 4);
        assert_eq!(inventory.count_of("Scrap"), 0);
    }

    #[test]
    fn count_of_does_not_wrap_on_large_stacks() {
        let mut full = named("Arrow");
        full.quantity = Some(u32::MAX);
        let inventory = InventoryRecord {
            items: vec![full.clone(), full],
            equipment: None,
        };

        assert_eq!(inventory.count_of("Arrow"), 2 * u64::from(u32::MAX));
    }
}
