//! End-to-end merge behaviour, driven from wire JSON the way the sync layer
//! feeds it.

use snapshot_core::update::{ActionsUpdate, EntityUpdate, InventoryUpdate, ItemUpdate};
use snapshot_core::{
    ActionsRecord, EntityRecord, EquipmentRecord, EquipmentSlot, HistoryRecord, InventoryRecord,
    ItemRecord, Merge, Patch, Profession, SkillGroupRecord, SkillKind, SkillRecord,
};

fn decode<T: serde::de::DeserializeOwned>(json: &str) -> T {
    serde_json::from_str(json).expect("test update should decode")
}

fn merge_json<R: Merge>(record: &mut R, json: &str)
where
    R::Update: serde::de::DeserializeOwned,
{
    record.merge(&decode::<R::Update>(json));
}

#[test]
fn scenario_item_merge_into_empty_target() {
    let mut item = ItemRecord::new();
    merge_json(&mut item, r#"{"item": "sword", "level": 3}"#);

    assert_eq!(item.item.as_deref(), Some("sword"));
    assert_eq!(item.level, Some(3));
    assert_eq!(
        item,
        ItemRecord {
            item: Some("sword".to_owned()),
            level: Some(3),
            ..ItemRecord::default()
        }
    );
}

#[test]
fn scenario_null_item_field_is_not_applied() {
    let mut item = ItemRecord {
        quantity: Some(5),
        ..ItemRecord::default()
    };
    merge_json(&mut item, r#"{"quantity": null}"#);

    assert_eq!(item.quantity, Some(5));
}

#[test]
fn scenario_null_sell_clears_only_sell() {
    let mut actions = ActionsRecord::default();
    merge_json(
        &mut actions,
        r#"{
            "Use": {"Item": {"item": "Poultice"}},
            "Buy": {"Item": {"item": "Arrow"}},
            "Sell": {"Item": {"item": "Ration"}, "Price": "4"}
        }"#,
    );
    let use_before = actions.use_item.clone();
    let buy_before = actions.buy.clone();
    assert_eq!(actions.sell.as_ref().and_then(|sell| sell.price), Some(4));

    merge_json(&mut actions, r#"{"Sell": null}"#);

    assert!(actions.sell.is_none());
    assert_eq!(actions.use_item, use_before);
    assert_eq!(actions.buy, buy_before);
}

#[test]
fn scenario_empty_bag_clears_items() {
    let mut inventory = InventoryRecord::empty();
    merge_json(
        &mut inventory,
        r#"{"items": [{"item": "Ration"}, {"item": "Arrow", "quantity": 20}]}"#,
    );
    assert_eq!(inventory.items.len(), 2);

    merge_json(&mut inventory, r#"{"items": []}"#);

    assert!(inventory.items.is_empty());
}

#[test]
fn repeated_identical_update_is_idempotent() {
    let update: EntityUpdate = decode(
        r#"{
            "entID": 9, "annID": 1, "alive": true,
            "base": {"r": 3, "c": 4, "name": "Neural_9"},
            "resource": {"health": {"val": 7, "max": 10}},
            "skills": {"mage": {"exp": 40, "level": 2}},
            "inventory": {
                "items": [{"item": "Ration", "quantity": 2}],
                "equipment": {"held": {"item": "Wand", "level": 2}, "meleee_attack": 0}
            },
            "history": {"damage": 3.5, "timeAlive": 12, "actions": {"Move": {"Direction": "East"}}}
        }"#,
    );

    let mut once = EntityRecord::player();
    once.merge(&update);
    let mut twice = once.clone();
    twice.merge(&update);

    assert_eq!(once, twice);
}

#[test]
fn omitted_fields_are_preserved() {
    let mut entity = EntityRecord::player();
    merge_json(
        &mut entity,
        r#"{
            "base": {"name": "Neural_3", "level": 4},
            "metrics": {"Gold": 12, "PlayerDefeats": 1},
            "status": {"freeze": 2},
            "skills": {"melee": {"exp": 90, "level": 3}}
        }"#,
    );
    let snapshot = entity.clone();

    merge_json(&mut entity, r#"{"base": {"r": 8}, "metrics": {"TimeAlive": 30}}"#);

    assert_eq!(entity.base.name, snapshot.base.name);
    assert_eq!(entity.base.level, Some(4));
    assert_eq!(entity.base.r, Some(8));
    assert_eq!(entity.metrics.gold, 12);
    assert_eq!(entity.metrics.player_defeats, 1);
    assert_eq!(entity.metrics.time_alive, 30);
    assert_eq!(entity.status, snapshot.status);
    assert_eq!(entity.skills, snapshot.skills);
}

#[test]
fn explicit_null_clears_every_composite_slot() {
    let mut actions = ActionsRecord::default();
    merge_json(
        &mut actions,
        r#"{"Use": {"Item": {"item": "a"}}, "Buy": {"Item": {"item": "b"}}, "Sell": {"Item": {"item": "c"}}}"#,
    );
    merge_json(&mut actions, r#"{"Use": null, "Buy": null, "Sell": null}"#);
    assert!(actions.use_item.is_none() && actions.buy.is_none() && actions.sell.is_none());

    let mut equipment = EquipmentRecord::empty();
    merge_json(
        &mut equipment,
        r#"{
            "held": {"item": "Spear"}, "hat": {"item": "Hat"}, "top": {"item": "Top"},
            "bottom": {"item": "Bottom"}, "ammunition": {"item": "Arrow"}
        }"#,
    );
    assert_eq!(equipment.equipped().count(), 5);
    merge_json(
        &mut equipment,
        r#"{"held": null, "hat": null, "top": null, "bottom": null, "ammunition": null}"#,
    );
    assert_eq!(equipment.equipped().count(), 0);

    let mut history = HistoryRecord::default();
    merge_json(&mut history, r#"{"actions": {"Move": {"Direction": "North"}}}"#);
    assert!(history.actions.is_some());
    merge_json(&mut history, r#"{"actions": null}"#);
    assert!(history.actions.is_none());
}

#[test]
fn existing_equipment_is_reused() {
    let mut inventory = InventoryRecord::empty();
    merge_json(&mut inventory, r#"{"equipment": {"hat": {"item": "Hat", "level": 1}}}"#);
    let before: *const EquipmentRecord = inventory.equipment.as_ref().unwrap();

    merge_json(&mut inventory, r#"{"equipment": {"hat": {"item": "Hat", "level": 2}}}"#);
    let after = inventory.equipment.as_ref().unwrap();

    assert!(std::ptr::eq(before, after));
    assert_eq!(after.slot(EquipmentSlot::Hat).and_then(|hat| hat.level), Some(2));
}

#[test]
fn bag_is_replaced_not_diffed() {
    let mut inventory = InventoryRecord::empty();
    let abc: InventoryUpdate = decode(
        r#"{"items": [{"item": "A", "level": 1}, {"item": "B", "level": 2}, {"item": "C", "level": 3}]}"#,
    );
    let ab: InventoryUpdate = decode(r#"{"items": [{"item": "A", "level": 1}, {"item": "B", "level": 2}]}"#);

    inventory.merge(&abc);
    inventory.merge(&ab);

    let expected: Vec<ItemRecord> = ["A", "B"]
        .into_iter()
        .zip([1, 2])
        .map(|(name, level)| {
            let mut item = ItemRecord::new();
            item.merge(&ItemUpdate {
                level: Patch::Value(level),
                ..ItemUpdate::named(name)
            });
            item
        })
        .collect();
    assert_eq!(inventory.items, expected);
}

#[test]
fn profession_ties_and_leads() {
    let mut skills = SkillGroupRecord::empty();
    for style in SkillKind::COMBAT_STYLES {
        skills.insert(style, SkillRecord::new(250, 4));
    }
    assert_eq!(skills.dominant_profession(), Profession::None);

    skills.insert(SkillKind::Melee, SkillRecord::new(251, 4));
    assert_eq!(skills.dominant_profession(), Profession::Warrior);
}

#[test]
fn profession_tie_on_experience_holds_across_levels() {
    let mut skills = SkillGroupRecord::empty();
    merge_json(
        &mut skills,
        r#"{"melee": {"exp": 100, "level": 1}, "range": {"exp": 100, "level": 2}, "mage": {"exp": 100, "level": 3}}"#,
    );
    assert_eq!(skills.dominant_profession(), Profession::None);
}

#[test]
fn profession_of_a_fresh_entity_is_none() {
    assert_eq!(EntityRecord::npc().profession(), Profession::None);
}

#[test]
fn actions_update_without_keys_changes_nothing() {
    let mut actions = ActionsRecord::default();
    merge_json(&mut actions, r#"{"Sell": {"Item": {"item": "Ration"}}}"#);
    let before = actions.clone();

    actions.merge(&ActionsUpdate::default());

    assert_eq!(actions, before);
}
