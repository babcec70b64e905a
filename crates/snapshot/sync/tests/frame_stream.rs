//! Following a short recorded match frame by frame.

use std::io::Write;

use snapshot_core::{EntityFields, EntityKind, EquipmentSlot, Profession};
use snapshot_sync::{FrameLog, SyncConfig, SyncError, SyncEvent, World};

const OPENING: &str = r#"{
    "size": 40, "border": 4,
    "config": {"PLAYER_DEATH_FOG": 3, "PLAYER_DEATH_FOG_FINAL_SIZE": 4, "PLAYER_DEATH_FOG_SPEED": 1.0},
    "player": {
        "1": {
            "entID": 1, "annID": 1, "alive": true,
            "base": {"r": 10, "c": 10, "name": "Neural_1", "population": 1, "self": 1},
            "skills": {"melee": {"exp": 300, "level": 5}, "range": {"exp": 10, "level": 1}},
            "inventory": {
                "items": [{"item": "Ration", "quantity": 2}],
                "equipment": {"held": {"item": "Spear", "level": 2}, "meleee_attack": 7}
            },
            "metrics": {"TimeAlive": 1}
        },
        "2": {"entID": 2, "annID": 2, "alive": true, "base": {"r": 20, "c": 20, "population": 2}}
    },
    "npc": {"-1": {"entID": -1, "alive": true, "loadout": {"chestplate": {"level": 1}}}},
    "market": {"Ration": {"price": 2.0, "supply": 8}}
}"#;

const FIGHT: &str = r#"{
    "player": {
        "1": {
            "base": {"r": 11},
            "inventory": {"items": [], "equipment": {"held": {"item": "Spear", "level": 2}, "meleee_attack": 7}},
            "history": {"damage": 3.0, "attack": {"target": -1, "style": "Melee"},
                        "actions": {"Sell": {"Item": {"item": "Ration"}, "Price": "3"}}},
            "metrics": {"TimeAlive": 2, "PlayerDefeats": 2, "Gold": 3}
        },
        "2": {"metrics": {"TimeAlive": 2}}
    }
}"#;

const AFTERMATH: &str = r#"{
    "player": {
        "1": {"history": {"actions": {"Sell": null}}, "metrics": {"TimeAlive": 3}}
    }
}"#;

#[test]
fn follows_a_short_match() {
    let mut world = World::new(SyncConfig::default());

    let report = world.apply_json(OPENING).unwrap();
    assert_eq!(report.tick, 1);
    assert_eq!(report.spawned(), 3);
    assert!(report.market_updated && report.config_updated);

    let me = world.registry().self_player().unwrap();
    assert_eq!(me.name(), "Neural_1");
    assert_eq!(me.profession(), Profession::Warrior);
    let equipment = me.inventory.as_ref().and_then(|inventory| inventory.equipment.as_ref()).unwrap();
    assert_eq!(equipment.totals.melee_attack, Some(7));
    let held_before: *const _ = equipment;

    let report = world.apply_json(FIGHT).unwrap();
    assert_eq!(report.removed(), 1);
    assert!(report.events.contains(&SyncEvent::Removed {
        kind: EntityKind::Npc,
        key: "-1".to_owned(),
    }));
    let fields = report
        .events
        .iter()
        .find_map(|event| match event {
            SyncEvent::Updated { key, fields, .. } if key == "1" => Some(*fields),
            _ => None,
        })
        .unwrap();
    assert!(fields.contains(EntityFields::BASE | EntityFields::INVENTORY | EntityFields::HISTORY));

    let me = world.registry().players().get("1").unwrap();
    let inventory = me.inventory.as_ref().unwrap();
    assert!(inventory.items.is_empty());
    assert!(std::ptr::eq(held_before, inventory.equipment.as_ref().unwrap()));
    assert_eq!(
        inventory.equipment.as_ref().unwrap().slot(EquipmentSlot::Held).map(|item| item.name()),
        Some("Spear")
    );
    let history = me.history.as_ref().unwrap();
    assert_eq!(history.damage, Some(3.0));
    assert_eq!(history.actions.as_ref().unwrap().sell.as_ref().unwrap().price, Some(3));

    world.apply_json(AFTERMATH).unwrap();
    let me = world.registry().players().get("1").unwrap();
    let history = me.history.as_ref().unwrap();
    assert!(history.actions.as_ref().unwrap().sell.is_none());
    assert_eq!(history.damage, None);
    assert_eq!(history.attack, None);
    assert_eq!(me.metrics.player_defeats, 2);

    // Player 2 was absent from the last frame.
    assert!(world.registry().players().get("2").is_none());

    let table = world.standings();
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].population, 1);
    assert_eq!(table[0].score, 4.0);

    let fog = world.fog().unwrap();
    assert_eq!(world.tick(), 3);
    assert_eq!(fog.step_at(world.tick()), 1);
    assert_eq!(fog.safe_bounds(world.tick()), Some((5, 34)));
}

#[test]
fn retained_players_still_count_for_their_team() {
    let mut world = World::new(SyncConfig::default().with_retain_removed(true));
    world.apply_json(OPENING).unwrap();
    world.apply_json(FIGHT).unwrap();
    world.apply_json(AFTERMATH).unwrap();

    assert!(world.registry().players().is_removed("2"));
    let table = world.standings();
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].population, 1);
    assert_eq!(table[1].population, 2);
    assert_eq!(table[1].rank, 2);
    assert_eq!(table[1].alive_score, 2);
}

#[test]
fn strict_world_rejects_the_frame_whole() {
    let mut world = World::new(SyncConfig::default());
    world.apply_json(OPENING).unwrap();

    let bad = r#"{"player": {"1": {"base": {"r": 99}}, "2": {"metrics": {"Gold": -5}}}}"#;
    let error = world.apply_json(bad).unwrap_err();

    assert_eq!(error.entity(), Some((EntityKind::Player, "2")));
    assert_eq!(world.tick(), 1);
    assert_eq!(world.registry().players().get("1").unwrap().base.r, Some(10));
    assert_eq!(world.registry().npcs().len(), 1);
}

#[test]
fn lenient_world_skips_only_the_bad_entity() {
    let mut world = World::new(SyncConfig::default().with_strict(false));
    world.apply_json(OPENING).unwrap();

    let bad = r#"{"player": {"1": {"base": {"r": 99}}, "2": {"metrics": {"Gold": -5}}}}"#;
    let report = world.apply_json(bad).unwrap();

    assert_eq!(report.rejected.len(), 1);
    assert!(matches!(&report.rejected[0], SyncError::MalformedEntity { key, .. } if key == "2"));
    assert_eq!(world.registry().players().get("1").unwrap().base.r, Some(99));
    assert!(world.registry().players().contains("2"));
    assert_eq!(world.registry().npcs().len(), 0);
}

#[test]
fn replays_a_frame_log() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for frame in [OPENING, FIGHT, AFTERMATH] {
        let compact: serde_json::Value = serde_json::from_str(frame).unwrap();
        writeln!(file, "{compact}").unwrap();
        writeln!(file).unwrap();
    }

    let mut world = World::default();
    let mut lines = Vec::new();
    for line in FrameLog::open(file.path()).unwrap() {
        let line = line.unwrap();
        world.apply_json(&line.text).unwrap();
        lines.push(line.number);
    }

    assert_eq!(lines, [1, 3, 5]);
    assert_eq!(world.tick(), 3);
    assert_eq!(world.registry().players().len(), 1);
}
