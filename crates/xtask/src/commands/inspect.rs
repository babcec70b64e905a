//! Inspect one entity (or the world summary) at a given tick.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use snapshot_core::{EntityKind, EntityRecord};
use snapshot_sync::World;

use crate::playback::{self, PlaybackArgs};

/// Inspect world or entity state at a tick of a frame log
#[derive(Parser, Debug)]
pub struct Inspect {
    /// Newline-delimited JSON frame log
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub playback: PlaybackArgs,

    /// Stop after this many frames (defaults to the whole log)
    #[arg(long, value_name = "N")]
    pub frames: Option<u64>,

    /// Entity key to show; omit for a world summary
    #[arg(short, long, value_name = "KEY")]
    pub entity: Option<String>,

    /// Collection the entity key belongs to
    #[arg(short, long, value_enum, default_value = "player")]
    pub kind: Kind,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Kind {
    Player,
    Npc,
}

impl From<Kind> for EntityKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Player => EntityKind::Player,
            Kind::Npc => EntityKind::Npc,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Short human-readable view
    Summary,
    /// Full JSON output
    Json,
}

impl Inspect {
    pub fn execute(self) -> Result<()> {
        let world = playback::replay(&self.file, self.playback.sync_config(), self.frames, |_, _| {})?;

        let Some(key) = self.entity.as_deref() else {
            print_world(&world);
            return Ok(());
        };

        let kind = EntityKind::from(self.kind);
        let collection = world.registry().collection(kind);
        let record = collection
            .get_retained(key)
            .with_context(|| format!("No {kind} with key {key} at tick {}", world.tick()))?;

        match self.format {
            OutputFormat::Summary => print_entity(key, record, collection.is_removed(key)),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(record).context("Failed to serialize entity to JSON")?;
                println!("{json}");
            }
        }

        Ok(())
    }
}

fn print_world(world: &World) {
    println!("{}", style("=== World Summary ===").bold().green());
    println!("  Tick:    {}", world.tick());

    let map = world.map();
    if let (Some(size), Some(border)) = (map.size, map.border) {
        println!("  Map:     {size}x{size}, border {border}");
    }
    if let Some((r, c)) = map.view_centre {
        println!("  View:    ({r}, {c})");
    }
    if let Some(fog) = world.fog() {
        match fog.safe_bounds(world.tick()) {
            Some((low, high)) => println!("  Safe:    {low}..={high} (fog step {})", fog.step_at(world.tick())),
            None => println!("  Safe:    {}", style("none").red()),
        }
    }
    println!();

    for kind in [EntityKind::Player, EntityKind::Npc] {
        let collection = world.registry().collection(kind);
        println!("{} {}", style(format!("{kind}s:")).bold().yellow(), collection.len());
        for (key, record) in collection.iter() {
            println!(
                "  {:>6}  {:<16} alive={:<5} pos={:?} profession={}",
                key,
                record.name(),
                record.alive,
                record.base.position(),
                record.profession()
            );
        }
        println!();
    }
}

fn print_entity(key: &str, record: &EntityRecord, removed: bool) {
    let title = format!("=== {} {key} ===", record.kind);
    println!("{}", style(title).bold().green());
    if removed {
        println!("  {}", style("removed from the stream").red());
    }
    println!("  Name:       {}", record.name());
    println!("  Id:         {}", record.ent_id.map(|id| id.to_string()).unwrap_or_default());
    println!("  Population: {:?}", record.population());
    println!("  Alive:      {}", record.alive);
    println!("  Position:   {:?}", record.base.position());
    println!("  Profession: {}", record.profession());
    println!();

    println!("{}", style("Resources:").bold().yellow());
    for (kind, meter) in record.resources.iter() {
        println!("  {kind:<8} {}/{}", meter.val, meter.max);
    }

    println!("{}", style("Skills:").bold().yellow());
    for (kind, skill) in record.skills.iter() {
        println!("  {kind:<12} level {:>3}  exp {}", skill.level, skill.exp);
    }

    if let Some(inventory) = &record.inventory {
        println!("{}", style("Inventory:").bold().yellow());
        for item in &inventory.items {
            println!("  {} x{}", item.name(), item.quantity.unwrap_or(1));
        }
        if let Some(equipment) = &inventory.equipment {
            for (slot, item) in equipment.equipped() {
                println!("  [{slot}] {} (level {})", item.name(), item.level.unwrap_or_default());
            }
        }
    }

    let metrics = &record.metrics;
    println!("{}", style("Metrics:").bold().yellow());
    println!(
        "  defeats {}  time alive {}  gold {}  damage taken {:.1}",
        metrics.player_defeats, metrics.time_alive, metrics.gold, metrics.damage_taken
    );
}
