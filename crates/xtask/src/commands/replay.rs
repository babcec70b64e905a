//! Replay a recorded frame log and report what each frame did.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use snapshot_sync::{FrameReport, SyncEvent};

use crate::playback::{self, PlaybackArgs};

/// Replay a frame log through the sync layer
#[derive(Parser, Debug)]
pub struct Replay {
    /// Newline-delimited JSON frame log
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub playback: PlaybackArgs,

    /// Print every lifecycle event, not just per-frame counts
    #[arg(short, long)]
    pub events: bool,

    /// Also print field-level updates (implies --events)
    #[arg(long)]
    pub updates: bool,

    /// Stop after this many frames
    #[arg(long, value_name = "N")]
    pub frames: Option<u64>,
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let config = self.playback.sync_config();
        let show_events = self.events || self.updates;
        let mut rejected = 0;

        println!("{} {}", style("Frame log:").bold().cyan(), self.file.display());
        println!(
            "{} strict={} retain_removed={}",
            style("Config:").bold().cyan(),
            config.strict,
            config.retain_removed
        );
        println!();

        let world = playback::replay(&self.file, config, self.frames, |line, report| {
            rejected += report.rejected.len();
            println!("{}", frame_line(line.number, report));
            if show_events {
                for event in &report.events {
                    if self.updates || event.is_lifecycle() {
                        println!("    {}", describe(event));
                    }
                }
            }
            for error in &report.rejected {
                println!("    {} {error}", style("skipped").yellow());
            }
        })?;

        println!();
        println!("{}", style("=== Final State ===").bold().green());
        println!("  Frames:  {}", world.tick());
        println!("  Players: {}", world.registry().players().len());
        println!("  NPCs:    {}", world.registry().npcs().len());
        println!("  Market:  {} listings", world.market().len());
        if rejected > 0 {
            println!("  Skipped: {}", style(rejected).yellow());
        }

        Ok(())
    }
}

fn frame_line(number: usize, report: &FrameReport) -> String {
    format!(
        "{} line {:>4}  {} spawned  {} updated  {} removed",
        style(format!("tick {:>5}", report.tick)).bold(),
        number,
        style(report.spawned()).green(),
        report.updated(),
        style(report.removed()).red()
    )
}

fn describe(event: &SyncEvent) -> String {
    match event {
        SyncEvent::Spawned { .. } | SyncEvent::Revived { .. } => style(event).green().to_string(),
        SyncEvent::Removed { .. } => style(event).red().to_string(),
        SyncEvent::Updated { .. } => style(event).dim().to_string(),
    }
}
