//! Team standings at the end (or any tick) of a frame log.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;

use crate::playback::{self, PlaybackArgs};

/// Print live team standings after replaying a frame log
#[derive(Parser, Debug)]
pub struct Standings {
    /// Newline-delimited JSON frame log
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub playback: PlaybackArgs,

    /// Stop after this many frames
    #[arg(long, value_name = "N")]
    pub frames: Option<u64>,
}

impl Standings {
    pub fn execute(self) -> Result<()> {
        let world = playback::replay(&self.file, self.playback.sync_config(), self.frames, |_, _| {})?;
        let table = world.standings();

        println!("{} {}", style("Standings at tick").bold().cyan(), world.tick());
        if table.is_empty() {
            println!("{}", style("No players with a known population").dim());
            return Ok(());
        }

        println!(
            "{:>4}  {:>10}  {:>7}  {:>7}  {:>7}  {:>7}  {:>9}",
            "rank", "population", "members", "score", "alive", "defeats", "gold"
        );
        for standing in &table {
            println!(
                "{:>4}  {:>10}  {:>7}  {:>7.1}  {:>7}  {:>7.1}  {:>9}",
                style(standing.rank).bold(),
                standing.population,
                standing.members,
                standing.score,
                standing.alive_score,
                standing.defeats,
                standing.gold
            );
        }

        Ok(())
    }
}
