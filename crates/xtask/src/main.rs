//! Development tasks for the snapshot sync crates
//!
//! This binary replays recorded snapshot streams through the sync layer.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;
mod logging;
mod playback;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Clean, Inspect, Replay, Standings};

/// Development tasks for the snapshot sync crates
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Replay and inspect snapshot streams", long_about = None)]
#[command(version)]
struct Cli {
    /// Log sync decisions to stderr at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory for session log files (defaults to the platform cache dir)
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Do not write a session log file
    #[arg(long, global = true)]
    no_log: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Replay a frame log and report each frame
    Replay(Replay),

    /// Show the world or one entity after replaying a frame log
    Inspect(Inspect),

    /// Show team standings after replaying a frame log
    Standings(Standings),

    /// Clean session logs
    Clean(Clean),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SNAPSHOT_* and RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let log_dir = cli.log_dir.unwrap_or_else(dirs::log_dir);

    // Cleaning must not open a log file inside the directory it deletes.
    let _guard = match &cli.command {
        Command::Clean(_) => None,
        _ => logging::init(cli.verbose, (!cli.no_log).then_some(log_dir.as_path()))?,
    };

    match cli.command {
        Command::Replay(cmd) => cmd.execute(),
        Command::Inspect(cmd) => cmd.execute(),
        Command::Standings(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(&log_dir),
    }
}
