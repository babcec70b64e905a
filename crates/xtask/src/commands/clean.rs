//! Clean session logs
//!
//! Every command that writes a log file creates its own session directory
//! under the platform cache dir. This removes all of them or a single one.
//!
//! Always prompts for confirmation unless `--yes` is given.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use crate::dirs;

/// Clean session logs
#[derive(Parser, Debug)]
pub struct Clean {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Specific session to clean (defaults to all sessions)
    #[arg(long)]
    pub session: Option<String>,

    /// Only list the known sessions
    #[arg(long, conflicts_with = "session")]
    pub list: bool,
}

impl Clean {
    pub fn execute(self, log_dir: &Path) -> Result<()> {
        if self.list {
            return list(log_dir);
        }

        let target = match self.session.as_deref() {
            Some(session_id) => {
                let session_dir = log_dir.join(session_id);
                if !session_dir.is_dir() {
                    eprintln!(
                        "{} Session not found: {}",
                        style("✗").red().bold(),
                        style(session_id).cyan()
                    );
                    anyhow::bail!("Session directory does not exist");
                }
                (format!("Session logs ({session_id})"), session_dir)
            }
            None if log_dir.exists() => ("All logs".to_string(), log_dir.to_path_buf()),
            None => {
                println!("{}", style("Nothing to clean - no logs written yet").dim());
                return Ok(());
            }
        };

        println!("{}", style("Clean snapshot-sync logs").yellow().bold());
        println!();
        println!("The following will be deleted:");
        println!("  {} {}", style("→").cyan(), style(&target.0).bold());
        println!("    {}", style(target.1.display()).dim());
        println!();

        if !self.yes && !confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        remove(&target.0, &target.1)?;
        println!();
        println!("{}", style("✓ Cleanup complete!").green().bold());

        Ok(())
    }
}

fn list(log_dir: &Path) -> Result<()> {
    let sessions = dirs::list_sessions(log_dir)?;
    if sessions.is_empty() {
        println!("{}", style("No sessions").dim());
        return Ok(());
    }

    println!("{} {}", style("Sessions in").bold().cyan(), log_dir.display());
    for (session_id, path) in sessions {
        println!("  {}  {}", style(session_id).bold(), style(path.display()).dim());
    }
    Ok(())
}

fn remove(label: &str, path: &PathBuf) -> Result<()> {
    print!("Deleting {label}... ");
    io::stdout().flush()?;

    std::fs::remove_dir_all(path).with_context(|| format!("Failed to delete: {}", path.display()))?;

    println!("{}", style("✓").green());
    Ok(())
}

fn confirm() -> Result<bool> {
    print!("{} ", style("Proceed? [y/N]").yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
