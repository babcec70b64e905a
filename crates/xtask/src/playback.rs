//! Shared replay loop used by the commands.

use std::path::Path;

use anyhow::{Context, Result};
use snapshot_sync::{FrameLine, FrameLog, FrameReport, SyncConfig, World};

/// Frame-log options shared by every command that replays a log.
#[derive(clap::Args, Debug, Clone)]
pub struct PlaybackArgs {
    /// Skip malformed entities instead of rejecting their frame
    #[arg(long)]
    pub lenient: bool,

    /// Keep records of entities that leave the stream
    #[arg(long)]
    pub retain_removed: bool,
}

impl PlaybackArgs {
    /// Environment defaults (`SNAPSHOT_STRICT`, `SNAPSHOT_RETAIN_REMOVED`)
    /// with the command-line flags on top.
    pub fn sync_config(&self) -> SyncConfig {
        let mut config = SyncConfig::from_env();
        if self.lenient {
            config = config.with_strict(false);
        }
        if self.retain_removed {
            config = config.with_retain_removed(true);
        }
        config
    }
}

/// Replays `path` into a fresh world, stopping after `limit` frames if given.
///
/// `on_frame` sees every applied frame in order.
pub fn replay<F>(path: &Path, config: SyncConfig, limit: Option<u64>, mut on_frame: F) -> Result<World>
where
    F: FnMut(&FrameLine, &FrameReport),
{
    let mut world = World::new(config);
    let log = FrameLog::open(path)
        .with_context(|| format!("Failed to open frame log: {}", path.display()))?;

    for line in log {
        if limit.is_some_and(|limit| world.tick() >= limit) {
            break;
        }
        let line = line.with_context(|| format!("Failed to read frame log: {}", path.display()))?;
        let report = world
            .apply_json(&line.text)
            .with_context(|| format!("Frame on line {} was rejected", line.number))?;
        on_frame(&line, &report);
    }

    Ok(world)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn log(frames: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for frame in frames {
            writeln!(file, "{frame}").unwrap();
        }
        file
    }

    #[test]
    fn stops_at_the_limit() {
        let file = log(&[r#"{"player": {"1": {}}}"#, r#"{"player": {"1": {}, "2": {}}}"#, "{}"]);
        let mut seen = Vec::new();

        let world = replay(file.path(), SyncConfig::default(), Some(2), |line, report| {
            seen.push((line.number, report.spawned()));
        })
        .unwrap();

        assert_eq!(seen, [(1, 1), (2, 1)]);
        assert_eq!(world.registry().players().len(), 2);
    }

    #[test]
    fn rejected_frame_names_its_line() {
        let file = log(&["{}", r#"{"player": {"1": {"alive": 5}}}"#]);

        let error = replay(file.path(), SyncConfig::default(), None, |_, _| {}).unwrap_err();

        assert_eq!(error.to_string(), "Frame on line 2 was rejected");
    }
}
