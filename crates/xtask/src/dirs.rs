//! Platform-specific directory utilities

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const APPLICATION: &str = "snapshot-sync";

/// Get the platform-specific log directory
///
/// - macOS: `~/Library/Caches/snapshot-sync/logs`
/// - Linux: `~/.cache/snapshot-sync/logs` (or `$XDG_CACHE_HOME/snapshot-sync/logs`)
/// - Windows: `%LOCALAPPDATA%\snapshot-sync\logs`
/// - Fallback: `/tmp/snapshot-sync/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join(APPLICATION))
        .join("logs")
}

/// List session directories under `log_dir`, newest first.
pub fn list_sessions(log_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !log_dir.exists() {
        return Ok(Vec::new());
    }

    let mut sessions = Vec::new();
    for entry in std::fs::read_dir(log_dir)
        .with_context(|| format!("Failed to read log directory: {}", log_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir()
            && let Some(session_id) = path.file_name().and_then(|name| name.to_str())
        {
            let modified = entry.metadata()?.modified()?;
            sessions.push((session_id.to_string(), path.clone(), modified));
        }
    }

    sessions.sort_by(|a, b| b.2.cmp(&a.2));

    Ok(sessions
        .into_iter()
        .map(|(id, path, _)| (id, path))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_directories() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("session_1")).unwrap();
        std::fs::create_dir(root.path().join("session_2")).unwrap();
        std::fs::write(root.path().join("stray.log"), "").unwrap();

        let mut ids: Vec<_> = list_sessions(root.path())
            .unwrap()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        ids.sort();

        assert_eq!(ids, ["session_1", "session_2"]);
    }

    #[test]
    fn missing_directory_has_no_sessions() {
        let root = tempfile::tempdir().unwrap();
        assert!(list_sessions(&root.path().join("nope")).unwrap().is_empty());
    }
}
