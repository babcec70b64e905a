//! Sync layer configuration.
use std::env;

/// How the sync layer reacts to bad input and departed entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncConfig {
    /// Reject the whole frame when one entity entry fails to decode.
    /// When off, only that entity is skipped for the frame.
    pub strict: bool,
    /// Keep records of entities that left the frame, marked as removed,
    /// instead of discarding them.
    pub retain_removed: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            strict: true,
            retain_removed: false,
        }
    }
}

impl SyncConfig {
    pub const fn new(strict: bool, retain_removed: bool) -> Self {
        Self {
            strict,
            retain_removed,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// - `SNAPSHOT_STRICT` - Reject frames with a malformed entity (default: true)
    /// - `SNAPSHOT_RETAIN_REMOVED` - Keep departed entities (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(strict) = read_env_bool("SNAPSHOT_STRICT") {
            config.strict = strict;
        }
        if let Some(retain) = read_env_bool("SNAPSHOT_RETAIN_REMOVED") {
            config.retain_removed = retain;
        }

        config
    }

    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub const fn with_retain_removed(mut self, retain: bool) -> Self {
        self.retain_removed = retain;
        self
    }
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
