//! Errors raised while following a snapshot stream.

use serde_json::error::Category;
use snapshot_core::{EntityKind, ErrorSeverity, MalformedUpdate, SnapshotError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Debug, Error)]
pub enum SyncError {
    /// The frame envelope itself could not be decoded.
    #[error("malformed frame")]
    MalformedFrame(#[source] MalformedUpdate),

    /// One entity entry could not be decoded.
    #[error("malformed {kind} update for key {key:?}")]
    MalformedEntity {
        kind: EntityKind,
        key: String,
        #[source]
        source: MalformedUpdate,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyncError {
    /// Entity the error is about, if it is about one.
    pub fn entity(&self) -> Option<(EntityKind, &str)> {
        match self {
            Self::MalformedEntity { kind, key, .. } => Some((*kind, key.as_str())),
            _ => None,
        }
    }
}

impl SnapshotError for SyncError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MalformedFrame(_) | Self::MalformedEntity { .. } => ErrorSeverity::Validation,
            Self::Io(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedFrame(_) => "SYNC_MALFORMED_FRAME",
            Self::MalformedEntity { .. } => "SYNC_MALFORMED_ENTITY",
            Self::Io(_) => "SYNC_IO",
        }
    }
}

/// Classifies a serde_json failure.
pub(crate) fn malformed(error: &serde_json::Error) -> MalformedUpdate {
    match error.classify() {
        Category::Eof => MalformedUpdate::Truncated,
        Category::Syntax | Category::Io => {
            MalformedUpdate::syntax(error.line(), error.column(), error.to_string())
        }
        Category::Data => MalformedUpdate::shape(error.line(), error.column(), error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_serde_failures() {
        let eof = serde_json::from_str::<serde_json::Value>("{\"a\": ").unwrap_err();
        assert_eq!(malformed(&eof), MalformedUpdate::Truncated);

        let syntax = serde_json::from_str::<serde_json::Value>("{a}").unwrap_err();
        assert!(matches!(malformed(&syntax), MalformedUpdate::Syntax { line: 1, .. }));

        let shape = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        assert!(matches!(malformed(&shape), MalformedUpdate::Shape { .. }));
    }

    #[test]
    fn entity_errors_carry_their_key() {
        let error = SyncError::MalformedEntity {
            kind: EntityKind::Npc,
            key: "-4".to_owned(),
            source: MalformedUpdate::Truncated,
        };

        assert_eq!(error.entity(), Some((EntityKind::Npc, "-4")));
        assert_eq!(error.error_code(), "SYNC_MALFORMED_ENTITY");
        assert_eq!(error.to_string(), "malformed npc update for key \"-4\"");
        assert_eq!(error.severity(), ErrorSeverity::Validation);
    }
}
