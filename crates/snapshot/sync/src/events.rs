//! Lifecycle events produced by applying a frame.
use std::fmt;

use snapshot_core::{EntityFields, EntityKind};

/// What happened to one entity during a frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncEvent {
    /// First appearance; the record was allocated and populated.
    Spawned { kind: EntityKind, key: String },
    /// Merged in place and something changed.
    Updated {
        kind: EntityKind,
        key: String,
        fields: EntityFields,
    },
    /// Back after having been removed. Only produced for retained records.
    Revived { kind: EntityKind, key: String },
    /// No longer in the frame.
    Removed { kind: EntityKind, key: String },
}

impl SyncEvent {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Spawned { kind, .. }
            | Self::Updated { kind, .. }
            | Self::Revived { kind, .. }
            | Self::Removed { kind, .. } => *kind,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Spawned { key, .. }
            | Self::Updated { key, .. }
            | Self::Revived { key, .. }
            | Self::Removed { key, .. } => key,
        }
    }

    pub const fn is_lifecycle(&self) -> bool {
        !matches!(self, Self::Updated { .. })
    }
}

impl fmt::Display for SyncEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawned { kind, key } => write!(f, "{kind} {key} spawned"),
            Self::Updated { kind, key, fields } => {
                write!(f, "{kind} {key} updated ({})", fields.labels().join(", "))
            }
            Self::Revived { kind, key } => write!(f, "{kind} {key} revived"),
            Self::Removed { kind, key } => write!(f, "{kind} {key} removed"),
        }
    }
}
