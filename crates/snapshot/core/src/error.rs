//! Error classification shared by the snapshot crates.
//!
//! Merging never fails: a well-typed update always applies. The only failure
//! the core knows about is an update whose wire shape does not match the
//! record it targets, reported as [`MalformedUpdate`] before any state is
//! touched. Crates further up wrap it with their own context and implement
//! [`SnapshotError`] for their error enums.

use serde::{Deserialize, Serialize};

/// How a caller should react to an error.
///
/// - **Recoverable**: skip the offending input and keep going
/// - **Validation**: the input is rejected as a whole
/// - **Internal**: local state disagrees with itself and needs investigation
/// - **Fatal**: the stream cannot be followed any further
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error points at a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common interface of the snapshot error enums.
///
/// Use `#[derive(thiserror::Error)]` for `Display`/`Error` and classify
/// severity by what the caller can do about it.
pub trait SnapshotError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier of the variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// An update whose wire shape does not match its target record.
///
/// Positions are 1-based and refer to the text the update was decoded from.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedUpdate {
    /// Not valid JSON at all.
    #[error("invalid syntax at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Valid JSON with a value of the wrong type or range for its field.
    #[error("unexpected shape at line {line}, column {column}: {message}")]
    Shape {
        line: usize,
        column: usize,
        message: String,
    },

    /// Input ended before the update was complete.
    #[error("update is truncated")]
    Truncated,

    /// The top-level value is not an object.
    #[error("expected an object, found {found}")]
    NotAnObject { found: &'static str },
}

impl MalformedUpdate {
    pub fn syntax(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            column,
            message: message.into(),
        }
    }

    pub fn shape(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Shape {
            line,
            column,
            message: message.into(),
        }
    }
}

impl SnapshotError for MalformedUpdate {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use MalformedUpdate::*;
        match self {
            Syntax { .. } => "SNAPSHOT_MALFORMED_SYNTAX",
            Shape { .. } => "SNAPSHOT_MALFORMED_SHAPE",
            Truncated => "SNAPSHOT_MALFORMED_TRUNCATED",
            NotAnObject { .. } => "SNAPSHOT_MALFORMED_NOT_AN_OBJECT",
        }
    }
}
