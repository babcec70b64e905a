//! Frame decoding.
//!
//! A frame is decoded in two passes: the envelope first, then every entity
//! entry on its own so that a failure names the entity it came from. Nothing
//! is merged until the whole frame has been decoded.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use snapshot_core::{EntityKind, EntityUpdate, MalformedUpdate, SnapshotFrame};

use crate::error::{Result, SyncError, malformed};

/// A decoded frame plus the entity entries that were skipped.
///
/// `rejected` is only ever non-empty for lenient decoding.
#[derive(Debug, Default)]
pub struct DecodedFrame {
    pub frame: SnapshotFrame,
    pub rejected: Vec<SyncError>,
}

impl DecodedFrame {
    pub fn new(frame: SnapshotFrame) -> Self {
        Self {
            frame,
            rejected: Vec::new(),
        }
    }

    /// Keys of skipped entries of the given kind. The entities are still
    /// present in the world, their update just could not be read.
    pub fn rejected_keys(&self, kind: EntityKind) -> impl Iterator<Item = &str> + '_ {
        self.rejected.iter().filter_map(move |error| match error.entity() {
            Some((rejected_kind, key)) if rejected_kind == kind => Some(key),
            _ => None,
        })
    }

    pub fn updates(&self, kind: EntityKind) -> &BTreeMap<String, EntityUpdate> {
        match kind {
            EntityKind::Player => &self.frame.player,
            EntityKind::Npc => &self.frame.npc,
        }
    }
}

/// Decodes one frame of the snapshot stream.
///
/// With `strict`, the first malformed entity entry fails the whole frame.
/// Otherwise the entry is recorded in [`DecodedFrame::rejected`] and skipped.
/// A malformed envelope always fails.
pub fn decode_frame(text: &str, strict: bool) -> Result<DecodedFrame> {
    let mut envelope = match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            return Err(SyncError::MalformedFrame(MalformedUpdate::NotAnObject {
                found: json_type(&other),
            }));
        }
        Err(error) => return Err(SyncError::MalformedFrame(malformed(&error))),
    };

    let players = take_entities(&mut envelope, EntityKind::Player)?;
    let npcs = take_entities(&mut envelope, EntityKind::Npc)?;

    let frame: SnapshotFrame = serde_json::from_value(Value::Object(envelope))
        .map_err(|error| SyncError::MalformedFrame(malformed(&error)))?;
    let mut decoded = DecodedFrame::new(frame);

    for (kind, entries) in [(EntityKind::Player, players), (EntityKind::Npc, npcs)] {
        for (key, value) in entries {
            match serde_json::from_value::<EntityUpdate>(value) {
                Ok(update) => {
                    let target = match kind {
                        EntityKind::Player => &mut decoded.frame.player,
                        EntityKind::Npc => &mut decoded.frame.npc,
                    };
                    target.insert(key, update);
                }
                Err(error) => {
                    let error = SyncError::MalformedEntity {
                        kind,
                        key,
                        source: malformed(&error),
                    };
                    if strict {
                        tracing::error!("rejecting frame: {error}: {}", source_of(&error));
                        return Err(error);
                    }
                    tracing::warn!("skipping entity: {error}: {}", source_of(&error));
                    decoded.rejected.push(error);
                }
            }
        }
    }

    Ok(decoded)
}

fn take_entities(envelope: &mut Map<String, Value>, kind: EntityKind) -> Result<Map<String, Value>> {
    let key: &str = kind.as_ref();
    match envelope.remove(key) {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(entries)) => Ok(entries),
        Some(other) => Err(SyncError::MalformedFrame(MalformedUpdate::shape(
            0,
            0,
            format!("`{kind}` must be an object, found {}", json_type(&other)),
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn source_of(error: &SyncError) -> String {
    std::error::Error::source(error)
        .map(ToString::to_string)
        .unwrap_or_default()
}
