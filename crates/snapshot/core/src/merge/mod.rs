//! In-place application of partial updates onto persistent records.
//!
//! Merges run leaf-first: item fields, then items/skills/resources, then
//! inventory and history, then the entity record. Every operation mutates the
//! target it is given and allocates a nested record only the first time an
//! update populates it.
//!
//! Field rules:
//!
//! - Scalar fields are overwritten iff the patch is [`Patch::Value`]. `Absent`
//!   and `Null` both leave them alone, so `0`, `false` and `""` are applied.
//! - Optional composites (inventory, history, actions and its sub-actions,
//!   equipment, loadout pieces) are merged on `Value`, cleared on `Null`, and
//!   left untouched when `Absent`.
//! - Equipment slots are cleared unless the update carries an item: the server
//!   drops the key when a slot is emptied.
//! - The bag is rebuilt from scratch on every inventory merge.
//! - History `damage`, `time_alive` and `attack` are overwritten
//!   unconditionally.
mod entity;
mod groups;
mod history;
mod inventory;
mod item;
mod world;

use crate::patch::Patch;

/// A record that can absorb a partial update of its own shape.
pub trait Merge {
    type Update;

    /// Applies `update` onto `self`. Never fails: shape errors are caught
    /// when the update is decoded.
    fn merge(&mut self, update: &Self::Update);
}

/// Applies a composite patch to an optional nested record.
///
/// `Value` merges into the existing record (allocating it on first use),
/// `Null` drops it, `Absent` leaves it as is.
pub fn merge_composite<R>(slot: &mut Option<R>, patch: &Patch<R::Update>)
where
    R: Merge + Default,
{
    match patch {
        Patch::Absent => {}
        Patch::Null => *slot = None,
        Patch::Value(update) => slot.get_or_insert_with(R::default).merge(update),
    }
}

/// Replaces `slot` with a freshly allocated record built from the patch, or
/// clears it when the patch carries nothing.
pub fn rebuild_from<R>(slot: &mut Option<R>, patch: &Patch<R::Update>)
where
    R: Merge + Default,
{
    *slot = patch.as_value().map(|update| {
        let mut record = R::default();
        record.merge(update);
        record
    });
}
