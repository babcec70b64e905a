//! Record model and merge rules for the server snapshot stream.
//!
//! `snapshot-core` defines the persistent client-side records ([`record`]),
//! their wire-shaped partial updates ([`update`]), and the in-place merge that
//! applies one onto the other ([`merge`]). Updates distinguish a missing key
//! from an explicit `null` through [`Patch`]; the merge rules decide per field
//! which of the two clears state.
//!
//! Everything here is a pure transformation over caller-owned records. Frame
//! decoding, entity lifecycle and logging live in `snapshot-sync`.
pub mod delta;
pub mod error;
pub mod merge;
pub mod patch;
pub mod record;
pub mod update;

pub use delta::{EntityChanges, EntityFields};
pub use error::{ErrorSeverity, MalformedUpdate, SnapshotError};
pub use merge::{Merge, merge_composite, rebuild_from};
pub use patch::Patch;
pub use record::{
    ActionsRecord, ArmorPiece, AttackRecord, BaseRecord, BuyAction, EntityId, EntityKind,
    EntityRecord, EquipmentRecord, EquipmentSlot, EquipmentTotals, HistoryRecord, InventoryRecord,
    ItemRecord, LoadoutRecord, MarketListing, MetricsRecord, Profession, ResourceGroupRecord,
    ResourceKind, ResourceRecord, SellAction, SkillGroupRecord, SkillKind, SkillRecord,
    StatusRecord, UseAction, WorldConfig,
};
pub use update::{
    ActionsUpdate, ConfigUpdate, EntityUpdate, EquipmentUpdate, HistoryUpdate, InventoryUpdate,
    ItemUpdate, SnapshotFrame,
};
