//! Persistent client-side records.
//!
//! Records are long-lived snapshot-update targets: the sync layer allocates
//! them once and then merges every subsequent update into them in place, so
//! references held by a presentation layer stay valid across ticks.
pub mod entity;
pub mod history;
pub mod inventory;
pub mod item;
pub mod resources;
pub mod skills;
pub mod world;

pub use entity::{
    ArmorPiece, BaseRecord, EntityId, EntityKind, EntityRecord, LoadoutRecord, MetricsRecord,
    StatusRecord,
};
pub use history::{ActionsRecord, AttackRecord, BuyAction, HistoryRecord, SellAction, UseAction};
pub use inventory::{EquipmentRecord, EquipmentSlot, EquipmentTotals, InventoryRecord};
pub use item::ItemRecord;
pub use resources::{ResourceGroupRecord, ResourceKind, ResourceRecord};
pub use skills::{Profession, SkillGroupRecord, SkillKind, SkillRecord};
pub use world::{MarketListing, WorldConfig};
