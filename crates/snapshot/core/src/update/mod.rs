//! Wire-shaped partial updates.
//!
//! Each update type mirrors a record in [`crate::record`] with every field a
//! [`Patch`](crate::patch::Patch), using the field names of the snapshot
//! protocol. Shape errors surface when decoding (see
//! [`MalformedUpdate`](crate::error::MalformedUpdate)); the merge step never
//! sees an ill-typed update.
mod entity;
mod frame;
mod history;
mod inventory;
mod item;

pub use entity::{
    ArmorPieceUpdate, BaseUpdate, EntityUpdate, LoadoutUpdate, MetricsUpdate, ResourceGroupUpdate,
    ResourceUpdate, SkillGroupUpdate, SkillUpdate, StatusUpdate,
};
pub use frame::{ConfigUpdate, SnapshotFrame};
pub use history::{
    ActionsUpdate, HistoryUpdate, InvalidPrice, ItemActionUpdate, MoveUpdate, Price, SellUpdate,
};
pub use inventory::{EquipmentUpdate, InventoryUpdate};
pub use item::ItemUpdate;
