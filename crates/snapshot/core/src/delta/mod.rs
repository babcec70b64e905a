//! Change tracking across entity merges.
//!
//! A merge is applied to a record in place; callers that need to know what it
//! touched snapshot the record first and compare with [`EntityChanges::from_records`].
mod bitmask;
mod changes;

pub use bitmask::EntityFields;
pub use changes::EntityChanges;
