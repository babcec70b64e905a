//! Client-side view of the server snapshot stream.
//!
//! A [`World`] consumes one frame per tick. Each frame is fully decoded
//! ([`decode`]) before anything is touched, then the [`EntityRegistry`]
//! spawns, merges and removes entity records by key while the world keeps the
//! map, market and config blocks. Merging itself is done by `snapshot-core`.
//!
//! Derived views live alongside: [`teams`] for live standings and [`fog`] for
//! the death-fog safe zone.
pub mod config;
pub mod decode;
pub mod error;
pub mod events;
pub mod fog;
pub mod registry;
pub mod replay;
pub mod teams;
pub mod world;

pub use config::SyncConfig;
pub use decode::{DecodedFrame, decode_frame};
pub use error::{Result, SyncError};
pub use events::SyncEvent;
pub use fog::DeathFog;
pub use registry::{EntityCollection, EntityRegistry};
pub use replay::{FrameLine, FrameLog};
pub use teams::{TeamStanding, standings};
pub use world::{FrameReport, MapInfo, World};
