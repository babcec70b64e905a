//! World-level blocks of a snapshot: market and server config.

use serde::{Deserialize, Serialize};

/// One market entry, keyed by item name in the frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketListing {
    pub price: f64,
    pub supply: u32,
    pub name: Option<String>,
    pub level: Option<u32>,
}

/// Server tunables pushed alongside the snapshot.
///
/// Fields stay `None` until the server sends them; the accessors fall back to
/// the server's stock values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Tick at which the death fog starts closing in.
    pub death_fog_start: Option<u64>,
    /// Half-size of the final square safe zone, in tiles.
    pub death_fog_final_size: Option<u32>,
    /// Tiles the fog advances per tick.
    pub death_fog_speed: Option<f64>,
}

impl WorldConfig {
    pub const DEFAULT_DEATH_FOG_START: u64 = 240;
    pub const DEFAULT_DEATH_FOG_FINAL_SIZE: u32 = 15;
    pub const DEFAULT_DEATH_FOG_SPEED: f64 = 1.0 / 16.0;

    pub fn fog_start(&self) -> u64 {
        self.death_fog_start.unwrap_or(Self::DEFAULT_DEATH_FOG_START)
    }

    pub fn fog_final_size(&self) -> u32 {
        self.death_fog_final_size
            .unwrap_or(Self::DEFAULT_DEATH_FOG_FINAL_SIZE)
    }

    pub fn fog_speed(&self) -> f64 {
        self.death_fog_speed.unwrap_or(Self::DEFAULT_DEATH_FOG_SPEED)
    }
}
