use core::fmt;

use serde::{Deserialize, Serialize};

use super::ItemUpdate;
use crate::patch::Patch;
use crate::record::AttackRecord;

/// Trade price. The server sends it as a number or as a numeric string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPrice")]
pub struct Price(pub u32);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(u32),
    Text(String),
}

#[derive(Debug)]
pub struct InvalidPrice(String);

impl fmt::Display for InvalidPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid price {:?}", self.0)
    }
}

impl TryFrom<RawPrice> for Price {
    type Error = InvalidPrice;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        match raw {
            RawPrice::Number(value) => Ok(Price(value)),
            RawPrice::Text(text) => text.trim().parse().map(Price).map_err(|_| InvalidPrice(text)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveUpdate {
    #[serde(rename = "Direction", skip_serializing_if = "Patch::is_absent")]
    pub direction: Patch<String>,
}

/// `Use` and `Buy` payload: the item involved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemActionUpdate {
    #[serde(rename = "Item", skip_serializing_if = "Patch::is_absent")]
    pub item: Patch<ItemUpdate>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SellUpdate {
    #[serde(rename = "Item", skip_serializing_if = "Patch::is_absent")]
    pub item: Patch<ItemUpdate>,
    #[serde(rename = "Price", skip_serializing_if = "Patch::is_absent")]
    pub price: Patch<Price>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsUpdate {
    #[serde(rename = "Move", skip_serializing_if = "Patch::is_absent")]
    pub movement: Patch<MoveUpdate>,
    #[serde(rename = "Use", skip_serializing_if = "Patch::is_absent")]
    pub use_item: Patch<ItemActionUpdate>,
    #[serde(rename = "Buy", skip_serializing_if = "Patch::is_absent")]
    pub buy: Patch<ItemActionUpdate>,
    #[serde(rename = "Sell", skip_serializing_if = "Patch::is_absent")]
    pub sell: Patch<SellUpdate>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryUpdate {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub damage: Patch<f64>,
    #[serde(rename = "timeAlive", skip_serializing_if = "Patch::is_absent")]
    pub time_alive: Patch<u32>,
    /// Replaced wholesale, never merged field by field.
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub attack: Patch<AttackRecord>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub actions: Patch<ActionsUpdate>,
}
