//! Database table structures
//!
//! Typed mirrors of the host's in-memory JSON tables. Only the fields the
//! patches touch are typed; everything else rides along in `extra` so that
//! a table survives a deserialize/serialize round trip.

mod document;
mod globals;
mod hideout;
mod insurance;
mod item;
mod number;
mod trader;

#[cfg(test)]
pub(crate) mod fixtures;

pub use document::JsonDocument;
pub use globals::*;
pub use hideout::*;
pub use insurance::*;
pub use item::*;
pub use trader::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The subset of database tables the patches operate on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseTables {
    #[serde(default)]
    pub hideout: HideoutTables,
    /// Trader id -> trader
    #[serde(default)]
    pub traders: BTreeMap<String, Trader>,
    #[serde(default)]
    pub templates: Templates,
    #[serde(default)]
    pub globals: Globals,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Templates {
    /// Template id -> item template
    #[serde(default)]
    pub items: BTreeMap<String, ItemTemplate>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DatabaseTables {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
