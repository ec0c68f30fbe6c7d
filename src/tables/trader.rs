//! Trader table structures

use super::number;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// One purchase option: every item in the offer must be handed over.
/// Container barters never need more than three.
pub type BarterOffer = SmallVec<[BarterItem; 3]>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trader {
    pub base: TraderBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assort: Option<TraderAssort>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraderBase {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub insurance: TraderInsurance,
    #[serde(default, rename = "loyaltyLevels")]
    pub loyalty_levels: Vec<LoyaltyLevel>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Insurance parameters, hours
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraderInsurance {
    #[serde(default)]
    pub min_return_hour: i32,
    #[serde(default)]
    pub max_return_hour: i32,
    #[serde(default)]
    pub max_storage_time: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyLevel {
    #[serde(default, serialize_with = "number::serialize")]
    pub insurance_price_coef: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What a trader sells and for how much
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraderAssort {
    #[serde(default)]
    pub items: Vec<AssortItem>,
    /// Assort item `_id` -> alternative offers
    #[serde(default)]
    pub barter_scheme: BTreeMap<String, Vec<BarterOffer>>,
    /// Assort item `_id` -> required loyalty level
    #[serde(default)]
    pub loyal_level_items: BTreeMap<String, i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssortItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_tpl")]
    pub tpl: String,
    #[serde(default)]
    pub parent_id: String,
    #[serde(default)]
    pub slot_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upd: Option<ItemUpd>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Stack and purchase-limit state of an assort item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemUpd {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlimited_count: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_objects_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_restriction_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_restriction_current: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarterItem {
    #[serde(serialize_with = "number::serialize")]
    pub count: f64,
    #[serde(rename = "_tpl")]
    pub tpl: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BarterItem {
    pub fn new(tpl: &str, count: f64) -> Self {
        Self {
            count,
            tpl: tpl.to_string(),
            extra: Map::new(),
        }
    }
}

impl TraderAssort {
    /// First assort item selling `tpl`
    pub fn find_by_tpl(&self, tpl: &str) -> Option<&AssortItem> {
        self.items.iter().find(|item| item.tpl == tpl)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}
