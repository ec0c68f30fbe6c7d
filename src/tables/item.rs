//! Item template structures (`templates.items`)

use super::number;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_name", default)]
    pub name: String,
    /// Parent node in the base-class hierarchy; empty for the root
    #[serde(rename = "_parent", default)]
    pub parent: String,
    /// "Item" or "Node"
    #[serde(rename = "_type", default)]
    pub kind: String,
    #[serde(rename = "_props", default)]
    pub props: ItemProps,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemTemplate {
    /// Hierarchy nodes are base classes, not real items
    pub fn is_node(&self) -> bool {
        self.kind == "Node"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemProps {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::serialize_option"
    )]
    pub weight: Option<f64>,
    /// 0 means unlimited uses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_number_of_usage: Option<i32>,
    /// -1 means no raid limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discard_limit: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
