//! Global settings structures (`globals`)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Globals {
    #[serde(default)]
    pub config: GlobalConfig,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(rename = "RagFair", default)]
    pub rag_fair: RagFairSettings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Flea market settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagFairSettings {
    /// Player level needed to use the flea market
    #[serde(default)]
    pub min_user_level: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
