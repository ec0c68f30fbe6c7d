//! Hideout table structures

use super::number;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// `hideout` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HideoutTables {
    #[serde(default)]
    pub areas: Vec<HideoutArea>,
    #[serde(default)]
    pub production: HideoutProductionData,
    #[serde(default)]
    pub settings: HideoutSettings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A buildable hideout area (stash, generator, bitcoin farm, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HideoutArea {
    #[serde(rename = "_id")]
    pub id: String,
    /// Stages keyed by level ("0", "1", ...)
    #[serde(default)]
    pub stages: BTreeMap<String, HideoutStage>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HideoutStage {
    #[serde(default)]
    pub requirements: Vec<StageRequirement>,
    /// Seconds
    #[serde(default, serialize_with = "number::serialize")]
    pub construction_time: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One upgrade requirement: an item, a trader loyalty level, a skill, ...
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageRequirement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "number::serialize_option"
    )]
    pub count: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `hideout.production`: crafting recipes plus the scav case and cultist
/// circle tables, which no patch touches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HideoutProductionData {
    #[serde(default)]
    pub recipes: Vec<HideoutProduction>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Production recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HideoutProduction {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub end_product: String,
    /// Seconds
    #[serde(default, serialize_with = "number::serialize")]
    pub production_time: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HideoutSettings {
    #[serde(default, serialize_with = "number::serialize")]
    pub gpu_boost_rate: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HideoutTables {
    /// Find an area by its `_id`
    pub fn area_mut(&mut self, id: &str) -> Option<&mut HideoutArea> {
        self.areas.iter_mut().find(|area| area.id == id)
    }

    /// Find the first recipe producing `template_id`
    pub fn recipe_for_mut(&mut self, template_id: &str) -> Option<&mut HideoutProduction> {
        self.production
            .recipes
            .iter_mut()
            .find(|recipe| recipe.end_product == template_id)
    }
}

impl HideoutArea {
    pub fn requirements_mut(&mut self) -> impl Iterator<Item = &mut StageRequirement> {
        self.stages
            .values_mut()
            .flat_map(|stage| stage.requirements.iter_mut())
    }
}
