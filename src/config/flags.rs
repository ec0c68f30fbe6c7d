//! Patch flag structures

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level patch configuration (`config/config.jsonc`)
///
/// Every flag defaults to `false`, as does a flag set to `null`; unknown keys
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatchConfig {
    pub hideout: HideoutFlags,
    pub traders: TraderFlags,
    #[serde(deserialize_with = "null_as_false")]
    pub key_changes: bool,
}

/// Hideout patch flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HideoutFlags {
    /// Cheaper stash upgrades
    #[serde(deserialize_with = "null_as_false")]
    pub stash_changes: bool,
    #[serde(deserialize_with = "null_as_false")]
    pub instant_construction: bool,
    #[serde(deserialize_with = "null_as_false")]
    pub bitcoin_buff: bool,
}

/// Trader patch flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TraderFlags {
    #[serde(deserialize_with = "null_as_false")]
    pub disable_flea: bool,
    #[serde(deserialize_with = "null_as_false")]
    pub insurance_changes: bool,
    /// Alpha/beta/gamma container barters at Peacekeeper
    #[serde(deserialize_with = "null_as_false")]
    pub secure_assort_changes: bool,
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}
