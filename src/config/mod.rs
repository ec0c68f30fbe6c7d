//! Configuration module
//!
//! Loads the mod's `config.jsonc` into a [`PatchConfig`].

mod flags;
pub mod jsonc;

pub use flags::*;

use crate::error::{PatchError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file location relative to the installed mod directory
pub const CONFIG_RELATIVE_PATH: &str = "config/config.jsonc";

impl PatchConfig {
    /// Parse a JSONC document
    pub fn parse(text: &str) -> Result<Self> {
        let json = jsonc::strip(text)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Read and parse a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PatchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        log::debug!("Loaded patch config from {}", path.display());
        Ok(config)
    }

    /// Load `config/config.jsonc` from the installed mod directory
    pub fn load_from_mod_dir(mod_dir: impl AsRef<Path>) -> Result<Self> {
        Self::load(config_path(mod_dir))
    }
}

/// Resolve the config file path for a mod directory
pub fn config_path(mod_dir: impl AsRef<Path>) -> PathBuf {
    mod_dir.as_ref().join(CONFIG_RELATIVE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED_CONFIG: &str = include_str!("../../config/config.jsonc");

    #[test]
    fn test_parse_with_comments() {
        let text = r#"
        {
            // Hideout
            "hideout": {
                "stashChanges": true, // cheaper stash
                "instantConstruction": false,
            },
            /* Traders */
            "traders": { "disableFlea": true },
        }"#;
        let config = PatchConfig::parse(text).unwrap();
        assert!(config.hideout.stash_changes);
        assert!(!config.hideout.instant_construction);
        assert!(config.traders.disable_flea);
        assert!(!config.key_changes);
    }

    #[test]
    fn test_parse_malformed() {
        let err = PatchConfig::parse("{ \"hideout\": ").unwrap_err();
        assert!(matches!(err, PatchError::Deserialization(_)));
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = PatchConfig::parse(SHIPPED_CONFIG).unwrap();
        assert!(config.hideout.stash_changes);
        assert!(config.traders.secure_assort_changes);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PatchConfig::load_from_mod_dir("/nonexistent/mod/dir").unwrap_err();
        match err {
            PatchError::ConfigRead { path, .. } => {
                assert!(path.ends_with("config/config.jsonc"));
            }
            other => panic!("Expected ConfigRead, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_mod_dir() {
        let dir = std::env::temp_dir().join(format!("spt-qol-patch-{}", std::process::id()));
        fs::create_dir_all(dir.join("config")).unwrap();
        fs::write(config_path(&dir), "{ \"keyChanges\": true // keys\n}").unwrap();

        let config = PatchConfig::load_from_mod_dir(&dir).unwrap();
        assert!(config.key_changes);

        fs::remove_dir_all(&dir).unwrap();
    }
}
