//! The list of available patches and their config flags

use crate::config::PatchConfig;
use std::fmt;

/// One config-gated database patch, in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Patch {
    StashRequirements,
    InstantConstruction,
    BitcoinFarm,
    DisableFlea,
    Insurance,
    SecureAssort,
    Keys,
}

impl Patch {
    pub const ALL: [Patch; 7] = [
        Patch::StashRequirements,
        Patch::InstantConstruction,
        Patch::BitcoinFarm,
        Patch::DisableFlea,
        Patch::Insurance,
        Patch::SecureAssort,
        Patch::Keys,
    ];

    /// Config key that enables this patch
    pub fn config_key(&self) -> &'static str {
        match self {
            Patch::StashRequirements => "hideout.stashChanges",
            Patch::InstantConstruction => "hideout.instantConstruction",
            Patch::BitcoinFarm => "hideout.bitcoinBuff",
            Patch::DisableFlea => "traders.disableFlea",
            Patch::Insurance => "traders.insuranceChanges",
            Patch::SecureAssort => "traders.secureAssortChanges",
            Patch::Keys => "keyChanges",
        }
    }

    pub fn is_enabled(&self, config: &PatchConfig) -> bool {
        match self {
            Patch::StashRequirements => config.hideout.stash_changes,
            Patch::InstantConstruction => config.hideout.instant_construction,
            Patch::BitcoinFarm => config.hideout.bitcoin_buff,
            Patch::DisableFlea => config.traders.disable_flea,
            Patch::Insurance => config.traders.insurance_changes,
            Patch::SecureAssort => config.traders.secure_assort_changes,
            Patch::Keys => config.key_changes,
        }
    }

    /// Whether applying twice leaves the same state as applying once.
    /// Stash relaxation, the bitcoin buff and insurance changes compound.
    pub fn is_idempotent(&self) -> bool {
        !matches!(
            self,
            Patch::StashRequirements | Patch::BitcoinFarm | Patch::Insurance
        )
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

impl PatchConfig {
    /// Enabled patches in application order
    pub fn enabled_patches(&self) -> Vec<Patch> {
        Patch::ALL
            .into_iter()
            .filter(|patch| patch.is_enabled(self))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_enabled_by_default() {
        assert!(PatchConfig::default().enabled_patches().is_empty());
    }

    #[test]
    fn test_enabled_patches_order() {
        let config = PatchConfig::parse(
            r#"{"keyChanges": true, "traders": {"disableFlea": true}, "hideout": {"stashChanges": true}}"#,
        )
        .unwrap();
        assert_eq!(
            config.enabled_patches(),
            vec![Patch::StashRequirements, Patch::DisableFlea, Patch::Keys]
        );
    }

    #[test]
    fn test_each_flag_maps_to_one_patch() {
        for patch in Patch::ALL {
            let (group, key) = match patch.config_key().split_once('.') {
                Some((group, key)) => (Some(group), key),
                None => (None, patch.config_key()),
            };
            let json = match group {
                Some(group) => format!(r#"{{"{}": {{"{}": true}}}}"#, group, key),
                None => format!(r#"{{"{}": true}}"#, key),
            };
            let config = PatchConfig::parse(&json).unwrap();
            assert_eq!(config.enabled_patches(), vec![patch], "Failed for: {}", patch);
        }
    }

    #[test]
    fn test_idempotency_flags() {
        let compounding: Vec<Patch> = Patch::ALL
            .into_iter()
            .filter(|patch| !patch.is_idempotent())
            .collect();
        assert_eq!(
            compounding,
            vec![Patch::StashRequirements, Patch::BitcoinFarm, Patch::Insurance]
        );
    }
}
