//! Runs every enabled patch against the database tables

use crate::classifier::ItemClassifier;
use crate::config::PatchConfig;
use crate::error::Result;
use crate::patch::catalogue::Patch;
use crate::patch::{hideout, items, traders};
use crate::tables::{DatabaseTables, InsuranceConfig};
use std::path::Path;

/// Applies the patches enabled in a [`PatchConfig`]
#[derive(Debug, Clone, Default)]
pub struct PatchApplier {
    config: PatchConfig,
}

impl PatchApplier {
    pub fn new(config: PatchConfig) -> Self {
        Self { config }
    }

    /// Build from the installed mod directory's `config/config.jsonc`
    pub fn from_mod_dir(mod_dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(PatchConfig::load_from_mod_dir(mod_dir)?))
    }

    pub fn config(&self) -> &PatchConfig {
        &self.config
    }

    pub fn apply<C: ItemClassifier + ?Sized>(
        &self,
        tables: &mut DatabaseTables,
        insurance: &mut InsuranceConfig,
        classifier: &C,
    ) -> Result<Vec<Patch>> {
        apply(&self.config, tables, insurance, classifier)
    }
}

/// Apply every enabled patch in order and return the ones applied
///
/// The first failed lookup aborts the run. Patches applied before it stay
/// applied.
pub fn apply<C: ItemClassifier + ?Sized>(
    config: &PatchConfig,
    tables: &mut DatabaseTables,
    insurance: &mut InsuranceConfig,
    classifier: &C,
) -> Result<Vec<Patch>> {
    let enabled = config.enabled_patches();
    if enabled.is_empty() {
        log::info!("No patches enabled");
        return Ok(enabled);
    }

    for patch in &enabled {
        log::debug!("Applying {}", patch);
        apply_one(*patch, tables, insurance, classifier).inspect_err(|err| {
            log::error!("Patch {} failed: {}", patch, err);
        })?;
    }

    log::info!("Applied {} patches", enabled.len());
    Ok(enabled)
}

fn apply_one<C: ItemClassifier + ?Sized>(
    patch: Patch,
    tables: &mut DatabaseTables,
    insurance: &mut InsuranceConfig,
    classifier: &C,
) -> Result<()> {
    match patch {
        Patch::StashRequirements => hideout::relax_stash_requirements(&mut tables.hideout)?,
        Patch::InstantConstruction => hideout::instant_construction(&mut tables.hideout),
        Patch::BitcoinFarm => hideout::buff_bitcoin_farm(&mut tables.hideout)?,
        Patch::DisableFlea => traders::disable_flea(&mut tables.globals),
        Patch::Insurance => traders::change_insurance(&mut tables.traders, insurance)?,
        Patch::SecureAssort => traders::change_secure_assort(&mut tables.traders)?,
        Patch::Keys => items::change_keys(&mut tables.templates.items, classifier),
    }
    Ok(())
}
