//! Hideout patches

use crate::error::{PatchError, Result};
use crate::ids::{BITCOIN, EUROS, ROUBLES, STASH_AREA};
use crate::tables::HideoutTables;

/// Currency requirements of stash upgrades are divided by this
pub const STASH_COUNT_DIVISOR: f64 = 10.0;
pub const GPU_BOOST_RATE: f64 = 0.1;
pub const BITCOIN_TIME_MULTIPLIER: f64 = 0.9;

/// Stash upgrades: one trader loyalty level less, a tenth of the money
pub fn relax_stash_requirements(hideout: &mut HideoutTables) -> Result<()> {
    let stash = hideout
        .area_mut(STASH_AREA)
        .ok_or_else(|| PatchError::AreaNotFound(STASH_AREA.to_string()))?;

    let mut loyalty_changed = 0;
    let mut counts_changed = 0;

    for requirement in stash.requirements_mut() {
        if let Some(level) = requirement.loyalty_level.as_mut() {
            *level -= 1;
            loyalty_changed += 1;
        }

        let is_currency = matches!(
            requirement.template_id.as_deref(),
            Some(ROUBLES) | Some(EUROS)
        );
        if is_currency {
            if let Some(count) = requirement.count.as_mut() {
                *count /= STASH_COUNT_DIVISOR;
                counts_changed += 1;
            }
        }
    }

    log::info!(
        "Stash upgrades relaxed: {} loyalty requirements, {} currency requirements",
        loyalty_changed,
        counts_changed
    );
    Ok(())
}

/// Every stage of every area builds in zero seconds
pub fn instant_construction(hideout: &mut HideoutTables) {
    let mut stages = 0;
    for area in &mut hideout.areas {
        for stage in area.stages.values_mut() {
            stage.construction_time = 0.0;
            stages += 1;
        }
    }

    log::info!(
        "Instant construction: {} stages across {} areas",
        stages,
        hideout.areas.len()
    );
}

/// Faster bitcoin farm: higher GPU boost, shorter base production time
pub fn buff_bitcoin_farm(hideout: &mut HideoutTables) -> Result<()> {
    hideout.settings.gpu_boost_rate = GPU_BOOST_RATE;

    let recipe = hideout
        .recipe_for_mut(BITCOIN)
        .ok_or_else(|| PatchError::RecipeNotFound(BITCOIN.to_string()))?;
    let before = recipe.production_time;
    recipe.production_time *= BITCOIN_TIME_MULTIPLIER;

    log::info!(
        "Bitcoin farm: GPU boost rate {}, production time {} -> {}",
        GPU_BOOST_RATE,
        before,
        recipe.production_time
    );
    Ok(())
}
