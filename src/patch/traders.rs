//! Trader and flea market patches

use crate::error::{PatchError, Result};
use crate::ids::*;
use crate::tables::{
    AssortItem, BarterItem, BarterOffer, Globals, InsuranceConfig, ItemUpd, Trader,
};
use serde_json::Map;
use std::collections::BTreeMap;

/// Flea market unlock level once disabled
pub const FLEA_DISABLED_LEVEL: i32 = 99;

/// Fixed insurance terms for one trader
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsuranceTerms {
    pub trader_id: &'static str,
    pub min_return_hour: i32,
    pub max_return_hour: i32,
    pub max_storage_time: i32,
    pub return_chance_percent: f64,
    /// Multiplier applied to every loyalty level's insurance price
    pub price_coef_multiplier: Option<f64>,
}

pub const PRAPOR_INSURANCE: InsuranceTerms = InsuranceTerms {
    trader_id: PRAPOR,
    min_return_hour: 2,
    max_return_hour: 3,
    max_storage_time: 480,
    return_chance_percent: 90.0,
    price_coef_multiplier: None,
};

pub const THERAPIST_INSURANCE: InsuranceTerms = InsuranceTerms {
    trader_id: THERAPIST,
    min_return_hour: 1,
    max_return_hour: 2,
    max_storage_time: 480,
    return_chance_percent: 100.0,
    price_coef_multiplier: Some(2.0),
};

/// Stock of the added gamma container entry
pub const UNLIMITED_STACK_COUNT: u64 = 9_999_999;

/// New price of one secure container at Peacekeeper
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecureContainerOffer {
    pub tpl: &'static str,
    pub loyalty_level: i32,
    /// `(template, count)` handed over in a single trade
    pub barter: &'static [(&'static str, f64)],
}

pub const SECURE_CONTAINER_OFFERS: [SecureContainerOffer; 3] = [
    SecureContainerOffer {
        tpl: SECURE_CONTAINER_ALPHA,
        loyalty_level: 1,
        barter: &[(DOLLARS, 2000.0)],
    },
    SecureContainerOffer {
        tpl: SECURE_CONTAINER_BETA,
        loyalty_level: 2,
        barter: &[(BITCOIN, 1.0), (GRAPHICS_CARD, 2.0)],
    },
    SecureContainerOffer {
        tpl: SECURE_CONTAINER_GAMMA,
        loyalty_level: 4,
        barter: &[
            (GAMMA_BARTER_ITEMS[0], 1.0),
            (GAMMA_BARTER_ITEMS[1], 1.0),
            (GAMMA_BARTER_ITEMS[2], 1.0),
        ],
    },
];

impl SecureContainerOffer {
    pub fn barter_offer(&self) -> BarterOffer {
        self.barter
            .iter()
            .map(|(tpl, count)| BarterItem::new(tpl, *count))
            .collect()
    }
}

pub fn disable_flea(globals: &mut Globals) {
    let rag_fair = &mut globals.config.rag_fair;
    log::info!(
        "Flea market unlock level {} -> {}",
        rag_fair.min_user_level,
        FLEA_DISABLED_LEVEL
    );
    rag_fair.min_user_level = FLEA_DISABLED_LEVEL;
}

/// Faster insurance returns at Prapor and Therapist
pub fn change_insurance(
    traders: &mut BTreeMap<String, Trader>,
    insurance: &mut InsuranceConfig,
) -> Result<()> {
    for terms in [PRAPOR_INSURANCE, THERAPIST_INSURANCE] {
        apply_insurance_terms(traders, insurance, &terms)?;
    }
    Ok(())
}

fn apply_insurance_terms(
    traders: &mut BTreeMap<String, Trader>,
    insurance: &mut InsuranceConfig,
    terms: &InsuranceTerms,
) -> Result<()> {
    let trader = trader_mut(traders, terms.trader_id)?;

    let base_insurance = &mut trader.base.insurance;
    base_insurance.min_return_hour = terms.min_return_hour;
    base_insurance.max_return_hour = terms.max_return_hour;
    base_insurance.max_storage_time = terms.max_storage_time;

    if let Some(multiplier) = terms.price_coef_multiplier {
        for level in &mut trader.base.loyalty_levels {
            level.insurance_price_coef *= multiplier;
        }
    }

    insurance
        .return_chance_percent
        .insert(terms.trader_id.to_string(), terms.return_chance_percent);

    log::info!(
        "Insurance for {}: return {}-{}h, storage {}h, chance {}%",
        terms.trader_id,
        terms.min_return_hour,
        terms.max_return_hour,
        terms.max_storage_time,
        terms.return_chance_percent
    );
    Ok(())
}

/// Peacekeeper sells a gamma container and cheaper alpha/beta/gamma barters
pub fn change_secure_assort(traders: &mut BTreeMap<String, Trader>) -> Result<()> {
    let trader = trader_mut(traders, PEACEKEEPER)?;
    let assort = trader
        .assort
        .as_mut()
        .ok_or_else(|| PatchError::AssortMissing(PEACEKEEPER.to_string()))?;

    if assort.contains_id(GAMMA_ASSORT_ID) {
        log::debug!("Gamma container already in assort, not adding it again");
    } else {
        assort.items.push(gamma_assort_item());
    }

    for offer in &SECURE_CONTAINER_OFFERS {
        let item_id = assort
            .find_by_tpl(offer.tpl)
            .map(|item| item.id.clone())
            .ok_or_else(|| PatchError::AssortItemNotFound {
                trader: PEACEKEEPER.to_string(),
                tpl: offer.tpl.to_string(),
            })?;

        log::debug!(
            "Assort item {} ({}): new barter, loyalty level {}",
            item_id,
            offer.tpl,
            offer.loyalty_level
        );
        assort
            .barter_scheme
            .insert(item_id.clone(), vec![offer.barter_offer()]);
        assort.loyal_level_items.insert(item_id, offer.loyalty_level);
    }

    log::info!("Secure container barters updated at {}", PEACEKEEPER);
    Ok(())
}

fn trader_mut<'a>(traders: &'a mut BTreeMap<String, Trader>, id: &str) -> Result<&'a mut Trader> {
    traders
        .get_mut(id)
        .ok_or_else(|| PatchError::TraderNotFound(id.to_string()))
}

fn gamma_assort_item() -> AssortItem {
    AssortItem {
        id: GAMMA_ASSORT_ID.to_string(),
        tpl: SECURE_CONTAINER_GAMMA.to_string(),
        parent_id: ASSORT_ROOT.to_string(),
        slot_id: ASSORT_ROOT.to_string(),
        upd: Some(ItemUpd {
            unlimited_count: Some(true),
            stack_objects_count: Some(UNLIMITED_STACK_COUNT),
            buy_restriction_max: Some(1),
            buy_restriction_current: Some(0),
            extra: Map::new(),
        }),
        extra: Map::new(),
    }
}
