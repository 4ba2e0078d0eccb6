//! # Currency Normalizer
//!
//! Collapses a generated bundle according to deployment policy, in two
//! independent passes:
//!
//! 1. **Denomination toggles** - every disabled denomination drains into the
//!    next enabled one below it, strictly top-down (platinum, gold, electrum,
//!    silver). Each pass's output feeds the next, so fully-disabled coinage
//!    compounds all the way into copper.
//! 2. **Currency standard** - `silverStandard` deployments fold electrum,
//!    gold, and platinum into silver, then absorb copper above one full
//!    silver's worth.
//!
//! Toggles run BEFORE the standard. Reversing the passes changes results
//! whenever both policies are active; the ordering is business logic, not an
//! implementation accident.
//!
//! Every conversion multiplies or floor-divides non-negative integers, so no
//! pass can produce a negative count.

use coffer_core::{CoinRules, CurrencyBundle, CurrencyStandard};

/// Gold received per platinum piece when platinum is disabled.
const PLATINUM_TO_GOLD: u32 = 10;
/// Electrum received per gold piece when gold is disabled.
const GOLD_TO_ELECTRUM: u32 = 2;
/// Silver received per electrum piece when electrum is disabled.
const ELECTRUM_TO_SILVER: u32 = 5;
/// Copper received per silver piece when silver is disabled.
const SILVER_TO_COPPER: u32 = 10;

/// Silver received per electrum piece under the silver standard.
const ELECTRUM_TO_SILVER_STANDARD: u32 = 5;
/// Silver received per gold piece under the silver standard.
const GOLD_TO_SILVER_STANDARD: u32 = 10;
/// Silver received per platinum piece under the silver standard.
const PLATINUM_TO_SILVER_STANDARD: u32 = 100;
/// Copper pieces per silver piece, for the copper remainder fold.
const COPPER_PER_SILVER: u32 = 10;

/// Collapses disabled denominations into the next enabled one below.
///
/// Passes run top-down so a disabled chain compounds: with everything but
/// copper disabled, platinum drains through gold, electrum, and silver into
/// copper at the product of the exchange rates. Copper is the sink and can
/// never be disabled.
#[must_use]
pub fn apply_denomination_toggles(bundle: &CurrencyBundle, rules: &CoinRules) -> CurrencyBundle {
    let mut out = *bundle;

    if !rules.use_platinum {
        out.gp += out.pp * PLATINUM_TO_GOLD;
        out.pp = 0;
    }
    if !rules.use_gold {
        out.ep += out.gp * GOLD_TO_ELECTRUM;
        out.gp = 0;
    }
    if !rules.use_electrum {
        out.sp += out.ep * ELECTRUM_TO_SILVER;
        out.ep = 0;
    }
    if !rules.use_silver {
        out.cp += out.sp * SILVER_TO_COPPER;
        out.sp = 0;
    }

    out
}

/// Applies the deployment's currency standard.
///
/// `Normal` is the identity. `SilverStandard` folds electrum, gold, and
/// platinum into silver in that order, then adds `cp / 10` (floored) to
/// silver and keeps `cp % 10` as the copper remainder - sub-silver change
/// stays exactly as rolled.
#[must_use]
pub fn apply_currency_standard(
    bundle: &CurrencyBundle,
    standard: CurrencyStandard,
) -> CurrencyBundle {
    match standard {
        CurrencyStandard::Normal => *bundle,
        CurrencyStandard::SilverStandard => {
            let mut out = *bundle;

            out.sp += out.ep * ELECTRUM_TO_SILVER_STANDARD;
            out.ep = 0;

            out.sp += out.gp * GOLD_TO_SILVER_STANDARD;
            out.gp = 0;

            out.sp += out.pp * PLATINUM_TO_SILVER_STANDARD;
            out.pp = 0;

            out.sp += out.cp / COPPER_PER_SILVER;
            out.cp %= COPPER_PER_SILVER;

            out
        }
    }
}

/// Full normalization: toggles first, then the currency standard.
///
/// The toggle pass must already have zeroed any disabled denomination before
/// the standard fold reads the electrum/gold/platinum/copper counts.
#[must_use]
pub fn normalize(bundle: &CurrencyBundle, rules: &CoinRules) -> CurrencyBundle {
    apply_currency_standard(
        &apply_denomination_toggles(bundle, rules),
        rules.currency_standard,
    )
}
