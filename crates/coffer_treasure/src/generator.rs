//! # Treasure Generator
//!
//! One selector roll picks one table row; every award in that row fires with
//! its own independent amount roll. Generation is additive: the creature's
//! existing holdings are the baseline and carry forward untouched.
//!
//! Pure given the roller - no I/O, no shared state, no side effects.

use coffer_core::{CurrencyBundle, DiceFormula, DiceRoller};

use crate::table::row_for_roll;
use crate::tier::ChallengeTier;

/// Generates a currency bundle for a creature.
///
/// * `rating` - the creature's challenge rating; negative or NaN ratings
///   fall open to the lowest tier (see [`ChallengeTier::from_rating`]).
/// * `existing` - the creature's current holdings, used as the additive
///   baseline.
/// * `roller` - the injected dice source; exactly one `1d100` selector roll
///   plus one amount roll per award in the selected row.
/// * `multiplier` - scale applied to every rolled amount; each scaled amount
///   is floored before it is added.
#[must_use]
pub fn generate<R: DiceRoller>(
    rating: f64,
    existing: &CurrencyBundle,
    roller: &mut R,
    multiplier: f64,
) -> CurrencyBundle {
    let tier = ChallengeTier::from_rating(rating);
    let selector = roller.roll(DiceFormula::D100);

    // A well-behaved roller keeps the selector in [1, 100]; a misbehaving
    // one selects nothing and the baseline passes through unchanged.
    let Some(row) = row_for_roll(tier, selector) else {
        return *existing;
    };

    let mut bundle = *existing;
    for treasure_award in row.awards {
        let rolled = roller.roll(treasure_award.formula);
        bundle.add(treasure_award.denomination, scale(rolled, multiplier));
    }
    bundle
}

/// Scales a rolled amount by the configured multiplier, flooring the result.
///
/// The float-to-int cast saturates, so a multiplier of 0 annihilates every
/// amount and nothing can go negative.
fn scale(amount: u32, multiplier: f64) -> u32 {
    (f64::from(amount) * multiplier).floor() as u32
}

#[cfg(test)]
mod tests {
    use coffer_core::SequenceRoller;

    use super::*;

    #[test]
    fn selector_50_in_lowest_tier_awards_silver() {
        // Selector 50 falls in 31-60, amount roll scripted to 4.
        let mut roller = SequenceRoller::new(&[50, 4]);
        let bundle = generate(2.0, &CurrencyBundle::ZERO, &mut roller, 1.0);
        assert_eq!(bundle, CurrencyBundle::new(0, 4, 0, 0, 0));
        assert_eq!(roller.remaining(), 0);
    }

    #[test]
    fn dual_award_rows_fire_both_awards() {
        // Tier 5-10, selector 15 lands in 1-30: copper AND electrum.
        let mut roller = SequenceRoller::new(&[15, 700, 30]);
        let bundle = generate(7.0, &CurrencyBundle::ZERO, &mut roller, 1.0);
        assert_eq!(bundle.cp, 700);
        assert_eq!(bundle.ep, 30);
        assert_eq!(bundle.sp + bundle.gp + bundle.pp, 0);
    }

    #[test]
    fn generation_is_additive_over_existing_holdings() {
        let existing = CurrencyBundle::new(3, 9, 0, 5, 0);
        let mut roller = SequenceRoller::new(&[50, 4]);
        let bundle = generate(0.0, &existing, &mut roller, 1.0);
        assert_eq!(bundle, CurrencyBundle::new(3, 13, 0, 5, 0));
        // The caller's bundle is untouched.
        assert_eq!(existing, CurrencyBundle::new(3, 9, 0, 5, 0));
    }

    #[test]
    fn zero_multiplier_annihilates_every_award() {
        let mut roller = SequenceRoller::new(&[15, 700, 30]);
        let bundle = generate(7.0, &CurrencyBundle::ZERO, &mut roller, 0.0);
        assert!(bundle.is_empty());
    }

    #[test]
    fn fractional_multiplier_floors_each_award() {
        // 7 * 1.5 = 10.5 -> 10; 3 * 1.5 = 4.5 -> 4.
        let mut roller = SequenceRoller::new(&[15, 7, 3]);
        let bundle = generate(7.0, &CurrencyBundle::ZERO, &mut roller, 1.5);
        assert_eq!(bundle.cp, 10);
        assert_eq!(bundle.ep, 4);
    }

    #[test]
    fn negative_rating_uses_the_lowest_tier_table() {
        // Selector 96 in the lowest tier is the platinum row.
        let mut roller = SequenceRoller::new(&[96, 5]);
        let bundle = generate(-3.0, &CurrencyBundle::ZERO, &mut roller, 1.0);
        assert_eq!(bundle.pp, 5);
    }

    #[test]
    fn nan_rating_uses_the_lowest_tier_table() {
        let mut roller = SequenceRoller::new(&[10, 6]);
        let bundle = generate(f64::NAN, &CurrencyBundle::ZERO, &mut roller, 1.0);
        assert_eq!(bundle.cp, 6);
    }

    #[test]
    fn out_of_range_selector_passes_the_baseline_through() {
        let existing = CurrencyBundle::new(1, 2, 3, 4, 5);
        let mut roller = SequenceRoller::new(&[0]);
        let bundle = generate(2.0, &existing, &mut roller, 1.0);
        assert_eq!(bundle, existing);
    }

    #[test]
    fn high_tier_generation_reaches_the_thousands() {
        // Tier 17+, selector 10 lands in 1-15: electrum and gold.
        let mut roller = SequenceRoller::new(&[10, 7000, 2900]);
        let bundle = generate(21.0, &CurrencyBundle::ZERO, &mut roller, 1.0);
        assert_eq!(bundle.ep, 7000);
        assert_eq!(bundle.gp, 2900);
    }
}
