//! # Tier Treasure Tables
//!
//! The canonical coin tables, one per challenge tier. Each table is an
//! ordered list of rows keyed by a `1d100` selector roll; the row containing
//! the roll fires every one of its awards, each with an independent sub-roll.
//!
//! The tables are data, not control flow: rows live in const slices so the
//! exhaustiveness properties (ranges contiguous, non-overlapping, covering
//! exactly `[1, 100]`) are checkable by iterating the data.

use coffer_core::currency::Denomination::{Copper, Electrum, Gold, Platinum, Silver};
use coffer_core::{Denomination, DiceFormula};

use crate::tier::ChallengeTier;

/// One denomination-add operation within a table row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreasureAward {
    /// The denomination receiving coins.
    pub denomination: Denomination,
    /// The amount formula, rolled independently per award.
    pub formula: DiceFormula,
}

/// A weighted outcome of a tier table: a selector-roll range plus the awards
/// that fire when the roll lands inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRow {
    /// Lowest selector roll that selects this row (inclusive).
    pub lower: u32,
    /// Highest selector roll that selects this row (inclusive).
    pub upper: u32,
    /// Awards that all fire when this row is selected.
    pub awards: &'static [TreasureAward],
}

impl TableRow {
    /// Creates a row.
    #[must_use]
    const fn new(lower: u32, upper: u32, awards: &'static [TreasureAward]) -> Self {
        Self {
            lower,
            upper,
            awards,
        }
    }

    /// True if the selector roll lands in this row.
    #[inline]
    #[must_use]
    pub const fn contains(&self, roll: u32) -> bool {
        self.lower <= roll && roll <= self.upper
    }
}

/// Shorthand for building award entries in the const tables.
const fn award(denomination: Denomination, count: u32, sides: u32, multiplier: u32) -> TreasureAward {
    TreasureAward {
        denomination,
        formula: DiceFormula::new(count, sides, multiplier),
    }
}

const TIER_0_TO_4: &[TableRow] = &[
    TableRow::new(1, 30, &[award(Copper, 5, 6, 1)]),
    TableRow::new(31, 60, &[award(Silver, 4, 6, 1)]),
    TableRow::new(61, 70, &[award(Electrum, 3, 6, 1)]),
    TableRow::new(71, 95, &[award(Gold, 3, 6, 1)]),
    TableRow::new(96, 100, &[award(Platinum, 1, 6, 1)]),
];

const TIER_5_TO_10: &[TableRow] = &[
    TableRow::new(1, 30, &[award(Copper, 4, 6, 100), award(Electrum, 1, 6, 10)]),
    TableRow::new(31, 60, &[award(Silver, 6, 6, 10), award(Gold, 2, 6, 10)]),
    TableRow::new(61, 70, &[award(Electrum, 3, 6, 10), award(Gold, 2, 6, 10)]),
    TableRow::new(71, 95, &[award(Gold, 4, 6, 10)]),
    TableRow::new(96, 100, &[award(Gold, 2, 6, 10), award(Platinum, 3, 6, 1)]),
];

const TIER_11_TO_16: &[TableRow] = &[
    TableRow::new(1, 20, &[award(Silver, 4, 6, 100), award(Gold, 1, 6, 100)]),
    TableRow::new(21, 35, &[award(Electrum, 1, 6, 100), award(Gold, 1, 6, 100)]),
    TableRow::new(36, 75, &[award(Gold, 2, 6, 100), award(Platinum, 1, 6, 10)]),
    TableRow::new(76, 100, &[award(Gold, 2, 6, 100), award(Platinum, 2, 6, 10)]),
];

const TIER_17_PLUS: &[TableRow] = &[
    TableRow::new(1, 15, &[award(Electrum, 2, 6, 1000), award(Gold, 8, 6, 100)]),
    TableRow::new(16, 55, &[award(Gold, 1, 6, 1000), award(Platinum, 1, 6, 100)]),
    TableRow::new(56, 100, &[award(Gold, 1, 6, 1000), award(Platinum, 2, 6, 100)]),
];

/// The table rows for a tier, in ascending selector order.
#[must_use]
pub const fn rows(tier: ChallengeTier) -> &'static [TableRow] {
    match tier {
        ChallengeTier::Cr0To4 => TIER_0_TO_4,
        ChallengeTier::Cr5To10 => TIER_5_TO_10,
        ChallengeTier::Cr11To16 => TIER_11_TO_16,
        ChallengeTier::Cr17Plus => TIER_17_PLUS,
    }
}

/// Finds the row a selector roll lands in.
///
/// Returns `None` only for rolls outside `[1, 100]`; the tables cover the
/// selector range exactly.
#[must_use]
pub fn row_for_roll(tier: ChallengeTier, roll: u32) -> Option<&'static TableRow> {
    rows(tier).iter().find(|row| row.contains(roll))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_covers_the_selector_range_exactly_once() {
        for tier in ChallengeTier::ALL {
            for roll in 1..=100 {
                let matching = rows(tier).iter().filter(|row| row.contains(roll)).count();
                assert_eq!(matching, 1, "tier {tier:?} roll {roll}");
            }
            assert!(row_for_roll(tier, 0).is_none());
            assert!(row_for_roll(tier, 101).is_none());
        }
    }

    #[test]
    fn rows_are_ascending_and_contiguous() {
        for tier in ChallengeTier::ALL {
            let table = rows(tier);
            assert_eq!(table[0].lower, 1);
            assert_eq!(table[table.len() - 1].upper, 100);
            for pair in table.windows(2) {
                assert_eq!(pair[0].upper + 1, pair[1].lower);
            }
        }
    }

    #[test]
    fn every_row_awards_one_or_two_denominations() {
        for tier in ChallengeTier::ALL {
            for row in rows(tier) {
                assert!(!row.awards.is_empty());
                assert!(row.awards.len() <= 2);
            }
        }
    }

    #[test]
    fn lowest_tier_matches_the_canonical_rows() {
        let midband = row_for_roll(ChallengeTier::Cr0To4, 45).unwrap();
        assert_eq!(midband.awards.len(), 1);
        assert_eq!(midband.awards[0].denomination, Denomination::Silver);
        assert_eq!(midband.awards[0].formula, DiceFormula::new(4, 6, 1));

        let top = row_for_roll(ChallengeTier::Cr0To4, 96).unwrap();
        assert_eq!(top.awards[0].denomination, Denomination::Platinum);
        assert_eq!(top.awards[0].formula, DiceFormula::new(1, 6, 1));
    }

    #[test]
    fn highest_tier_pays_out_in_thousands() {
        let first = row_for_roll(ChallengeTier::Cr17Plus, 1).unwrap();
        assert_eq!(first.awards[0].denomination, Denomination::Electrum);
        assert_eq!(first.awards[0].formula, DiceFormula::new(2, 6, 1000));
        assert_eq!(first.awards[1].denomination, Denomination::Gold);
        assert_eq!(first.awards[1].formula, DiceFormula::new(8, 6, 100));
    }

    #[test]
    fn dual_award_rows_list_both_denominations() {
        let row = row_for_roll(ChallengeTier::Cr5To10, 15).unwrap();
        let denominations: Vec<Denomination> =
            row.awards.iter().map(|a| a.denomination).collect();
        assert_eq!(denominations, vec![Denomination::Copper, Denomination::Electrum]);
    }
}
