//! # Currency Types
//!
//! The five-denomination coinage model used by the host's character sheets.
//!
//! Denominations are ordered by value: copper < silver < electrum < gold <
//! platinum. A [`CurrencyBundle`] is a count of each. All counts are
//! non-negative integers; arithmetic on bundles can never produce a negative
//! count because every operation is addition or truncating division on
//! unsigned values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A coin denomination, ordered from lowest to highest value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Denomination {
    /// Copper pieces (cp) - the sink denomination, never disabled.
    Copper = 0,
    /// Silver pieces (sp) - 10 cp.
    Silver = 1,
    /// Electrum pieces (ep) - 50 cp.
    Electrum = 2,
    /// Gold pieces (gp) - 100 cp.
    Gold = 3,
    /// Platinum pieces (pp) - 1000 cp.
    Platinum = 4,
}

impl Denomination {
    /// All denominations, lowest value first.
    pub const ALL: [Self; 5] = [
        Self::Copper,
        Self::Silver,
        Self::Electrum,
        Self::Gold,
        Self::Platinum,
    ];

    /// Value of one coin of this denomination, in copper pieces.
    #[inline]
    #[must_use]
    pub const fn copper_value(self) -> u32 {
        match self {
            Self::Copper => 1,
            Self::Silver => 10,
            Self::Electrum => 50,
            Self::Gold => 100,
            Self::Platinum => 1000,
        }
    }

    /// The sheet abbreviation for this denomination.
    #[inline]
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Copper => "cp",
            Self::Silver => "sp",
            Self::Electrum => "ep",
            Self::Gold => "gp",
            Self::Platinum => "pp",
        }
    }

}

/// A holding of coinage: one non-negative count per denomination.
///
/// Field names match the host's sheet schema so a bundle serializes directly
/// to the record the collaborator writes back onto the creature.
///
/// Bundles are cheap to copy and are always returned by value; no engine
/// operation mutates a caller's bundle in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyBundle {
    /// Copper pieces.
    pub cp: u32,
    /// Silver pieces.
    pub sp: u32,
    /// Electrum pieces.
    pub ep: u32,
    /// Gold pieces.
    pub gp: u32,
    /// Platinum pieces.
    pub pp: u32,
}

impl CurrencyBundle {
    /// The empty bundle.
    pub const ZERO: Self = Self {
        cp: 0,
        sp: 0,
        ep: 0,
        gp: 0,
        pp: 0,
    };

    /// Creates a bundle from explicit counts, lowest denomination first.
    #[inline]
    #[must_use]
    pub const fn new(cp: u32, sp: u32, ep: u32, gp: u32, pp: u32) -> Self {
        Self { cp, sp, ep, gp, pp }
    }

    /// Builds a bundle from raw host-side counts.
    ///
    /// Host data is untrusted: sheets imported from older schema versions can
    /// carry negative or absent values. Negative counts coerce to 0 and are
    /// never propagated.
    #[must_use]
    pub fn from_host_counts(cp: i64, sp: i64, ep: i64, gp: i64, pp: i64) -> Self {
        let clamp = |raw: i64| u32::try_from(raw).unwrap_or(0);
        Self {
            cp: clamp(cp),
            sp: clamp(sp),
            ep: clamp(ep),
            gp: clamp(gp),
            pp: clamp(pp),
        }
    }

    /// Returns the count for one denomination.
    #[inline]
    #[must_use]
    pub const fn count(&self, denomination: Denomination) -> u32 {
        match denomination {
            Denomination::Copper => self.cp,
            Denomination::Silver => self.sp,
            Denomination::Electrum => self.ep,
            Denomination::Gold => self.gp,
            Denomination::Platinum => self.pp,
        }
    }

    /// Adds coins of one denomination.
    #[inline]
    pub fn add(&mut self, denomination: Denomination, amount: u32) {
        match denomination {
            Denomination::Copper => self.cp += amount,
            Denomination::Silver => self.sp += amount,
            Denomination::Electrum => self.ep += amount,
            Denomination::Gold => self.gp += amount,
            Denomination::Platinum => self.pp += amount,
        }
    }

    /// Total value of the bundle in copper pieces.
    ///
    /// Used by tests to assert that normalization conserves value; u64 so the
    /// sum cannot overflow even with every count at `u32::MAX`.
    #[must_use]
    pub fn total_copper_value(&self) -> u64 {
        Denomination::ALL
            .iter()
            .map(|&d| u64::from(self.count(d)) * u64::from(d.copper_value()))
            .sum()
    }

    /// True if every count is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cp == 0 && self.sp == 0 && self.ep == 0 && self.gp == 0 && self.pp == 0
    }
}

impl fmt::Display for CurrencyBundle {
    /// Highest denomination first, zero counts skipped: `"3 gp, 12 sp"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0 cp");
        }
        let mut first = true;
        for denomination in Denomination::ALL.iter().rev() {
            let count = self.count(*denomination);
            if count == 0 {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{count} {}", denomination.abbreviation())?;
            first = false;
        }
        Ok(())
    }
}
