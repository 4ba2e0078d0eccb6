//! # Creature Eligibility
//!
//! Decides whether a creature deserves generated pocket change at all.
//!
//! The host hands over a [`CreatureSnapshot`] - plain data lifted off the
//! token and its actor record - and the gate answers with the first
//! [`Refusal`] that applies, or `None` when minting may proceed. Check order
//! matches the original plugin's validator so deployments see the same
//! refusal reasons in their logs.
//!
//! The GM-role check stays host-side: the engine has no notion of user
//! identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use coffer_core::{CurrencyBundle, DiceFormula, DiceRoller, PluginSettings};

/// What kind of actor a token points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    /// A non-player creature - the only kind that receives treasure.
    Npc,
    /// A player character.
    Character,
}

/// Host-boundary input: the facts about a creature the gate and generator
/// need, lifted off the host's documents by the integration layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureSnapshot {
    /// Display name, used only for logging.
    pub name: String,
    /// Actor kind behind the token.
    pub kind: ActorKind,
    /// The creature's type line (e.g. "Humanoid"), matched against the
    /// configured allowlist.
    pub creature_type: String,
    /// Challenge rating; may be fractional, malformed sheets may carry NaN.
    pub challenge_rating: f64,
    /// Current coin holdings, already coerced non-negative at the boundary.
    pub holdings: CurrencyBundle,
    /// True if the token is linked to a shared actor record.
    pub linked: bool,
    /// True if any player owns the actor.
    pub player_owned: bool,
    /// True if the token has already been converted to a loot container.
    pub loot_container: bool,
}

/// Why a creature was refused treasure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refusal {
    /// The plugin's master switch is off.
    Disabled,
    /// The no-currency chance fired; this creature's pockets stay empty.
    CoinChanceFailed,
    /// The token already carries a loot-container sheet.
    AlreadyLootContainer,
    /// Linked actors share one record; generating on them would leak coins
    /// across every token of that actor.
    LinkedActor,
    /// Only NPCs receive treasure.
    NotAnNpc,
    /// The creature's type is not in the configured allowlist.
    CreatureTypeExcluded,
    /// A player owns this actor.
    PlayerOwned,
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Disabled => "generation is disabled",
            Self::CoinChanceFailed => "the no-currency chance fired",
            Self::AlreadyLootContainer => "the token is already a loot container",
            Self::LinkedActor => "the actor is linked",
            Self::NotAnNpc => "the actor is not an NPC",
            Self::CreatureTypeExcluded => "the creature type is not allowed",
            Self::PlayerOwned => "the actor is player owned",
        };
        f.write_str(reason)
    }
}

/// Evaluates the gate, returning the first refusal that applies.
///
/// The no-currency chance is a d100 percentile draw through the injected
/// roller, so scripted rollers make the gate fully deterministic. Settings
/// register the chance in 0.05 steps; percentile granularity is exact for
/// every registrable value.
pub fn refusal_for<R: DiceRoller>(
    snapshot: &CreatureSnapshot,
    settings: &PluginSettings,
    roller: &mut R,
) -> Option<Refusal> {
    if !settings.enabled {
        return Some(Refusal::Disabled);
    }

    let threshold = (settings.chance_of_no_currency * 100.0).round() as u32;
    if threshold > 0 && roller.roll(DiceFormula::D100) <= threshold {
        return Some(Refusal::CoinChanceFailed);
    }

    if snapshot.loot_container {
        return Some(Refusal::AlreadyLootContainer);
    }
    if snapshot.linked {
        return Some(Refusal::LinkedActor);
    }
    if snapshot.kind != ActorKind::Npc {
        return Some(Refusal::NotAnNpc);
    }

    let allowed = settings.allowed_creature_types();
    if !allowed.is_empty() {
        let creature_type = snapshot.creature_type.trim().to_lowercase();
        if !allowed.contains(&creature_type) {
            return Some(Refusal::CreatureTypeExcluded);
        }
    }

    if snapshot.player_owned {
        return Some(Refusal::PlayerOwned);
    }

    None
}
