//! # Treasure Service
//!
//! The single point of contact for the host-integration layer. A service
//! owns the validated settings and the dice source; the host owns everything
//! else (documents, permissions, write-back, dialogs).
//!
//! ```text
//! Host (token created) ──> mint_for_creature() ──> gate ──> generate ──> normalize
//!                                                   │
//!                                                   └── Refusal -> logged, None
//! ```

use coffer_core::{CofferResult, CurrencyBundle, DiceRoller, PluginSettings};

use crate::eligibility::{refusal_for, CreatureSnapshot};
use crate::generator::generate;
use crate::normalizer::normalize;

/// Gate, generator, and normalizer behind one facade.
///
/// The roller is owned, not global: a deployment that wants one process-wide
/// stream hands every service a clone of the same
/// [`SharedRoller`](coffer_core::SharedRoller).
#[derive(Clone, Debug)]
pub struct TreasureService<R> {
    /// Validated deployment settings.
    settings: PluginSettings,
    /// The injected dice source.
    roller: R,
}

impl<R: DiceRoller> TreasureService<R> {
    /// Creates a service, validating the settings ranges up front.
    ///
    /// # Errors
    ///
    /// Returns [`CofferError::InvalidConfig`](coffer_core::CofferError) if
    /// the multiplier or no-currency chance is out of range.
    pub fn new(settings: PluginSettings, roller: R) -> CofferResult<Self> {
        settings.validate()?;
        Ok(Self { settings, roller })
    }

    /// The settings this service was built with.
    #[must_use]
    pub const fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    /// Mints currency for a creature if the eligibility gate admits it.
    ///
    /// Returns the normalized bundle for the host to write back, or `None`
    /// with the refusal reason logged.
    pub fn mint_for_creature(&mut self, snapshot: &CreatureSnapshot) -> Option<CurrencyBundle> {
        if let Some(refusal) = refusal_for(snapshot, &self.settings, &mut self.roller) {
            tracing::debug!("refusing to mint for {}: {refusal}", snapshot.name);
            return None;
        }

        let bundle = self.mint_currency(snapshot.challenge_rating, &snapshot.holdings);
        tracing::info!("minted {bundle} for {}", snapshot.name);
        Some(bundle)
    }

    /// Mints currency without the eligibility gate - the macro/API path,
    /// where the caller has already picked the tokens.
    pub fn mint_currency(&mut self, rating: f64, holdings: &CurrencyBundle) -> CurrencyBundle {
        let generated = generate(
            rating,
            holdings,
            &mut self.roller,
            self.settings.coins.currency_multiplier,
        );
        normalize(&generated, &self.settings.coins)
    }
}
