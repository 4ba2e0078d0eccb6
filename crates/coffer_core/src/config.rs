//! # Plugin Settings
//!
//! The deployment configuration the host's settings store hands to the
//! engine. All balance policy lives here, loaded once from an external TOML
//! file; the engine itself never reaches into a global settings registry.
//!
//! Field names mirror the keys the host registers (`useSilver`,
//! `currencyStandard`, ...), so a settings dump deserializes directly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CofferError, CofferResult};

/// Deployment-wide coinage policy restricting which denominations circulate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyStandard {
    /// All five denominations circulate; no folding.
    #[default]
    #[serde(rename = "normal")]
    Normal,
    /// Silver-economy deployments: electrum, gold, and platinum fold into
    /// silver, and copper above one full silver's worth is absorbed.
    #[serde(rename = "silverStandard")]
    SilverStandard,
}

/// Denomination policy: which coins circulate and how amounts scale.
///
/// Copper is always enabled; it is the sink every disabled denomination
/// drains into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoinRules {
    /// Whether silver pieces circulate.
    pub use_silver: bool,
    /// Whether electrum pieces circulate.
    pub use_electrum: bool,
    /// Whether gold pieces circulate.
    pub use_gold: bool,
    /// Whether platinum pieces circulate.
    pub use_platinum: bool,
    /// The deployment's coinage standard.
    pub currency_standard: CurrencyStandard,
    /// Scale applied to every rolled amount, in `[0, 2]`. Amounts are floored
    /// after scaling.
    pub currency_multiplier: f64,
}

impl Default for CoinRules {
    fn default() -> Self {
        Self {
            use_silver: true,
            use_electrum: true,
            use_gold: true,
            use_platinum: true,
            currency_standard: CurrencyStandard::Normal,
            currency_multiplier: 1.0,
        }
    }
}

impl CoinRules {
    /// Checks the multiplier range.
    ///
    /// # Errors
    ///
    /// Returns [`CofferError::InvalidConfig`] if the multiplier is not a
    /// finite value in `[0, 2]`.
    pub fn validate(&self) -> CofferResult<()> {
        let m = self.currency_multiplier;
        if !m.is_finite() || !(0.0..=2.0).contains(&m) {
            return Err(CofferError::InvalidConfig(format!(
                "currencyMultiplier {m} outside [0, 2]"
            )));
        }
        Ok(())
    }
}

/// The full plugin configuration: coin policy plus generation gating.
///
/// Gating settings come from the original module registration and keep their
/// registered defaults: generation enabled, a 25% chance of an empty pocket,
/// humanoids only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginSettings {
    /// Master switch: when false, no creature ever receives currency.
    pub enabled: bool,
    /// Chance in `[0, 1]` that a qualifying creature still gets nothing.
    pub chance_of_no_currency: f64,
    /// Semicolon-separated creature-type allowlist; empty allows every type.
    pub creature_types: String,
    /// Denomination policy.
    #[serde(flatten)]
    pub coins: CoinRules,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            chance_of_no_currency: 0.25,
            creature_types: "Humanoid".to_string(),
            coins: CoinRules::default(),
        }
    }
}

impl PluginSettings {
    /// Checks every range-bounded setting.
    ///
    /// # Errors
    ///
    /// Returns [`CofferError::InvalidConfig`] naming the first out-of-range
    /// value.
    pub fn validate(&self) -> CofferResult<()> {
        let chance = self.chance_of_no_currency;
        if !chance.is_finite() || !(0.0..=1.0).contains(&chance) {
            return Err(CofferError::InvalidConfig(format!(
                "chanceOfNoCurrency {chance} outside [0, 1]"
            )));
        }
        self.coins.validate()
    }

    /// Parses settings from TOML text and validates the ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CofferError::InvalidConfig`] on unparseable text or
    /// out-of-range values.
    pub fn from_toml_str(text: &str) -> CofferResult<Self> {
        let settings: Self =
            toml::from_str(text).map_err(|e| CofferError::InvalidConfig(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CofferError::InvalidConfig`] on unreadable files,
    /// unparseable text, or out-of-range values.
    pub fn from_toml_file(path: &Path) -> CofferResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CofferError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// The parsed creature-type allowlist: lowercased, trimmed, empty
    /// entries dropped. An empty list allows every creature type.
    #[must_use]
    pub fn allowed_creature_types(&self) -> Vec<String> {
        self.creature_types
            .split(';')
            .map(|entry| entry.trim().to_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect()
    }
}
