//! # COFFER Treasure Engine
//!
//! Procedural pocket change for non-player creatures.
//!
//! ## Design Principles
//!
//! 1. **Tables as data** - the canonical tier tables are ordered const rows,
//!    never branching cascades
//! 2. **Injected randomness** - every roll goes through a
//!    [`DiceRoller`](coffer_core::DiceRoller) the caller supplies
//! 3. **Two-pass normalization** - denomination toggles collapse first, the
//!    currency standard folds second; the order is load-bearing
//! 4. **Explicit configuration** - one [`PluginSettings`](coffer_core::PluginSettings)
//!    value object, no global settings store
//!
//! ## Thread Safety
//!
//! The engine is synchronous and side-effect-free. Concurrent mints for
//! different creatures need no coordination; the host persistence layer owns
//! serializing the eventual write-back.
//!
//! ## Example
//!
//! ```rust,ignore
//! use coffer_core::{ChaChaRoller, PluginSettings};
//! use coffer_treasure::TreasureService;
//!
//! let settings = PluginSettings::from_toml_file("coffer.toml".as_ref())?;
//! let mut service = TreasureService::new(settings, ChaChaRoller::seeded(seed))?;
//!
//! if let Some(bundle) = service.mint_for_creature(&snapshot) {
//!     // hand the bundle back to the host for write-back
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod eligibility;
pub mod generator;
pub mod normalizer;
pub mod service;
pub mod table;
pub mod tier;

pub use eligibility::{refusal_for, ActorKind, CreatureSnapshot, Refusal};
pub use generator::generate;
pub use normalizer::{apply_currency_standard, apply_denomination_toggles, normalize};
pub use service::TreasureService;
pub use table::{TableRow, TreasureAward};
pub use tier::ChallengeTier;
