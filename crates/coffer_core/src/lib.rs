//! # COFFER Core
//!
//! Plain data types shared by the treasure engine and the host boundary.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - Host-document or sheet types
//! - Anything asynchronous
//!
//! If you need host knowledge, put it in `coffer_treasure` behind the
//! snapshot boundary.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod currency;
pub mod dice;
pub mod error;

pub use config::{CoinRules, CurrencyStandard, PluginSettings};
pub use currency::{CurrencyBundle, Denomination};
pub use dice::{ChaChaRoller, DiceFormula, DiceRoller, SequenceRoller, SharedRoller};
pub use error::{CofferError, CofferResult};
