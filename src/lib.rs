//! Coin parameter tables for CryptoNote style wallet front-ends.
//!
//! [`coincfg`] loads and validates the per-coin, per-network parameters;
//! [`coinutil`] holds the helpers that read them.

pub mod coincfg;
pub mod coinutil;
