//! Package coincfg defines the coin parameters a wallet front-end is
//! configured with.
//!
//! One schema covers every supported coin. Definitions are decoded into a
//! [`RawCoinConfig`], validated into an immutable [`CoinConfig`] resolved for
//! a single [`Network`], and then shared read-only.

mod coin;
mod config;
pub mod constants;
mod errors;
mod network;
mod prefixes;
mod raw;
pub mod render;

pub use coin::Coin;
pub use config::{CoinConfig, ConfigValue, KEYS};
pub use errors::ConfigError;
pub use network::Network;
pub use prefixes::{AddressPrefixes, NetworkPrefixes};
pub use raw::RawCoinConfig;
