use thiserror::Error;

use super::Network;

/// Contains all coin configuration errors. A configuration that produces any
/// of these must not be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Both the testnet and stagenet flags were set on the same record.
    #[error("testnet and stagenet flags are mutually exclusive")]
    ConflictingNetworkFlags,

    /// Network name did not match any known network.
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    /// Coin name did not match any bundled coin.
    #[error("unknown coin: {0}")]
    UnknownCoin(String),

    /// A field that must be non-negative held a negative value.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: i64 },

    /// A field that must be positive held zero.
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    /// Value does not fit the field's integer width.
    #[error("{field} is out of range, got {value}")]
    OutOfRange { field: &'static str, value: i64 },

    /// A stable identifier was left empty.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// Idle warning would fire after the session already timed out.
    #[error("idle warning ({warning}s) exceeds idle timeout ({timeout}s)")]
    IdleWarningExceedsTimeout { warning: u64, timeout: u64 },

    /// A text field carries leading or trailing whitespace.
    #[error("{field} must not have surrounding whitespace")]
    Whitespace { field: &'static str },

    /// Charge ratio must be a finite value within [0, 1].
    #[error("txChargeRatio must be within [0, 1], got {0}")]
    ChargeRatio(f64),

    /// A big integer field could not be parsed from its decimal string.
    #[error("{field} is not a non-negative decimal integer: {value:?}")]
    BigInt { field: &'static str, value: String },

    /// Address prefixes of a network collide.
    #[error("{network} address prefixes must be pairwise distinct")]
    DuplicatePrefix { network: Network },

    /// Key passed to the keyed accessor is not part of the record.
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    /// Configuration file could not be read.
    #[error("error reading configuration file, error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration text is not a well formed record.
    #[error("error decoding configuration, error: {0}")]
    Decode(#[from] toml::de::Error),
}
