//! Coin configuration constants.

/// Largest accepted `coinUnitPlaces`. Display formatting pads to this many
/// fractional digits at most.
pub const MAX_UNIT_PLACES: u32 = 24;

/// Fees are quoted per this many bytes of transaction.
pub const FEE_QUANTUM_BYTES: u64 = 1024;

/// File extension of coin definition files.
pub const CONFIG_FILE_EXTENSION: &str = "toml";
