use thiserror::Error;

/// Amount related errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AmountError {
    /// Input was empty or held anything but ASCII digits.
    #[error("invalid coin amount: {0:?}")]
    InvalidCoinAmount(String),

    /// Leading zeros would not survive a parse/format round trip.
    #[error("non-canonical coin amount: {0:?}")]
    NonCanonical(String),

    /// More fractional digits than the coin's display places.
    #[error("coin amount {amount:?} has more than {places} decimal places")]
    TooPrecise { amount: String, places: u32 },

    #[error("error parsing big integer, error: {0}")]
    ParseBigInt(#[from] num_bigint::ParseBigIntError),
}
