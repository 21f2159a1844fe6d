use std::str::FromStr;

use num_bigint::BigUint;

use crate::coincfg::{constants::FEE_QUANTUM_BYTES, CoinConfig};

use super::amount::Amount;

/// Fee for a transaction of `size_bytes`, charged per started kilobyte.
pub fn estimate_fee(config: &CoinConfig, size_bytes: u64) -> Amount {
    let mut kilobytes = size_bytes / FEE_QUANTUM_BYTES;
    if size_bytes % FEE_QUANTUM_BYTES != 0 {
        kilobytes += 1;
    }

    config.fee_per_kb() * kilobytes
}

/// Returns true if `amount` is below the dust threshold.
pub fn is_dust(config: &CoinConfig, amount: &Amount) -> bool {
    amount < config.dust_threshold()
}

/// Reads a ratio as the shortest decimal that round-trips it, so `0.1234567`
/// becomes `1234567 / 10^7`. Display of an f64 never uses exponent notation.
fn decimal_ratio(ratio: f64) -> Option<(BigUint, BigUint)> {
    let digits = ratio.abs().to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let numerator = BigUint::from_str(&format!("{}{}", whole, fraction)).ok()?;
    let denominator = BigUint::from(10u32).pow(fraction.len() as u32);

    Some((numerator, denominator))
}

/// Service charge on `amount`, `amount * txChargeRatio` rounded down to whole
/// atoms. Only applies when a charge address is configured.
pub fn charge(config: &CoinConfig, amount: &Amount) -> Option<Amount> {
    config.charge_address()?;

    // Ratio is validated to be finite and within [0, 1].
    let (numerator, denominator) = decimal_ratio(config.charge_ratio())?;
    Some(amount.mul_ratio(numerator, denominator))
}
