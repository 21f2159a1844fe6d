//! Arbitrary precision coin amounts.
//!
//! An [`Amount`] counts atomic units of a coin. Fee constants of CryptoNote
//! style coins do not fit in 64 bits in general, so amounts are backed by a
//! big unsigned integer and never pass through floating point.

mod error;
mod tests;

pub use error::AmountError;

use std::{
    fmt,
    ops::{Add, Mul},
    str::FromStr,
};

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Amount represents the base coin monetary unit (the atomic unit).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(BigUint);

/// Checks that `s` is a canonical decimal: digits only, no sign, no
/// separators and no leading zeros.
fn check_digits(s: &str) -> Result<(), AmountError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::InvalidCoinAmount(s.to_string()));
    }

    if s.len() > 1 && s.starts_with('0') {
        return Err(AmountError::NonCanonical(s.to_string()));
    }

    Ok(())
}

impl Amount {
    pub fn zero() -> Self {
        Amount(BigUint::zero())
    }

    pub fn from_atoms(atoms: u64) -> Self {
        Amount(BigUint::from(atoms))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the amount as atoms if it fits in 64 bits.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Parses a coin denominated decimal such as `"0.002"` into atoms, given
    /// the number of decimal places of the coin.
    pub fn parse_coins(s: &str, places: u32) -> Result<Self, AmountError> {
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        if whole.is_empty() || (s.contains('.') && fraction.is_empty()) {
            return Err(AmountError::InvalidCoinAmount(s.to_string()));
        }

        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(AmountError::InvalidCoinAmount(s.to_string()));
        }

        if fraction.len() > places as usize {
            return Err(AmountError::TooPrecise {
                amount: s.to_string(),
                places,
            });
        }

        // Right pad the fraction and read the whole thing as atoms.
        let mut atoms = String::with_capacity(whole.len() + places as usize);
        atoms.push_str(whole);
        atoms.push_str(fraction);
        for _ in fraction.len()..places as usize {
            atoms.push('0');
        }

        Ok(Amount(BigUint::from_str(&atoms)?))
    }

    /// Formats the amount as a coin denominated decimal with `places`
    /// fractional digits. Trailing zeros of the fraction are dropped, as is
    /// the decimal point for whole amounts.
    pub fn format(&self, places: u32) -> String {
        let digits = self.0.to_str_radix(10);
        let places = places as usize;

        let (whole, fraction) = if digits.len() > places {
            let (whole, fraction) = digits.split_at(digits.len() - places);
            (whole.to_string(), fraction.to_string())
        } else {
            let mut fraction = "0".repeat(places - digits.len());
            fraction.push_str(&digits);
            ("0".to_string(), fraction)
        };

        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            return whole;
        }

        format!("{}.{}", whole, fraction)
    }

    pub fn checked_sub(&self, other: &Amount) -> Option<Amount> {
        if other.0 > self.0 {
            return None;
        }

        Some(Amount(&self.0 - &other.0))
    }

    /// Multiplies by `numerator / denominator`, rounding down.
    pub fn mul_ratio(
        &self,
        numerator: impl Into<BigUint>,
        denominator: impl Into<BigUint>,
    ) -> Amount {
        let numerator: BigUint = numerator.into();
        let denominator: BigUint = denominator.into();
        if denominator.is_zero() {
            return Amount::zero();
        }

        Amount(&self.0 * numerator / denominator)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parses a canonical decimal string of atoms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_digits(s)?;

        Ok(Amount(BigUint::from_str(s)?))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Amount {
    fn from(atoms: u64) -> Self {
        Amount::from_atoms(atoms)
    }
}

impl From<BigUint> for Amount {
    fn from(atoms: BigUint) -> Self {
        Amount(atoms)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount(self.0 + other.0)
    }
}

impl<'a> Add<&'a Amount> for &'a Amount {
    type Output = Amount;

    fn add(self, other: &Amount) -> Amount {
        Amount(&self.0 + &other.0)
    }
}

impl Mul<u64> for &Amount {
    type Output = Amount;

    fn mul(self, by: u64) -> Amount {
        Amount(&self.0 * by)
    }
}

impl Mul<u64> for Amount {
    type Output = Amount;

    fn mul(self, by: u64) -> Amount {
        Amount(self.0 * by)
    }
}
