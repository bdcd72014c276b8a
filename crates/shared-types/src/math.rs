//! # Amounts
//!
//! `Int` is a non-negative token amount. `Dec` is a fixed-point decimal with
//! 18 fractional digits, rendered as `"0.100000000000000000"` in JSON.

use crate::TypesError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits carried by [`Dec`].
pub const DEC_PRECISION: u32 = 18;

const DEC_ONE: u128 = 10u128.pow(DEC_PRECISION);

/// Tokens per unit of consensus voting power.
pub const POWER_REDUCTION: Int = Int(1_000_000);

/// Non-negative integer amount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int(u128);

impl Int {
    /// Zero.
    pub const ZERO: Int = Int(0);

    /// One.
    pub const ONE: Int = Int(1);

    /// Wrap a raw value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Raw value.
    pub const fn value(&self) -> u128 {
        self.0
    }

    /// True if zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    pub fn checked_add(self, other: Int) -> Result<Int, TypesError> {
        self.0
            .checked_add(other.0)
            .map(Int)
            .ok_or(TypesError::Overflow)
    }

    /// Voting power this amount represents under `reduction`.
    pub fn to_power(self, reduction: Int) -> u64 {
        if reduction.is_zero() {
            return 0;
        }
        u64::try_from(self.0 / reduction.0).unwrap_or(u64::MAX)
    }
}

impl From<u64> for Int {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Int {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypesError::InvalidInt(s.to_string()));
        }
        s.parse::<u128>()
            .map(Int)
            .map_err(|_| TypesError::InvalidInt(s.to_string()))
    }
}

impl Serialize for Int {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Fixed-point decimal with 18 fractional digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(u128);

impl Dec {
    /// Zero.
    pub const ZERO: Dec = Dec(0);

    /// One.
    pub const ONE: Dec = Dec(DEC_ONE);

    /// Build from raw 18-digit atomics.
    pub const fn from_atomics(atomics: u128) -> Self {
        Self(atomics)
    }

    /// Build `numerator / 10^exponent` (e.g. `with_exponent(1, 2)` is 0.01).
    pub fn with_exponent(numerator: u128, exponent: u32) -> Result<Self, TypesError> {
        if exponent > DEC_PRECISION {
            return Err(TypesError::InvalidDec(format!("{numerator}e-{exponent}")));
        }
        numerator
            .checked_mul(10u128.pow(DEC_PRECISION - exponent))
            .map(Dec)
            .ok_or(TypesError::Overflow)
    }

    /// Raw atomics. Protobuf encodes decimals as this integer string.
    pub const fn atomics(&self) -> u128 {
        self.0
    }

    /// True if zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<Int> for Dec {
    type Error = TypesError;

    fn try_from(value: Int) -> Result<Self, Self::Error> {
        value.0.checked_mul(DEC_ONE).map(Dec).ok_or(TypesError::Overflow)
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0width$}",
            self.0 / DEC_ONE,
            self.0 % DEC_ONE,
            width = DEC_PRECISION as usize
        )
    }
}

impl FromStr for Dec {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypesError::InvalidDec(s.to_string());
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if int_part.is_empty() || frac_part.len() > DEC_PRECISION as usize {
            return Err(invalid());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: u128 = int_part.parse().map_err(|_| invalid())?;
        let mut frac: u128 = 0;
        if !frac_part.is_empty() {
            frac = frac_part.parse().map_err(|_| invalid())?;
            frac *= 10u128.pow(DEC_PRECISION - frac_part.len() as u32);
        }
        whole
            .checked_mul(DEC_ONE)
            .and_then(|w| w.checked_add(frac))
            .map(Dec)
            .ok_or(TypesError::Overflow)
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_rejects_negative() {
        assert_eq!(
            "-5".parse::<Int>(),
            Err(TypesError::InvalidInt("-5".to_string()))
        );
        assert!("".parse::<Int>().is_err());
        assert!("1e6".parse::<Int>().is_err());
    }

    #[test]
    fn test_int_json_is_string() {
        let json = serde_json::to_string(&POWER_REDUCTION).unwrap();
        assert_eq!(json, "\"1000000\"");
        let back: Int = serde_json::from_str(&json).unwrap();
        assert_eq!(back, POWER_REDUCTION);
        assert!(serde_json::from_str::<Int>("1000000").is_err());
    }

    #[test]
    fn test_int_power() {
        assert_eq!(POWER_REDUCTION.to_power(POWER_REDUCTION), 1);
        assert_eq!(Int::new(2_500_000).to_power(POWER_REDUCTION), 2);
        assert_eq!(Int::new(5).to_power(Int::ZERO), 0);
    }

    #[test]
    fn test_dec_display() {
        assert_eq!(Dec::ONE.to_string(), "1.000000000000000000");
        assert_eq!(
            Dec::with_exponent(1, 1).unwrap().to_string(),
            "0.100000000000000000"
        );
        assert_eq!(
            Dec::with_exponent(1, 2).unwrap().to_string(),
            "0.010000000000000000"
        );
    }

    #[test]
    fn test_dec_parse() {
        assert_eq!("0.1".parse::<Dec>().unwrap(), Dec::with_exponent(1, 1).unwrap());
        assert_eq!("1".parse::<Dec>().unwrap(), Dec::ONE);
        assert_eq!(
            "0.200000000000000000".parse::<Dec>().unwrap().atomics(),
            200_000_000_000_000_000
        );
        assert!("-0.1".parse::<Dec>().is_err());
        assert!(".5".parse::<Dec>().is_err());
        assert!("0.1234567890123456789".parse::<Dec>().is_err());
    }

    #[test]
    fn test_dec_from_int() {
        assert_eq!(Dec::try_from(Int::ONE), Ok(Dec::ONE));
        assert_eq!(
            Dec::try_from(POWER_REDUCTION).unwrap().to_string(),
            "1000000.000000000000000000"
        );
    }

    #[test]
    fn test_dec_from_huge_int_overflows() {
        assert_eq!(Dec::try_from(Int::new(u128::MAX)), Err(TypesError::Overflow));
    }
}
