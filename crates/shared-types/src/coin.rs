//! # Coins
//!
//! A `Coins` set is kept sorted by denom with at most one entry per denom
//! and no zero amounts, so two sets with the same content serialize to the
//! same JSON.

use crate::math::Int;
use crate::TypesError;
use serde::{Deserialize, Serialize};

/// A single denomination and amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: Int,
}

impl Coin {
    /// Create a coin, validating the denom.
    pub fn new(denom: impl Into<String>, amount: Int) -> Result<Self, TypesError> {
        let denom = denom.into();
        validate_denom(&denom)?;
        Ok(Self { denom, amount })
    }

    /// Validate denom and require a positive amount.
    pub fn validate_positive(&self) -> Result<(), TypesError> {
        validate_denom(&self.denom)?;
        if self.amount.is_zero() {
            return Err(TypesError::InvalidInt(format!("0{}", self.denom)));
        }
        Ok(())
    }
}

/// Denoms are 3-128 chars: a letter, then letters, digits or `/:._-`.
pub fn validate_denom(denom: &str) -> Result<(), TypesError> {
    let mut chars = denom.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || "/:._-".contains(c));
    if !first_ok || !rest_ok || !(3..=128).contains(&denom.len()) {
        return Err(TypesError::InvalidDenom(denom.to_string()));
    }
    Ok(())
}

/// Sorted, de-duplicated set of coins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// Empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build from any list: validates denoms, sums duplicates, drops zeros, sorts.
    pub fn from_unsorted(coins: Vec<Coin>) -> Result<Self, TypesError> {
        let mut set = Self::new();
        for coin in coins {
            set.add(coin)?;
        }
        Ok(set)
    }

    /// Add a coin, merging into an existing denom.
    pub fn add(&mut self, coin: Coin) -> Result<(), TypesError> {
        validate_denom(&coin.denom)?;
        if coin.amount.is_zero() {
            return Ok(());
        }
        match self.0.binary_search_by(|c| c.denom.as_str().cmp(&coin.denom)) {
            Ok(idx) => {
                self.0[idx].amount = self.0[idx].amount.checked_add(coin.amount)?;
            }
            Err(idx) => self.0.insert(idx, coin),
        }
        Ok(())
    }

    /// Merge every coin of `other` into `self`.
    pub fn add_all(&mut self, other: &Coins) -> Result<(), TypesError> {
        for coin in &other.0 {
            self.add(coin.clone())?;
        }
        Ok(())
    }

    /// Amount held in `denom` (zero if absent).
    pub fn amount_of(&self, denom: &str) -> Int {
        self.0
            .iter()
            .find(|c| c.denom == denom)
            .map(|c| c.amount)
            .unwrap_or(Int::ZERO)
    }

    /// Re-normalize a set that was deserialized from untrusted JSON.
    pub fn sanitize(self) -> Result<Self, TypesError> {
        Self::from_unsorted(self.0)
    }

    /// True if no coins.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of denoms.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate coins in denom order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }
}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        if coin.amount.is_zero() {
            Self::new()
        } else {
            Self(vec![coin])
        }
    }
}

impl<'a> IntoIterator for &'a Coins {
    type Item = &'a Coin;
    type IntoIter = std::slice::Iter<'a, Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(denom: &str, amount: u128) -> Coin {
        Coin::new(denom, Int::new(amount)).unwrap()
    }

    #[test]
    fn test_add_merges_and_sorts() {
        let coins =
            Coins::from_unsorted(vec![coin("uatom", 5), coin("stake", 10), coin("uatom", 7)])
                .unwrap();

        let denoms: Vec<_> = coins.iter().map(|c| c.denom.as_str()).collect();
        assert_eq!(denoms, vec!["stake", "uatom"]);
        assert_eq!(coins.amount_of("uatom"), Int::new(12));
    }

    #[test]
    fn test_zero_amounts_dropped() {
        let coins = Coins::from_unsorted(vec![coin("stake", 0)]).unwrap();
        assert!(coins.is_empty());
    }

    #[test]
    fn test_invalid_denom_rejected() {
        assert!(Coin::new("1abc", Int::ONE).is_err());
        assert!(Coin::new("ab", Int::ONE).is_err());
        assert!(Coin::new("ibc/ABC", Int::ONE).is_ok());
    }

    #[test]
    fn test_negative_amount_json_rejected() {
        let json = r#"[{"denom":"stake","amount":"-1"}]"#;
        assert!(serde_json::from_str::<Coins>(json).is_err());
    }

    #[test]
    fn test_sanitize_untrusted_json() {
        let json = r#"[{"denom":"uatom","amount":"1"},{"denom":"stake","amount":"2"}]"#;
        let coins: Coins = serde_json::from_str(json).unwrap();
        let coins = coins.sanitize().unwrap();
        assert_eq!(
            serde_json::to_string(&coins).unwrap(),
            r#"[{"denom":"stake","amount":"2"},{"denom":"uatom","amount":"1"}]"#
        );
    }

    #[test]
    fn test_positive_validation() {
        assert!(coin("stake", 1).validate_positive().is_ok());
        assert!(coin("stake", 0).validate_positive().is_err());
    }
}
