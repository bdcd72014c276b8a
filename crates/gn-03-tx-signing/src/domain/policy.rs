//! Fixed parameters of every genesis validator.

use gn_01_validator_keys::{CommissionRates, Description};
use shared_types::{Dec, Int};

/// `n` hundredths.
const fn hundredths(n: u128) -> Dec {
    Dec::from_atomics(n * 10_000_000_000_000_000)
}

/// Description and commission applied to every gentx.
///
/// These are network policy, not per-validator input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GentxPolicy {
    pub description: Description,
    pub commission: CommissionRates,
    pub min_self_delegation: Int,
}

impl Default for GentxPolicy {
    fn default() -> Self {
        Self {
            description: Description::with_moniker("TODO"),
            commission: CommissionRates {
                rate: hundredths(10),
                max_rate: hundredths(20),
                max_change_rate: hundredths(1),
            },
            min_self_delegation: Int::ONE,
        }
    }
}
