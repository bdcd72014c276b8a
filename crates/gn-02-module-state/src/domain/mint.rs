//! Mint module state.

use super::state_map::ModuleGenesis;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use shared_types::{Dec, DEFAULT_BOND_DENOM};

/// `n` hundredths as a decimal.
const fn percent(n: u128) -> Dec {
    Dec::from_atomics(n * 10_000_000_000_000_000)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minter {
    pub inflation: Dec,
    pub annual_provisions: Dec,
}

impl Default for Minter {
    fn default() -> Self {
        Self {
            inflation: percent(13),
            annual_provisions: Dec::ZERO,
        }
    }
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintParams {
    pub mint_denom: String,
    pub inflation_rate_change: Dec,
    pub inflation_max: Dec,
    pub inflation_min: Dec,
    pub goal_bonded: Dec,
    #[serde_as(as = "DisplayFromStr")]
    pub blocks_per_year: u64,
}

impl Default for MintParams {
    fn default() -> Self {
        Self {
            mint_denom: DEFAULT_BOND_DENOM.to_string(),
            inflation_rate_change: percent(13),
            inflation_max: percent(20),
            inflation_min: percent(7),
            goal_bonded: percent(67),
            // 60 * 60 * 8766 / 5, assuming 5 second blocks
            blocks_per_year: 6_311_520,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintGenesis {
    pub minter: Minter,
    pub params: MintParams,
}

impl ModuleGenesis for MintGenesis {
    const MODULE_NAME: &'static str = "mint";
}
