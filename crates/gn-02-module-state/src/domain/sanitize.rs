//! Canonical ordering for genesis accounts and balances.
//!
//! Both functions are idempotent: sanitizing an already sanitized list
//! returns it unchanged.

use super::errors::{ModuleStateError, ModuleStateResult};
use gn_01_validator_keys::{Balance, BaseAccount};
use shared_crypto::bech32_decode;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// De-duplicate accounts by address, fix clashing account numbers and sort.
///
/// An address listed twice with the same key and sequence collapses to its
/// first entry. The same address with a different key or sequence is a
/// [`ModuleStateError::DuplicateAccount`]. When several accounts share an
/// account number, the first keeps it and the rest receive the lowest
/// unused numbers in list order.
pub fn sanitize_accounts(accounts: Vec<BaseAccount>) -> ModuleStateResult<Vec<BaseAccount>> {
    let mut by_address: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<BaseAccount> = Vec::with_capacity(accounts.len());

    for account in accounts {
        match by_address.get(&account.address) {
            Some(&idx) => {
                let kept = &unique[idx];
                if kept.pub_key != account.pub_key || kept.sequence != account.sequence {
                    return Err(ModuleStateError::DuplicateAccount {
                        address: account.address,
                    });
                }
                debug!(address = %account.address, "dropped duplicate account");
            }
            None => {
                by_address.insert(account.address.clone(), unique.len());
                unique.push(account);
            }
        }
    }

    let mut seen: HashSet<u64> = HashSet::with_capacity(unique.len());
    let mut clashing = Vec::new();
    for (idx, account) in unique.iter().enumerate() {
        if !seen.insert(account.account_number) {
            clashing.push(idx);
        }
    }

    let mut next_free = 0u64;
    for idx in clashing {
        while seen.contains(&next_free) {
            next_free += 1;
        }
        unique[idx].account_number = next_free;
        seen.insert(next_free);
    }

    unique.sort_by_key(|a| a.account_number);
    Ok(unique)
}

/// Merge balances per address, normalize each coin set and sort by address bytes.
pub fn sanitize_balances(balances: Vec<Balance>) -> ModuleStateResult<Vec<Balance>> {
    let mut merged: BTreeMap<Vec<u8>, Balance> = BTreeMap::new();

    for balance in balances {
        let (_, bytes) =
            bech32_decode(&balance.address).map_err(|source| ModuleStateError::InvalidAddress {
                address: balance.address.clone(),
                source,
            })?;
        let coins = balance.coins.sanitize()?;

        match merged.get_mut(&bytes) {
            Some(existing) => existing.coins.add_all(&coins)?,
            None => {
                merged.insert(
                    bytes,
                    Balance {
                        address: balance.address,
                        coins,
                    },
                );
            }
        }
    }

    Ok(merged.into_values().collect())
}
