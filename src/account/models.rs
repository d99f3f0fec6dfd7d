//! Account entity and API snapshot

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::validation::AccountId;

/// A ledger account: immutable identity plus a lock-guarded balance.
///
/// The mutex IS the account's intrinsic lock. Only the transfer engine holds
/// it across a mutation; readers take a momentary snapshot. The guard never
/// leaves the crate.
///
/// # Invariant
/// `balance >= 0` whenever the lock is not held.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    balance: Mutex<Decimal>,
}

impl Account {
    pub fn new(id: AccountId, balance: Decimal) -> Self {
        Self {
            id,
            balance: Mutex::new(balance),
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Current balance (briefly takes the lock).
    pub fn balance(&self) -> Decimal {
        *lock_unpoisoned(&self.balance)
    }

    /// Exclusive access to the balance cell.
    ///
    /// Crate-internal: only the transfer engine may hold this across a
    /// mutation, and only after ordering the pair of locks.
    pub(crate) fn lock_balance(&self) -> MutexGuard<'_, Decimal> {
        lock_unpoisoned(&self.balance)
    }

    /// Serializable snapshot for the API boundary.
    pub fn view(&self) -> AccountView {
        AccountView {
            account_id: self.id.clone(),
            balance: self.balance(),
        }
    }
}

/// Recover the guard from a poisoned mutex.
///
/// Balance mutations are single arithmetic assignments with no intermediate
/// state, so a panicking holder cannot leave a torn value behind.
fn lock_unpoisoned<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Read-only account snapshot returned at the API boundary
///
/// Balances serialize as JSON strings to preserve decimal precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountView {
    #[serde(rename = "accountId")]
    pub account_id: AccountId,
    #[serde(serialize_with = "decimal_as_str")]
    pub balance: Decimal,
}

/// Serialize a Decimal as a string, never as a JSON float.
pub(crate) fn decimal_as_str<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}
