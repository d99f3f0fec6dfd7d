//! Concurrent account repository
//!
//! Maps account identifiers to accounts. Insertion goes through the DashMap
//! entry API as one atomic check-and-insert, so concurrent creators of the
//! same id cannot race past the duplicate check.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

use crate::account::{Account, AccountId};

/// Ledger failure modes
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LedgerError {
    #[error("Account id {0} already exists")]
    DuplicateAccount(AccountId),
}

/// Thread-safe account registry.
///
/// Lookups only touch the identifier map, never account balances, so they are
/// safe to call while a transfer holds account-level locks. Accounts are
/// registered once and never deleted.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: DashMap<AccountId, Arc<Account>>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Register a new account.
    ///
    /// Exactly one of N concurrent calls with the same id succeeds; the rest
    /// get `DuplicateAccount` and the existing entry is left untouched.
    pub fn create(&self, account: Account) -> Result<Arc<Account>, LedgerError> {
        match self.accounts.entry(account.id().clone()) {
            Entry::Occupied(_) => Err(LedgerError::DuplicateAccount(account.id().clone())),
            Entry::Vacant(slot) => {
                let account = Arc::new(account);
                slot.insert(Arc::clone(&account));
                Ok(account)
            }
        }
    }

    /// Look up an account by id.
    pub fn get(&self, id: &AccountId) -> Option<Arc<Account>> {
        self.accounts.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Remove all accounts.
    ///
    /// Administrative/test-only: production code never deletes accounts.
    pub fn clear(&self) {
        self.accounts.clear();
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Check whether the ledger holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::thread;

    fn account(id: &str, balance: &str) -> Account {
        Account::new(AccountId::new(id).unwrap(), balance.parse().unwrap())
    }

    #[test]
    fn test_create_and_get() {
        let ledger = Ledger::new();
        ledger.create(account("Id-123", "1000")).unwrap();

        let found = ledger.get(&AccountId::new("Id-123").unwrap()).unwrap();
        assert_eq!(found.id().as_str(), "Id-123");
        assert_eq!(found.balance(), Decimal::from(1000));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let ledger = Ledger::new();
        assert!(ledger.get(&AccountId::new("nope").unwrap()).is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_duplicate_create_leaves_original_untouched() {
        let ledger = Ledger::new();
        ledger.create(account("Id-123", "1000")).unwrap();

        let err = ledger.create(account("Id-123", "999")).unwrap_err();
        assert_eq!(
            err,
            LedgerError::DuplicateAccount(AccountId::new("Id-123").unwrap())
        );

        // Original balance survived the failed insert
        let found = ledger.get(&AccountId::new("Id-123").unwrap()).unwrap();
        assert_eq!(found.balance(), Decimal::from(1000));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_clear_removes_everything() {
        let ledger = Ledger::new();
        ledger.create(account("1", "10")).unwrap();
        ledger.create(account("2", "20")).unwrap();
        assert_eq!(ledger.len(), 2);

        ledger.clear();
        assert!(ledger.is_empty());
        assert!(ledger.get(&AccountId::new("1").unwrap()).is_none());
    }

    #[test]
    fn test_concurrent_create_single_winner() {
        let ledger = Arc::new(Ledger::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                thread::spawn(move || ledger.create(account("contested", "100")).is_ok())
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|created| *created)
            .count();
        assert_eq!(wins, 1);
        assert_eq!(ledger.len(), 1);
    }
}
