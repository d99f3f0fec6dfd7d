//! Lock-ordered transfer execution

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;
use uuid::Uuid;

use crate::account::models::decimal_as_str;
use crate::account::{Account, AccountId, AccountView};
use crate::ledger::Ledger;
use crate::transfer::TransferError;

/// Result of a committed transfer
///
/// Both balances are the post-commit values, snapshotted while the two locks
/// were still held, so the pair is never torn.
#[derive(Debug, Clone, Serialize)]
pub struct TransferOutcome {
    #[serde(rename = "transferId")]
    pub transfer_id: Uuid,
    pub from: AccountView,
    pub to: AccountView,
    #[serde(serialize_with = "decimal_as_str")]
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// Total order over account identifiers used for lock acquisition.
///
/// When both ids parse as unsigned integers they compare numerically, with a
/// lexicographic tie-break so distinct spellings of the same number ("07" vs
/// "7") stay ordered. Numeric ids sort before non-numeric ones; non-numeric
/// ids compare byte-wise. The order is total and applied consistently, so any
/// two threads agree on the acquisition sequence for the same pair.
pub fn lock_order(a: &AccountId, b: &AccountId) -> Ordering {
    let numeric = |id: &AccountId| id.as_str().parse::<u128>().ok();
    match (numeric(a), numeric(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.as_str().cmp(b.as_str())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.as_str().cmp(b.as_str()),
    }
}

/// Executes transfers against a shared ledger.
///
/// Stateless between calls; all per-transfer state lives on the stack of the
/// calling thread. Lock acquisition blocks the caller (unbounded wait).
pub struct TransferEngine {
    ledger: Arc<Ledger>,
}

impl TransferEngine {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// # Errors
    /// - `InvalidAmount` if the amount is negative
    /// - `SameAccount` for a self-transfer (would double-acquire one lock)
    /// - `SourceAccountNotFound` / `TargetAccountNotFound` before any lock
    ///   is taken
    /// - `InsufficientFunds` if the source balance cannot cover the amount,
    ///   checked while both locks are held
    pub fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: Decimal,
    ) -> Result<TransferOutcome, TransferError> {
        // Upstream validates, but the engine never trusts its input.
        if amount.is_sign_negative() {
            return Err(TransferError::InvalidAmount);
        }
        // A self-transfer would acquire the same non-reentrant mutex twice.
        if from == to {
            return Err(TransferError::SameAccount);
        }

        let source = self
            .ledger
            .get(from)
            .ok_or_else(|| TransferError::SourceAccountNotFound(from.to_string()))?;
        let target = self
            .ledger
            .get(to)
            .ok_or_else(|| TransferError::TargetAccountNotFound(to.to_string()))?;

        // Fixed acquisition order: lower-ordered id first, regardless of
        // which side of the transfer it is on.
        let (first, second) = if lock_order(source.id(), target.id()) == Ordering::Less {
            (&source, &target)
        } else {
            (&target, &source)
        };

        let first_guard = first.lock_balance();
        let second_guard = second.lock_balance();

        // Map the ordered guards back to transfer direction. Lock order is
        // purely for deadlock avoidance; the overdraft check below is always
        // against the source balance.
        let (mut source_balance, mut target_balance) = if Arc::ptr_eq(first, &source) {
            (first_guard, second_guard)
        } else {
            (second_guard, first_guard)
        };

        if amount > *source_balance {
            // Guards drop on return: locks released, nothing mutated.
            return Err(TransferError::InsufficientFunds {
                account: source.id().to_string(),
                balance: *source_balance,
                requested: amount,
            });
        }

        *target_balance += amount;
        *source_balance -= amount;

        let outcome = TransferOutcome {
            transfer_id: Uuid::new_v4(),
            from: AccountView {
                account_id: source.id().clone(),
                balance: *source_balance,
            },
            to: AccountView {
                account_id: target.id().clone(),
                balance: *target_balance,
            },
            amount,
            timestamp: Utc::now(),
        };

        // Guards drop here; release order does not affect correctness once
        // both mutations are committed.
        Ok(outcome)
    }
}
