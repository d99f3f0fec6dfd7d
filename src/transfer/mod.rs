//! Funds transfer engine
//!
//! Moves a decimal amount between two accounts under deadlock-free
//! two-account locking.
//!
//! # Locking protocol
//!
//! ```text
//! Idle → LocksAcquiring → Validating → Mutating → LocksReleased → Done
//! ```
//!
//! Both account locks are always acquired in one fixed total order over
//! account identifiers (numeric when both ids parse as integers,
//! lexicographic otherwise), so two concurrent transfers over the same pair
//! agree on acquisition order and cannot circular-wait. The overdraft check
//! runs while both locks are held and is always against the SOURCE balance,
//! independent of which lock was taken first.
//!
//! # Safety Invariants
//!
//! 1. No failure path mutates any balance
//! 2. No observer outside the critical section sees a torn balance pair
//! 3. Transfers over disjoint account pairs run fully in parallel

pub mod engine;
pub mod error;

// Re-exports for convenience
pub use engine::{TransferEngine, TransferOutcome, lock_order};
pub use error::TransferError;
