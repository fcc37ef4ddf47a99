//! # splitledger-balance
//!
//! **Balance Engine**: folds a group's expense records into a per-member
//! net [`BalanceSheet`](splitledger_types::BalanceSheet).
//!
//! ## Pipeline
//!
//! ```text
//! expenses ─► expenses_for_group() ─► ExpenseValidator.validate() ─► BalanceEngine.compute()
//! ```
//!
//! 1. **Group filter**: only the target group's expenses are considered
//! 2. **ExpenseValidator**: rejects or skips malformed records per policy,
//!    flags members outside the roster
//! 3. **BalanceEngine**: credits the payer, debits each participant an
//!    equal full-precision share
//!
//! The engine is a pure function of its inputs: no I/O, no shared state.

pub mod engine;
pub mod group;
pub mod validation;

pub use engine::{BalanceEngine, compute_balances};
pub use group::{average_per_person, compute_group_balances, expenses_for_group, total_spent};
pub use validation::{Contribution, Disposition, ExpenseValidator};
