//! # splitledger-settlement
//!
//! **Settlement Planner**: reduces a balance sheet to a short list of
//! person-to-person transfers that zero every balance.
//!
//! ## Architecture
//!
//! The planner receives a [`BalanceSheet`](splitledger_types::BalanceSheet)
//! from the balance engine and:
//! 1. Drops members within ε of zero (settled, including division dust)
//! 2. Queues debtors and creditors in member-id order
//! 3. Greedily matches the head of each queue until one side is empty
//! 4. Leaves amounts at full precision; callers round for display
//!
//! [`closure`] replays a plan to confirm conservation and closure,
//! [`digest`] fingerprints a plan, and [`GroupSummary`] runs the whole
//! pipeline for one group.

pub mod closure;
pub mod digest;
pub mod planner;
pub mod summary;

pub use closure::{apply_settlements, is_non_wasteful, verify_closure, verify_conservation};
pub use digest::{compute_plan_digest, plan_digest_hex, verify_plan_digest};
pub use planner::{SettlementPlanner, compute_settlements};
pub use summary::{GroupSummary, MemberPosition};
