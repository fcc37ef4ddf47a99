//! # splitledger-types
//!
//! Shared types, errors, and configuration for **SplitLedger**.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`MemberId`], [`GroupId`], [`ExpenseId`]
//! - **Roster**: [`Member`], [`Group`]
//! - **Expense model**: [`Expense`]
//! - **Balance model**: [`BalanceSheet`]
//! - **Settlement model**: [`Settlement`]
//! - **Configuration**: [`LedgerConfig`], [`SettlementConfig`], [`ValidationPolicy`], [`DisplayConfig`]
//! - **Errors**: [`LedgerError`] with `SL_ERR_` prefix codes
//! - **Money helpers**: display rounding and formatting in [`money`]
//! - **Constants**: defaults for tolerance and display

pub mod balance;
pub mod config;
pub mod constants;
pub mod error;
pub mod expense;
pub mod ids;
pub mod member;
pub mod money;
pub mod settlement;

pub use balance::*;
pub use config::*;
pub use error::*;
pub use expense::*;
pub use ids::*;
pub use member::*;
pub use settlement::*;

// Constants and money helpers are accessed via their module path
// (not re-exported to avoid name collisions).
