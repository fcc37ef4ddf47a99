//! Error types for SplitLedger.
//!
//! All errors use the `SL_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Expense errors
//! - 2xx: Member errors
//! - 3xx: Settlement errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{ExpenseId, MemberId};

/// Central error enum for all SplitLedger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // =================================================================
    // Expense Errors (1xx)
    // =================================================================
    /// The expense amount is zero or negative.
    #[error("SL_ERR_100: Invalid amount {amount} on expense {expense}")]
    InvalidAmount { expense: ExpenseId, amount: Decimal },

    /// The expense has no payer.
    #[error("SL_ERR_101: Expense {expense} has no payer")]
    MissingPayer { expense: ExpenseId },

    /// Nobody shares the expense.
    #[error("SL_ERR_102: Expense {expense} has an empty split")]
    EmptySplit { expense: ExpenseId },

    /// Applying the expense would push a balance past the `Decimal` range.
    #[error("SL_ERR_103: Expense {expense} overflows the balance of {member}")]
    AmountOverflow { expense: ExpenseId, member: MemberId },

    // =================================================================
    // Member Errors (2xx)
    // =================================================================
    /// The expense references a member outside the known roster.
    #[error("SL_ERR_200: Expense {expense} references unknown member {member}")]
    UnknownMember { expense: ExpenseId, member: MemberId },

    // =================================================================
    // Settlement Errors (3xx)
    // =================================================================
    /// Balances do not sum to zero within tolerance.
    #[error("SL_ERR_300: Balances not conserved: residual {residual}")]
    ConservationViolation { residual: Decimal },

    /// Replaying a settlement plan left a member with a non-zero balance.
    #[error("SL_ERR_301: Settlement plan leaves {member} at {residual}")]
    SettlementNotClosed { member: MemberId, residual: Decimal },

    /// Replaying a transfer would push a balance past the `Decimal` range.
    #[error("SL_ERR_302: Transfer overflows the balance of {member}")]
    BalanceOverflow { member: MemberId },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Configuration error (invalid values, unparsable document).
    #[error("SL_ERR_900: Configuration error: {0}")]
    Configuration(String),

    /// Serialization / deserialization error.
    #[error("SL_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

impl LedgerError {
    /// The offending expense, for errors raised at the input boundary.
    #[must_use]
    pub fn expense_id(&self) -> Option<ExpenseId> {
        match self {
            Self::InvalidAmount { expense, .. }
            | Self::MissingPayer { expense }
            | Self::EmptySplit { expense }
            | Self::AmountOverflow { expense, .. }
            | Self::UnknownMember { expense, .. } => Some(*expense),
            _ => None,
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, LedgerError>;

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
