//! Expense records as supplied by the storage collaborator.
//!
//! An [`Expense`] says who paid, how much, and which members share the
//! cost equally. JSON field names follow the camelCase wire shape
//! (`paidBy`, `splitBetween`, `groupId`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ExpenseId, GroupId, MemberId};

/// A single shared expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Total paid. Must be strictly positive to contribute.
    pub amount: Decimal,
    /// The member who paid. `None` (or a blank id) marks a malformed record.
    #[serde(default)]
    pub paid_by: Option<MemberId>,
    /// Members sharing the cost equally. Duplicates count once.
    #[serde(default)]
    pub split_between: Vec<MemberId>,
    pub group_id: GroupId,
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Build an expense dated now with a fresh id.
    #[must_use]
    pub fn new(
        group_id: impl Into<GroupId>,
        amount: Decimal,
        paid_by: impl Into<MemberId>,
        split_between: Vec<MemberId>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            description: None,
            amount,
            paid_by: Some(paid_by.into()),
            split_between,
            group_id: group_id.into(),
            date: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The payer, treating a blank id the same as a missing one.
    #[must_use]
    pub fn payer(&self) -> Option<&MemberId> {
        self.paid_by.as_ref().filter(|id| !id.is_blank())
    }

    /// Split members with duplicates removed, first occurrence kept.
    #[must_use]
    pub fn participants(&self) -> Vec<&MemberId> {
        let mut seen: Vec<&MemberId> = Vec::with_capacity(self.split_between.len());
        for id in &self.split_between {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        seen
    }

    /// Equal per-participant share at full precision.
    ///
    /// Returns `None` when nobody shares the expense.
    #[must_use]
    pub fn share(&self) -> Option<Decimal> {
        let count = self.participants().len();
        if count == 0 {
            return None;
        }
        Some(self.amount / Decimal::from(count))
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Expense {
    pub fn dummy(amount: Decimal, paid_by: &str, split_between: &[&str]) -> Self {
        Self::dummy_in_group("g1", amount, paid_by, split_between)
    }

    pub fn dummy_in_group(
        group_id: &str,
        amount: Decimal,
        paid_by: &str,
        split_between: &[&str],
    ) -> Self {
        Self::new(
            group_id,
            amount,
            paid_by,
            split_between.iter().map(|id| MemberId::from(*id)).collect(),
        )
    }

    pub fn dummy_without_payer(amount: Decimal, split_between: &[&str]) -> Self {
        let mut expense = Self::dummy(amount, "", split_between);
        expense.paid_by = None;
        expense
    }
}
