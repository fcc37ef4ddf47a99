//! Group scoping.
//!
//! Balances are always computed for one group. The caller filters the
//! shared expense list down to that group before handing it to the
//! engine; these helpers do the filtering and the per-group totals.

use rust_decimal::Decimal;
use splitledger_types::{BalanceSheet, Expense, Group, GroupId, Result};

use crate::BalanceEngine;

/// Expenses belonging to `group_id`, in input order.
pub fn expenses_for_group<'a>(
    expenses: &'a [Expense],
    group_id: &'a GroupId,
) -> impl Iterator<Item = &'a Expense> + 'a {
    expenses.iter().filter(move |e| &e.group_id == group_id)
}

/// Sum of expense amounts. Non-positive amounts are ignored so a stray
/// malformed record cannot reduce the total. Saturates at `Decimal::MAX`.
pub fn total_spent<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Decimal {
    expenses
        .into_iter()
        .map(|e| e.amount)
        .filter(|amount| *amount > Decimal::ZERO)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `total / members`, or zero for an empty roster.
pub fn average_per_person(total: Decimal, members: usize) -> Decimal {
    if members == 0 {
        Decimal::ZERO
    } else {
        total / Decimal::from(members)
    }
}

/// Balances for one group's roster, ignoring every other group's expenses.
pub fn compute_group_balances(
    engine: &BalanceEngine,
    group: &Group,
    expenses: &[Expense],
) -> Result<BalanceSheet> {
    engine.compute(expenses_for_group(expenses, &group.id), &group.members)
}
