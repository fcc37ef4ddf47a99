//! Net balance per member.
//!
//! Positive = the member is owed money, negative = the member owes.
//! A [`BalanceSheet`] iterates in ascending [`MemberId`] order, which is
//! what makes settlement planning deterministic.

use std::collections::{BTreeMap, btree_map};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::MemberId;

/// Signed net position for every member touched by a computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceSheet {
    entries: BTreeMap<MemberId, Decimal>,
}

impl BalanceSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start every listed member at zero.
    #[must_use]
    pub fn with_members<'a>(members: impl IntoIterator<Item = &'a MemberId>) -> Self {
        let entries = members
            .into_iter()
            .map(|id| (id.clone(), Decimal::ZERO))
            .collect();
        Self { entries }
    }

    /// Add `amount` to a member's balance, creating the entry if needed.
    ///
    /// Returns the new balance, or `None` (sheet untouched) if it would
    /// leave the `Decimal` range.
    #[must_use]
    pub fn credit(&mut self, member: &MemberId, amount: Decimal) -> Option<Decimal> {
        let next = self.balance_of(member).checked_add(amount)?;
        self.entries.insert(member.clone(), next);
        Some(next)
    }

    /// Subtract `amount` from a member's balance, creating the entry if needed.
    ///
    /// Returns the new balance, or `None` (sheet untouched) on overflow.
    #[must_use]
    pub fn debit(&mut self, member: &MemberId, amount: Decimal) -> Option<Decimal> {
        let next = self.balance_of(member).checked_sub(amount)?;
        self.entries.insert(member.clone(), next);
        Some(next)
    }

    /// Net balance, zero for members with no entry.
    #[must_use]
    pub fn balance_of(&self, member: &MemberId) -> Decimal {
        self.entries.get(member).copied().unwrap_or(Decimal::ZERO)
    }

    /// How much the member owes (magnitude of a negative balance), else zero.
    #[must_use]
    pub fn owes(&self, member: &MemberId) -> Decimal {
        let balance = self.balance_of(member);
        if balance.is_sign_negative() {
            balance.abs()
        } else {
            Decimal::ZERO
        }
    }

    /// How much the member is owed (a positive balance), else zero.
    #[must_use]
    pub fn is_owed(&self, member: &MemberId) -> Decimal {
        let balance = self.balance_of(member);
        if balance > Decimal::ZERO {
            balance
        } else {
            Decimal::ZERO
        }
    }

    /// Sum of all balances. Zero (up to division dust) for any sheet
    /// produced by the balance engine.
    ///
    /// Credits and debits are summed apart so a large sheet cannot overflow
    /// part-way; each side saturates at `Decimal::MAX`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        let (credits, debits) = self.entries.values().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(credits, debits), balance| {
                if balance.is_sign_negative() {
                    (credits, debits.saturating_add(balance.abs()))
                } else {
                    (credits.saturating_add(*balance), debits)
                }
            },
        );
        credits - debits
    }

    /// Whether every balance is within `epsilon` of zero.
    #[must_use]
    pub fn is_settled(&self, epsilon: Decimal) -> bool {
        self.entries.values().all(|b| b.abs() <= epsilon)
    }

    #[must_use]
    pub fn contains(&self, member: &MemberId) -> bool {
        self.entries.contains_key(member)
    }

    /// Entries in ascending member order.
    pub fn iter(&self) -> BalanceIter<'_> {
        BalanceIter(self.entries.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Iterator over `(member, balance)` in ascending member order.
#[derive(Debug, Clone)]
pub struct BalanceIter<'a>(btree_map::Iter<'a, MemberId, Decimal>);

impl<'a> Iterator for BalanceIter<'a> {
    type Item = (&'a MemberId, Decimal);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(id, balance)| (id, *balance))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for BalanceIter<'_> {}

impl<'a> IntoIterator for &'a BalanceSheet {
    type Item = (&'a MemberId, Decimal);
    type IntoIter = BalanceIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(MemberId, Decimal)> for BalanceSheet {
    fn from_iter<T: IntoIterator<Item = (MemberId, Decimal)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
