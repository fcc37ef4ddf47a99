//! Balance engine — folds expenses into a [`BalanceSheet`].
//!
//! For each accepted expense the payer is credited the full amount and
//! every distinct participant is debited an equal share. Shares are kept
//! at full `Decimal` precision; an inexact division (10 split three ways)
//! leaves sub-cent dust that the settlement planner tolerates.
//!
//! Total credits equal total debits up to that dust, so the sheet always
//! sums to (approximately) zero.

use rust_decimal::Decimal;
use splitledger_types::{
    BalanceSheet, Expense, LedgerError, Member, MemberId, Result, ValidationPolicy,
};

use crate::validation::{Contribution, Disposition, ExpenseValidator};

/// Stateless balance engine configured with a validation policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceEngine {
    policy: ValidationPolicy,
}

impl BalanceEngine {
    #[must_use]
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Compute net balances for `members` from `expenses`, in input order.
    ///
    /// Every member in the roster appears in the result, even with no
    /// activity. Members outside the roster appear only if the policy
    /// allows them and an expense references them.
    ///
    /// # Errors
    /// The first expense rejected by the validation policy aborts the
    /// computation; the error names it. So does an expense that would push
    /// a balance past the `Decimal` range ([`LedgerError::AmountOverflow`]).
    pub fn compute<'a, I>(&self, expenses: I, members: &[Member]) -> Result<BalanceSheet>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let validator = ExpenseValidator::new(self.policy, members);
        let mut sheet = BalanceSheet::with_members(members.iter().map(|m| &m.id));

        let mut applied = 0usize;
        let mut skipped = 0usize;
        let mut volume = Decimal::ZERO;

        for expense in expenses {
            match validator.validate(expense)? {
                Disposition::Apply(contribution) => {
                    apply(&mut sheet, expense, &contribution)?;
                    volume = volume.saturating_add(contribution.amount);
                    applied += 1;
                }
                Disposition::Skip => skipped += 1,
            }
        }

        tracing::info!(
            members = sheet.len(),
            applied,
            skipped,
            volume = %volume,
            residual = %sheet.total(),
            "Balances computed"
        );

        Ok(sheet)
    }
}

fn apply(
    sheet: &mut BalanceSheet,
    expense: &Expense,
    contribution: &Contribution<'_>,
) -> Result<()> {
    let overflow = |member: &MemberId| LedgerError::AmountOverflow {
        expense: expense.id,
        member: member.clone(),
    };
    sheet
        .credit(contribution.payer, contribution.amount)
        .ok_or_else(|| overflow(contribution.payer))?;
    for member in &contribution.participants {
        sheet
            .debit(member, contribution.share)
            .ok_or_else(|| overflow(*member))?;
    }
    Ok(())
}

/// Compute balances with the default policy (reject malformed expenses,
/// track unknown members ad hoc).
pub fn compute_balances<'a, I>(expenses: I, members: &[Member]) -> Result<BalanceSheet>
where
    I: IntoIterator<Item = &'a Expense>,
{
    BalanceEngine::default().compute(expenses, members)
}
