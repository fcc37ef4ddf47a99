//! Expense validation gate.
//!
//! Every expense passes through [`ExpenseValidator`] before it touches a
//! balance. The validator turns a raw [`Expense`] into a [`Contribution`]
//! (payer, distinct participants, per-head share) or decides, according to
//! the [`ValidationPolicy`], whether a bad record is rejected or skipped.

use std::collections::HashSet;

use rust_decimal::Decimal;
use splitledger_types::{
    Expense, LedgerError, MalformedPolicy, Member, MemberId, Result, UnknownMemberPolicy,
    ValidationPolicy,
};

/// A validated expense, ready to be folded into a balance sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution<'a> {
    pub payer: &'a MemberId,
    pub amount: Decimal,
    /// Distinct participants in first-occurrence order.
    pub participants: Vec<&'a MemberId>,
    /// `amount / participants.len()` at full precision.
    pub share: Decimal,
}

/// Outcome of validating one expense.
#[derive(Debug, Clone, PartialEq)]
pub enum Disposition<'a> {
    Apply(Contribution<'a>),
    /// Malformed, and the policy says skip.
    Skip,
}

/// Checks expenses against a fixed roster and policy.
pub struct ExpenseValidator<'m> {
    policy: ValidationPolicy,
    roster: HashSet<&'m MemberId>,
}

impl<'m> ExpenseValidator<'m> {
    #[must_use]
    pub fn new(policy: ValidationPolicy, members: &'m [Member]) -> Self {
        Self {
            policy,
            roster: members.iter().map(|m| &m.id).collect(),
        }
    }

    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Validate an expense.
    ///
    /// # Errors
    /// Under [`MalformedPolicy::Reject`]: [`LedgerError::InvalidAmount`],
    /// [`LedgerError::MissingPayer`] or [`LedgerError::EmptySplit`].
    /// Under [`UnknownMemberPolicy::Reject`]: [`LedgerError::UnknownMember`].
    pub fn validate<'e>(&self, expense: &'e Expense) -> Result<Disposition<'e>> {
        let contribution = match Self::check_shape(expense) {
            Ok(c) => c,
            Err(err) => match self.policy.malformed {
                MalformedPolicy::Reject => return Err(err),
                MalformedPolicy::Skip => {
                    tracing::warn!(
                        expense = %expense.id,
                        group = %expense.group_id,
                        error = %err,
                        "Skipping malformed expense"
                    );
                    return Ok(Disposition::Skip);
                }
            },
        };

        self.check_members(expense, &contribution)?;
        Ok(Disposition::Apply(contribution))
    }

    /// Structural checks: positive amount, payer present, non-empty split.
    fn check_shape(expense: &Expense) -> Result<Contribution<'_>> {
        if expense.amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount {
                expense: expense.id,
                amount: expense.amount,
            });
        }

        let payer = expense
            .payer()
            .ok_or(LedgerError::MissingPayer { expense: expense.id })?;

        let participants = expense.participants();
        if participants.is_empty() {
            return Err(LedgerError::EmptySplit { expense: expense.id });
        }

        let share = expense.amount / Decimal::from(participants.len());
        Ok(Contribution {
            payer,
            amount: expense.amount,
            participants,
            share,
        })
    }

    /// Roster membership of the payer and every participant.
    fn check_members(&self, expense: &Expense, contribution: &Contribution<'_>) -> Result<()> {
        let referenced = std::iter::once(contribution.payer)
            .chain(contribution.participants.iter().copied());

        for member in referenced {
            if self.roster.contains(member) {
                continue;
            }
            match self.policy.unknown_members {
                UnknownMemberPolicy::Reject => {
                    return Err(LedgerError::UnknownMember {
                        expense: expense.id,
                        member: member.clone(),
                    });
                }
                UnknownMemberPolicy::Allow => {
                    tracing::warn!(
                        expense = %expense.id,
                        member = %member,
                        "Expense references member outside the roster; tracking ad-hoc balance"
                    );
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Member> {
        vec![Member::from("a"), Member::from("b"), Member::from("c")]
    }

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    #[test]
    fn valid_expense_applies() {
        let members = roster();
        let v = ExpenseValidator::new(ValidationPolicy::default(), &members);
        let e = Expense::dummy(dec(90), "a", &["a", "b", "c"]);
        let Disposition::Apply(c) = v.validate(&e).unwrap() else {
            panic!("expected Apply");
        };
        assert_eq!(c.payer, &MemberId::from("a"));
        assert_eq!(c.participants.len(), 3);
        assert_eq!(c.share, dec(30));
    }

    #[test]
    fn non_positive_amount_rejected() {
        let members = roster();
        let v = ExpenseValidator::new(ValidationPolicy::default(), &members);
        for amount in [dec(0), dec(-10)] {
            let e = Expense::dummy(amount, "a", &["a", "b"]);
            let err = v.validate(&e).unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAmount { .. }));
            assert_eq!(err.expense_id(), Some(e.id));
        }
    }

    #[test]
    fn missing_payer_rejected_by_default() {
        let members = roster();
        let v = ExpenseValidator::new(ValidationPolicy::default(), &members);
        let e = Expense::dummy_without_payer(dec(10), &["a"]);
        assert!(matches!(
            v.validate(&e).unwrap_err(),
            LedgerError::MissingPayer { .. }
        ));
    }

    #[test]
    fn empty_split_rejected_by_default() {
        let members = roster();
        let v = ExpenseValidator::new(ValidationPolicy::default(), &members);
        let e = Expense::dummy(dec(10), "a", &[]);
        assert!(matches!(
            v.validate(&e).unwrap_err(),
            LedgerError::EmptySplit { .. }
        ));
    }

    #[test]
    fn malformed_skipped_when_lenient() {
        let members = roster();
        let v = ExpenseValidator::new(ValidationPolicy::lenient(), &members);
        assert_eq!(v.policy(), ValidationPolicy::lenient());
        let e = Expense::dummy_without_payer(dec(10), &[]);
        assert_eq!(v.validate(&e).unwrap(), Disposition::Skip);
    }

    #[test]
    fn unknown_member_allowed_by_default() {
        let members = roster();
        let v = ExpenseValidator::new(ValidationPolicy::default(), &members);
        let e = Expense::dummy(dec(10), "ghost", &["a", "ghost"]);
        assert!(matches!(v.validate(&e).unwrap(), Disposition::Apply(_)));
    }

    #[test]
    fn unknown_member_rejected_when_strict() {
        let members = roster();
        let v = ExpenseValidator::new(ValidationPolicy::strict(), &members);
        let e = Expense::dummy(dec(10), "a", &["a", "ghost"]);
        match v.validate(&e).unwrap_err() {
            LedgerError::UnknownMember { expense, member } => {
                assert_eq!(expense, e.id);
                assert_eq!(member, MemberId::from("ghost"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_check_runs_before_member_check() {
        let members = roster();
        let v = ExpenseValidator::new(ValidationPolicy::strict(), &members);
        let e = Expense::dummy(dec(0), "ghost", &["ghost"]);
        assert!(matches!(
            v.validate(&e).unwrap_err(),
            LedgerError::InvalidAmount { .. }
        ));
    }
}
