//! Conservation and closure checks.
//!
//! Two invariants hold for every plan produced from an engine-computed
//! sheet:
//! ```text
//! Σ balances            ≈ 0            (conservation, within ε)
//! balances ⊕ settlements ≈ 0 ∀ member  (closure, within ε)
//! ```
//! These functions replay a plan against its sheet so callers (and tests)
//! can confirm both.

use rust_decimal::Decimal;
use splitledger_types::{BalanceSheet, LedgerError, Result, Settlement};

/// Check that a sheet sums to zero within `epsilon`.
///
/// # Errors
/// Returns [`LedgerError::ConservationViolation`] with the residual.
pub fn verify_conservation(balances: &BalanceSheet, epsilon: Decimal) -> Result<()> {
    let residual = balances.total();
    if residual.abs() > epsilon {
        return Err(LedgerError::ConservationViolation { residual });
    }
    Ok(())
}

/// Apply every transfer to a copy of the sheet.
///
/// # Errors
/// Returns [`LedgerError::BalanceOverflow`] if a transfer would push a
/// balance past the `Decimal` range.
pub fn apply_settlements(
    balances: &BalanceSheet,
    settlements: &[Settlement],
) -> Result<BalanceSheet> {
    let mut after = balances.clone();
    for settlement in settlements {
        settlement.apply_to(&mut after)?;
    }
    Ok(after)
}

/// Check that replaying `settlements` leaves every member within `epsilon`
/// of zero.
///
/// # Errors
/// Returns [`LedgerError::SettlementNotClosed`] naming the first member
/// (in id order) left unsettled, or [`LedgerError::BalanceOverflow`] if the
/// plan cannot be replayed.
pub fn verify_closure(
    balances: &BalanceSheet,
    settlements: &[Settlement],
    epsilon: Decimal,
) -> Result<()> {
    let after = apply_settlements(balances, settlements)?;
    match after.iter().find(|(_, residual)| residual.abs() > epsilon) {
        Some((member, residual)) => Err(LedgerError::SettlementNotClosed {
            member: member.clone(),
            residual,
        }),
        None => Ok(()),
    }
}

/// Whether each transfer, at the moment it is applied, brings its debtor
/// or its creditor to within `epsilon` of zero, and never pushes either
/// past zero.
#[must_use]
pub fn is_non_wasteful(
    balances: &BalanceSheet,
    settlements: &[Settlement],
    epsilon: Decimal,
) -> bool {
    let mut running = balances.clone();
    for settlement in settlements {
        if settlement.amount <= Decimal::ZERO {
            return false;
        }
        let owed = running.owes(&settlement.from);
        let due = running.is_owed(&settlement.to);
        if settlement.amount > owed.saturating_add(epsilon)
            || settlement.amount > due.saturating_add(epsilon)
        {
            return false;
        }
        if settlement.apply_to(&mut running).is_err() {
            return false;
        }
        let debtor_cleared = running.balance_of(&settlement.from).abs() <= epsilon;
        let creditor_cleared = running.balance_of(&settlement.to).abs() <= epsilon;
        if !debtor_cleared && !creditor_cleared {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use splitledger_types::MemberId;

    use super::*;

    fn eps() -> Decimal {
        Decimal::new(5, 3)
    }

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn id(s: &str) -> MemberId {
        MemberId::from(s)
    }

    fn sheet() -> BalanceSheet {
        [(id("a"), dec(60)), (id("b"), dec(-30)), (id("c"), dec(-30))]
            .into_iter()
            .collect()
    }

    #[test]
    fn conserved_sheet_passes() {
        assert!(verify_conservation(&sheet(), eps()).is_ok());
        assert!(verify_conservation(&BalanceSheet::new(), Decimal::ZERO).is_ok());
    }

    #[test]
    fn unconserved_sheet_reports_residual() {
        let mut s = sheet();
        assert!(s.credit(&id("a"), dec(1)).is_some());
        match verify_conservation(&s, eps()).unwrap_err() {
            LedgerError::ConservationViolation { residual } => assert_eq!(residual, dec(1)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn full_plan_closes() {
        let plan = vec![
            Settlement::new(id("b"), id("a"), dec(30)),
            Settlement::new(id("c"), id("a"), dec(30)),
        ];
        assert!(verify_closure(&sheet(), &plan, eps()).is_ok());
        assert!(apply_settlements(&sheet(), &plan).unwrap().is_settled(Decimal::ZERO));
    }

    #[test]
    fn partial_plan_names_first_open_member() {
        let plan = vec![Settlement::new(id("b"), id("a"), dec(30))];
        match verify_closure(&sheet(), &plan, eps()).unwrap_err() {
            LedgerError::SettlementNotClosed { member, residual } => {
                assert_eq!(member, id("a"));
                assert_eq!(residual, dec(30));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn replay_overflow_is_reported() {
        let s: BalanceSheet = [(id("a"), Decimal::MIN), (id("b"), dec(-1))]
            .into_iter()
            .collect();
        let plan = vec![Settlement::new(id("b"), id("a"), dec(1))];
        assert!(matches!(
            verify_closure(&s, &plan, eps()).unwrap_err(),
            LedgerError::BalanceOverflow { .. }
        ));
        assert!(!is_non_wasteful(&s, &plan, eps()));
    }

    #[test]
    fn non_waste_detects_partial_transfers() {
        let wasteful = vec![
            Settlement::new(id("b"), id("a"), dec(10)),
            Settlement::new(id("b"), id("a"), dec(20)),
        ];
        assert!(!is_non_wasteful(&sheet(), &wasteful, eps()));

        let greedy = vec![
            Settlement::new(id("b"), id("a"), dec(30)),
            Settlement::new(id("c"), id("a"), dec(30)),
        ];
        assert!(is_non_wasteful(&sheet(), &greedy, eps()));
    }

    #[test]
    fn non_waste_rejects_overpayment() {
        let overpay = vec![Settlement::new(id("b"), id("a"), dec(40))];
        assert!(!is_non_wasteful(&sheet(), &overpay, eps()));
    }
}
