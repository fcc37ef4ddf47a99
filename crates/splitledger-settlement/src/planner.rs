//! Greedy settlement planner.
//!
//! Turns a [`BalanceSheet`] into an ordered list of transfers that drives
//! every balance to within ε of zero.
//!
//! Algorithm:
//! 1. Split members into debtors (balance < −ε) and creditors (balance > ε),
//!    both in ascending member-id order. Members within ε are set aside as
//!    spares: settled on their own, but still holding sub-ε dust.
//! 2. Take the first debtor and the first creditor, transfer
//!    `min(debt, credit)`, and pop whichever side is now within ε. A popped
//!    party with dust left over joins the spares.
//! 3. Repeat until either queue is empty.
//! 4. Dust sweep: whatever is left above ε on the other queue is the sum of
//!    dust dropped on the opposite side, so it is settled against those
//!    spares (largest first) until it too is within ε.
//!
//! Every transfer fully resolves at least one party and never overpays.
//! The greedy pass emits at most `debtors + creditors − 1` transfers; the
//! sweep only runs when dust has piled up past ε. This is not a
//! minimum-transfer solver: some balance sets admit shorter plans (finding
//! those is a subset-sum style search). Amounts stay at full precision;
//! rounding happens only when a caller formats them.

use std::collections::VecDeque;

use rust_decimal::Decimal;
use splitledger_types::{BalanceSheet, MemberId, Result, Settlement, SettlementConfig};

use crate::closure;

/// A party's outstanding magnitude while matching.
#[derive(Debug, Clone)]
struct Position {
    member: MemberId,
    remaining: Decimal,
}

/// Queues built from a sheet: parties beyond ε, and spares within it.
#[derive(Debug, Default)]
struct Book {
    debtors: VecDeque<Position>,
    creditors: VecDeque<Position>,
    spare_debtors: Vec<Position>,
    spare_creditors: Vec<Position>,
}

/// Stateless planner configured with a settlement tolerance.
#[derive(Debug, Clone, Default)]
pub struct SettlementPlanner {
    config: SettlementConfig,
}

impl SettlementPlanner {
    #[must_use]
    pub fn new(config: SettlementConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn epsilon(&self) -> Decimal {
        self.config.epsilon
    }

    /// Plan transfers for a balance sheet.
    ///
    /// An all-zero sheet yields an empty plan. A sheet that does not sum to
    /// zero still yields the greedy plan; the unmatched remainder is logged.
    #[must_use]
    pub fn plan(&self, balances: &BalanceSheet) -> Vec<Settlement> {
        let eps = self.config.epsilon;
        let Book {
            mut debtors,
            mut creditors,
            mut spare_debtors,
            mut spare_creditors,
        } = self.partition(balances);
        let debtor_count = debtors.len();
        let creditor_count = creditors.len();

        let mut transfers = Vec::with_capacity((debtor_count + creditor_count).saturating_sub(1));

        while let (Some(debtor), Some(creditor)) = (debtors.front_mut(), creditors.front_mut()) {
            let amount = debtor.remaining.min(creditor.remaining);
            debtor.remaining -= amount;
            creditor.remaining -= amount;

            tracing::debug!(
                from = %debtor.member,
                to = %creditor.member,
                amount = %amount,
                debtor_left = %debtor.remaining,
                creditor_left = %creditor.remaining,
                "Transfer planned"
            );

            let debtor_done = debtor.remaining <= eps;
            let creditor_done = creditor.remaining <= eps;
            transfers.push(Settlement::new(
                debtor.member.clone(),
                creditor.member.clone(),
                amount,
            ));

            if debtor_done {
                spare_debtors.extend(debtors.pop_front().filter(|p| !p.remaining.is_zero()));
            }
            if creditor_done {
                spare_creditors.extend(creditors.pop_front().filter(|p| !p.remaining.is_zero()));
            }
        }

        let greedy = transfers.len();
        sweep(&mut creditors, spare_debtors, eps, |creditor, debtor, amount| {
            transfers.push(Settlement::new(debtor.clone(), creditor.clone(), amount));
        });
        sweep(&mut debtors, spare_creditors, eps, |debtor, creditor, amount| {
            transfers.push(Settlement::new(debtor.clone(), creditor.clone(), amount));
        });

        let unmatched = debtors
            .iter()
            .chain(creditors.iter())
            .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.remaining));
        if unmatched > eps {
            tracing::warn!(
                unmatched = %unmatched,
                debtors_left = debtors.len(),
                creditors_left = creditors.len(),
                "Balances not conserved; plan leaves an unmatched remainder"
            );
        }

        let total = transfers
            .iter()
            .fold(Decimal::ZERO, |acc, s| acc.saturating_add(s.amount));
        tracing::info!(
            debtors = debtor_count,
            creditors = creditor_count,
            transfers = transfers.len(),
            dust_transfers = transfers.len() - greedy,
            total = %total,
            "Settlement plan complete"
        );

        transfers
    }

    /// Like [`plan`](Self::plan), but refuses a sheet whose balances do not
    /// sum to zero within ε.
    ///
    /// # Errors
    /// Returns [`LedgerError::ConservationViolation`](splitledger_types::LedgerError::ConservationViolation).
    pub fn plan_checked(&self, balances: &BalanceSheet) -> Result<Vec<Settlement>> {
        closure::verify_conservation(balances, self.config.epsilon)?;
        Ok(self.plan(balances))
    }

    /// Debtor and creditor queues in ascending member order; members within
    /// ε (but not exactly zero) become spares.
    fn partition(&self, balances: &BalanceSheet) -> Book {
        let eps = self.config.epsilon;
        let mut book = Book::default();

        for (member, balance) in balances {
            let position = Position {
                member: member.clone(),
                remaining: balance.abs(),
            };
            if balance < -eps {
                book.debtors.push_back(position);
            } else if balance > eps {
                book.creditors.push_back(position);
            } else if balance.is_sign_negative() && !balance.is_zero() {
                book.spare_debtors.push(position);
            } else if !balance.is_zero() {
                book.spare_creditors.push(position);
            }
        }
        book
    }
}

/// Settle what `open` still holds above ε against `spares` from the other
/// side, largest spare first (ties by id). `emit` receives
/// `(open party, spare, amount)`.
fn sweep(
    open: &mut VecDeque<Position>,
    mut spares: Vec<Position>,
    eps: Decimal,
    mut emit: impl FnMut(&MemberId, &MemberId, Decimal),
) {
    spares.sort_by(|a, b| {
        b.remaining
            .cmp(&a.remaining)
            .then_with(|| a.member.cmp(&b.member))
    });
    let mut spares = VecDeque::from(spares);

    while let (Some(party), Some(spare)) = (open.front_mut(), spares.front_mut()) {
        let amount = party.remaining.min(spare.remaining);
        party.remaining -= amount;
        spare.remaining -= amount;

        tracing::debug!(
            open = %party.member,
            spare = %spare.member,
            amount = %amount,
            open_left = %party.remaining,
            "Dust transfer planned"
        );
        emit(&party.member, &spare.member, amount);

        let party_done = party.remaining <= eps;
        if spare.remaining.is_zero() {
            spares.pop_front();
        }
        if party_done {
            open.pop_front();
        }
    }
}

/// Plan transfers with the default tolerance (0.005).
#[must_use]
pub fn compute_settlements(balances: &BalanceSheet) -> Vec<Settlement> {
    SettlementPlanner::default().plan(balances)
}
