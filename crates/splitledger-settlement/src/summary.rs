//! Per-group settle-up summary.
//!
//! Bundles what a "settle up" view needs for one group: how much the group
//! spent, each member's position, and the recommended transfers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitledger_balance::{
    BalanceEngine, average_per_person, compute_group_balances, expenses_for_group, total_spent,
};
use splitledger_types::{BalanceSheet, Expense, Group, GroupId, LedgerConfig, MemberId, Result, Settlement};

use crate::{SettlementPlanner, digest};

/// One member's standing within a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPosition {
    pub member: MemberId,
    pub name: String,
    pub balance: Decimal,
    pub owes: Decimal,
    pub is_owed: Decimal,
}

/// Balances and settlement plan for one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    pub group_id: GroupId,
    pub total_spent: Decimal,
    /// `total_spent` over the roster size; zero for an empty roster.
    pub average_per_person: Decimal,
    pub balances: BalanceSheet,
    pub settlements: Vec<Settlement>,
    /// Hex SHA-256 of `settlements`.
    pub plan_digest: String,
    /// No transfers needed.
    pub all_settled: bool,
}

impl GroupSummary {
    /// Filter `expenses` to `group`, compute balances and plan transfers.
    pub fn compute(group: &Group, expenses: &[Expense], config: &LedgerConfig) -> Result<Self> {
        let engine = BalanceEngine::new(config.validation);
        let balances = compute_group_balances(&engine, group, expenses)?;
        let settlements = SettlementPlanner::new(config.settlement.clone()).plan(&balances);

        let total = total_spent(expenses_for_group(expenses, &group.id));

        Ok(Self {
            group_id: group.id.clone(),
            total_spent: total,
            average_per_person: average_per_person(total, group.members.len()),
            plan_digest: digest::plan_digest_hex(&settlements),
            all_settled: settlements.is_empty(),
            balances,
            settlements,
        })
    }

    /// Positions for every member of the sheet, in id order, named from
    /// the group roster.
    #[must_use]
    pub fn positions(&self, group: &Group) -> Vec<MemberPosition> {
        self.balances
            .iter()
            .map(|(member, balance)| MemberPosition {
                member: member.clone(),
                name: group.member_name(member).to_string(),
                balance,
                owes: self.balances.owes(member),
                is_owed: self.balances.is_owed(member),
            })
            .collect()
    }

    /// Settlements with amounts rounded for display.
    #[must_use]
    pub fn rounded_settlements(&self, scale: u32) -> Vec<Settlement> {
        self.settlements.iter().map(|s| s.rounded(scale)).collect()
    }
}
