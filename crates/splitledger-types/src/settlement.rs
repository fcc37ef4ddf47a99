//! Recommended transfers produced by the settlement planner.
//!
//! A [`Settlement`] is only a recommendation: the core never moves money.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{BalanceSheet, DisplayConfig, LedgerError, MemberId, Result, money};

/// One payment from a debtor to a creditor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Debtor (negative balance).
    pub from: MemberId,
    /// Creditor (positive balance).
    pub to: MemberId,
    /// Full-precision amount; always positive.
    pub amount: Decimal,
}

impl Settlement {
    #[must_use]
    pub fn new(from: MemberId, to: MemberId, amount: Decimal) -> Self {
        Self { from, to, amount }
    }

    /// Copy with the amount rounded for presentation.
    #[must_use]
    pub fn rounded(&self, scale: u32) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            amount: money::round_for_display(self.amount, scale),
        }
    }

    /// Apply this transfer to a sheet: the debtor's balance rises and the
    /// creditor's falls by `amount`.
    ///
    /// # Errors
    /// [`LedgerError::BalanceOverflow`] if either balance would leave the
    /// `Decimal` range; the sheet is then left as it was.
    pub fn apply_to(&self, sheet: &mut BalanceSheet) -> Result<()> {
        let overflow = |member: &MemberId| LedgerError::BalanceOverflow {
            member: member.clone(),
        };
        // Creditor side checked up front so a failed transfer changes nothing.
        sheet
            .balance_of(&self.to)
            .checked_sub(self.amount)
            .ok_or_else(|| overflow(&self.to))?;
        sheet
            .credit(&self.from, self.amount)
            .ok_or_else(|| overflow(&self.from))?;
        sheet
            .debit(&self.to, self.amount)
            .ok_or_else(|| overflow(&self.to))?;
        Ok(())
    }

    /// `"bob pays alice ₹30.00"`.
    #[must_use]
    pub fn describe(&self, display: &DisplayConfig) -> String {
        format!(
            "{} pays {} {}",
            self.from,
            self.to,
            money::format_amount(self.amount, display)
        )
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(amount: Decimal) -> Settlement {
        Settlement::new(MemberId::from("bob"), MemberId::from("alice"), amount)
    }

    #[test]
    fn apply_moves_both_sides_toward_zero() {
        let mut sheet: BalanceSheet = [
            (MemberId::from("alice"), Decimal::new(30, 0)),
            (MemberId::from("bob"), Decimal::new(-30, 0)),
        ]
        .into_iter()
        .collect();
        transfer(Decimal::new(30, 0)).apply_to(&mut sheet).unwrap();
        assert!(sheet.is_settled(Decimal::ZERO));
    }

    #[test]
    fn apply_overflow_is_an_error() {
        let mut sheet: BalanceSheet = [
            (MemberId::from("alice"), Decimal::MIN),
            (MemberId::from("bob"), Decimal::new(-30, 0)),
        ]
        .into_iter()
        .collect();
        let before = sheet.clone();
        let err = transfer(Decimal::ONE).apply_to(&mut sheet).unwrap_err();
        assert!(matches!(err, LedgerError::BalanceOverflow { member } if member.as_str() == "alice"));
        assert_eq!(sheet, before);
    }

    #[test]
    fn rounded_only_touches_amount() {
        let third = Decimal::TEN / Decimal::from(3);
        let s = transfer(third).rounded(2);
        assert_eq!(s.amount, Decimal::new(333, 2));
        assert_eq!(s.from, MemberId::from("bob"));
    }

    #[test]
    fn describe_formats_currency() {
        let s = transfer(Decimal::new(30, 0));
        assert_eq!(s.describe(&DisplayConfig::default()), "bob pays alice ₹30.00");
        assert_eq!(format!("{s}"), "bob -> alice: 30");
    }

    #[test]
    fn serde_roundtrip_keeps_full_precision() {
        let s = transfer(Decimal::TEN / Decimal::from(3));
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"amount\":\"3.33333333"));
        let back: Settlement = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
