//! Configuration for the balance engine and settlement planner.
//!
//! Every section has a `Default` built from [`crate::constants`], so a
//! caller only needs to spell out what it overrides.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{LedgerError, Result, constants};

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub settlement: SettlementConfig,
    pub validation: ValidationPolicy,
    pub display: DisplayConfig,
}

impl LedgerConfig {
    /// Parse a JSON document and validate it.
    ///
    /// Missing sections and fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| LedgerError::Configuration(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.settlement.epsilon.is_sign_negative() {
            return Err(LedgerError::Configuration(format!(
                "settlement.epsilon must not be negative, got {}",
                self.settlement.epsilon
            )));
        }
        if self.display.scale > constants::MAX_DECIMAL_SCALE {
            return Err(LedgerError::Configuration(format!(
                "display.scale must be at most {}, got {}",
                constants::MAX_DECIMAL_SCALE,
                self.display.scale
            )));
        }
        Ok(())
    }
}

/// Settlement planner tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementConfig {
    /// Balances whose magnitude is at or below this are treated as settled.
    pub epsilon: Decimal,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            epsilon: Decimal::new(
                constants::DEFAULT_SETTLEMENT_EPSILON_MANTISSA,
                constants::DEFAULT_SETTLEMENT_EPSILON_SCALE,
            ),
        }
    }
}

/// What to do with an expense that cannot contribute to balances
/// (non-positive amount, no payer, empty split).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Fail the whole computation, naming the offending expense.
    #[default]
    Reject,
    /// Drop the expense and log a warning.
    Skip,
}

/// What to do when an expense names a member outside the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownMemberPolicy {
    /// Track an ad-hoc balance for the unknown id and log a warning.
    #[default]
    Allow,
    /// Fail the computation.
    Reject,
}

/// Input-boundary validation policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    pub malformed: MalformedPolicy,
    pub unknown_members: UnknownMemberPolicy,
}

impl ValidationPolicy {
    /// Reject everything suspicious.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            malformed: MalformedPolicy::Reject,
            unknown_members: UnknownMemberPolicy::Reject,
        }
    }

    /// Skip malformed records and accept unknown members.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            malformed: MalformedPolicy::Skip,
            unknown_members: UnknownMemberPolicy::Allow,
        }
    }
}

/// Output formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places shown.
    pub scale: u32,
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scale: constants::DEFAULT_DISPLAY_SCALE,
            currency_symbol: constants::DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}
