//! Expense records and distribution modes

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ExpenseId, Money, MoneyError};
use crate::participant::Participant;

/// How an expense is split across the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "amounts", rename_all = "snake_case")]
pub enum Distribution {
    /// Everyone pays `amount / n`
    Equal,
    /// One caller-supplied amount per participant, in roster order
    Unequal(Vec<Decimal>),
}

impl Distribution {
    pub fn kind(&self) -> DistributionKind {
        match self {
            Distribution::Equal => DistributionKind::Equal,
            Distribution::Unequal(_) => DistributionKind::Unequal,
        }
    }
}

/// Distribution mode without the per-person data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionKind {
    Equal,
    Unequal,
}

/// One recorded payment event
///
/// Created by [`Ledger::add_expense`](crate::Ledger::add_expense) and never
/// modified afterwards. `shares` is keyed in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,
    /// What the money was spent on
    pub reason: String,
    /// Who paid
    pub payer: Participant,
    /// Amount paid, rounded to the currency's minor unit
    pub amount: Money,
    /// Each participant's portion of the amount
    pub shares: IndexMap<Participant, Money>,
    /// How the shares were derived
    pub distribution: DistributionKind,
    /// When the expense was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Expense {
    /// Returns the share attributed to `name`, if any
    pub fn share_of(&self, name: &str) -> Option<Money> {
        self.shares.get(name).copied()
    }

    /// Returns true if `name` paid this expense
    pub fn is_paid_by(&self, name: &str) -> bool {
        self.payer.name() == name
    }

    /// Sum of all shares
    pub fn shares_total(&self) -> Result<Money, MoneyError> {
        Money::try_sum(self.shares.values(), self.amount.currency())
    }

    /// Difference between the amount and the sum of shares
    ///
    /// Zero when the split reconciles exactly; otherwise the rounding drift
    /// (or caller mismatch for unequal splits).
    pub fn drift(&self) -> Result<Money, MoneyError> {
        self.amount.checked_sub(&self.shares_total()?)
    }
}
