//! Net balances derived from the expense history

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use core_kernel::{Currency, Money, MoneyError};
use crate::participant::Participant;

/// Net position of every participant, in roster order
///
/// Positive means the group owes the participant money; negative means the
/// participant owes the group. Always produced by a full recompute
/// ([`Ledger::compute_balances`](crate::Ledger::compute_balances)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Balances {
    currency: Currency,
    entries: IndexMap<Participant, Money>,
}

impl Balances {
    pub(crate) fn new(currency: Currency, entries: IndexMap<Participant, Money>) -> Self {
        Self { currency, entries }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the balance for `name`, if they are on the roster
    pub fn get(&self, name: &str) -> Option<Money> {
        self.entries.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Participant, &Money)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every balance
    ///
    /// Zero when every split reconciled exactly; otherwise the accumulated
    /// rounding drift.
    pub fn total(&self) -> Result<Money, MoneyError> {
        Money::try_sum(self.entries.values(), self.currency)
    }

    /// Settlement position of one participant
    pub fn status_of(&self, name: &str) -> Option<BalanceStatus> {
        self.get(name).map(BalanceStatus::from_balance)
    }

    /// Settlement position of every participant, in roster order
    pub fn summary(&self) -> Vec<SummaryLine> {
        self.entries
            .iter()
            .map(|(participant, balance)| SummaryLine {
                participant: participant.clone(),
                status: BalanceStatus::from_balance(*balance),
            })
            .collect()
    }
}

/// Whether a participant should receive money, owes money, or is square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "amount", rename_all = "snake_case")]
pub enum BalanceStatus {
    Receives(Money),
    Owes(Money),
    SettledUp,
}

impl BalanceStatus {
    pub fn from_balance(balance: Money) -> Self {
        if balance.is_positive() {
            BalanceStatus::Receives(balance)
        } else if balance.is_negative() {
            BalanceStatus::Owes(balance.abs())
        } else {
            BalanceStatus::SettledUp
        }
    }
}

/// One line of the overall summary, e.g. `"Bob owes 10.00"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub participant: Participant,
    pub status: BalanceStatus,
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            BalanceStatus::Receives(amount) => {
                write!(f, "{} should receive {}", self.participant, amount.format_amount())
            }
            BalanceStatus::Owes(amount) => {
                write!(f, "{} owes {}", self.participant, amount.format_amount())
            }
            BalanceStatus::SettledUp => write!(f, "{} is settled up.", self.participant),
        }
    }
}
