//! Balance and bill DTOs

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{Currency, Money};
use domain_ledger::{BalanceStatus, Balances, BillSummary, LedgerError, Participant};

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub participant: String,
    /// Signed net balance; positive means the group owes this participant
    pub balance: Decimal,
    /// `receives`, `owes` or `settled_up`
    pub status: &'static str,
    /// Absolute amount to receive or pay
    pub amount: Decimal,
}

impl BalanceResponse {
    fn new(participant: &Participant, balance: Money) -> Self {
        let (status, amount) = match BalanceStatus::from_balance(balance) {
            BalanceStatus::Receives(amount) => ("receives", amount.amount()),
            BalanceStatus::Owes(amount) => ("owes", amount.amount()),
            BalanceStatus::SettledUp => ("settled_up", Decimal::ZERO),
        };
        Self {
            participant: participant.name().to_string(),
            balance: balance.amount(),
            status,
            amount,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub currency: Currency,
    pub balances: Vec<BalanceResponse>,
    /// Human-readable lines, e.g. `"Bob owes 10.00"`
    pub summary: Vec<String>,
    /// Sum of all balances; non-zero only from per-share rounding
    pub total_drift: Decimal,
}

impl CalculationResponse {
    pub fn from_balances(balances: &Balances) -> Result<Self, LedgerError> {
        Ok(Self {
            currency: balances.currency(),
            balances: balances
                .iter()
                .map(|(participant, balance)| BalanceResponse::new(participant, *balance))
                .collect(),
            summary: balances.summary().iter().map(ToString::to_string).collect(),
            total_drift: balances.total()?.amount(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct BillResponse {
    pub participant: String,
    pub currency: Currency,
    pub total_paid: Decimal,
    pub total_owed: Decimal,
    pub total_receivable: Decimal,
    pub net_balance: Decimal,
    pub detail_lines: Vec<String>,
}

impl From<BillSummary> for BillResponse {
    fn from(bill: BillSummary) -> Self {
        Self {
            participant: bill.participant.name().to_string(),
            currency: bill.net_balance.currency(),
            total_paid: bill.total_paid.amount(),
            total_owed: bill.total_owed.amount(),
            total_receivable: bill.total_receivable.amount(),
            net_balance: bill.net_balance.amount(),
            detail_lines: bill.detail_lines,
        }
    }
}
