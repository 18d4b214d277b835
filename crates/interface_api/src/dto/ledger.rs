//! Participant and expense DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{Currency, Money};
use domain_ledger::{parse_amount, parse_unequal, Distribution, DistributionKind, Expense, LedgerError};

#[derive(Debug, Deserialize, Validate)]
pub struct AddParticipantRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ParticipantListResponse {
    pub participants: Vec<String>,
}

/// An amount given either as a JSON number or as text
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(Decimal),
    Text(String),
}

impl AmountInput {
    pub fn to_money(&self, currency: Currency) -> Result<Money, LedgerError> {
        match self {
            AmountInput::Number(value) => Ok(Money::new(*value, currency)),
            AmountInput::Text(text) => parse_amount(text, currency),
        }
    }
}

/// Per-person amounts, as a list or as `"3, 7"`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SharesInput {
    List(Vec<Decimal>),
    Text(String),
}

impl SharesInput {
    pub fn to_amounts(&self) -> Result<Vec<Decimal>, LedgerError> {
        match self {
            SharesInput::List(values) => Ok(values.clone()),
            SharesInput::Text(text) => parse_unequal(text),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddExpenseRequest {
    #[validate(length(min = 1, max = 200, message = "reason must be 1-200 characters"))]
    pub reason: String,
    #[validate(length(min = 1, message = "payer is required"))]
    pub payer: String,
    pub amount: AmountInput,
    pub distribution: DistributionKind,
    /// Required for unequal splits, ignored for equal ones
    pub shares: Option<SharesInput>,
}

impl AddExpenseRequest {
    /// Resolves the requested split; a missing share list is an empty one
    pub fn distribution(&self) -> Result<Distribution, LedgerError> {
        match self.distribution {
            DistributionKind::Equal => Ok(Distribution::Equal),
            DistributionKind::Unequal => {
                let amounts = match &self.shares {
                    Some(shares) => shares.to_amounts()?,
                    None => Vec::new(),
                };
                Ok(Distribution::Unequal(amounts))
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub participant: String,
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    pub id: Uuid,
    pub reason: String,
    pub payer: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub distribution: DistributionKind,
    pub shares: Vec<ShareResponse>,
    pub recorded_at: DateTime<Utc>,
}

impl From<&Expense> for ExpenseResponse {
    fn from(expense: &Expense) -> Self {
        Self {
            id: *expense.id.as_uuid(),
            reason: expense.reason.clone(),
            payer: expense.payer.name().to_string(),
            amount: expense.amount.amount(),
            currency: expense.amount.currency(),
            distribution: expense.distribution,
            shares: expense
                .shares
                .iter()
                .map(|(participant, share)| ShareResponse {
                    participant: participant.name().to_string(),
                    amount: share.amount(),
                })
                .collect(),
            recorded_at: expense.recorded_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExpenseListResponse {
    pub expenses: Vec<ExpenseResponse>,
}
