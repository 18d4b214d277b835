//! Session DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::Currency;
use domain_ledger::{RoundingPolicy, Session};

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub currency: Option<Currency>,
    pub rounding_policy: Option<RoundingPolicy>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub currency: Currency,
    pub rounding_policy: RoundingPolicy,
    pub participants: Vec<String>,
    pub expense_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        let ledger = session.ledger();
        Self {
            id: *session.id().as_uuid(),
            currency: ledger.currency(),
            rounding_policy: ledger.rounding_policy(),
            participants: ledger.participants().iter().map(|p| p.name().to_string()).collect(),
            expense_count: ledger.expenses().len(),
            created_at: session.created_at(),
        }
    }
}
