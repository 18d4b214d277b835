//! Working state of one group
//!
//! A [`Session`] owns a [`Ledger`] plus the most recently computed balances.
//! Every successful mutation invalidates the cached balances, so bills are
//! never built from a stale snapshot.

use chrono::{DateTime, Utc};
use tracing::info;

use core_kernel::{Currency, ExpenseId, Money, SessionId};
use crate::allocation::RoundingPolicy;
use crate::balance::{Balances, SummaryLine};
use crate::bill::{BillBuilder, BillSummary};
use crate::error::LedgerError;
use crate::expense::Distribution;
use crate::ledger::Ledger;
use crate::participant::Participant;
use crate::receipt::{ExportedReceipt, ReceiptExporter, ReceiptRenderer};

#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    ledger: Ledger,
    last_balances: Option<Balances>,
    created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(currency: Currency, policy: RoundingPolicy) -> Self {
        Self {
            id: SessionId::new_v7(),
            ledger: Ledger::with_rounding_policy(currency, policy),
            last_balances: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Balances from the last [`Session::calculate`], if still current
    pub fn last_balances(&self) -> Option<&Balances> {
        self.last_balances.as_ref()
    }

    pub fn add_participant(&mut self, name: &str) -> Result<Participant, LedgerError> {
        let participant = self.ledger.add_participant(name)?;
        self.last_balances = None;
        Ok(participant)
    }

    pub fn add_expense(
        &mut self,
        reason: impl Into<String>,
        payer: &str,
        amount: Money,
        distribution: Distribution,
    ) -> Result<ExpenseId, LedgerError> {
        let id = self.ledger.add_expense(reason, payer, amount, distribution)?;
        self.last_balances = None;
        Ok(id)
    }

    /// Recomputes balances and caches them
    pub fn calculate(&mut self) -> Result<&Balances, LedgerError> {
        let balances = self.ledger.compute_balances()?;
        Ok(self.last_balances.insert(balances))
    }

    /// Overall summary for the current balances
    pub fn summary(&mut self) -> Result<Vec<SummaryLine>, LedgerError> {
        Ok(cached_balances(&self.ledger, &mut self.last_balances)?.summary())
    }

    /// Bill for one participant, using the current balances
    pub fn generate_bill(&mut self, name: &str) -> Result<BillSummary, LedgerError> {
        let balances = cached_balances(&self.ledger, &mut self.last_balances)?;
        BillBuilder::new(&self.ledger, balances).build(name)
    }

    /// Renders and exports one participant's receipt
    pub fn export_bill(
        &mut self,
        name: &str,
        renderer: &ReceiptRenderer,
        exporter: &ReceiptExporter,
    ) -> Result<ExportedReceipt, LedgerError> {
        let bill = self.generate_bill(name)?;
        exporter.export(&renderer.render(&bill))
    }

    /// Clears roster, expenses and cached balances
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.last_balances = None;
        info!(session_id = %self.id, "Session reset");
    }
}

fn cached_balances<'a>(
    ledger: &Ledger,
    cache: &'a mut Option<Balances>,
) -> Result<&'a Balances, LedgerError> {
    let balances = match cache.take() {
        Some(balances) => balances,
        None => ledger.compute_balances()?,
    };
    Ok(cache.insert(balances))
}
