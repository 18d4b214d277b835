//! Per-participant bill summaries

use serde::Serialize;
use tracing::debug;

use core_kernel::Money;
use crate::balance::Balances;
use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::participant::Participant;

/// Read-only projection of one participant's position
///
/// `total_owed` and `total_receivable` are never both non-zero: a negative
/// balance is reported as owed, a positive one as receivable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillSummary {
    /// Whose bill this is
    pub participant: Participant,
    /// Sum of every expense this participant paid
    pub total_paid: Money,
    /// Amount the participant still owes the group
    pub total_owed: Money,
    /// Amount the group still owes the participant
    pub total_receivable: Money,
    /// Signed net balance
    pub net_balance: Money,
    /// One line per expense the participant paid for or has a share in
    pub detail_lines: Vec<String>,
}

/// Builds [`BillSummary`] values from a ledger and a balance snapshot
pub struct BillBuilder<'a> {
    ledger: &'a Ledger,
    balances: &'a Balances,
}

impl<'a> BillBuilder<'a> {
    pub fn new(ledger: &'a Ledger, balances: &'a Balances) -> Self {
        Self { ledger, balances }
    }

    /// Builds the bill for `name`
    ///
    /// Detail lines follow expense insertion order:
    /// `"Paid for {reason}: {amount}"` when the participant paid, otherwise
    /// `"Share for {reason}: {share}"` when their share is non-zero.
    ///
    /// # Errors
    ///
    /// Returns `UnknownParticipant` if `name` is not on the roster.
    pub fn build(&self, name: &str) -> Result<BillSummary, LedgerError> {
        let participant = self.ledger.participants().require(name)?.clone();
        let currency = self.ledger.currency();

        let mut total_paid = Money::zero(currency);
        let mut detail_lines = Vec::new();

        for expense in self.ledger.expenses() {
            if expense.is_paid_by(name) {
                total_paid = total_paid.checked_add(&expense.amount)?;
                detail_lines.push(format!(
                    "Paid for {}: {}",
                    expense.reason,
                    expense.amount.format_amount()
                ));
            } else if let Some(share) = expense.share_of(name).filter(|s| !s.is_zero()) {
                detail_lines.push(format!(
                    "Share for {}: {}",
                    expense.reason,
                    share.format_amount()
                ));
            }
        }

        let net_balance = self
            .balances
            .get(name)
            .unwrap_or_else(|| Money::zero(currency));

        debug!(participant = %participant, lines = detail_lines.len(), "Bill built");

        Ok(BillSummary {
            participant,
            total_paid,
            total_owed: (-net_balance).positive_part(),
            total_receivable: net_balance.positive_part(),
            net_balance,
            detail_lines,
        })
    }
}
